//! Pair generation.

use super::shuffle::shuffle_in_place;
use crate::cards::{BoardCard, CardFace};
use crate::core::GameRng;

/// Deal two independent copies of every face and shuffle them.
///
/// Both copies carry the face's id as their identity. The result has
/// length `2 * faces.len()`.
///
/// Panics if `faces` is empty.
pub fn generate_pairs(faces: &[CardFace], rng: &mut GameRng) -> Vec<BoardCard> {
    assert!(!faces.is_empty(), "Need at least 1 card to deal pairs");

    let mut cards: Vec<BoardCard> = faces
        .iter()
        .flat_map(|face| [BoardCard::from_face(face), BoardCard::from_face(face)])
        .collect();

    shuffle_in_place(&mut cards, rng);
    cards
}

#[cfg(test)]
mod tests {
    use rustc_hash::FxHashMap;

    use super::*;
    use crate::cards::CardId;

    fn faces(n: u64) -> Vec<CardFace> {
        (1..=n)
            .map(|i| CardFace::new(CardId::new(i), format!("f{i}"), format!("b{i}")))
            .collect()
    }

    #[test]
    fn test_length_and_identity_counts() {
        let mut rng = GameRng::new(42);
        let cards = generate_pairs(&faces(6), &mut rng);

        assert_eq!(cards.len(), 12);

        let mut counts: FxHashMap<CardId, usize> = FxHashMap::default();
        for card in &cards {
            *counts.entry(card.identity).or_default() += 1;
        }
        assert_eq!(counts.len(), 6);
        assert!(counts.values().all(|&c| c == 2));
    }

    #[test]
    fn test_copies_start_face_down() {
        let mut rng = GameRng::new(1);
        let cards = generate_pairs(&faces(3), &mut rng);
        assert!(cards.iter().all(|c| !c.is_flipped && !c.is_matched));
    }

    #[test]
    fn test_content_copied() {
        let mut rng = GameRng::new(1);
        let cards = generate_pairs(&faces(2), &mut rng);

        for card in &cards {
            let i = card.identity.raw();
            assert_eq!(card.front, format!("f{i}"));
            assert_eq!(card.back, format!("b{i}"));
        }
    }

    #[test]
    #[should_panic(expected = "Need at least 1 card")]
    fn test_empty_faces() {
        let mut rng = GameRng::new(1);
        generate_pairs(&[], &mut rng);
    }
}
