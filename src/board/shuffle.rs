//! Fisher–Yates shuffle.

use crate::core::GameRng;

/// Return a uniformly random permutation of `items`.
///
/// The input is left untouched. Walks `i` from the last index down to 1,
/// swapping with a uniform index in `[0, i]`.
///
/// ```
/// use memory_match::board::shuffled;
/// use memory_match::core::GameRng;
///
/// let mut rng = GameRng::new(42);
/// let deck = vec![1, 2, 3, 4];
/// let mut out = shuffled(&deck, &mut rng);
///
/// out.sort();
/// assert_eq!(out, deck);
/// ```
pub fn shuffled<T: Clone>(items: &[T], rng: &mut GameRng) -> Vec<T> {
    let mut out = items.to_vec();
    shuffle_in_place(&mut out, rng);
    out
}

/// Shuffle a slice in place.
pub fn shuffle_in_place<T>(items: &mut [T], rng: &mut GameRng) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_index(i);
        items.swap(i, j);
    }
}
