//! The game library: stored templates, editing, export and import.

use std::fs;
use std::path::Path;

use log::{debug, error, info};

use super::template::{GameId, GameTemplate};
use crate::core::{MatchError, Result, DEFAULT_MIN_PAIRS};

/// Ordered collection of game templates.
///
/// Every stored template has passed validation. Import replaces the whole
/// collection or nothing.
///
/// ```
/// use memory_match::cards::{CardFace, CardId};
/// use memory_match::library::{GameLibrary, GameTemplate};
///
/// let mut library = GameLibrary::new();
/// let id = library
///     .add(GameTemplate::new("Colors", vec![
///         CardFace::new(CardId::new(1), "rojo", "red"),
///         CardFace::new(CardId::new(2), "azul", "blue"),
///     ]))
///     .unwrap();
///
/// assert_eq!(library.get(id).unwrap().title, "Colors");
/// ```
#[derive(Clone, Debug)]
pub struct GameLibrary {
    games: Vec<GameTemplate>,
    editing: Option<GameId>,
    min_pairs: usize,
}

impl Default for GameLibrary {
    fn default() -> Self {
        Self::with_min_pairs(DEFAULT_MIN_PAIRS)
    }
}

impl GameLibrary {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Library that accepts templates with at least `min_pairs` cards.
    #[must_use]
    pub fn with_min_pairs(min_pairs: usize) -> Self {
        Self {
            games: Vec::new(),
            editing: None,
            min_pairs,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.games.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &GameTemplate> {
        self.games.iter()
    }

    #[must_use]
    pub fn get(&self, id: GameId) -> Option<&GameTemplate> {
        self.games.iter().find(|g| g.id == id)
    }

    #[must_use]
    pub fn contains(&self, id: GameId) -> bool {
        self.get(id).is_some()
    }

    fn next_id(&self) -> GameId {
        let max = self.games.iter().map(|g| g.id.raw()).max().unwrap_or(0);
        GameId::new(max + 1)
    }

    /// Validate and store a template.
    ///
    /// An unset or already used id is replaced by a fresh one. Returns the
    /// stored id.
    pub fn add(&mut self, mut template: GameTemplate) -> Result<GameId> {
        template.validate(self.min_pairs)?;

        if template.id.is_unset() || self.contains(template.id) {
            template.id = self.next_id();
        }
        let id = template.id;

        debug!("Adding game {id}: {:?}", template.title);
        self.games.push(template);
        Ok(id)
    }

    /// Replace a stored template with the same id.
    pub fn update(&mut self, template: GameTemplate) -> Result<()> {
        template.validate(self.min_pairs)?;

        let slot = self
            .games
            .iter_mut()
            .find(|g| g.id == template.id)
            .ok_or(MatchError::UnknownGame(template.id))?;
        *slot = template;
        Ok(())
    }

    /// Delete a template.
    ///
    /// The game currently being edited cannot be removed.
    pub fn remove(&mut self, id: GameId) -> Result<GameTemplate> {
        if self.editing == Some(id) {
            return Err(MatchError::GameBeingEdited(id));
        }

        let pos = self
            .games
            .iter()
            .position(|g| g.id == id)
            .ok_or(MatchError::UnknownGame(id))?;
        debug!("Removing game {id}");
        Ok(self.games.remove(pos))
    }

    // === Editing ===

    /// Mark a game as being edited.
    pub fn begin_edit(&mut self, id: GameId) -> Result<()> {
        if !self.contains(id) {
            return Err(MatchError::UnknownGame(id));
        }
        self.editing = Some(id);
        Ok(())
    }

    /// Release the edit lock, whether the edit was saved or abandoned.
    pub fn finish_edit(&mut self) {
        self.editing = None;
    }

    #[must_use]
    pub fn editing(&self) -> Option<GameId> {
        self.editing
    }

    // === Export / Import ===

    /// Serialize the full games array as pretty JSON.
    pub fn export_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.games)?)
    }

    /// Replace the collection from an exported games array.
    ///
    /// On any failure the error is logged and returned, and the current
    /// collection is left as it was. Returns the number of games loaded.
    pub fn import_json(&mut self, json: &str) -> Result<usize> {
        match self.parse_import(json) {
            Ok(games) => {
                let count = games.len();
                self.games = games;
                self.editing = None;
                info!("Imported {count} games");
                Ok(count)
            }
            Err(err) => {
                error!("Failed to import games: {err}");
                Err(err)
            }
        }
    }

    fn parse_import(&self, json: &str) -> Result<Vec<GameTemplate>> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        if !value.is_array() {
            return Err(MatchError::ImportNotArray);
        }

        let games: Vec<GameTemplate> = serde_json::from_value(value)?;

        let mut seen = rustc_hash::FxHashSet::default();
        let mut next = games.iter().map(|g| g.id.raw()).max().unwrap_or(0);
        let mut out = Vec::with_capacity(games.len());
        for mut game in games {
            game.validate(self.min_pairs)?;
            if game.id.is_unset() || !seen.insert(game.id) {
                next += 1;
                game.id = GameId::new(next);
                seen.insert(game.id);
            }
            out.push(game);
        }
        Ok(out)
    }

    /// Write the exported games array to a file.
    pub fn export_to_file(&self, path: &Path) -> Result<()> {
        let json = self.export_json()?;
        fs::write(path, json)?;
        info!("Exported {} games to {}", self.games.len(), path.display());
        Ok(())
    }

    /// Replace the collection from a previously exported file.
    pub fn import_from_file(&mut self, path: &Path) -> Result<usize> {
        let json = fs::read_to_string(path).inspect_err(|err| {
            error!("Failed to read {}: {err}", path.display());
        })?;
        self.import_json(&json)
    }
}
