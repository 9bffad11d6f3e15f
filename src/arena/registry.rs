//! Registry of live matches.
//!
//! The session layer owns one `MatchRegistry` and passes it by reference;
//! there is no process-wide table. Access to a single match is assumed to
//! be serialized by the caller.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{GameConfig, GameError};

use super::engine::Engine;

/// Handle of a registered match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MatchId(pub u64);

impl std::fmt::Display for MatchId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "match-{}", self.0)
    }
}

/// Live matches by id.
///
/// ## Example
///
/// ```
/// use rust_gridgames::arena::MatchRegistry;
/// use rust_gridgames::core::{GameConfig, GameVariant};
///
/// let mut registry = MatchRegistry::new();
/// let id = registry.create(GameConfig::standard(GameVariant::Go)).unwrap();
///
/// registry.get_mut(id).unwrap().attempt_move(3, 3).unwrap();
/// assert_eq!(registry.get(id).unwrap().snapshot().actions_played(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct MatchRegistry {
    matches: FxHashMap<MatchId, Engine>,
    next_id: u64,
}

impl MatchRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create and register a match.
    pub fn create(&mut self, config: GameConfig) -> Result<MatchId, GameError> {
        let engine = Engine::new(config)?;
        Ok(self.insert(engine))
    }

    /// Register an existing engine (e.g. one rebuilt from a record).
    pub fn insert(&mut self, engine: Engine) -> MatchId {
        let id = MatchId(self.next_id);
        self.next_id += 1;
        self.matches.insert(id, engine);
        id
    }

    pub fn get(&self, id: MatchId) -> Result<&Engine, GameError> {
        self.matches.get(&id).ok_or(GameError::UnknownMatch(id.0))
    }

    pub fn get_mut(&mut self, id: MatchId) -> Result<&mut Engine, GameError> {
        self.matches.get_mut(&id).ok_or(GameError::UnknownMatch(id.0))
    }

    /// Drop a match, returning its engine.
    pub fn remove(&mut self, id: MatchId) -> Result<Engine, GameError> {
        self.matches.remove(&id).ok_or(GameError::UnknownMatch(id.0))
    }

    #[must_use]
    pub fn contains(&self, id: MatchId) -> bool {
        self.matches.contains_key(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Registered ids, ascending.
    #[must_use]
    pub fn ids(&self) -> Vec<MatchId> {
        let mut ids: Vec<_> = self.matches.keys().copied().collect();
        ids.sort();
        ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameVariant;

    #[test]
    fn test_ids_are_unique() {
        let mut registry = MatchRegistry::new();
        let a = registry.create(GameConfig::standard(GameVariant::Gomoku)).unwrap();
        let b = registry.create(GameConfig::standard(GameVariant::Reversi)).unwrap();

        assert_ne!(a, b);
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.ids(), vec![a, b]);
        assert_eq!(registry.get(b).unwrap().variant(), GameVariant::Reversi);
    }

    #[test]
    fn test_failed_create_registers_nothing() {
        let mut registry = MatchRegistry::new();
        let config = GameConfig {
            variant: GameVariant::Go,
            board_size: 4,
        };
        assert!(registry.create(config).is_err());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_remove_and_unknown() {
        let mut registry = MatchRegistry::new();
        let id = registry.create(GameConfig::standard(GameVariant::Go)).unwrap();

        assert!(registry.remove(id).is_ok());
        assert!(!registry.contains(id));
        assert_eq!(registry.get(id).err(), Some(GameError::UnknownMatch(id.0)));
        assert!(matches!(registry.remove(id), Err(GameError::UnknownMatch(_))));
    }

    #[test]
    fn test_match_id_display() {
        assert_eq!(MatchId(7).to_string(), "match-7");
    }
}
