//! Game configuration.
//!
//! The orchestration layer picks a variant and a board size; everything
//! else about a match follows from the variant's rules engine.

use serde::{Deserialize, Serialize};

use super::error::GameError;

/// Smallest board any variant accepts.
pub const MIN_BOARD_SIZE: usize = 8;

/// Largest board any variant accepts.
pub const MAX_BOARD_SIZE: usize = 19;

/// Reversi is only played on this size.
pub const REVERSI_BOARD_SIZE: usize = 8;

/// Which game a match plays.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameVariant {
    Gomoku,
    Go,
    Reversi,
}

impl GameVariant {
    /// Every supported variant.
    pub const ALL: [GameVariant; 3] = [GameVariant::Gomoku, GameVariant::Go, GameVariant::Reversi];

    /// The conventional board size for this variant.
    #[must_use]
    pub const fn standard_size(self) -> usize {
        match self {
            GameVariant::Gomoku => 15,
            GameVariant::Go => 19,
            GameVariant::Reversi => REVERSI_BOARD_SIZE,
        }
    }

    /// Is `size` playable for this variant?
    #[must_use]
    pub fn supports_size(self, size: usize) -> bool {
        match self {
            GameVariant::Reversi => size == REVERSI_BOARD_SIZE,
            GameVariant::Gomoku | GameVariant::Go => {
                (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size)
            }
        }
    }
}

impl std::fmt::Display for GameVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameVariant::Gomoku => write!(f, "Gomoku"),
            GameVariant::Go => write!(f, "Go"),
            GameVariant::Reversi => write!(f, "Reversi"),
        }
    }
}

/// What the orchestration layer supplies when creating a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameConfig {
    pub variant: GameVariant,
    pub board_size: usize,
}

impl GameConfig {
    /// Create a config, rejecting sizes the variant cannot be played on.
    pub fn new(variant: GameVariant, board_size: usize) -> Result<Self, GameError> {
        let config = Self {
            variant,
            board_size,
        };
        config.validate()?;
        Ok(config)
    }

    /// Config with the variant's conventional board size.
    #[must_use]
    pub const fn standard(variant: GameVariant) -> Self {
        Self {
            variant,
            board_size: variant.standard_size(),
        }
    }

    /// Check the size against the variant.
    ///
    /// Configs can arrive through deserialization, so games re-validate
    /// at construction.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.variant.supports_size(self.board_size) {
            Ok(())
        } else {
            Err(GameError::InvalidBoardSize {
                variant: self.variant,
                size: self.board_size,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_sizes() {
        assert_eq!(GameConfig::standard(GameVariant::Gomoku).board_size, 15);
        assert_eq!(GameConfig::standard(GameVariant::Go).board_size, 19);
        assert_eq!(GameConfig::standard(GameVariant::Reversi).board_size, 8);

        for variant in GameVariant::ALL {
            assert!(GameConfig::standard(variant).validate().is_ok());
        }
    }

    #[test]
    fn test_size_bounds() {
        assert!(GameConfig::new(GameVariant::Gomoku, 8).is_ok());
        assert!(GameConfig::new(GameVariant::Go, 19).is_ok());
        assert!(GameConfig::new(GameVariant::Go, 9).is_ok());

        assert_eq!(
            GameConfig::new(GameVariant::Gomoku, 7),
            Err(GameError::InvalidBoardSize {
                variant: GameVariant::Gomoku,
                size: 7
            })
        );
        assert!(GameConfig::new(GameVariant::Go, 20).is_err());
    }

    #[test]
    fn test_reversi_is_fixed_size() {
        assert!(GameConfig::new(GameVariant::Reversi, 8).is_ok());
        assert!(GameConfig::new(GameVariant::Reversi, 10).is_err());
        assert!(GameConfig::new(GameVariant::Reversi, 19).is_err());
    }

    #[test]
    fn test_serialization() {
        let config = GameConfig::standard(GameVariant::Go);
        let json = serde_json::to_string(&config).unwrap();
        let back: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
