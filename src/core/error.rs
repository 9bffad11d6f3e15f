//! Engine error type.
//!
//! Every failure the core reports is local and recoverable: a rejected
//! call leaves the game exactly as it was. The only construction-time
//! failure is an unsupported board size.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::config::GameVariant;
use super::side::Side;

/// Why a placement broke the variant's rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum IllegalReason {
    /// Reversi: the placement flips nothing.
    NoFlips,
    /// Go: the stone's group has no liberties and nothing was captured.
    Suicide,
    /// Reversi: explicit pass while a legal placement exists.
    HasLegalMoves,
}

impl std::fmt::Display for IllegalReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalReason::NoFlips => write!(f, "the placement does not flip any disc"),
            IllegalReason::Suicide => {
                write!(f, "suicide (no liberties and no captures)")
            }
            IllegalReason::HasLegalMoves => {
                write!(f, "a legal placement exists, passing is not allowed")
            }
        }
    }
}

/// Errors reported by rules engines, games and the registry.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("coordinate ({x}, {y}) is outside the {size}x{size} board")]
    InvalidCoordinate { x: usize, y: usize, size: usize },

    #[error("cell ({x}, {y}) is already occupied")]
    CellOccupied { x: usize, y: usize },

    #[error("illegal move: {0}")]
    IllegalMove(IllegalReason),

    #[error("it is {expected}'s turn, not {actual}'s")]
    WrongTurn { expected: Side, actual: Side },

    #[error("the game is already over")]
    GameAlreadyOver,

    #[error("no moves to undo")]
    NothingToUndo,

    #[error("{0}")]
    UnsupportedAction(&'static str),

    #[error("{variant} does not support a {size}x{size} board")]
    InvalidBoardSize { variant: GameVariant, size: usize },

    #[error("no match with id {0}")]
    UnknownMatch(u64),

    #[error("match record could not be encoded or decoded: {0}")]
    Codec(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_readable() {
        let err = GameError::InvalidCoordinate { x: 9, y: 0, size: 8 };
        assert_eq!(err.to_string(), "coordinate (9, 0) is outside the 8x8 board");

        let err = GameError::IllegalMove(IllegalReason::Suicide);
        assert_eq!(
            err.to_string(),
            "illegal move: suicide (no liberties and no captures)"
        );

        let err = GameError::WrongTurn {
            expected: Side::Black,
            actual: Side::White,
        };
        assert_eq!(err.to_string(), "it is Black's turn, not White's");
    }

    #[test]
    fn test_board_size_message() {
        let err = GameError::InvalidBoardSize {
            variant: GameVariant::Reversi,
            size: 10,
        };
        assert_eq!(err.to_string(), "Reversi does not support a 10x10 board");
    }
}
