//! Actions and move records.
//!
//! An `Action` is what a caller feeds into a game: a placement at a
//! coordinate or a pass. Resignation is not an action; it ends the game
//! without touching the board and is never recorded in history.

use serde::{Deserialize, Serialize};

use super::board::Pos;
use super::side::Side;

/// A caller-visible game action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Put a stone of the side to move on `Pos`.
    Place(Pos),
    /// Give up the turn without placing.
    Pass,
}

impl Action {
    /// Convenience constructor for a placement.
    #[must_use]
    pub const fn place(x: usize, y: usize) -> Self {
        Action::Place(Pos::new(x, y))
    }

    #[must_use]
    pub const fn is_pass(&self) -> bool {
        matches!(self, Action::Pass)
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Place(pos) => write!(f, "{pos}"),
            Action::Pass => write!(f, "pass"),
        }
    }
}

/// A committed placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub pos: Pos,
    pub side: Side,
}

impl Move {
    #[must_use]
    pub const fn new(pos: Pos, side: Side) -> Self {
        Self { pos, side }
    }
}

/// A committed action with the side that took it.
///
/// Used for:
/// - The move stream of a match (including passes)
/// - Replay and export
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The side that acted.
    pub side: Side,

    /// What it did.
    pub action: Action,

    /// The opponent was left without a legal move and passed automatically
    /// right after this action (Reversi).
    pub auto_pass: bool,
}

impl ActionRecord {
    #[must_use]
    pub const fn new(side: Side, action: Action) -> Self {
        Self {
            side,
            action,
            auto_pass: false,
        }
    }

    /// The placement this record describes, if it is one.
    #[must_use]
    pub fn as_move(&self) -> Option<Move> {
        match self.action {
            Action::Place(pos) => Some(Move::new(pos, self.side)),
            Action::Pass => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_constructors() {
        assert_eq!(Action::place(3, 4), Action::Place(Pos::new(3, 4)));
        assert!(Action::Pass.is_pass());
        assert!(!Action::place(0, 0).is_pass());
    }

    #[test]
    fn test_action_display() {
        assert_eq!(Action::place(2, 3).to_string(), "(2, 3)");
        assert_eq!(Action::Pass.to_string(), "pass");
    }

    #[test]
    fn test_record_as_move() {
        let record = ActionRecord::new(Side::White, Action::place(1, 2));
        assert_eq!(record.as_move(), Some(Move::new(Pos::new(1, 2), Side::White)));
        assert!(!record.auto_pass);

        let pass = ActionRecord::new(Side::Black, Action::Pass);
        assert_eq!(pass.as_move(), None);
    }

    #[test]
    fn test_record_serialization() {
        let mut record = ActionRecord::new(Side::Black, Action::place(5, 5));
        record.auto_pass = true;

        let json = serde_json::to_string(&record).unwrap();
        let back: ActionRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(record, back);
    }
}
