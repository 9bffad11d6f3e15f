//! History entries, outcomes and the read-only state view.
//!
//! ## Snapshot
//!
//! One entry of a match's history: the full reversible state right after
//! a committed action (board, side to move, prisoners, pass counter).
//! `history[0]` is the initial position.
//!
//! ## GameState
//!
//! What the orchestration layer reads back: board, side to move,
//! history, outcome, last move, prisoners, legal moves and a status line.
//! History is an `im::Vector`, so cloning a view is O(1) in its length.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::{ActionRecord, Move};
use super::board::{Board, Pos};
use super::config::GameVariant;
use super::side::{Side, SideMap};

/// Full reversible state after one committed action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub board: Board,
    pub to_move: Side,
    pub prisoners: SideMap<u32>,
    pub consecutive_passes: u32,
    pub last_move: Option<Move>,
    /// The action that produced this entry; `None` for the initial one.
    pub action: Option<ActionRecord>,
}

impl Snapshot {
    /// The entry every history starts with.
    #[must_use]
    pub fn initial(board: Board) -> Self {
        Self {
            board,
            to_move: Side::Black,
            prisoners: SideMap::default(),
            consecutive_passes: 0,
            last_move: None,
            action: None,
        }
    }
}

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    Winner(Side),
    Draw,
}

impl GameResult {
    #[must_use]
    pub fn winner(&self) -> Option<Side> {
        match self {
            GameResult::Winner(side) => Some(*side),
            GameResult::Draw => None,
        }
    }

    /// Check if a side won.
    #[must_use]
    pub fn is_winner(&self, side: Side) -> bool {
        self.winner() == Some(side)
    }
}

/// Why a game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EndReason {
    /// Gomoku: five or more in a line.
    FiveInRow,
    BoardFull,
    /// Two passes in a row (Go explicit, Reversi forced or explicit).
    DoublePass,
    /// Reversi: neither side can place.
    NoMoves,
    Resignation,
}

/// Go's final count.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FinalScore {
    pub prisoners: SideMap<u32>,
    pub territory: SideMap<u32>,
    /// Added to White's total.
    pub komi: f64,
    pub totals: SideMap<f64>,
}

/// How a game ended.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Outcome {
    pub result: GameResult,
    pub reason: EndReason,
    pub score: Option<FinalScore>,
}

impl Outcome {
    #[must_use]
    pub fn new(result: GameResult, reason: EndReason) -> Self {
        Self {
            result,
            reason,
            score: None,
        }
    }

    #[must_use]
    pub fn win(side: Side, reason: EndReason) -> Self {
        Self::new(GameResult::Winner(side), reason)
    }

    #[must_use]
    pub fn draw(reason: EndReason) -> Self {
        Self::new(GameResult::Draw, reason)
    }

    #[must_use]
    pub fn with_score(mut self, score: FinalScore) -> Self {
        self.score = Some(score);
        self
    }

    #[must_use]
    pub fn winner(&self) -> Option<Side> {
        self.result.winner()
    }
}

/// Read-only view of a match.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub variant: GameVariant,
    pub board_size: usize,
    pub board: Board,
    pub to_move: Side,
    pub history: Vector<Snapshot>,
    pub is_over: bool,
    /// `None` while running and for draws.
    pub winner: Option<Side>,
    pub outcome: Option<Outcome>,
    pub last_move: Option<Move>,
    pub prisoners: SideMap<u32>,
    pub consecutive_passes: u32,
    /// Legal placements for `to_move`; empty once the game is over.
    pub legal_moves: Vec<Pos>,
    pub message: String,
}

impl GameState {
    /// Number of committed actions (history length minus the initial entry).
    #[must_use]
    pub fn actions_played(&self) -> usize {
        self.history.len().saturating_sub(1)
    }
}
