//! Rules engine trait for the three variants.
//!
//! A rules engine is a small stateless capability object: it knows how a
//! placement changes a board, which placements are legal, when passing is
//! allowed and when a game is over. Turn order, history, prisoners and the
//! pass counter are shared and live in [`Game`](super::Game).
//!
//! `place`/`unplace` form an exact pair. Search relies on this: it mutates
//! the live board with `place`, recurses, then calls `unplace` with the
//! returned [`Placement`] instead of copying the board per node.

use smallvec::SmallVec;

use crate::core::{Board, Cell, GameConfig, GameError, GameVariant, Outcome, Pos, Side, SideMap};

/// Cells touched by one placement besides the placed stone.
pub type Touched = SmallVec<[Pos; 8]>;

/// When a side may give up its turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PassRule {
    /// Gomoku.
    Forbidden,
    /// Go.
    Always,
    /// Reversi: only without a legal placement.
    OnlyWhenStuck,
}

/// Undo record for one applied placement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Placement {
    pub pos: Pos,
    pub side: Side,
    /// Opposing stones removed from the board (Go).
    pub captured: Touched,
    /// Opposing discs turned to `side` (Reversi).
    pub flipped: Touched,
}

impl Placement {
    #[must_use]
    pub fn new(pos: Pos, side: Side) -> Self {
        Self {
            pos,
            side,
            captured: Touched::new(),
            flipped: Touched::new(),
        }
    }

    /// Number of stones this placement captured.
    #[must_use]
    pub fn captures(&self) -> u32 {
        self.captured.len() as u32
    }
}

/// Reject coordinates off the board or on an occupied cell.
pub fn check_vacant(board: &Board, pos: Pos) -> Result<(), GameError> {
    if !board.contains(pos.x, pos.y) {
        return Err(GameError::InvalidCoordinate {
            x: pos.x,
            y: pos.y,
            size: board.size(),
        });
    }
    if !board.at(pos).is_empty() {
        return Err(GameError::CellOccupied { x: pos.x, y: pos.y });
    }
    Ok(())
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `place`: on `Err` the board must be exactly as before the call
/// - `unplace`: must restore the board `place` started from
/// - `judge_move`: called after every committed placement, before the
///   side to move changes
/// - `legal_moves`: return empty if the side can't place
pub trait RulesEngine {
    /// The variant this engine plays.
    fn variant(&self) -> GameVariant;

    /// Check a board size before a game is built around it.
    fn validate(&self, board_size: usize) -> Result<GameConfig, GameError> {
        GameConfig::new(self.variant(), board_size)
    }

    /// Put the initial stones on a fresh board.
    fn setup(&self, _board: &mut Board) {}

    /// Validate and apply a placement for `side`.
    fn place(&self, board: &mut Board, pos: Pos, side: Side) -> Result<Placement, GameError>;

    /// Revert a placement returned by `place` on the same board.
    fn unplace(&self, board: &mut Board, placement: &Placement) {
        let opponent = Cell::from(placement.side.opponent());
        for &pos in placement.captured.iter().chain(placement.flipped.iter()) {
            board.set(pos, opponent);
        }
        board.clear(placement.pos);
    }

    /// Every legal placement for `side`, row-major.
    fn legal_moves(&self, board: &Board, side: Side) -> Vec<Pos>;

    /// Does `side` have at least one legal placement?
    fn has_legal_move(&self, board: &Board, side: Side) -> bool {
        !self.legal_moves(board, side).is_empty()
    }

    fn pass_rule(&self) -> PassRule;

    /// Terminal check after a placement.
    fn judge_move(&self, board: &Board, placement: &Placement) -> Option<Outcome>;

    /// Terminal check after `passes` consecutive passes.
    fn judge_passes(&self, _board: &Board, _prisoners: &SideMap<u32>, _passes: u32) -> Option<Outcome> {
        None
    }

    /// Must `side` pass automatically on this board?
    fn forced_pass(&self, _board: &Board, _side: Side) -> bool {
        false
    }

    /// Scoring compensation for White, for variants that have one.
    fn komi(&self) -> Option<f64> {
        None
    }

    /// Adopt a recorded komi. Variants without one ignore it.
    fn set_komi(&mut self, _komi: f64) {}
}
