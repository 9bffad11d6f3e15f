//! Disc, corner and mobility evaluation for Reversi.

use crate::core::{Board, Cell, GameRng, Pos, Side, SideMap};
use crate::rules::RulesEngine;
use crate::search::{Heuristic, Ply, Score};

use super::rules::{disc_outcome, terminal_reason, Reversi};

/// Value of holding a corner.
pub const CORNER_WEIGHT: Score = 20.0;

/// Weight of the legal-move count difference.
pub const MOBILITY_WEIGHT: Score = 0.5;

/// Half-width of the evaluation jitter.
pub const JITTER: Score = 0.5;

fn corners(size: usize) -> [Pos; 4] {
    let last = size - 1;
    [
        Pos::new(0, 0),
        Pos::new(0, last),
        Pos::new(last, 0),
        Pos::new(last, last),
    ]
}

impl Heuristic for Reversi {
    /// Terminal positions are worth ±∞ (0 for a draw).
    fn evaluate(
        &self,
        board: &Board,
        _prisoners: &SideMap<u32>,
        perspective: Side,
        rng: Option<&mut GameRng>,
    ) -> Score {
        let opponent = perspective.opponent();

        if let Some(reason) = terminal_reason(board) {
            return match disc_outcome(board, reason).winner() {
                Some(side) if side == perspective => Score::INFINITY,
                Some(_) => Score::NEG_INFINITY,
                None => 0.0,
            };
        }

        let discs = board.count(perspective) as Score - board.count(opponent) as Score;

        let corner: Score = corners(board.size())
            .iter()
            .map(|&pos| match board.at(pos) {
                Cell::Empty => 0.0,
                cell if cell.is(perspective) => CORNER_WEIGHT,
                _ => -CORNER_WEIGHT,
            })
            .sum();

        let mobility = self.legal_moves(board, perspective).len() as Score
            - self.legal_moves(board, opponent).len() as Score;

        let noise = rng.map_or(0.0, |rng| rng.gen_uniform(-JITTER, JITTER));
        discs + corner + MOBILITY_WEIGHT * mobility + noise
    }

    /// Legal moves are already few; search all of them.
    fn candidates(&self, board: &Board, side: Side, _ply: Ply) -> Vec<Pos> {
        self.legal_moves(board, side)
    }
}
