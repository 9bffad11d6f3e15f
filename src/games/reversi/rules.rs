//! Reversi on the 8×8 board.
//!
//! A placement is legal when it flips at least one opposing disc: walking
//! any of the eight compass rays from the cell, a run of opposing discs
//! closed by one of the mover's own discs is flipped. A side with no legal
//! placement passes automatically after the opponent's move. The game ends
//! when the board is full, when neither side can place, or after two
//! consecutive passes; more discs wins.

use crate::core::{
    Board, Cell, EndReason, GameError, GameResult, GameVariant, IllegalReason, Outcome, Pos, Side,
    SideMap, COMPASS,
};
use crate::rules::{check_vacant, PassRule, Placement, RulesEngine, Touched};

/// Reversi rules.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Reversi;

/// The four starting discs.
pub const OPENING: [(usize, usize, Side); 4] = [
    (3, 3, Side::White),
    (4, 3, Side::Black),
    (3, 4, Side::Black),
    (4, 4, Side::White),
];

/// Discs `side` would flip by placing at `pos`. Empty if `pos` is taken.
#[must_use]
pub fn flips(board: &Board, pos: Pos, side: Side) -> Touched {
    let mut flipped = Touched::new();
    if !board.is_vacant(pos) {
        return flipped;
    }

    let opponent = side.opponent();
    for &(dx, dy) in &COMPASS {
        let mut run = Touched::new();
        let mut cursor = pos;
        while let Some(next) = board.step(cursor, dx, dy) {
            let cell = board.at(next);
            if cell.is(opponent) {
                run.push(next);
                cursor = next;
            } else {
                if cell.is(side) {
                    flipped.extend(run.drain(..));
                }
                break;
            }
        }
    }

    flipped
}

/// Does placing at `pos` flip anything?
#[must_use]
pub fn is_legal(board: &Board, pos: Pos, side: Side) -> bool {
    !flips(board, pos, side).is_empty()
}

/// Outcome by disc count.
#[must_use]
pub fn disc_outcome(board: &Board, reason: EndReason) -> Outcome {
    let black = board.count(Side::Black);
    let white = board.count(Side::White);
    let result = match black.cmp(&white) {
        std::cmp::Ordering::Greater => GameResult::Winner(Side::Black),
        std::cmp::Ordering::Less => GameResult::Winner(Side::White),
        std::cmp::Ordering::Equal => GameResult::Draw,
    };
    Outcome::new(result, reason)
}

/// Why the position is over, if it is, regardless of whose turn it is.
#[must_use]
pub fn terminal_reason(board: &Board) -> Option<EndReason> {
    if board.is_full() {
        return Some(EndReason::BoardFull);
    }
    if !Reversi.has_legal_move(board, Side::Black) && !Reversi.has_legal_move(board, Side::White) {
        return Some(EndReason::NoMoves);
    }
    None
}

impl RulesEngine for Reversi {
    fn variant(&self) -> GameVariant {
        GameVariant::Reversi
    }

    fn setup(&self, board: &mut Board) {
        for (x, y, side) in OPENING {
            board.set(Pos::new(x, y), Cell::from(side));
        }
    }

    fn place(&self, board: &mut Board, pos: Pos, side: Side) -> Result<Placement, GameError> {
        check_vacant(board, pos)?;
        let flipped = flips(board, pos, side);
        if flipped.is_empty() {
            return Err(GameError::IllegalMove(IllegalReason::NoFlips));
        }

        board.place_raw(pos, side);
        for &disc in &flipped {
            board.set(disc, Cell::from(side));
        }

        let mut placement = Placement::new(pos, side);
        placement.flipped = flipped;
        Ok(placement)
    }

    fn legal_moves(&self, board: &Board, side: Side) -> Vec<Pos> {
        board.positions().filter(|&p| is_legal(board, p, side)).collect()
    }

    fn has_legal_move(&self, board: &Board, side: Side) -> bool {
        board.positions().any(|p| is_legal(board, p, side))
    }

    fn pass_rule(&self) -> PassRule {
        PassRule::OnlyWhenStuck
    }

    fn judge_move(&self, board: &Board, _placement: &Placement) -> Option<Outcome> {
        terminal_reason(board).map(|reason| disc_outcome(board, reason))
    }

    fn judge_passes(&self, board: &Board, _prisoners: &SideMap<u32>, passes: u32) -> Option<Outcome> {
        (passes >= 2).then(|| disc_outcome(board, EndReason::DoublePass))
    }

    fn forced_pass(&self, board: &Board, side: Side) -> bool {
        !self.has_legal_move(board, side)
    }
}
