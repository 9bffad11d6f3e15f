//! Five in a row.
//!
//! Any empty cell is a legal placement. A run of five or more stones of
//! one side in any of the four line directions wins; a full board without
//! a run is a draw. Passing is not allowed.

use crate::core::{Board, EndReason, GameError, GameVariant, Outcome, Pos, Side};
use crate::rules::{check_vacant, PassRule, Placement, RulesEngine};

/// Stones in a row needed to win.
pub const WIN_LENGTH: usize = 5;

/// Horizontal, vertical and the two diagonals.
pub const LINE_DIRECTIONS: [(i32, i32); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

/// Gomoku rules.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Gomoku;

/// Length of the longest line of `side` stones through `pos`.
#[must_use]
pub fn longest_run(board: &Board, pos: Pos, side: Side) -> usize {
    LINE_DIRECTIONS
        .iter()
        .map(|&(dx, dy)| 1 + ray(board, pos, dx, dy, side) + ray(board, pos, -dx, -dy, side))
        .max()
        .unwrap_or(0)
}

fn ray(board: &Board, from: Pos, dx: i32, dy: i32, side: Side) -> usize {
    let mut count = 0;
    let mut cursor = from;
    while let Some(next) = board.step(cursor, dx, dy) {
        if !board.at(next).is(side) {
            break;
        }
        count += 1;
        cursor = next;
    }
    count
}

impl RulesEngine for Gomoku {
    fn variant(&self) -> GameVariant {
        GameVariant::Gomoku
    }

    fn place(&self, board: &mut Board, pos: Pos, side: Side) -> Result<Placement, GameError> {
        check_vacant(board, pos)?;
        board.place_raw(pos, side);
        Ok(Placement::new(pos, side))
    }

    fn legal_moves(&self, board: &Board, _side: Side) -> Vec<Pos> {
        board.positions().filter(|&p| board.is_vacant(p)).collect()
    }

    fn has_legal_move(&self, board: &Board, _side: Side) -> bool {
        !board.is_full()
    }

    fn pass_rule(&self) -> PassRule {
        PassRule::Forbidden
    }

    fn judge_move(&self, board: &Board, placement: &Placement) -> Option<Outcome> {
        if longest_run(board, placement.pos, placement.side) >= WIN_LENGTH {
            return Some(Outcome::win(placement.side, EndReason::FiveInRow));
        }
        if board.is_full() {
            return Some(Outcome::draw(EndReason::BoardFull));
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_longest_run_each_direction() {
        let mut board = Board::new(15);
        for i in 0..4 {
            board.place_raw(Pos::new(3 + i, 3 + i), Side::Black);
        }
        assert_eq!(longest_run(&board, Pos::new(4, 4), Side::Black), 4);

        board.place_raw(Pos::new(7, 7), Side::Black);
        assert_eq!(longest_run(&board, Pos::new(7, 7), Side::Black), 5);
        assert_eq!(longest_run(&board, Pos::new(3, 3), Side::White), 1);
    }

    #[test]
    fn test_anti_diagonal_run() {
        let mut board = Board::new(15);
        for i in 0..5 {
            board.place_raw(Pos::new(2 + i, 10 - i), Side::White);
        }
        assert_eq!(longest_run(&board, Pos::new(4, 8), Side::White), 5);
    }

    #[test]
    fn test_broken_run() {
        let mut board = Board::new(15);
        for x in [0, 1, 2, 4, 5] {
            board.place_raw(Pos::new(x, 0), Side::Black);
        }
        board.place_raw(Pos::new(3, 0), Side::White);
        assert_eq!(longest_run(&board, Pos::new(1, 0), Side::Black), 3);
    }

    #[test]
    fn test_place_rejects_occupied() {
        let mut board = Board::new(15);
        Gomoku.place(&mut board, Pos::new(0, 0), Side::Black).unwrap();
        assert_eq!(
            Gomoku.place(&mut board, Pos::new(0, 0), Side::White),
            Err(GameError::CellOccupied { x: 0, y: 0 })
        );
        assert_eq!(board.count(Side::White), 0);
    }

    #[test]
    fn test_judge_overline_wins() {
        let mut board = Board::new(15);
        for x in 0..6 {
            board.place_raw(Pos::new(x, 2), Side::White);
        }
        let placement = Placement::new(Pos::new(5, 2), Side::White);
        let outcome = Gomoku.judge_move(&board, &placement).unwrap();
        assert_eq!(outcome.winner(), Some(Side::White));
        assert_eq!(outcome.reason, EndReason::FiveInRow);
    }
}
