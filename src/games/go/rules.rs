//! Simplified Go.
//!
//! A placement captures every orthogonally adjacent opposing group left
//! without liberties. A placement whose own group then has no liberty is
//! suicide, unless it captured something. There is no ko rule. Two
//! consecutive passes end the game and trigger scoring.

use rustc_hash::FxHashSet;

use crate::core::{Board, GameError, GameVariant, IllegalReason, Outcome, Pos, Side, SideMap};
use crate::rules::{check_vacant, PassRule, Placement, RulesEngine};

use super::scoring;

/// Compensation added to White's final total.
pub const KOMI: f64 = 6.5;

/// Go rules.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Go {
    pub komi: f64,
}

impl Default for Go {
    fn default() -> Self {
        Self { komi: KOMI }
    }
}

impl Go {
    #[must_use]
    pub fn with_komi(komi: f64) -> Self {
        Self { komi }
    }
}

/// A maximal orthogonally connected set of same-side stones.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Group {
    pub side: Side,
    pub stones: Vec<Pos>,
    pub liberties: usize,
}

/// Flood-fill the group containing `start`. Empty if `start` is empty.
#[must_use]
pub fn group_at(board: &Board, start: Pos) -> Vec<Pos> {
    let Some(side) = board.at(start).side() else {
        return Vec::new();
    };

    let mut seen = FxHashSet::default();
    let mut stack = vec![start];
    let mut stones = Vec::new();
    seen.insert(start);

    while let Some(pos) = stack.pop() {
        stones.push(pos);
        for next in board.neighbors(pos) {
            if board.at(next).is(side) && seen.insert(next) {
                stack.push(next);
            }
        }
    }

    stones
}

/// Distinct empty cells adjacent to any stone of `stones`.
#[must_use]
pub fn liberties(board: &Board, stones: &[Pos]) -> usize {
    let mut libs = FxHashSet::default();
    for &pos in stones {
        for next in board.neighbors(pos) {
            if board.at(next).is_empty() {
                libs.insert(next);
            }
        }
    }
    libs.len()
}

/// Every group on the board, row-major by first stone.
#[must_use]
pub fn groups(board: &Board) -> Vec<Group> {
    let mut seen = FxHashSet::default();
    let mut found = Vec::new();

    for (pos, cell) in board.cells() {
        let Some(side) = cell.side() else {
            continue;
        };
        if seen.contains(&pos) {
            continue;
        }
        let stones = group_at(board, pos);
        seen.extend(stones.iter().copied());
        let liberties = liberties(board, &stones);
        found.push(Group {
            side,
            stones,
            liberties,
        });
    }

    found
}

impl RulesEngine for Go {
    fn variant(&self) -> GameVariant {
        GameVariant::Go
    }

    fn place(&self, board: &mut Board, pos: Pos, side: Side) -> Result<Placement, GameError> {
        check_vacant(board, pos)?;
        board.place_raw(pos, side);

        let opponent = side.opponent();
        let mut placement = Placement::new(pos, side);
        let adjacent: Vec<Pos> = board.neighbors(pos).collect();

        for next in adjacent {
            // Already-captured neighbours read as empty here.
            if !board.at(next).is(opponent) {
                continue;
            }
            let group = group_at(board, next);
            if liberties(board, &group) == 0 {
                for stone in group {
                    board.clear(stone);
                    placement.captured.push(stone);
                }
            }
        }

        if placement.captured.is_empty() && liberties(board, &group_at(board, pos)) == 0 {
            board.clear(pos);
            return Err(GameError::IllegalMove(IllegalReason::Suicide));
        }

        Ok(placement)
    }

    fn legal_moves(&self, board: &Board, side: Side) -> Vec<Pos> {
        let mut scratch = board.clone();
        board
            .positions()
            .filter(|&pos| match self.place(&mut scratch, pos, side) {
                Ok(placement) => {
                    self.unplace(&mut scratch, &placement);
                    true
                }
                Err(_) => false,
            })
            .collect()
    }

    fn has_legal_move(&self, board: &Board, side: Side) -> bool {
        let quick = board
            .positions()
            .any(|pos| board.is_vacant(pos) && board.neighbors(pos).any(|n| board.at(n).is_empty()));
        quick || !self.legal_moves(board, side).is_empty()
    }

    fn pass_rule(&self) -> PassRule {
        PassRule::Always
    }

    fn judge_move(&self, _board: &Board, _placement: &Placement) -> Option<Outcome> {
        None
    }

    fn komi(&self) -> Option<f64> {
        Some(self.komi)
    }

    fn set_komi(&mut self, komi: f64) {
        self.komi = komi;
    }

    fn judge_passes(&self, board: &Board, prisoners: &SideMap<u32>, passes: u32) -> Option<Outcome> {
        (passes >= 2).then(|| scoring::final_outcome(board, prisoners, self.komi))
    }
}
