//! Final count: prisoners plus simplified territory plus komi.
//!
//! Each maximal empty region belongs to a side only when every stone
//! bordering it is of that side. Regions touching both colours, or no
//! stone at all, count for nobody.

use rustc_hash::FxHashSet;

use crate::core::{Board, EndReason, FinalScore, GameResult, Outcome, Pos, Side, SideMap};

/// Flood-fill the empty region containing `start`.
fn region_at(board: &Board, start: Pos, seen: &mut FxHashSet<Pos>) -> (usize, Option<Side>, bool) {
    let mut stack = vec![start];
    seen.insert(start);

    let mut size = 0;
    let mut owner: Option<Side> = None;
    let mut mixed = false;

    while let Some(pos) = stack.pop() {
        size += 1;
        for next in board.neighbors(pos) {
            match board.at(next).side() {
                None => {
                    if seen.insert(next) {
                        stack.push(next);
                    }
                }
                Some(side) => match owner {
                    None => owner = Some(side),
                    Some(existing) if existing != side => mixed = true,
                    Some(_) => {}
                },
            }
        }
    }

    (size, owner, mixed)
}

/// Empty cells owned by each side.
#[must_use]
pub fn territory(board: &Board) -> SideMap<u32> {
    let mut seen = FxHashSet::default();
    let mut owned = SideMap::default();

    for (pos, cell) in board.cells() {
        if !cell.is_empty() || seen.contains(&pos) {
            continue;
        }
        let (size, owner, mixed) = region_at(board, pos, &mut seen);
        if let (Some(side), false) = (owner, mixed) {
            owned[side] += size as u32;
        }
    }

    owned
}

/// Totals for both sides.
#[must_use]
pub fn final_score(board: &Board, prisoners: &SideMap<u32>, komi: f64) -> FinalScore {
    let territory = territory(board);
    let totals = SideMap::from_fn(|side| {
        let base = f64::from(prisoners[side] + territory[side]);
        if side == Side::White {
            base + komi
        } else {
            base
        }
    });

    FinalScore {
        prisoners: *prisoners,
        territory,
        komi,
        totals,
    }
}

/// Outcome after two consecutive passes; equal totals draw.
#[must_use]
pub fn final_outcome(board: &Board, prisoners: &SideMap<u32>, komi: f64) -> Outcome {
    let score = final_score(board, prisoners, komi);
    let (black, white) = (score.totals[Side::Black], score.totals[Side::White]);

    let result = if black > white {
        GameResult::Winner(Side::Black)
    } else if white > black {
        GameResult::Winner(Side::White)
    } else {
        GameResult::Draw
    };

    Outcome::new(result, EndReason::DoublePass).with_score(score)
}
