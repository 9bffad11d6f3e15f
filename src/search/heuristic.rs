//! Static evaluation and candidate generation.
//!
//! Strategies only see a variant through this trait: `evaluate` scores a
//! board for one side, `candidates` narrows the placements worth trying.
//! Both are pure with respect to the board; randomness comes in through the
//! strategy's own `GameRng`.

use crate::core::{Board, GameRng, Pos, Side, SideMap};
use crate::rules::{Game, RulesEngine};

use super::stats::SearchStats;

/// Heuristic score, higher is better for the evaluating side.
pub type Score = f64;

/// Where in the tree candidates are requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ply {
    /// The move actually being chosen.
    Root,
    /// Any deeper node.
    Inner,
}

/// Evaluator plus candidate generator for one variant.
pub trait Heuristic: RulesEngine {
    /// Score `board` from `perspective`'s point of view.
    ///
    /// `rng` is `None` when the strategy runs without jitter.
    fn evaluate(
        &self,
        board: &Board,
        prisoners: &SideMap<u32>,
        perspective: Side,
        rng: Option<&mut GameRng>,
    ) -> Score;

    /// Placements worth searching for `side`.
    ///
    /// May include cells `place` would reject (Go suicide); search skips
    /// those.
    fn candidates(&self, board: &Board, side: Side, ply: Ply) -> Vec<Pos>;
}

/// Score every candidate one ply deep for the side to move.
///
/// Each candidate is probed on the live board, evaluated from the mover's
/// perspective and retracted. Rejected placements are dropped. The result
/// is sorted best first; equal scores keep candidate order.
pub fn rank_moves<R: Heuristic>(
    game: &mut Game<R>,
    candidates: &[Pos],
    mut rng: Option<&mut GameRng>,
    stats: &mut SearchStats,
) -> Vec<(Score, Pos)> {
    let mover = game.to_move();
    let mut ranked = Vec::with_capacity(candidates.len());

    for &pos in candidates {
        let Ok(placement) = game.probe(pos) else {
            continue;
        };
        stats.evaluations += 1;
        let score = game
            .rules()
            .evaluate(game.board(), game.prisoners(), mover, rng.as_deref_mut());
        game.retract(&placement);
        ranked.push((score, pos));
    }

    ranked.sort_by(|a, b| b.0.total_cmp(&a.0));
    ranked
}

/// Every entry sharing the top score of a ranking.
#[must_use]
pub fn best_of(ranked: &[(Score, Pos)]) -> Vec<Pos> {
    let Some(&(top, _)) = ranked.first() else {
        return Vec::new();
    };
    ranked
        .iter()
        .take_while(|(score, _)| *score == top)
        .map(|&(_, pos)| pos)
        .collect()
}
