//! Depth-limited minimax with alpha-beta pruning.
//!
//! ## Root
//!
//! Every root candidate is ranked one ply deep and only the best
//! `root_beam` are searched. Each survivor is searched with a full window,
//! so equal scores at the root are exact and ties are broken uniformly at
//! random among them.
//!
//! ## Inner nodes
//!
//! A node returns its static evaluation when it is at depth 0 or when the
//! search was stopped. When the evaluation's magnitude exceeds
//! `terminal_threshold` the position is decided and the node returns at
//! once, shrunk by its ply so that a nearer win outranks a distant one and
//! a loss is put off as long as possible. Otherwise the side to move
//! tries its inner candidates, ranked and cut to `inner_beam` when there
//! are more. A side with nothing to place passes and the search continues
//! one ply lower; two passes in a row end the line.
//!
//! The search places and retracts stones on the live board. It never
//! copies the board per node and never writes history.

use std::time::Instant;

use crate::core::{GameError, GameRng, Pos, Side};
use crate::rules::{Game, PassRule};

use super::cancel::CancelFlag;
use super::computer::{no_candidates, precheck, root_ranking, Decision};
use super::config::StrategyConfig;
use super::heuristic::{best_of, rank_moves, Heuristic, Ply, Score};
use super::stats::SearchStats;

/// Alpha-beta move chooser.
#[derive(Clone, Debug)]
pub struct AlphaBeta {
    config: StrategyConfig,
    rng: GameRng,
    stats: SearchStats,
    cancel: Option<CancelFlag>,
}

impl AlphaBeta {
    pub fn new(config: StrategyConfig) -> Self {
        Self {
            rng: GameRng::new(config.seed),
            config,
            stats: SearchStats::default(),
            cancel: None,
        }
    }

    /// Poll `flag` during search.
    pub fn with_cancel(mut self, flag: CancelFlag) -> Self {
        self.cancel = Some(flag);
        self
    }

    #[must_use]
    pub fn config(&self) -> &StrategyConfig {
        &self.config
    }

    /// Statistics of the last `choose` call.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    pub(crate) fn rng(&self) -> &GameRng {
        &self.rng
    }

    pub(crate) fn set_rng(&mut self, rng: GameRng) {
        self.rng = rng;
    }

    /// Pick a move for `side`, which must be the side to move.
    ///
    /// If the search is stopped early, the best fully searched root move
    /// is returned, or the best one-ply move if none finished.
    pub fn choose<R: Heuristic>(&mut self, game: &mut Game<R>, side: Side) -> Result<Decision, GameError> {
        precheck(game, side)?;

        let start = Instant::now();
        self.stats.reset();

        let jitter = self.config.jitter.then_some(&mut self.rng);
        let mut ranked = root_ranking(game, jitter, &mut self.stats);
        ranked.truncate(self.config.root_beam.max(1));
        self.stats.root_moves = ranked.len() as u32;

        let child_depth = self.config.depth.saturating_sub(1);
        let mut best_score = Score::NEG_INFINITY;
        let mut best: Vec<Pos> = Vec::new();

        for &(_, pos) in &ranked {
            if self.should_stop() {
                break;
            }
            let Ok(placement) = game.probe(pos) else {
                continue;
            };
            let value = self.minimax(
                game,
                child_depth,
                Score::NEG_INFINITY,
                Score::INFINITY,
                side,
                1,
                false,
            );
            game.retract(&placement);

            // A child cut short by a stop is not trusted.
            if self.should_stop() {
                break;
            }

            if value > best_score || best.is_empty() {
                best_score = value;
                best.clear();
                best.push(pos);
            } else if value == best_score {
                best.push(pos);
            }
        }

        if best.is_empty() {
            best = best_of(&ranked);
        }
        let choice = self.rng.choose(&best).copied();

        self.stats.time_us = start.elapsed().as_micros() as u64;

        match choice {
            Some(pos) => Ok(Decision::Place(pos)),
            None => no_candidates(game),
        }
    }

    /// Value of the current position for `me`.
    ///
    /// The side to move maximizes when it is `me` and minimizes otherwise.
    #[allow(clippy::too_many_arguments)]
    fn minimax<R: Heuristic>(
        &mut self,
        game: &mut Game<R>,
        depth: u32,
        mut alpha: Score,
        mut beta: Score,
        me: Side,
        ply: u16,
        passed: bool,
    ) -> Score {
        self.stats.nodes += 1;
        self.stats.max_ply = self.stats.max_ply.max(ply);

        let score = self.evaluate(game, me);
        if score.abs() > self.config.terminal_threshold {
            // Sooner wins and later losses rank higher.
            return score - score.signum() * f64::from(ply);
        }
        if depth == 0 || self.should_stop() {
            return score;
        }

        let mover = game.to_move();
        let maximizing = mover == me;
        let moves = self.inner_moves(game);

        let mut best = if maximizing {
            Score::NEG_INFINITY
        } else {
            Score::INFINITY
        };
        let mut played = false;

        for pos in moves {
            let Ok(placement) = game.probe(pos) else {
                continue;
            };
            played = true;
            let value = self.minimax(game, depth - 1, alpha, beta, me, ply + 1, false);
            game.retract(&placement);

            if maximizing {
                best = best.max(value);
                alpha = alpha.max(value);
            } else {
                best = best.min(value);
                beta = beta.min(value);
            }
            if beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
            if self.stats.interrupted() {
                break;
            }
        }

        if played {
            return best;
        }

        if passed || game.rules().pass_rule() == PassRule::Forbidden {
            return score;
        }
        game.probe_pass();
        let value = self.minimax(game, depth - 1, alpha, beta, me, ply + 1, true);
        game.retract_pass();
        value
    }

    /// Inner candidates for the side to move, cut to the inner beam.
    fn inner_moves<R: Heuristic>(&mut self, game: &mut Game<R>) -> Vec<Pos> {
        let mover = game.to_move();
        let candidates = game.rules().candidates(game.board(), mover, Ply::Inner);
        if candidates.len() <= self.config.inner_beam {
            return candidates;
        }

        let jitter = self.config.jitter.then_some(&mut self.rng);
        rank_moves(game, &candidates, jitter, &mut self.stats)
            .into_iter()
            .take(self.config.inner_beam)
            .map(|(_, pos)| pos)
            .collect()
    }

    fn evaluate<R: Heuristic>(&mut self, game: &Game<R>, me: Side) -> Score {
        self.stats.evaluations += 1;
        let jitter = self.config.jitter.then_some(&mut self.rng);
        game.rules()
            .evaluate(game.board(), game.prisoners(), me, jitter)
    }

    fn should_stop(&mut self) -> bool {
        if self.cancel.as_ref().is_some_and(CancelFlag::is_cancelled) {
            self.stats.cancelled = true;
        }
        if self
            .config
            .max_nodes
            .is_some_and(|limit| self.stats.nodes >= limit)
        {
            self.stats.budget_exhausted = true;
        }
        self.stats.interrupted()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::{Gomoku, Reversi};

    fn quiet(depth: u32) -> StrategyConfig {
        StrategyConfig::alpha_beta(depth).with_jitter(false).with_seed(7)
    }

    #[test]
    fn test_search_leaves_game_untouched() {
        let mut game = Game::<Reversi>::new(8).unwrap();
        game.attempt_move(2, 3).unwrap();
        let before = game.snapshot();

        let mut search = AlphaBeta::new(quiet(3));
        search.choose(&mut game, Side::White).unwrap();

        assert_eq!(game.snapshot(), before);
        assert!(search.stats().nodes > 0);
        assert!(search.stats().max_ply >= 2);
    }

    #[test]
    fn test_blocks_closed_four() {
        let mut game = Game::<Gomoku>::new(15).unwrap();
        // Black builds four on row 7; White's first stone closes the left end.
        game.attempt_move(5, 7).unwrap();
        game.attempt_move(4, 7).unwrap();
        for (bx, wx) in [(6, 0), (7, 2)] {
            game.attempt_move(bx, 7).unwrap();
            game.attempt_move(wx, 0).unwrap();
        }
        game.attempt_move(8, 7).unwrap();

        let mut search = AlphaBeta::new(quiet(2));
        let decision = search.choose(&mut game, Side::White).unwrap();
        assert_eq!(decision, Decision::Place(Pos::new(9, 7)));
    }

    #[test]
    fn test_takes_immediate_win() {
        let mut game = Game::<Gomoku>::new(15).unwrap();
        for (bx, wx) in [(5, 0), (6, 2), (7, 4), (8, 6)] {
            game.attempt_move(bx, 7).unwrap();
            game.attempt_move(wx, 0).unwrap();
        }

        let mut search = AlphaBeta::new(quiet(3));
        let decision = search.choose(&mut game, Side::Black).unwrap();
        assert!(matches!(
            decision,
            Decision::Place(Pos { x: 4, y: 7 }) | Decision::Place(Pos { x: 9, y: 7 })
        ));
    }

    #[test]
    fn test_immediate_win_for_any_seed() {
        for seed in 0..6 {
            let mut game = Game::<Gomoku>::new(15).unwrap();
            for (bx, wx) in [(5, 0), (6, 2), (7, 4), (8, 6)] {
                game.attempt_move(bx, 7).unwrap();
                game.attempt_move(wx, 0).unwrap();
            }

            let mut search = AlphaBeta::new(StrategyConfig::alpha_beta(3).with_seed(seed));
            let decision = search.choose(&mut game, Side::Black).unwrap();
            assert!(
                matches!(
                    decision,
                    Decision::Place(Pos { x: 4, y: 7 }) | Decision::Place(Pos { x: 9, y: 7 })
                ),
                "seed {seed} chose {decision:?}"
            );
        }
    }

    #[test]
    fn test_node_budget_stops_search() {
        let mut game = Game::<Gomoku>::new(15).unwrap();
        game.attempt_move(7, 7).unwrap();
        let before = game.snapshot();

        let mut search = AlphaBeta::new(quiet(4).with_max_nodes(5));
        let decision = search.choose(&mut game, Side::White).unwrap();

        assert!(matches!(decision, Decision::Place(_)));
        assert!(search.stats().budget_exhausted);
        assert_eq!(game.snapshot(), before);
    }

    #[test]
    fn test_cancelled_search_falls_back_to_ranking() {
        let mut game = Game::<Reversi>::new(8).unwrap();
        let flag = CancelFlag::new();
        flag.cancel();

        let mut search = AlphaBeta::new(quiet(4)).with_cancel(flag);
        let decision = search.choose(&mut game, Side::Black).unwrap();

        assert!(search.stats().cancelled);
        assert_eq!(search.stats().nodes, 0);
        let Decision::Place(pos) = decision else {
            panic!("expected a placement");
        };
        assert!(game.legal_moves().contains(&pos));
    }

    #[test]
    fn test_deterministic_with_seed() {
        let config = StrategyConfig::alpha_beta(2).with_seed(1234);
        let mut a = AlphaBeta::new(config.clone());
        let mut b = AlphaBeta::new(config);

        let mut game_a = Game::<Reversi>::new(8).unwrap();
        let mut game_b = Game::<Reversi>::new(8).unwrap();
        for _ in 0..6 {
            let side = game_a.to_move();
            let da = a.choose(&mut game_a, side).unwrap();
            let db = b.choose(&mut game_b, side).unwrap();
            assert_eq!(da, db);
            if let Decision::Place(pos) = da {
                game_a.attempt_move(pos.x, pos.y).unwrap();
                game_b.attempt_move(pos.x, pos.y).unwrap();
            }
        }
    }
}
