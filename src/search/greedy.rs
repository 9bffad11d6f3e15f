//! One-ply greedy strategy.
//!
//! Every root candidate is placed on the live board, scored from the
//! mover's perspective and taken back. The best score wins; ties are
//! broken uniformly at random.

use std::time::Instant;

use crate::core::{GameError, GameRng, Side};
use crate::rules::Game;

use super::computer::{no_candidates, precheck, root_ranking, Decision};
use super::config::StrategyConfig;
use super::heuristic::{best_of, Heuristic};
use super::stats::SearchStats;

/// Greedy move chooser.
#[derive(Clone, Debug)]
pub struct Greedy {
    config: StrategyConfig,
    rng: GameRng,
    stats: SearchStats,
}

impl Greedy {
    pub fn new(config: StrategyConfig) -> Self {
        Self {
            rng: GameRng::new(config.seed),
            config,
            stats: SearchStats::default(),
        }
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
    pub fn choose<R: Heuristic>(&mut self, game: &mut Game<R>, side: Side) -> Result<Decision, GameError> {
        precheck(game, side)?;

        let start = Instant::now();
        self.stats.reset();

        let jitter = self.config.jitter.then_some(&mut self.rng);
        let ranked = root_ranking(game, jitter, &mut self.stats);
        self.stats.root_moves = ranked.len() as u32;

        let best = best_of(&ranked);
        let choice = self.rng.choose(&best).copied();

        self.stats.time_us = start.elapsed().as_micros() as u64;

        match choice {
            Some(pos) => Ok(Decision::Place(pos)),
            None => no_candidates(game),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Pos;
    use crate::games::{Gomoku, Reversi};

    #[test]
    fn test_opening_takes_center() {
        let mut game = Game::<Gomoku>::new(15).unwrap();
        let mut greedy = Greedy::new(StrategyConfig::greedy());

        let decision = greedy.choose(&mut game, Side::Black).unwrap();
        assert_eq!(decision, Decision::Place(Pos::new(7, 7)));
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn test_completes_five() {
        let mut game = Game::<Gomoku>::new(15).unwrap();
        for (bx, wy) in [(3, 10), (4, 11), (5, 12), (6, 13)] {
            game.attempt_move(bx, 5).unwrap();
            game.attempt_move(0, wy).unwrap();
        }

        let mut greedy = Greedy::new(StrategyConfig::greedy());
        let decision = greedy.choose(&mut game, Side::Black).unwrap();
        assert!(matches!(
            decision,
            Decision::Place(Pos { x: 2, y: 5 }) | Decision::Place(Pos { x: 7, y: 5 })
        ));
    }

    #[test]
    fn test_board_untouched_after_choice() {
        let mut game = Game::<Reversi>::new(8).unwrap();
        let before = game.snapshot();

        let mut greedy = Greedy::new(StrategyConfig::greedy().with_seed(3));
        let decision = greedy.choose(&mut game, Side::Black).unwrap();

        assert!(matches!(decision, Decision::Place(_)));
        assert_eq!(game.snapshot(), before);
        assert_eq!(greedy.stats().root_moves, 4);
    }

    #[test]
    fn test_wrong_side_rejected() {
        let mut game = Game::<Reversi>::new(8).unwrap();
        let mut greedy = Greedy::new(StrategyConfig::greedy());
        assert!(matches!(
            greedy.choose(&mut game, Side::White),
            Err(GameError::WrongTurn { .. })
        ));
    }
}
