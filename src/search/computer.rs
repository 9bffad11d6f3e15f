//! Computer players.
//!
//! `Computer` wraps whichever strategy a `StrategyConfig` asks for behind
//! one `choose` call. Strategies mutate the game they are given while they
//! think and leave it exactly as they found it; committing the returned
//! `Decision` is the caller's job (or `play`'s).

use serde::{Deserialize, Serialize};

use crate::core::{Action, GameError, GameRng, GameRngState, Pos, Side};
use crate::rules::{Game, PassRule};

use super::alphabeta::AlphaBeta;
use super::cancel::CancelFlag;
use super::config::{Difficulty, StrategyConfig, StrategyKind};
use super::greedy::Greedy;
use super::heuristic::{rank_moves, Heuristic, Ply, Score};
use super::stats::SearchStats;

/// What a strategy wants to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Decision {
    Place(Pos),
    /// No playable placement; only returned where passing is allowed.
    Pass,
}

impl Decision {
    #[must_use]
    pub fn action(self) -> Action {
        match self {
            Decision::Place(pos) => Action::Place(pos),
            Decision::Pass => Action::Pass,
        }
    }
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.action())
    }
}

/// Refuse to think about finished games or the wrong side.
pub(crate) fn precheck<R: Heuristic>(game: &Game<R>, side: Side) -> Result<(), GameError> {
    if game.is_over() {
        return Err(GameError::GameAlreadyOver);
    }
    if side != game.to_move() {
        return Err(GameError::WrongTurn {
            expected: game.to_move(),
            actual: side,
        });
    }
    Ok(())
}

/// One-ply ranking of the root candidates, best first.
///
/// Falls back to the full legal-move list when no root candidate is
/// playable (a Go neighbourhood made only of suicide points).
pub(crate) fn root_ranking<R: Heuristic>(
    game: &mut Game<R>,
    mut rng: Option<&mut GameRng>,
    stats: &mut SearchStats,
) -> Vec<(Score, Pos)> {
    let side = game.to_move();
    let candidates = game.rules().candidates(game.board(), side, Ply::Root);
    let ranked = rank_moves(game, &candidates, rng.as_deref_mut(), stats);
    if !ranked.is_empty() {
        return ranked;
    }

    let legal = game.legal_moves();
    rank_moves(game, &legal, rng, stats)
}

/// Decision when nothing can be placed.
pub(crate) fn no_candidates<R: Heuristic>(game: &Game<R>) -> Result<Decision, GameError> {
    match game.rules().pass_rule() {
        PassRule::Forbidden => Err(GameError::UnsupportedAction("no playable move")),
        PassRule::Always | PassRule::OnlyWhenStuck => Ok(Decision::Pass),
    }
}

/// A configured computer player.
#[derive(Clone, Debug)]
pub enum Computer {
    Greedy(Greedy),
    AlphaBeta(AlphaBeta),
}

impl Computer {
    pub fn new(config: StrategyConfig) -> Self {
        match config.kind {
            StrategyKind::Greedy => Computer::Greedy(Greedy::new(config)),
            StrategyKind::AlphaBeta => Computer::AlphaBeta(AlphaBeta::new(config)),
        }
    }

    pub fn from_difficulty(difficulty: Difficulty) -> Self {
        Self::new(difficulty.config())
    }

    /// Attach a cancel flag. Greedy searches finish too quickly to poll it.
    pub fn with_cancel(self, flag: CancelFlag) -> Self {
        match self {
            Computer::AlphaBeta(search) => Computer::AlphaBeta(search.with_cancel(flag)),
            other => other,
        }
    }

    #[must_use]
    pub fn config(&self) -> &StrategyConfig {
        match self {
            Computer::Greedy(s) => s.config(),
            Computer::AlphaBeta(s) => s.config(),
        }
    }

    /// Statistics of the last choice.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        match self {
            Computer::Greedy(s) => s.stats(),
            Computer::AlphaBeta(s) => s.stats(),
        }
    }

    /// Capture the random stream position.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        match self {
            Computer::Greedy(s) => s.rng().state(),
            Computer::AlphaBeta(s) => s.rng().state(),
        }
    }

    /// Resume the random stream from a captured position.
    pub fn restore_rng(&mut self, state: &GameRngState) {
        let rng = GameRng::from_state(state);
        match self {
            Computer::Greedy(s) => s.set_rng(rng),
            Computer::AlphaBeta(s) => s.set_rng(rng),
        }
    }

    /// Choose a move for `side` without committing it.
    pub fn choose<R: Heuristic>(&mut self, game: &mut Game<R>, side: Side) -> Result<Decision, GameError> {
        match self {
            Computer::Greedy(s) => s.choose(game, side),
            Computer::AlphaBeta(s) => s.choose(game, side),
        }
    }

    /// Choose a move for the side to move and commit it.
    pub fn play<R: Heuristic>(&mut self, game: &mut Game<R>) -> Result<Decision, GameError> {
        let side = game.to_move();
        let decision = self.choose(game, side)?;
        match decision {
            Decision::Place(pos) => game.attempt_move(pos.x, pos.y)?,
            Decision::Pass => game.attempt_pass(side)?,
        }
        Ok(decision)
    }
}
