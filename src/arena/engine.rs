//! Variant-erased engine handle.
//!
//! The orchestration layer picks a variant at runtime, so it holds an
//! `Engine` rather than a `Game<R>`. Every call is forwarded to the
//! wrapped game unchanged.

use crate::core::{GameConfig, GameError, GameState, GameVariant, Pos, Side};
use crate::games::{Go, Gomoku, Reversi};
use crate::rules::{Game, MatchRecord};
use crate::search::{Computer, Decision};

/// A match of any variant.
#[derive(Clone, Debug)]
pub enum Engine {
    Gomoku(Game<Gomoku>),
    Go(Game<Go>),
    Reversi(Game<Reversi>),
}

macro_rules! with_game {
    ($engine:expr, $game:ident => $body:expr) => {
        match $engine {
            Engine::Gomoku($game) => $body,
            Engine::Go($game) => $body,
            Engine::Reversi($game) => $body,
        }
    };
}

impl Engine {
    /// Create an engine for `config`, rejecting unsupported board sizes.
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        config.validate()?;
        Ok(match config.variant {
            GameVariant::Gomoku => Engine::Gomoku(Game::new(config.board_size)?),
            GameVariant::Go => Engine::Go(Game::new(config.board_size)?),
            GameVariant::Reversi => Engine::Reversi(Game::new(config.board_size)?),
        })
    }

    /// Rebuild an engine from an exported record.
    pub fn from_record(record: &MatchRecord) -> Result<Self, GameError> {
        Ok(match record.config.variant {
            GameVariant::Gomoku => Engine::Gomoku(Game::from_record(record)?),
            GameVariant::Go => Engine::Go(Game::from_record(record)?),
            GameVariant::Reversi => Engine::Reversi(Game::from_record(record)?),
        })
    }

    #[must_use]
    pub fn config(&self) -> GameConfig {
        with_game!(self, game => *game.config())
    }

    #[must_use]
    pub fn variant(&self) -> GameVariant {
        self.config().variant
    }

    #[must_use]
    pub fn to_move(&self) -> Side {
        with_game!(self, game => game.to_move())
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        with_game!(self, game => game.is_over())
    }

    #[must_use]
    pub fn message(&self) -> &str {
        with_game!(self, game => game.message())
    }

    #[must_use]
    pub fn legal_moves(&self) -> Vec<Pos> {
        with_game!(self, game => game.legal_moves())
    }

    pub fn attempt_move(&mut self, x: usize, y: usize) -> Result<(), GameError> {
        with_game!(self, game => game.attempt_move(x, y))
    }

    pub fn attempt_pass(&mut self, side: Side) -> Result<(), GameError> {
        with_game!(self, game => game.attempt_pass(side))
    }

    pub fn resign(&mut self, side: Side) {
        with_game!(self, game => game.resign(side));
    }

    pub fn undo(&mut self) -> Result<(), GameError> {
        with_game!(self, game => game.undo())
    }

    #[must_use]
    pub fn snapshot(&self) -> GameState {
        with_game!(self, game => game.snapshot())
    }

    #[must_use]
    pub fn record(&self) -> MatchRecord {
        with_game!(self, game => game.record())
    }

    /// Ask `computer` for `side`'s move without committing it.
    pub fn choose_move(&mut self, computer: &mut Computer, side: Side) -> Result<Decision, GameError> {
        with_game!(self, game => computer.choose(game, side))
    }

    /// Commit a decision for `side`.
    pub fn apply(&mut self, side: Side, decision: Decision) -> Result<(), GameError> {
        match decision {
            Decision::Place(pos) => {
                let to_move = self.to_move();
                if side != to_move {
                    return Err(GameError::WrongTurn {
                        expected: to_move,
                        actual: side,
                    });
                }
                self.attempt_move(pos.x, pos.y)
            }
            Decision::Pass => self.attempt_pass(side),
        }
    }
}
