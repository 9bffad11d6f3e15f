//! Exportable match records.
//!
//! A `MatchRecord` is everything needed to rebuild a match: its
//! configuration, any non-default rule parameter (Go komi), the committed
//! actions and how it ended. The bytes from
//! `encode` are opaque to the caller; persistence stores them as-is.

use serde::{Deserialize, Serialize};

use crate::core::{ActionRecord, EndReason, GameConfig, GameError, Outcome};

use super::engine::RulesEngine;
use super::game::Game;

/// Configuration, action stream and outcome of one match.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub config: GameConfig,
    /// Komi the match was scored with; `None` for variants without one.
    #[serde(default)]
    pub komi: Option<f64>,
    pub actions: Vec<ActionRecord>,
    pub outcome: Option<Outcome>,
}

impl MatchRecord {
    /// Serialize with bincode.
    pub fn encode(&self) -> Result<Vec<u8>, GameError> {
        bincode::serialize(self).map_err(|e| GameError::Codec(e.to_string()))
    }

    /// Deserialize bytes produced by `encode`.
    pub fn decode(bytes: &[u8]) -> Result<Self, GameError> {
        bincode::deserialize(bytes).map_err(|e| GameError::Codec(e.to_string()))
    }
}

impl<R: RulesEngine> Game<R> {
    /// Export this match.
    #[must_use]
    pub fn record(&self) -> MatchRecord {
        MatchRecord {
            config: *self.config(),
            komi: self.rules().komi(),
            actions: self.actions(),
            outcome: self.outcome().cloned(),
        }
    }
}

impl<R: RulesEngine + Default> Game<R> {
    /// Rebuild a match from a record, resignation and komi included.
    pub fn from_record(record: &MatchRecord) -> Result<Self, GameError> {
        let mut rules = R::default();
        if let Some(komi) = record.komi {
            rules.set_komi(komi);
        }
        let mut game = Self::replay_with(rules, &record.config, &record.actions)?;

        if let Some(outcome) = &record.outcome {
            if outcome.reason == EndReason::Resignation {
                if let Some(winner) = outcome.winner() {
                    game.resign(winner.opponent());
                }
            }
        }

        Ok(game)
    }
}
