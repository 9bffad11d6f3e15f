//! Core types: sides, board, actions, state, errors, RNG, configuration.
//!
//! Everything here is variant-agnostic. Rules engines interpret the board;
//! nothing in this module knows what a capture or a flip is.

pub mod action;
pub mod board;
pub mod config;
pub mod error;
pub mod rng;
pub mod side;
pub mod state;

pub use action::{Action, ActionRecord, Move};
pub use board::{Board, Pos, COMPASS, ORTHOGONAL};
pub use config::{GameConfig, GameVariant, MAX_BOARD_SIZE, MIN_BOARD_SIZE, REVERSI_BOARD_SIZE};
pub use error::{GameError, IllegalReason};
pub use rng::{GameRng, GameRngState};
pub use side::{Cell, Side, SideMap};
pub use state::{EndReason, FinalScore, GameResult, GameState, Outcome, Snapshot};
