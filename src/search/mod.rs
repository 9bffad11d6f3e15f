//! Computer players for every variant.
//!
//! ## Overview
//!
//! Two classical strategies share one heuristic interface:
//!
//! - **Greedy**: one-ply lookahead, best static evaluation wins
//! - **AlphaBeta**: depth-limited minimax with alpha-beta pruning, beam
//!   cuts at the root and inner nodes, and a decided-position short-circuit
//!
//! Both search the live game by placing and retracting stones, draw their
//! randomness from a seeded `GameRng`, and report `SearchStats`.
//!
//! ## Usage
//!
//! ```rust
//! use rust_gridgames::games::Gomoku;
//! use rust_gridgames::rules::Game;
//! use rust_gridgames::search::{Computer, Decision, Difficulty};
//!
//! let mut game = Game::<Gomoku>::new(15).unwrap();
//! let mut computer = Computer::from_difficulty(Difficulty::Medium);
//!
//! let side = game.to_move();
//! let decision = computer.choose(&mut game, side).unwrap();
//! assert!(matches!(decision, Decision::Place(_)));
//! ```

pub mod alphabeta;
pub mod cancel;
pub mod candidates;
pub mod computer;
pub mod config;
pub mod greedy;
pub mod heuristic;
pub mod stats;

pub use alphabeta::AlphaBeta;
pub use cancel::CancelFlag;
pub use candidates::neighborhood;
pub use computer::{Computer, Decision};
pub use config::{Difficulty, StrategyConfig, StrategyKind};
pub use greedy::Greedy;
pub use heuristic::{best_of, rank_moves, Heuristic, Ply, Score};
pub use stats::SearchStats;
