//! # rust-gridgames
//!
//! Rule engines and computer players for three board games on a square
//! grid: Gomoku (five in a row), a simplified Go (captures, suicide, area
//! scoring with komi) and Reversi.
//!
//! ## Design Principles
//!
//! 1. **One match wrapper**: `Game<R>` owns turn order, history, undo,
//!    resignation and the state view. Variants only supply rules.
//!
//! 2. **Rejected means untouched**: every failed action returns a
//!    `GameError` and leaves the match exactly as it was.
//!
//! 3. **Search on the live board**: strategies place and retract stones
//!    in place. History is never written during search.
//!
//! ## Architecture
//!
//! - **Persistent history**: snapshots live in an `im::Vector`, so the
//!   state view clones in O(1).
//!
//! - **Seeded randomness**: every random draw (evaluation jitter, tie
//!   breaks) comes from a per-strategy `GameRng`.
//!
//! ## Modules
//!
//! - `core`: sides, board, actions, state, errors, RNG, configuration
//! - `rules`: `RulesEngine` trait, `Game<R>` and match records
//! - `games`: Gomoku, Go and Reversi
//! - `search`: heuristics, greedy and alpha-beta strategies
//! - `arena`: runtime-selected engines and the match registry

pub mod arena;
pub mod core;
pub mod games;
pub mod rules;
pub mod search;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, Board, Cell, EndReason, GameConfig, GameError, GameResult, GameRng,
    GameRngState, GameState, GameVariant, Outcome, Pos, Side, SideMap,
};

pub use crate::rules::{Game, MatchRecord, PassRule, Placement, RulesEngine};

pub use crate::games::{Go, Gomoku, Reversi};

pub use crate::search::{
    AlphaBeta, CancelFlag, Computer, Decision, Difficulty, Greedy, Heuristic, SearchStats,
    StrategyConfig, StrategyKind,
};

pub use crate::arena::{Engine, MatchId, MatchRegistry};
