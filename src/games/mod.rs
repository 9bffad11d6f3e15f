//! Variant implementations.
//!
//! Each variant provides a `RulesEngine` (legality, effects, termination)
//! and a `Heuristic` (evaluation, candidates) on the same unit-like type.

pub mod go;
pub mod gomoku;
pub mod reversi;

pub use go::Go;
pub use gomoku::Gomoku;
pub use reversi::Reversi;
