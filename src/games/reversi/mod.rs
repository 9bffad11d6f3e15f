//! Reversi: flips, forced passes, disc-count scoring.

pub mod eval;
pub mod rules;

pub use rules::{disc_outcome, flips, is_legal, terminal_reason, Reversi, OPENING};
