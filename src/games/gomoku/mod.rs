//! Gomoku: five in a row, no captures, no passing.

pub mod eval;
pub mod rules;

pub use eval::{line_score, lines, tally, Tally, WIN_SCORE};
pub use rules::{longest_run, Gomoku, WIN_LENGTH};
