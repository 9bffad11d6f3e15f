//! Simplified Go: captures, suicide rule, double-pass scoring.

pub mod eval;
pub mod rules;
pub mod scoring;

pub use eval::atari_stones;
pub use rules::{group_at, groups, liberties, Go, Group, KOMI};
pub use scoring::{final_outcome, final_score, territory};
