//! Rules engine trait and the generic match wrapper.
//!
//! Variants implement `RulesEngine` to define:
//! - How a placement changes the board (and how to undo it)
//! - Which placements and passes are legal
//! - When the game ends and who won
//!
//! `Game<R>` drives a match through those rules and never interprets
//! variant-specific concepts directly.

pub mod engine;
pub mod game;
pub mod record;

pub use engine::{check_vacant, PassRule, Placement, RulesEngine, Touched};
pub use game::Game;
pub use record::MatchRecord;
