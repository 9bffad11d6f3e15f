//! Runtime-selected engines and the match registry.
//!
//! This is the surface the orchestration layer talks to: create an engine
//! from a `GameConfig`, forward moves, passes, resignations and undos,
//! read back `GameState` snapshots and ask a `Computer` for moves.

pub mod engine;
pub mod registry;

pub use engine::Engine;
pub use registry::{MatchId, MatchRegistry};
