//! Strategy configuration parameters.

use serde::{Deserialize, Serialize};

use super::heuristic::Score;

/// Which search a computer player runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StrategyKind {
    /// One-ply lookahead over the root candidates.
    Greedy,
    /// Depth-limited minimax with alpha-beta pruning.
    AlphaBeta,
}

/// Strategy configuration parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StrategyConfig {
    pub kind: StrategyKind,

    /// Search depth in plies (alpha-beta only).
    /// Depths 0 and 1 both reduce to a one-ply search.
    pub depth: u32,

    /// Root candidates kept after one-ply ranking.
    pub root_beam: usize,

    /// Candidates kept at inner nodes when there are more than this many.
    pub inner_beam: usize,

    /// Static evaluations beyond this magnitude are treated as decided
    /// and not searched further.
    pub terminal_threshold: Score,

    /// Random seed for jitter and tie-breaking.
    /// Same seed produces the same choices.
    pub seed: u64,

    /// Add bounded noise to static evaluations.
    pub jitter: bool,

    /// Stop searching after this many nodes (None = unlimited).
    pub max_nodes: Option<u64>,
}

impl Default for StrategyConfig {
    fn default() -> Self {
        Self {
            kind: StrategyKind::AlphaBeta,
            depth: 2,
            root_beam: 15,
            inner_beam: 10,
            terminal_threshold: 5_000_000.0,
            seed: 42,
            jitter: true,
            max_nodes: None,
        }
    }
}

impl StrategyConfig {
    /// One-ply greedy player.
    #[must_use]
    pub fn greedy() -> Self {
        Self::default().with_kind(StrategyKind::Greedy)
    }

    /// Alpha-beta player searching `depth` plies.
    #[must_use]
    pub fn alpha_beta(depth: u32) -> Self {
        Self::default().with_depth(depth)
    }

    pub fn with_kind(mut self, kind: StrategyKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    pub fn with_root_beam(mut self, beam: usize) -> Self {
        self.root_beam = beam;
        self
    }

    pub fn with_inner_beam(mut self, beam: usize) -> Self {
        self.inner_beam = beam;
        self
    }

    pub fn with_terminal_threshold(mut self, threshold: Score) -> Self {
        self.terminal_threshold = threshold;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_jitter(mut self, jitter: bool) -> Self {
        self.jitter = jitter;
        self
    }

    pub fn with_max_nodes(mut self, max_nodes: u64) -> Self {
        self.max_nodes = Some(max_nodes);
        self
    }
}

/// Named strength tiers offered to players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Expert,
}

impl Difficulty {
    /// The strategy this tier plays with.
    #[must_use]
    pub fn config(self) -> StrategyConfig {
        match self {
            Difficulty::Easy => StrategyConfig::greedy(),
            Difficulty::Medium => StrategyConfig::alpha_beta(2),
            Difficulty::Hard => StrategyConfig::alpha_beta(3),
            Difficulty::Expert => StrategyConfig::alpha_beta(4),
        }
    }
}
