//! Search statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Statistics collected during one move choice.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Tree nodes visited (root children and below).
    pub nodes: u64,

    /// Static evaluations performed, ranking included.
    pub evaluations: u64,

    /// Branches cut by alpha-beta.
    pub cutoffs: u64,

    /// Root candidates searched after the beam.
    pub root_moves: u32,

    /// Deepest ply reached.
    pub max_ply: u16,

    /// Total time spent searching (microseconds).
    pub time_us: u64,

    /// The cancel flag stopped the search early.
    pub cancelled: bool,

    /// The node budget stopped the search early.
    pub budget_exhausted: bool,
}

impl SearchStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Did the search stop before finishing?
    #[must_use]
    pub fn interrupted(&self) -> bool {
        self.cancelled || self.budget_exhausted
    }

    #[must_use]
    pub fn nodes_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.nodes as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }

    /// Share of visited nodes that ended in a cut-off.
    #[must_use]
    pub fn cutoff_rate(&self) -> f64 {
        if self.nodes == 0 {
            0.0
        } else {
            self.cutoffs as f64 / self.nodes as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_default() {
        let stats = SearchStats::new();
        assert_eq!(stats.nodes, 0);
        assert!(!stats.interrupted());
    }

    #[test]
    fn test_stats_rates() {
        let mut stats = SearchStats::new();
        stats.nodes = 1000;
        stats.cutoffs = 250;
        stats.time_us = 500_000;

        assert_eq!(stats.nodes_per_second(), 2000.0);
        assert_eq!(stats.cutoff_rate(), 0.25);
    }

    #[test]
    fn test_stats_reset() {
        let mut stats = SearchStats::new();
        stats.nodes = 100;
        stats.cancelled = true;

        stats.reset();

        assert_eq!(stats, SearchStats::default());
    }

    #[test]
    fn test_stats_serialization() {
        let mut stats = SearchStats::new();
        stats.evaluations = 42;
        stats.budget_exhausted = true;

        let json = serde_json::to_string(&stats).unwrap();
        let deserialized: SearchStats = serde_json::from_str(&json).unwrap();

        assert_eq!(stats, deserialized);
    }
}
