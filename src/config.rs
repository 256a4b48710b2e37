//! Sampler configuration.

use crate::error::{Error, Result};

/// Consecutive non-growing steps tolerated before a run is declared stalled.
pub const DEFAULT_MAX_STALL_ITERATIONS: usize = 50;

/// Parameters for a Metropolis-Hastings random walk sample.
///
/// Immutable once handed to a sampler; one config can drive any number of runs.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MhrwConfig {
    /// Number of distinct nodes to collect. Must not exceed the graph's node count.
    pub target_node_count: usize,
    /// Seed for the run's deterministic RNG.
    pub seed: u64,
    /// Rejection constraint exponent \(\alpha \ge 0\) applied to the degree ratio.
    ///
    /// `0.0` accepts every proposal (plain random walk); larger values reject moves
    /// toward higher-degree nodes more often.
    pub alpha: f64,
}

impl Default for MhrwConfig {
    fn default() -> Self {
        Self { target_node_count: 100, seed: 42, alpha: 1.0 }
    }
}

impl MhrwConfig {
    pub fn new(target_node_count: usize) -> Self {
        Self { target_node_count, ..Self::default() }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Checks that do not depend on the graph.
    pub fn validate(&self) -> Result<()> {
        if self.target_node_count == 0 {
            return Err(Error::InvalidConfiguration(
                "target_node_count must be positive".to_string(),
            ));
        }
        if !self.alpha.is_finite() || self.alpha < 0.0 {
            return Err(Error::InvalidConfiguration(format!(
                "alpha must be a finite non-negative number, got {}",
                self.alpha
            )));
        }
        Ok(())
    }

    /// Checks against a concrete graph size.
    pub fn validate_for(&self, node_count: usize) -> Result<()> {
        self.validate()?;
        if self.target_node_count > node_count {
            return Err(Error::InvalidConfiguration(format!(
                "target_node_count {} exceeds graph node count {}",
                self.target_node_count, node_count
            )));
        }
        Ok(())
    }
}

pub(crate) fn validate_stall_bound(max_stall_iterations: usize) -> Result<()> {
    if max_stall_iterations == 0 {
        return Err(Error::InvalidConfiguration(
            "max_stall_iterations must be positive".to_string(),
        ));
    }
    Ok(())
}
