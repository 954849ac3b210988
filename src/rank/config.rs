//! Ranking configuration.
//!
//! [`RankConfig`] holds the parameters that control how a ranking pass is
//! executed. None of them change the resulting ranks.

use crate::error::{RankError, Result};

/// Configuration for the rankers.
///
/// # Defaults
///
/// ```
/// use u_pareto::rank::RankConfig;
///
/// let config = RankConfig::default();
/// assert!(config.parallel);
/// assert_eq!(config.parallel_threshold, 256);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_pareto::rank::RankConfig;
///
/// let config = RankConfig::default()
///     .with_parallel(true)
///     .with_parallel_threshold(64);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RankConfig {
    /// Whether to compute pairwise dominance in parallel using rayon.
    ///
    /// Only effective when the crate is built with the `parallel` feature.
    /// Parallel and sequential runs produce identical ranks.
    pub parallel: bool,

    /// Smallest population for which the parallel path is taken.
    ///
    /// Below this size the thread hand-off costs more than the O(n²)
    /// comparison it spreads out.
    pub parallel_threshold: usize,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            parallel_threshold: 256,
        }
    }
}

impl RankConfig {
    /// Enables or disables parallel dominance computation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the minimum population size for the parallel path.
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Validates the configuration.
    ///
    /// Returns [`RankError::InvalidConfig`] if any parameter is invalid.
    pub fn validate(&self) -> Result<()> {
        if self.parallel_threshold < 2 {
            return Err(RankError::InvalidConfig(
                "parallel_threshold must be at least 2".into(),
            ));
        }
        Ok(())
    }
}
