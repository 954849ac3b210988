//! Error types for ranking.
//!
//! Every error is a precondition violation detected before any individual
//! is touched. NaN results and degenerate fronts are not errors.

use crate::individual::IndividualId;
use thiserror::Error;

/// Errors returned by the rankers and the non-dominated sort.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RankError {
    /// The individual carries no evaluation results at all.
    #[error("individual {id} has no evaluation results")]
    MissingResults { id: IndividualId },

    /// The individual reports a different objective set than the rest of
    /// the population.
    #[error("individual {id} reports objectives {found:?}, expected {expected:?}")]
    InconsistentObjectives {
        id: IndividualId,
        expected: Vec<String>,
        found: Vec<String>,
    },

    /// Two individuals in the same population share an id.
    #[error("duplicate individual id {0}")]
    DuplicateId(IndividualId),

    /// The single-objective ranker was given an individual with more than
    /// one objective.
    #[error("individual {id} reports {count} objectives, single-objective ranking needs exactly 1")]
    NotSingleObjective { id: IndividualId, count: usize },

    /// Invalid ranker configuration.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, RankError>;
