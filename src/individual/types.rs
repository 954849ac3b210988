//! The [`Individual`] trait and a ready-made implementation.

use super::id::IndividualId;
use super::results::ObjectiveResults;
use std::fmt::Debug;

/// A member of an evaluated population.
///
/// The population owns its individuals. A ranker only reads
/// [`id`](Individual::id) and [`results`](Individual::results), and writes
/// the final position through [`set_rank`](Individual::set_rank), exactly
/// once per ranking call.
///
/// `Send + Sync` lets the dominance computation fan out over rayon when the
/// `parallel` feature is enabled.
///
/// # Implementing
///
/// ```ignore
/// struct Robot {
///     id: IndividualId,
///     genome: Vec<f64>,
///     results: ObjectiveResults<Task>,
///     rank: Option<usize>,
/// }
///
/// impl Individual for Robot {
///     type Objective = Task;
///     fn id(&self) -> IndividualId { self.id }
///     fn results(&self) -> &ObjectiveResults<Task> { &self.results }
///     fn rank(&self) -> Option<usize> { self.rank }
///     fn set_rank(&mut self, rank: usize) { self.rank = Some(rank); }
/// }
/// ```
pub trait Individual: Send + Sync {
    /// Identifier of one fitness dimension.
    type Objective: Ord + Clone + Debug + Send + Sync;

    /// Stable identity, unique within a population.
    fn id(&self) -> IndividualId;

    /// Evaluation results, one per objective.
    fn results(&self) -> &ObjectiveResults<Self::Objective>;

    /// The rank assigned by the last ranking pass, if any.
    ///
    /// Higher is better; ranks of a population are `0..N`.
    fn rank(&self) -> Option<usize>;

    /// Stores the rank. Overwrites any previous value.
    fn set_rank(&mut self, rank: usize);
}

/// A plain individual: id, results and rank.
///
/// Useful when the genome lives elsewhere (e.g. keyed by the same id), and
/// in tests.
///
/// ```
/// use u_pareto::individual::{Candidate, Individual, IndividualId};
///
/// let c = Candidate::new(IndividualId(3), [("reach", 1.5), ("energy", -2.0)].into());
/// assert_eq!(c.id(), IndividualId(3));
/// assert_eq!(c.rank(), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Candidate<O: Ord> {
    id: IndividualId,
    results: ObjectiveResults<O>,
    rank: Option<usize>,
}

impl<O: Ord> Candidate<O> {
    /// Creates an unranked candidate.
    pub fn new(id: IndividualId, results: ObjectiveResults<O>) -> Self {
        Self {
            id,
            results,
            rank: None,
        }
    }

    /// Mutable access to the results, for re-evaluation between passes.
    pub fn results_mut(&mut self) -> &mut ObjectiveResults<O> {
        &mut self.results
    }
}

impl<O: Ord + Clone + Debug + Send + Sync> Individual for Candidate<O> {
    type Objective = O;

    fn id(&self) -> IndividualId {
        self.id
    }

    fn results(&self) -> &ObjectiveResults<O> {
        &self.results
    }

    fn rank(&self) -> Option<usize> {
        self.rank
    }

    fn set_rank(&mut self, rank: usize) {
        self.rank = Some(rank);
    }
}
