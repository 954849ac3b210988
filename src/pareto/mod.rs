//! Pareto-based multi-objective building blocks (NSGA-II).
//!
//! Domain-agnostic algorithms over [`Individual`](crate::individual::Individual)s
//! whose objectives are all **maximized**.
//!
//! # Algorithms
//!
//! - [`dominates`]: Pareto dominance with a defined policy for NaN results
//! - [`non_dominated_sort`]: Fast non-dominated sorting (Deb et al., 2002)
//! - [`crowding_distance`]: Crowding distance assignment for diversity preservation
//!
//! Every ordering produced here breaks ties by ascending
//! [`IndividualId`](crate::individual::IndividualId), so results are
//! reproducible regardless of the order in which a population is stored.
//!
//! # References
//!
//! - Deb et al. (2002), "A Fast and Elitist Multiobjective Genetic Algorithm: NSGA-II"
//! - IEEE Transactions on Evolutionary Computation, 6(2), 182-197

mod crowding;
mod dominance;
mod sort;
pub(crate) mod validate;

pub use crowding::{crowding_distance, sort_by_crowding, CrowdingDistance, CrowdingRecord};
pub use dominance::{compare, dominates, Dominance};
pub(crate) use sort::sort_indexed;
pub use sort::{non_dominated_sort, non_dominated_sort_with, NondominatedSortResult};
