//! Rank assignment.
//!
//! Turns an evaluated population into a total order: every individual
//! receives a distinct rank in `0..N`, higher is better. Downstream
//! selection works on these ranks alone.
//!
//! # Key Types
//!
//! - [`Ranker`]: The seam a generational loop calls
//! - [`ParetoRanker`]: NSGA-II ranking (front, then crowding distance)
//! - [`SingleObjectiveRanker`]: Plain sort on one shared objective
//! - [`RankConfig`]: Execution parameters (parallelism)
//! - [`Ranking`]: Order and front sizes of a finished pass
//!
//! # References
//!
//! - Deb et al. (2002), *A Fast and Elitist Multiobjective GA: NSGA-II*

mod config;
mod runner;
mod single;
mod types;

pub use config::RankConfig;
pub use runner::{rank, ParetoRanker};
pub use single::SingleObjectiveRanker;
pub use types::{Ranker, Ranking};
