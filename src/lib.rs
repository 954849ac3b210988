//! Multi-objective ranking for evolutionary computation.
//!
//! Given a population of evaluated individuals, each scored on one or more
//! independent objectives (all **maximized**), assigns every individual a
//! distinct rank expressing relative quality:
//!
//! - **Fast non-dominated sorting** partitions the population into Pareto
//!   fronts; earlier fronts always rank higher.
//! - **Crowding distance** orders individuals inside a front, preferring
//!   isolated ones to preserve diversity.
//!
//! Results are reproducible bit-for-bit: every tie is broken by the
//! individual's stable id, never by storage order.
//!
//! # Modules
//!
//! - [`individual`]: Ids, per-objective results, the [`Individual`](individual::Individual) trait
//! - [`pareto`]: Dominance, non-dominated sort, crowding distance
//! - [`rank`]: Rankers that drive a full pass and write ranks back
//!
//! # Example
//!
//! ```
//! use u_pareto::individual::{Candidate, IdGenerator, Individual};
//!
//! let ids = IdGenerator::new();
//! let mut population: Vec<_> = [(1.0, 5.0), (5.0, 1.0), (3.0, 3.0), (0.0, 0.0)]
//!     .into_iter()
//!     .map(|(speed, reach)| Candidate::new(ids.next_id(), [("speed", speed), ("reach", reach)].into()))
//!     .collect();
//!
//! u_pareto::rank::rank(&mut population).unwrap();
//!
//! // (0, 0) is dominated by everyone else
//! assert_eq!(population[3].rank(), Some(0));
//! ```
//!
//! # Features
//!
//! - `parallel`: pairwise dominance computed with rayon (same results)
//! - `serde`: `Serialize`/`Deserialize` for ids, results, candidates, config and reports

pub mod error;
pub mod individual;
pub mod pareto;
pub mod rank;

pub use error::{RankError, Result};
