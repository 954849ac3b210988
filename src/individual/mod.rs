//! Data model consumed by the rankers.
//!
//! The ranking core never creates individuals. It reads an id and a set of
//! per-objective results from each one and writes back a rank.
//!
//! # Key Types
//!
//! - [`IndividualId`]: Stable numeric identity, the only key used for
//!   bookkeeping and tie-breaking
//! - [`IdGenerator`]: Hands out ids that are never reused
//! - [`ObjectiveResults`]: Per-objective result store (objectives are maximized)
//! - [`Individual`]: The trait the population's members implement
//! - [`Candidate`]: A ready-made [`Individual`]

mod id;
mod results;
mod types;

pub use id::{IdGenerator, IndividualId};
pub use results::ObjectiveResults;
pub use types::{Candidate, Individual};
