//! The [`Ranker`] trait and the [`Ranking`] report.

use crate::error::Result;
use crate::individual::{Individual, IndividualId};

/// Assigns every individual of a population a distinct rank.
///
/// After a successful call the ranks of a population of size N are exactly
/// `0..N`, higher is better. On error no individual has been touched.
///
/// The `&mut` borrow makes the population read-only for everything else
/// while it is being ranked.
pub trait Ranker: Send + Sync {
    /// Ranks `population` in place and reports the resulting order.
    fn rank<I: Individual>(&self, population: &mut [I]) -> Result<Ranking>;
}

/// Outcome of a ranking pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ranking {
    /// Individual ids, best first. `order[0]` received rank `N - 1`.
    pub order: Vec<IndividualId>,

    /// Size of each front, front 0 first.
    ///
    /// The single-objective ranker reports one front per distinct value.
    pub front_sizes: Vec<usize>,
}

impl Ranking {
    /// Number of ranked individuals.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn front_count(&self) -> usize {
        self.front_sizes.len()
    }

    /// The id that received the highest rank.
    pub fn best(&self) -> Option<IndividualId> {
        self.order.first().copied()
    }

    /// The rank assigned to `id`, if it was part of the pass.
    pub fn rank_of(&self, id: IndividualId) -> Option<usize> {
        self.order
            .iter()
            .position(|&other| other == id)
            .map(|pos| self.order.len() - 1 - pos)
    }
}
