//! Individual identity.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Stable numeric identity of an individual.
///
/// Ids are totally ordered. Lower ids win ties everywhere in this crate,
/// which keeps every ordering reproducible regardless of the order in which
/// the population hands out its members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct IndividualId(pub u64);

impl IndividualId {
    /// Returns the raw id value.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for IndividualId {
    fn from(id: u64) -> Self {
        IndividualId(id)
    }
}

impl fmt::Display for IndividualId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Source of fresh [`IndividualId`]s.
///
/// Ids are strictly increasing for the lifetime of the generator and are
/// never handed out twice. The generator is `Sync`, so one instance can be
/// shared by every component that creates individuals.
///
/// ```
/// use u_pareto::individual::IdGenerator;
///
/// let ids = IdGenerator::new();
/// let a = ids.next_id();
/// let b = ids.next_id();
/// assert!(a < b);
/// ```
#[derive(Debug, Default)]
pub struct IdGenerator {
    next: AtomicU64,
}

impl IdGenerator {
    /// Creates a generator starting at id 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a generator whose first id is `first`.
    ///
    /// Used when resuming a run whose highest id is known.
    pub fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }

    /// Returns a fresh id.
    pub fn next_id(&self) -> IndividualId {
        IndividualId(self.next.fetch_add(1, Ordering::Relaxed))
    }
}
