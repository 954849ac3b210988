//! Crowding distance assignment for diversity preservation.

use crate::individual::{Individual, IndividualId};
use std::cmp::Ordering;

/// Crowding distance of one individual within its front.
///
/// Boundary individuals are [`Infinite`](CrowdingDistance::Infinite). The
/// infinite state is a tag, not `f64::INFINITY`, so no later finite
/// contribution can turn it back into a number.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CrowdingDistance {
    /// Sum of normalized neighbor gaps accumulated so far.
    Finite(f64),
    /// Extreme on at least one objective.
    Infinite,
}

impl Default for CrowdingDistance {
    fn default() -> Self {
        CrowdingDistance::ZERO
    }
}

impl CrowdingDistance {
    pub const ZERO: CrowdingDistance = CrowdingDistance::Finite(0.0);

    /// Adds one objective's contribution. Saturates at `Infinite`.
    pub fn add(self, contribution: f64) -> Self {
        match self {
            CrowdingDistance::Finite(d) => CrowdingDistance::Finite(d + contribution),
            CrowdingDistance::Infinite => CrowdingDistance::Infinite,
        }
    }

    pub fn is_infinite(self) -> bool {
        matches!(self, CrowdingDistance::Infinite)
    }

    /// The distance as `f64` (`Infinite` maps to `f64::INFINITY`).
    pub fn value(self) -> f64 {
        match self {
            CrowdingDistance::Finite(d) => d,
            CrowdingDistance::Infinite => f64::INFINITY,
        }
    }

    /// Total order: `Infinite` is greatest, finite values compare with
    /// [`f64::total_cmp`].
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (CrowdingDistance::Infinite, CrowdingDistance::Infinite) => Ordering::Equal,
            (CrowdingDistance::Infinite, CrowdingDistance::Finite(_)) => Ordering::Greater,
            (CrowdingDistance::Finite(_), CrowdingDistance::Infinite) => Ordering::Less,
            (CrowdingDistance::Finite(a), CrowdingDistance::Finite(b)) => a.total_cmp(b),
        }
    }
}

/// Crowding distance of one front member.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrowdingRecord {
    /// Position in the population slice.
    pub index: usize,
    pub id: IndividualId,
    pub distance: CrowdingDistance,
}

/// Crowding distance assignment.
///
/// Computes, for each member of `front` (population positions), how
/// isolated it is in objective space. Higher distance means more isolated,
/// hence more valuable for diversity.
///
/// # Algorithm (Deb et al., 2002)
///
/// For each objective, in canonical objective order:
/// 1. Sort members ascending by value (ties by ascending id)
/// 2. The first and last members become [`CrowdingDistance::Infinite`]
/// 3. If the value range is zero (or not finite), the objective adds nothing
/// 4. Interior members add `(next - prev) / (max - min)`
///
/// Records are returned in ascending id order. Use [`sort_by_crowding`]
/// to order them for ranking.
///
/// # Complexity
///
/// O(m * n * log n) where m = number of objectives, n = front size
///
/// # Example
///
/// ```
/// use u_pareto::individual::{Candidate, IndividualId};
/// use u_pareto::pareto::crowding_distance;
///
/// let front: Vec<_> = [(1.0, 5.0), (3.0, 3.0), (5.0, 1.0)]
///     .into_iter()
///     .enumerate()
///     .map(|(i, (x, y))| Candidate::new(IndividualId(i as u64), [("x", x), ("y", y)].into()))
///     .collect();
///
/// let records = crowding_distance(&front, &[0, 1, 2]);
///
/// // Boundary solutions are infinitely far from their neighbors
/// assert!(records[0].distance.is_infinite());
/// assert!(records[2].distance.is_infinite());
/// // Interior solution: (5 - 1) / 4 on each objective
/// assert_eq!(records[1].distance.value(), 2.0);
/// ```
pub fn crowding_distance<I: Individual>(population: &[I], front: &[usize]) -> Vec<CrowdingRecord> {
    let mut records: Vec<CrowdingRecord> = front
        .iter()
        .map(|&index| CrowdingRecord {
            index,
            id: population[index].id(),
            distance: CrowdingDistance::ZERO,
        })
        .collect();

    let Some(first) = records.first() else {
        return records;
    };
    let objectives: Vec<I::Objective> = population[first.index]
        .results()
        .objectives()
        .cloned()
        .collect();
    let last = records.len() - 1;

    for objective in &objectives {
        let value = |r: &CrowdingRecord| {
            population[r.index]
                .results()
                .get(objective)
                .unwrap_or(f64::NAN)
        };

        records.sort_by(|a, b| value(a).total_cmp(&value(b)).then(a.id.cmp(&b.id)));

        records[0].distance = CrowdingDistance::Infinite;
        records[last].distance = CrowdingDistance::Infinite;

        let range = value(&records[last]) - value(&records[0]);
        if !(range.is_finite() && range > 0.0) {
            continue;
        }

        for i in 1..last {
            let gap = value(&records[i + 1]) - value(&records[i - 1]);
            records[i].distance = records[i].distance.add(gap / range);
        }
    }

    records.sort_by_key(|r| r.id);
    records
}

/// Sorts records best first: descending distance, ties by ascending id.
///
/// The id tie-break is part of the comparator, so the order is fully
/// determined even among equal (or equally infinite) distances.
pub fn sort_by_crowding(records: &mut [CrowdingRecord]) {
    records.sort_unstable_by(|a, b| {
        b.distance
            .total_cmp(&a.distance)
            .then_with(|| a.id.cmp(&b.id))
    });
}

// ============================================================================
// Tests
// ============================================================================
