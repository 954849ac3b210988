//! Fast non-dominated sorting (Deb et al., 2002).

use super::dominance::dominates;
use super::validate::{validate, IdIndex};
use crate::error::Result;
use crate::individual::Individual;
use crate::rank::RankConfig;

/// Result of non-dominated sorting.
///
/// Indices refer to positions in the sorted population slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NondominatedSortResult {
    /// Front index for each population position (0 = non-dominated).
    pub levels: Vec<usize>,

    /// Population positions grouped by front: `fronts[0]` is the Pareto
    /// front. Members of a front are listed in ascending id order.
    pub fronts: Vec<Vec<usize>>,
}

impl NondominatedSortResult {
    fn empty() -> Self {
        Self {
            levels: Vec::new(),
            fronts: Vec::new(),
        }
    }

    /// Number of fronts.
    pub fn front_count(&self) -> usize {
        self.fronts.len()
    }
}

/// Domination bookkeeping for one individual.
struct Node {
    /// Position in the population slice.
    position: usize,
    /// Nodes this individual dominates.
    dominates: Vec<usize>,
}

/// Fast non-dominated sorting.
///
/// Partitions the population into fronts: front 0 holds the individuals no
/// one dominates, front 1 those dominated only by front 0, and so on. All
/// objectives are **maximized**; NaN results follow the rules of
/// [`dominates`].
///
/// # Algorithm (Deb et al., 2002)
///
/// 1. For every ordered pair `(p, q)`, record whether `p` dominates `q`
/// 2. Individuals dominated by no other form front 0
/// 3. Removing a front decrements the counters of everything it
///    dominates; counters reaching zero form the next front
///
/// Bookkeeping is keyed by [`IndividualId`](crate::individual::IndividualId),
/// so the result does not depend on the order of the slice.
///
/// # Complexity
///
/// O(m * n²) where m = number of objectives, n = number of individuals
///
/// # Errors
///
/// Fails if an individual has no results, ids repeat, or objective sets
/// differ. An empty population yields zero fronts.
///
/// # Example
///
/// ```
/// use u_pareto::individual::{Candidate, IndividualId};
/// use u_pareto::pareto::non_dominated_sort;
///
/// let population: Vec<_> = [(1.0, 5.0), (5.0, 1.0), (3.0, 3.0), (0.0, 0.0)]
///     .into_iter()
///     .enumerate()
///     .map(|(i, (x, y))| Candidate::new(IndividualId(i as u64), [("x", x), ("y", y)].into()))
///     .collect();
///
/// let result = non_dominated_sort(&population).unwrap();
///
/// assert_eq!(result.fronts, vec![vec![0, 1, 2], vec![3]]);
/// assert_eq!(result.levels, vec![0, 0, 0, 1]);
/// ```
pub fn non_dominated_sort<I: Individual>(population: &[I]) -> Result<NondominatedSortResult> {
    non_dominated_sort_with(population, &RankConfig::default())
}

/// [`non_dominated_sort`] with explicit configuration.
pub fn non_dominated_sort_with<I: Individual>(
    population: &[I],
    config: &RankConfig,
) -> Result<NondominatedSortResult> {
    let index = validate(population)?;
    Ok(sort_indexed(population, &index, config))
}

/// Sorts an already validated population.
pub(crate) fn sort_indexed<I: Individual>(
    population: &[I],
    index: &IdIndex,
    config: &RankConfig,
) -> NondominatedSortResult {
    let n = population.len();
    if n == 0 {
        return NondominatedSortResult::empty();
    }

    // Node k is the individual with the k-th smallest id.
    let order: Vec<usize> = index.values().copied().collect();
    let nodes: Vec<Node> = dominated_sets(population, &order, config)
        .into_iter()
        .zip(&order)
        .map(|(dominates, &position)| Node {
            position,
            dominates,
        })
        .collect();

    // How many not-yet-assigned individuals dominate each node.
    let mut dominated_by = vec![0usize; n];
    for node in &nodes {
        for &q in &node.dominates {
            dominated_by[q] += 1;
        }
    }

    let mut levels = vec![0usize; n];
    let mut fronts: Vec<Vec<usize>> = Vec::new();
    let mut current: Vec<usize> = (0..n).filter(|&k| dominated_by[k] == 0).collect();

    while !current.is_empty() {
        let mut next = Vec::new();
        for &p in &current {
            for &q in &nodes[p].dominates {
                dominated_by[q] -= 1;
                if dominated_by[q] == 0 {
                    next.push(q);
                }
            }
        }
        next.sort_unstable();

        let level = fronts.len();
        let members: Vec<usize> = current.iter().map(|&k| nodes[k].position).collect();
        for &position in &members {
            levels[position] = level;
        }
        tracing::trace!(level, size = members.len(), "front built");
        fronts.push(members);
        current = next;
    }

    debug_assert_eq!(
        fronts.iter().map(Vec::len).sum::<usize>(),
        n,
        "fronts must partition the population"
    );

    NondominatedSortResult { levels, fronts }
}

/// For each node (ascending id order), the nodes it dominates.
#[cfg_attr(not(feature = "parallel"), allow(unused_variables))]
fn dominated_sets<I: Individual>(
    population: &[I],
    order: &[usize],
    config: &RankConfig,
) -> Vec<Vec<usize>> {
    let row = |p: usize| -> Vec<usize> {
        let a = population[order[p]].results();
        (0..order.len())
            .filter(|&q| q != p && dominates(a, population[order[q]].results()))
            .collect()
    };

    #[cfg(feature = "parallel")]
    if config.parallel && order.len() >= config.parallel_threshold {
        use rayon::prelude::*;
        return (0..order.len()).into_par_iter().map(row).collect();
    }

    (0..order.len()).map(row).collect()
}

// ============================================================================
// Tests
// ============================================================================
