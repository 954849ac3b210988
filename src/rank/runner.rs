//! NSGA-II rank assignment.
//!
//! [`ParetoRanker`] drives the whole pass:
//! validation → non-dominated sort → crowding distance per front → ranks.

use super::config::RankConfig;
use super::types::{Ranker, Ranking};
use crate::error::Result;
use crate::individual::Individual;
use crate::pareto::validate::validate;
use crate::pareto::{crowding_distance, sort_by_crowding, sort_indexed};

/// Ranks a population by Pareto front, then by crowding distance.
///
/// Every individual in front 0 outranks every individual in front 1, and
/// so on. Within a front, the least crowded individuals (largest crowding
/// distance) rank highest; equal distances fall back to ascending id.
///
/// Ranks are computed into a buffer and written in one final pass, so a
/// failed precondition never leaves a partially ranked population.
///
/// # Usage
///
/// ```
/// use u_pareto::individual::{Candidate, Individual, IndividualId};
/// use u_pareto::rank::{ParetoRanker, Ranker};
///
/// let mut population: Vec<_> = [(1.0, 5.0), (5.0, 1.0), (3.0, 3.0), (0.0, 0.0)]
///     .into_iter()
///     .enumerate()
///     .map(|(i, (x, y))| Candidate::new(IndividualId(i as u64), [("x", x), ("y", y)].into()))
///     .collect();
///
/// let ranking = ParetoRanker::default().rank(&mut population).unwrap();
///
/// let ranks: Vec<_> = population.iter().map(|c| c.rank().unwrap()).collect();
/// assert_eq!(ranks, vec![3, 2, 1, 0]);
/// assert_eq!(ranking.front_sizes, vec![3, 1]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ParetoRanker {
    config: RankConfig,
}

impl ParetoRanker {
    /// Creates a ranker. The configuration is used as given.
    pub fn new(config: RankConfig) -> Self {
        Self { config }
    }

    /// Creates a ranker after validating the configuration.
    pub fn try_new(config: RankConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(config))
    }

    pub fn config(&self) -> &RankConfig {
        &self.config
    }
}

impl Ranker for ParetoRanker {
    fn rank<I: Individual>(&self, population: &mut [I]) -> Result<Ranking> {
        let n = population.len();
        let index = validate(population)?;
        let sorted = sort_indexed(population, &index, &self.config);

        // Population positions, best first.
        let mut order = Vec::with_capacity(n);
        let mut front_sizes = Vec::with_capacity(sorted.front_count());
        for front in &sorted.fronts {
            let mut records = crowding_distance(population, front);
            sort_by_crowding(&mut records);
            front_sizes.push(records.len());
            order.extend(records.iter().map(|r| r.index));
        }
        debug_assert_eq!(order.len(), n);

        // The counter starts one past the best rank and is decremented
        // before use, so the best individual gets N - 1 and the worst 0.
        let mut next_rank = n;
        for &pos in &order {
            next_rank -= 1;
            population[pos].set_rank(next_rank);
        }
        debug_assert_eq!(next_rank, 0);

        tracing::debug!(
            population = n,
            fronts = front_sizes.len(),
            "population ranked"
        );

        Ok(Ranking {
            order: order.iter().map(|&pos| population[pos].id()).collect(),
            front_sizes,
        })
    }
}

/// Ranks `population` with a default [`ParetoRanker`].
///
/// See [`ParetoRanker`] for the ordering rules.
pub fn rank<I: Individual>(population: &mut [I]) -> Result<Ranking> {
    ParetoRanker::default().rank(population)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RankError;
    use crate::individual::{Candidate, IndividualId, ObjectiveResults};
    use crate::pareto::{dominates, non_dominated_sort};
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::SeedableRng;
    use std::collections::BTreeMap;

    fn population(points: &[Vec<f64>]) -> Vec<Candidate<usize>> {
        points
            .iter()
            .enumerate()
            .map(|(i, values)| {
                let results: ObjectiveResults<usize> = values.iter().copied().enumerate().collect();
                Candidate::new(IndividualId(i as u64), results)
            })
            .collect()
    }

    fn ranks(pop: &[Candidate<usize>]) -> Vec<usize> {
        pop.iter().map(|c| c.rank().unwrap()).collect()
    }

    fn ranks_by_id(pop: &[Candidate<usize>]) -> BTreeMap<IndividualId, usize> {
        pop.iter().map(|c| (c.id(), c.rank().unwrap())).collect()
    }

    // ---- Scenarios ----

    #[test]
    fn test_two_objective_scenario() {
        // A, B, C are mutually non-dominating; D is dominated by all three.
        let mut pop = population(&[
            vec![1.0, 5.0], // A
            vec![5.0, 1.0], // B
            vec![3.0, 3.0], // C
            vec![0.0, 0.0], // D
        ]);
        let ranking = rank(&mut pop).unwrap();

        // A and B are extremes (infinite distance), C is interior.
        assert_eq!(ranks(&pop), vec![3, 2, 1, 0]);
        assert_eq!(ranking.front_sizes, vec![3, 1]);
        assert_eq!(
            ranking.order,
            vec![IndividualId(0), IndividualId(1), IndividualId(2), IndividualId(3)]
        );
    }

    #[test]
    fn test_nan_individual_ranks_last() {
        let mut pop = population(&[
            vec![4.0, 1.0],
            vec![2.0, 2.0],
            vec![f64::NAN, 100.0],
            vec![1.0, 4.0],
            vec![0.0, 0.0],
        ]);
        rank(&mut pop).unwrap();
        assert_eq!(pop[2].rank(), Some(0));
    }

    #[test]
    fn test_empty_population_is_noop() {
        let mut pop: Vec<Candidate<usize>> = Vec::new();
        let ranking = rank(&mut pop).unwrap();
        assert!(ranking.is_empty());
        assert_eq!(ranking.front_count(), 0);
    }

    #[test]
    fn test_single_individual() {
        let mut pop = population(&[vec![1.0, 1.0]]);
        rank(&mut pop).unwrap();
        assert_eq!(ranks(&pop), vec![0]);
    }

    #[test]
    fn test_single_objective_degenerates_to_sorting() {
        let mut pop = population(&[vec![2.0], vec![9.0], vec![-1.0], vec![5.0]]);
        let ranking = rank(&mut pop).unwrap();
        assert_eq!(ranks(&pop), vec![1, 3, 0, 2]);
        assert_eq!(ranking.front_sizes, vec![1, 1, 1, 1]);
    }

    #[test]
    fn test_rerank_overwrites() {
        let mut pop = population(&[vec![1.0, 1.0], vec![2.0, 2.0]]);
        rank(&mut pop).unwrap();
        assert_eq!(ranks(&pop), vec![0, 1]);

        pop[0].results_mut().insert(0, 10.0);
        pop[0].results_mut().insert(1, 10.0);
        rank(&mut pop).unwrap();
        assert_eq!(ranks(&pop), vec![1, 0]);
    }

    // ---- Failure semantics ----

    #[test]
    fn test_inconsistent_objectives_leave_population_untouched() {
        let mut pop = vec![
            Candidate::new(IndividualId(0), [("a", 1.0), ("b", 2.0)].into()),
            Candidate::new(IndividualId(1), [("a", 1.0), ("c", 2.0)].into()),
        ];
        pop[0].set_rank(7);

        let err = rank(&mut pop).unwrap_err();
        assert!(matches!(err, RankError::InconsistentObjectives { .. }));
        assert_eq!(pop[0].rank(), Some(7));
        assert_eq!(pop[1].rank(), None);
    }

    #[test]
    fn test_missing_results_rejected() {
        let mut pop = vec![
            Candidate::new(IndividualId(0), [("a", 1.0)].into()),
            Candidate::new(IndividualId(1), ObjectiveResults::new()),
        ];
        assert_eq!(
            rank(&mut pop).unwrap_err(),
            RankError::MissingResults { id: IndividualId(1) }
        );
        assert!(pop.iter().all(|c| c.rank().is_none()));
    }

    #[test]
    fn test_try_new_validates_config() {
        let bad = RankConfig::default().with_parallel_threshold(0);
        assert!(ParetoRanker::try_new(bad).is_err());
        assert!(ParetoRanker::try_new(RankConfig::default()).is_ok());
    }

    #[test]
    fn test_parallel_config_same_ranks() {
        let points: Vec<Vec<f64>> = (0..60)
            .map(|i| {
                let x = i as f64;
                vec![(x * 7.0) % 11.0, (x * 5.0) % 13.0]
            })
            .collect();

        let mut sequential = population(&points);
        let mut parallel = population(&points);
        ParetoRanker::new(RankConfig::default().with_parallel(false))
            .rank(&mut sequential)
            .unwrap();
        ParetoRanker::new(RankConfig::default().with_parallel_threshold(2))
            .rank(&mut parallel)
            .unwrap();

        assert_eq!(ranks(&sequential), ranks(&parallel));
    }

    // ---- Properties ----

    fn objective_value() -> impl Strategy<Value = f64> {
        prop_oneof![
            8 => (-5i32..5).prop_map(f64::from),
            4 => -10.0f64..10.0,
            1 => Just(f64::NAN),
        ]
    }

    fn points() -> impl Strategy<Value = Vec<Vec<f64>>> {
        (1usize..4).prop_flat_map(|m| {
            prop::collection::vec(prop::collection::vec(objective_value(), m), 1..40)
        })
    }

    proptest! {
        #[test]
        fn prop_ranks_are_permutation(points in points()) {
            let mut pop = population(&points);
            rank(&mut pop).unwrap();

            let mut assigned = ranks(&pop);
            assigned.sort_unstable();
            prop_assert_eq!(assigned, (0..pop.len()).collect::<Vec<_>>());
        }

        #[test]
        fn prop_earlier_fronts_outrank_later(points in points()) {
            let mut pop = population(&points);
            rank(&mut pop).unwrap();
            let levels = non_dominated_sort(&pop).unwrap().levels;

            for i in 0..pop.len() {
                for j in 0..pop.len() {
                    if levels[i] < levels[j] {
                        prop_assert!(pop[i].rank() > pop[j].rank());
                    }
                }
            }
        }

        #[test]
        fn prop_dominance_is_respected(points in points()) {
            let mut pop = population(&points);
            rank(&mut pop).unwrap();
            let levels = non_dominated_sort(&pop).unwrap().levels;

            for i in 0..pop.len() {
                for j in 0..pop.len() {
                    if dominates(pop[i].results(), pop[j].results()) {
                        prop_assert!(!dominates(pop[j].results(), pop[i].results()));
                        prop_assert!(levels[i] < levels[j]);
                        prop_assert!(pop[i].rank() > pop[j].rank());
                    }
                }
            }
        }

        #[test]
        fn prop_independent_of_input_order(points in points(), seed in any::<u64>()) {
            let mut pop = population(&points);
            let mut shuffled = pop.clone();
            shuffled.shuffle(&mut StdRng::seed_from_u64(seed));

            let a = rank(&mut pop).unwrap();
            let b = rank(&mut shuffled).unwrap();

            prop_assert_eq!(ranks_by_id(&pop), ranks_by_id(&shuffled));
            prop_assert_eq!(a, b);
        }

        #[test]
        fn prop_rerun_is_identical(points in points()) {
            let mut pop = population(&points);
            rank(&mut pop).unwrap();
            let first = ranks(&pop);
            rank(&mut pop).unwrap();
            prop_assert_eq!(first, ranks(&pop));
        }
    }
}
