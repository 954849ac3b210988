//! Ranking on a single shared objective.

use super::types::{Ranker, Ranking};
use crate::error::{RankError, Result};
use crate::individual::{Individual, IndividualId};
use crate::pareto::validate::validate;
use std::cmp::Ordering;

/// Ranks a population that reports exactly one objective.
///
/// Sorts by value (higher is better), NaN results last, equal values by
/// ascending id. This is the stricter alternative to
/// [`ParetoRanker`](super::ParetoRanker); on a single-objective population
/// without ties both produce the same ranks.
///
/// ```
/// use u_pareto::individual::{Candidate, Individual, IndividualId};
/// use u_pareto::rank::{Ranker, SingleObjectiveRanker};
///
/// let mut population = vec![
///     Candidate::new(IndividualId(0), [("reward", 0.5)].into()),
///     Candidate::new(IndividualId(1), [("reward", f64::NAN)].into()),
///     Candidate::new(IndividualId(2), [("reward", 2.0)].into()),
/// ];
///
/// SingleObjectiveRanker.rank(&mut population).unwrap();
///
/// let ranks: Vec<_> = population.iter().map(|c| c.rank().unwrap()).collect();
/// assert_eq!(ranks, vec![1, 0, 2]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SingleObjectiveRanker;

impl Ranker for SingleObjectiveRanker {
    fn rank<I: Individual>(&self, population: &mut [I]) -> Result<Ranking> {
        let index = validate(population)?;

        let mut entries: Vec<(usize, IndividualId, f64)> = Vec::with_capacity(index.len());
        for (&id, &pos) in &index {
            let results = population[pos].results();
            let Some((_, value)) = results.iter().next().filter(|_| results.len() == 1) else {
                let err = RankError::NotSingleObjective {
                    id,
                    count: results.len(),
                };
                tracing::warn!("cannot rank population: {err}");
                return Err(err);
            };
            entries.push((pos, id, value));
        }

        entries.sort_by(|a, b| better_first(a.2, b.2).then(a.1.cmp(&b.1)));

        let mut front_sizes: Vec<usize> = Vec::new();
        let mut previous: Option<f64> = None;
        for &(_, _, value) in &entries {
            match (previous, front_sizes.last_mut()) {
                (Some(prev), Some(size)) if better_first(prev, value) == Ordering::Equal => {
                    *size += 1;
                }
                _ => front_sizes.push(1),
            }
            previous = Some(value);
        }

        let mut next_rank = entries.len();
        for &(pos, _, _) in &entries {
            next_rank -= 1;
            population[pos].set_rank(next_rank);
        }

        tracing::debug!(population = entries.len(), "population ranked on single objective");

        Ok(Ranking {
            order: entries.iter().map(|&(_, id, _)| id).collect(),
            front_sizes,
        })
    }
}

/// Orders values best first: descending, NaN after every number.
fn better_first(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
    }
}
