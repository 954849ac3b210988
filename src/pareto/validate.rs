//! Population preconditions shared by every ranking entry point.

use crate::error::{RankError, Result};
use crate::individual::{Individual, IndividualId};
use std::collections::BTreeMap;

/// Population positions keyed by individual id, in ascending id order.
pub(crate) type IdIndex = BTreeMap<IndividualId, usize>;

/// Checks that the population can be ranked and indexes it by id.
///
/// - every individual has at least one result,
/// - ids are unique,
/// - every individual reports the same objective set as the individual
///   with the lowest id.
///
/// An empty population is valid.
pub(crate) fn validate<I: Individual>(population: &[I]) -> Result<IdIndex> {
    check(population).inspect_err(|err| tracing::warn!("cannot rank population: {err}"))
}

fn check<I: Individual>(population: &[I]) -> Result<IdIndex> {
    let mut index = IdIndex::new();

    for (pos, individual) in population.iter().enumerate() {
        let id = individual.id();
        if individual.results().is_empty() {
            return Err(RankError::MissingResults { id });
        }
        if index.insert(id, pos).is_some() {
            return Err(RankError::DuplicateId(id));
        }
    }

    let Some(&reference) = index.values().next() else {
        return Ok(index);
    };
    let expected = population[reference].results();

    for &pos in index.values() {
        let found = population[pos].results();
        if !found.same_objectives(expected) {
            return Err(RankError::InconsistentObjectives {
                id: population[pos].id(),
                expected: expected.objective_names(),
                found: found.objective_names(),
            });
        }
    }

    Ok(index)
}
