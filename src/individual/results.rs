//! Per-objective evaluation results.

use std::collections::btree_map::{self, BTreeMap};
use std::fmt::Debug;

/// Evaluation results of one individual, keyed by objective.
///
/// All objectives are **maximized**: higher values are better. A NaN value
/// marks a failed or undefined evaluation and ranks below any number.
///
/// Objectives are kept in their `Ord` order, so every loop over them (and
/// every floating-point sum across them) runs in the same order.
///
/// ```
/// use u_pareto::individual::ObjectiveResults;
///
/// let results = ObjectiveResults::new()
///     .with("distance", 12.5)
///     .with("speed", 3.0);
///
/// assert_eq!(results.get(&"speed"), Some(3.0));
/// assert_eq!(results.len(), 2);
/// assert!(!results.has_nan());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ObjectiveResults<O: Ord> {
    values: BTreeMap<O, f64>,
}

impl<O: Ord> Default for ObjectiveResults<O> {
    fn default() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }
}

impl<O: Ord> ObjectiveResults<O> {
    /// Creates an empty result set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a result, builder style.
    pub fn with(mut self, objective: O, value: f64) -> Self {
        self.values.insert(objective, value);
        self
    }

    /// Records a result, returning the previous value for that objective.
    pub fn insert(&mut self, objective: O, value: f64) -> Option<f64> {
        self.values.insert(objective, value)
    }

    /// Returns the result for `objective`, if one was recorded.
    pub fn get(&self, objective: &O) -> Option<f64> {
        self.values.get(objective).copied()
    }

    /// Number of objectives with a recorded result.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over the objectives in their canonical order.
    pub fn objectives(&self) -> btree_map::Keys<'_, O, f64> {
        self.values.keys()
    }

    /// Iterates over `(objective, value)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (&O, f64)> + '_ {
        self.values.iter().map(|(o, &v)| (o, v))
    }

    /// Returns `true` if any recorded result is NaN.
    pub fn has_nan(&self) -> bool {
        self.values.values().any(|v| v.is_nan())
    }

    /// Returns `true` if both result sets cover exactly the same objectives.
    pub fn same_objectives(&self, other: &Self) -> bool {
        self.values.len() == other.values.len() && self.values.keys().eq(other.values.keys())
    }
}

impl<O: Ord + Debug> ObjectiveResults<O> {
    /// Renders the objective names for error messages.
    pub(crate) fn objective_names(&self) -> Vec<String> {
        self.values.keys().map(|o| format!("{o:?}")).collect()
    }
}

impl<O: Ord> FromIterator<(O, f64)> for ObjectiveResults<O> {
    fn from_iter<T: IntoIterator<Item = (O, f64)>>(iter: T) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl<O: Ord, const N: usize> From<[(O, f64); N]> for ObjectiveResults<O> {
    fn from(pairs: [(O, f64); N]) -> Self {
        pairs.into_iter().collect()
    }
}
