//! Pareto dominance between two result sets.

use crate::individual::ObjectiveResults;

/// Outcome of comparing two result sets in both directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dominance {
    /// Left dominates right.
    Left,
    /// Right dominates left.
    Right,
    /// Neither dominates the other.
    Neither,
}

/// Returns `true` if `a` Pareto-dominates `b`.
///
/// All objectives are **maximized**. The rules, in order:
///
/// 1. If `a` has any NaN result, `a` dominates nothing.
/// 2. Otherwise, if `b` has any NaN result, `a` dominates `b`.
/// 3. Otherwise `a` dominates `b` iff `a` is no worse on every objective
///    and strictly better on at least one.
///
/// A failed evaluation therefore ranks below every completed one, and two
/// failed evaluations never dominate each other.
///
/// Both sets are expected to cover the same objectives. An objective
/// missing from `b` is read as NaN.
///
/// # Example
///
/// ```
/// use u_pareto::individual::ObjectiveResults;
/// use u_pareto::pareto::dominates;
///
/// let a = ObjectiveResults::from([("x", 3.0), ("y", 3.0)]);
/// let b = ObjectiveResults::from([("x", 3.0), ("y", 1.0)]);
/// let failed = ObjectiveResults::from([("x", 9.0), ("y", f64::NAN)]);
///
/// assert!(dominates(&a, &b));
/// assert!(!dominates(&b, &a));
/// assert!(dominates(&b, &failed));
/// assert!(!dominates(&failed, &b));
/// ```
pub fn dominates<O: Ord>(a: &ObjectiveResults<O>, b: &ObjectiveResults<O>) -> bool {
    if a.has_nan() {
        return false;
    }
    if b.has_nan() || a.objectives().any(|o| b.get(o).is_none()) {
        return true;
    }

    let mut better_in_some = false;
    for (objective, va) in a.iter() {
        let vb = b.get(objective).unwrap_or(f64::NAN);
        if va < vb {
            return false;
        }
        if va > vb {
            better_in_some = true;
        }
    }

    better_in_some
}

/// Compares two result sets for Pareto dominance in both directions.
pub fn compare<O: Ord>(a: &ObjectiveResults<O>, b: &ObjectiveResults<O>) -> Dominance {
    if dominates(a, b) {
        Dominance::Left
    } else if dominates(b, a) {
        Dominance::Right
    } else {
        Dominance::Neither
    }
}
