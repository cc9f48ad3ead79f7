//! Partition-and-reduce over a categorical key.
//!
//! All three functions share one shape: a key accessor decides the
//! partition, a value accessor supplies the measure, and records with no
//! key or no measure are excluded rather than defaulted. Output is an
//! unordered [`GroupSummary`]; display ordering is the caller's concern.

use crate::core::domain::GroupSummary;
use std::collections::{HashMap, HashSet};

/// Sums `value_fn` over each partition of `records` by `key_fn`.
///
/// A record whose `key_fn` returns `None` (an unmapped category code) or
/// whose `value_fn` returns `None` (a missing measure) is skipped; no zero
/// is invented for it. With total accessors, the group values sum to
/// exactly the direct sum over `records`.
///
/// # Examples
///
/// ```
/// use dashboard_analytics::aggregate::group_sum;
///
/// let records = vec![("Spring", 10.0), ("Summer", 20.0), ("Spring", 5.0)];
/// let summary = group_sum(
///     &records,
///     |r| Some(r.0.to_string()),
///     |r| Some(r.1),
/// );
///
/// assert_eq!(summary.get("Spring"), Some(15.0));
/// assert_eq!(summary.get("Summer"), Some(20.0));
/// ```
pub fn group_sum<R>(
    records: &[R],
    key_fn: impl Fn(&R) -> Option<String>,
    value_fn: impl Fn(&R) -> Option<f64>,
) -> GroupSummary {
    let mut sums: HashMap<String, f64> = HashMap::new();

    for record in records {
        let key = match key_fn(record) {
            Some(key) => key,
            None => continue,
        };
        let value = match value_fn(record) {
            Some(value) => value,
            None => continue,
        };
        *sums.entry(key).or_insert(0.0) += value;
    }

    GroupSummary::from(sums)
}

/// Counts distinct `id_fn` values per partition of `records` by `key_fn`.
///
/// Distinctness is by string equality on the identifier. Used for the
/// "customers by gender / age group / state" views, where the same customer
/// may appear on many order lines.
pub fn group_unique_count<R>(
    records: &[R],
    key_fn: impl Fn(&R) -> Option<String>,
    id_fn: impl Fn(&R) -> String,
) -> GroupSummary {
    let mut ids: HashMap<String, HashSet<String>> = HashMap::new();

    for record in records {
        let key = match key_fn(record) {
            Some(key) => key,
            None => continue,
        };
        ids.entry(key).or_default().insert(id_fn(record));
    }

    let counts = ids
        .into_iter()
        .map(|(key, set)| (key, set.len() as f64))
        .collect::<HashMap<_, _>>();

    GroupSummary::from(counts)
}

/// Means `value_fn` over each partition of `records` by `key_fn`.
///
/// A group whose every record is missing the measure is absent from the
/// output entirely; the mean of nothing is not zero.
pub fn group_mean<R>(
    records: &[R],
    key_fn: impl Fn(&R) -> Option<String>,
    value_fn: impl Fn(&R) -> Option<f64>,
) -> GroupSummary {
    let mut accum: HashMap<String, (f64, usize)> = HashMap::new();

    for record in records {
        let key = match key_fn(record) {
            Some(key) => key,
            None => continue,
        };
        let value = match value_fn(record) {
            Some(value) => value,
            None => continue,
        };
        let entry = accum.entry(key).or_insert((0.0, 0));
        entry.0 += value;
        entry.1 += 1;
    }

    let means = accum
        .into_iter()
        .map(|(key, (sum, count))| (key, sum / count as f64))
        .collect::<HashMap<_, _>>();

    GroupSummary::from(means)
}
