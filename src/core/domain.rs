//! Domain models for the dashboard aggregation pipeline.
//!
//! This module provides the data structures every dashboard shares: the
//! closed date interval records are filtered against, the unordered
//! key-to-value summaries produced by grouping, the per-customer RFM rows,
//! and summary statistics with explicit empty-input semantics.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A closed interval `[start, end]` over a timestamp domain.
///
/// The type parameter fixes the resolution: a `DateRange<NaiveDate>` cannot
/// be used to filter date-time records, so mixing resolutions is rejected at
/// compile time. `start > end` is representable on purpose (a range picker
/// mid-edit produces it) and selects nothing rather than failing.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use dashboard_analytics::core::domain::DateRange;
///
/// let d = |s: &str| NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap();
/// let range = DateRange::new(d("2023-01-01"), d("2023-01-31"));
///
/// assert!(range.contains(d("2023-01-15")));
/// assert!(range.contains(d("2023-01-31")));
/// assert!(!range.contains(d("2023-02-01")));
///
/// let inverted = DateRange::new(d("2023-02-01"), d("2023-01-01"));
/// assert!(inverted.selects_nothing());
/// assert!(!inverted.contains(d("2023-01-15")));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange<T> {
    pub start: T,
    pub end: T,
}

impl<T: PartialOrd + Copy> DateRange<T> {
    /// Creates a new closed interval. `start > end` is allowed and yields a
    /// range that contains no point.
    pub fn new(start: T, end: T) -> Self {
        Self { start, end }
    }

    /// Returns `true` if `t` lies within `[start, end]` inclusive.
    pub fn contains(&self, t: T) -> bool {
        self.start <= t && t <= self.end
    }

    /// Returns `true` if the bounds are inverted and no point can match.
    pub fn selects_nothing(&self) -> bool {
        self.start > self.end
    }
}

/// One exported row of a [`GroupSummary`]: a display key and its aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupRow {
    pub key: String,
    pub value: f64,
}

/// An unordered mapping from a categorical key to an aggregated value.
///
/// Produced by the grouping functions in [`crate::aggregate::group`]. The
/// mapping itself carries no order; callers export `(key, value)` rows in
/// whatever order their chart needs: by value, or by a fixed label order
/// supplied explicitly (age groups are Youth/Adults/Seniors, not
/// alphabetical).
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use dashboard_analytics::core::domain::GroupSummary;
///
/// let summary = GroupSummary::from(HashMap::from([
///     ("Adults".to_string(), 30.0),
///     ("Youth".to_string(), 12.0),
///     ("Seniors".to_string(), 5.0),
/// ]));
///
/// assert_eq!(summary.total(), 47.0);
/// assert_eq!(summary.by_value_desc()[0].key, "Adults");
///
/// let ordered = summary.in_order(&["Youth", "Adults", "Seniors"]);
/// assert_eq!(ordered[0].key, "Youth");
/// assert_eq!(ordered[2].value, 5.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GroupSummary {
    entries: HashMap<String, f64>,
}

impl GroupSummary {
    /// Creates an empty summary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the aggregate for `key`, if the group is present.
    pub fn get(&self, key: &str) -> Option<f64> {
        self.entries.get(key).copied()
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all group values.
    pub fn total(&self) -> f64 {
        self.entries.values().sum()
    }

    /// Rows sorted by value, largest first. Ties break on the key so the
    /// output is deterministic.
    pub fn by_value_desc(&self) -> Vec<GroupRow> {
        let mut rows = self.rows();
        rows.sort_by(|a, b| {
            b.value
                .partial_cmp(&a.value)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.key.cmp(&b.key))
        });
        rows
    }

    /// Rows sorted by value, smallest first.
    pub fn by_value_asc(&self) -> Vec<GroupRow> {
        let mut rows = self.rows();
        rows.sort_by(|a, b| {
            a.value
                .partial_cmp(&b.value)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.key.cmp(&b.key))
        });
        rows
    }

    /// Rows sorted alphabetically by key.
    pub fn by_key(&self) -> Vec<GroupRow> {
        let mut rows = self.rows();
        rows.sort_by(|a, b| a.key.cmp(&b.key));
        rows
    }

    /// Rows in a caller-supplied fixed order. Keys absent from the summary
    /// are skipped; keys present in the summary but missing from `order` are
    /// not emitted.
    pub fn in_order<S: AsRef<str>>(&self, order: &[S]) -> Vec<GroupRow> {
        order
            .iter()
            .filter_map(|key| {
                self.get(key.as_ref()).map(|value| GroupRow {
                    key: key.as_ref().to_string(),
                    value,
                })
            })
            .collect()
    }

    fn rows(&self) -> Vec<GroupRow> {
        self.entries
            .iter()
            .map(|(key, value)| GroupRow {
                key: key.clone(),
                value: *value,
            })
            .collect()
    }
}

impl From<HashMap<String, f64>> for GroupSummary {
    fn from(entries: HashMap<String, f64>) -> Self {
        Self { entries }
    }
}

/// Recency/frequency/monetary attributes for one customer.
///
/// Recency is measured in whole days against the maximum timestamp of the
/// filtered set the row was computed from, not against the wall clock, so
/// identical inputs always produce identical rows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RfmRow {
    pub customer_id: String,
    /// Days since the customer's latest record, relative to the batch
    /// maximum. Always >= 0.
    pub recency_days: i64,
    /// Count of distinct order identifiers. Always >= 1 for an emitted row.
    pub frequency: usize,
    /// Sum of the price measure over the customer's records.
    pub monetary: f64,
}

/// Per-customer RFM rows plus the averages the dashboard headlines show.
///
/// Empty input is not an error: `rows` is empty and every average is
/// `None`, the explicit "absent" marker the presentation layer renders as a
/// no-data state.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RfmSummary {
    pub rows: Vec<RfmRow>,
    pub avg_recency: Option<f64>,
    pub avg_frequency: Option<f64>,
    pub avg_monetary: Option<f64>,
}

impl RfmSummary {
    /// The `n` most recently active customers (smallest recency first).
    pub fn top_by_recency(&self, n: usize) -> Vec<RfmRow> {
        let mut rows = self.rows.clone();
        rows.sort_by(|a, b| {
            a.recency_days
                .cmp(&b.recency_days)
                .then_with(|| a.customer_id.cmp(&b.customer_id))
        });
        rows.truncate(n);
        rows
    }

    /// The `n` customers with the most distinct orders.
    pub fn top_by_frequency(&self, n: usize) -> Vec<RfmRow> {
        let mut rows = self.rows.clone();
        rows.sort_by(|a, b| {
            b.frequency
                .cmp(&a.frequency)
                .then_with(|| a.customer_id.cmp(&b.customer_id))
        });
        rows.truncate(n);
        rows
    }

    /// The `n` customers with the largest total spend.
    pub fn top_by_monetary(&self, n: usize) -> Vec<RfmRow> {
        let mut rows = self.rows.clone();
        rows.sort_by(|a, b| {
            b.monetary
                .partial_cmp(&a.monetary)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.customer_id.cmp(&b.customer_id))
        });
        rows.truncate(n);
        rows
    }
}

/// Summary statistics over a set of values.
///
/// Every moment is `Option`-al: an empty input produces `count == 0`,
/// `sum == 0.0` and `None` everywhere else. A mean of nothing is absent,
/// never zero and never NaN.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct SummaryStats {
    pub count: usize,
    pub sum: f64,
    pub mean: Option<f64>,
    pub median: Option<f64>,
    pub std_dev: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

/// Five-number summary backing a box plot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoxStats {
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn range_contains_is_inclusive() {
        let range = DateRange::new(date("2023-01-01"), date("2023-01-31"));
        assert!(range.contains(date("2023-01-01")));
        assert!(range.contains(date("2023-01-31")));
        assert!(!range.contains(date("2022-12-31")));
        assert!(!range.contains(date("2023-02-01")));
    }

    #[test]
    fn inverted_range_selects_nothing() {
        let range = DateRange::new(date("2023-02-01"), date("2023-01-01"));
        assert!(range.selects_nothing());
        assert!(!range.contains(date("2023-01-15")));
        assert!(!range.contains(date("2023-02-01")));
    }

    #[test]
    fn group_summary_orderings() {
        let summary = GroupSummary::from(HashMap::from([
            ("b".to_string(), 2.0),
            ("a".to_string(), 5.0),
            ("c".to_string(), 2.0),
        ]));

        let desc = summary.by_value_desc();
        assert_eq!(desc[0].key, "a");
        // Equal values fall back to key order.
        assert_eq!(desc[1].key, "b");
        assert_eq!(desc[2].key, "c");

        let asc = summary.by_value_asc();
        assert_eq!(asc[0].key, "b");
        assert_eq!(asc[2].key, "a");

        assert_eq!(summary.total(), 9.0);
    }

    #[test]
    fn in_order_skips_absent_keys() {
        let summary = GroupSummary::from(HashMap::from([
            ("Youth".to_string(), 1.0),
            ("Seniors".to_string(), 3.0),
        ]));

        let rows = summary.in_order(&["Youth", "Adults", "Seniors"]);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].key, "Youth");
        assert_eq!(rows[1].key, "Seniors");
    }

    #[test]
    fn rfm_top_rankings() {
        let summary = RfmSummary {
            rows: vec![
                RfmRow {
                    customer_id: "c1".into(),
                    recency_days: 9,
                    frequency: 4,
                    monetary: 10.0,
                },
                RfmRow {
                    customer_id: "c2".into(),
                    recency_days: 0,
                    frequency: 1,
                    monetary: 99.0,
                },
                RfmRow {
                    customer_id: "c3".into(),
                    recency_days: 3,
                    frequency: 7,
                    monetary: 50.0,
                },
            ],
            avg_recency: Some(4.0),
            avg_frequency: Some(4.0),
            avg_monetary: Some(53.0),
        };

        assert_eq!(summary.top_by_recency(1)[0].customer_id, "c2");
        assert_eq!(summary.top_by_frequency(1)[0].customer_id, "c3");
        assert_eq!(summary.top_by_monetary(2)[0].customer_id, "c2");
        assert_eq!(summary.top_by_monetary(2)[1].customer_id, "c3");
    }
}
