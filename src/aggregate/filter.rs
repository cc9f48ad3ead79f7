//! Date-range filtering.

use crate::core::domain::DateRange;

/// Returns the records whose timestamp lies within `range`, inclusive on
/// both ends, preserving original relative order.
///
/// An inverted range (`start > end`) yields an empty vector, the permissive
/// range-picker contract. An empty result is not an error anywhere
/// downstream.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use dashboard_analytics::aggregate::range_filter;
/// use dashboard_analytics::core::domain::DateRange;
///
/// let d = |s: &str| NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap();
/// let records = vec![(d("2023-01-01"), 10), (d("2023-01-02"), 20)];
///
/// let range = DateRange::new(d("2023-01-01"), d("2023-01-01"));
/// let filtered = range_filter(&records, &range, |r| r.0);
/// assert_eq!(filtered, vec![(d("2023-01-01"), 10)]);
/// ```
pub fn range_filter<R, T>(
    records: &[R],
    range: &DateRange<T>,
    date_fn: impl Fn(&R) -> T,
) -> Vec<R>
where
    R: Clone,
    T: PartialOrd + Copy,
{
    records
        .iter()
        .filter(|r| range.contains(date_fn(r)))
        .cloned()
        .collect()
}
