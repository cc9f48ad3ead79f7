//! Recency/frequency/monetary customer summaries.

use crate::aggregate::stats;
use crate::core::domain::{RfmRow, RfmSummary};
use chrono::NaiveDate;
use std::collections::{HashMap, HashSet};

struct CustomerAccumulator {
    latest: NaiveDate,
    orders: HashSet<String>,
    monetary: f64,
}

/// Computes one RFM row per distinct customer in `records`.
///
/// - recency: whole days between the customer's latest record and the
///   maximum timestamp across *all* of `records`. The batch maximum, not
///   the wall clock, is the "now" reference, so the metric is
///   range-dependent and deterministic. Always >= 0.
/// - frequency: count of distinct `order_fn` values. Always >= 1 for an
///   emitted row.
/// - monetary: sum of `price_fn` over the customer's records.
///
/// Rows are sorted by customer id. Empty input produces an empty summary
/// with every average absent.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use dashboard_analytics::aggregate::compute_rfm;
///
/// let d = |s: &str| NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap();
/// // (customer, order, date, price)
/// let records = vec![
///     ("c1", "o1", d("2023-01-01"), 5.0),
///     ("c1", "o2", d("2023-01-10"), 7.0),
/// ];
///
/// let summary = compute_rfm(
///     &records,
///     |r| r.0.to_string(),
///     |r| r.1.to_string(),
///     |r| r.2,
///     |r| r.3,
/// );
///
/// let row = &summary.rows[0];
/// assert_eq!(row.recency_days, 0);
/// assert_eq!(row.frequency, 2);
/// assert_eq!(row.monetary, 12.0);
/// ```
pub fn compute_rfm<R>(
    records: &[R],
    customer_fn: impl Fn(&R) -> String,
    order_fn: impl Fn(&R) -> String,
    date_fn: impl Fn(&R) -> NaiveDate,
    price_fn: impl Fn(&R) -> f64,
) -> RfmSummary {
    // The recency reference is the batch maximum, never the wall clock.
    let reference = match records.iter().map(&date_fn).max() {
        Some(max) => max,
        None => return RfmSummary::default(),
    };

    let mut customers: HashMap<String, CustomerAccumulator> = HashMap::new();

    for record in records {
        let date = date_fn(record);
        let entry = customers
            .entry(customer_fn(record))
            .or_insert_with(|| CustomerAccumulator {
                latest: date,
                orders: HashSet::new(),
                monetary: 0.0,
            });

        entry.latest = entry.latest.max(date);
        entry.orders.insert(order_fn(record));
        entry.monetary += price_fn(record);
    }

    let mut rows: Vec<RfmRow> = customers
        .into_iter()
        .map(|(customer_id, acc)| RfmRow {
            customer_id,
            recency_days: reference.signed_duration_since(acc.latest).num_days(),
            frequency: acc.orders.len(),
            monetary: acc.monetary,
        })
        .collect();
    rows.sort_by(|a, b| a.customer_id.cmp(&b.customer_id));

    let recencies: Vec<f64> = rows.iter().map(|r| r.recency_days as f64).collect();
    let frequencies: Vec<f64> = rows.iter().map(|r| r.frequency as f64).collect();
    let monetaries: Vec<f64> = rows.iter().map(|r| r.monetary).collect();

    RfmSummary {
        avg_recency: stats::mean(&recencies),
        avg_frequency: stats::mean(&frequencies),
        avg_monetary: stats::mean(&monetaries),
        rows,
    }
}
