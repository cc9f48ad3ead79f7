//! Sparse daily resampling.
//!
//! Buckets records into calendar days and applies a list of named
//! aggregations per bucket. Only days with at least one record are emitted
//! (the source dashboards never invent zero-filled days), and each such day
//! appears exactly once, in ascending order.

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};

enum Reducer<R> {
    Sum(Box<dyn Fn(&R) -> Option<f64>>),
    CountDistinct(Box<dyn Fn(&R) -> String>),
}

/// One named output column of a daily resample.
pub struct NamedAggregate<R> {
    name: String,
    reducer: Reducer<R>,
}

impl<R> NamedAggregate<R> {
    /// Sums a measure per day; records missing the measure are excluded
    /// from that day's sum.
    pub fn sum(name: &str, value_fn: impl Fn(&R) -> Option<f64> + 'static) -> Self {
        Self {
            name: name.to_string(),
            reducer: Reducer::Sum(Box::new(value_fn)),
        }
    }

    /// Counts distinct identifier values per day.
    pub fn count_distinct(name: &str, id_fn: impl Fn(&R) -> String + 'static) -> Self {
        Self {
            name: name.to_string(),
            reducer: Reducer::CountDistinct(Box::new(id_fn)),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// One emitted bucket. `values` parallels the `aggregates` slice passed to
/// [`resample_daily`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyRow {
    pub date: NaiveDate,
    pub values: Vec<f64>,
}

enum Accumulator {
    Sum(f64),
    Distinct(HashSet<String>),
}

impl Accumulator {
    fn finish(self) -> f64 {
        match self {
            Accumulator::Sum(total) => total,
            Accumulator::Distinct(set) => set.len() as f64,
        }
    }
}

/// Buckets `records` by the calendar day of `date_fn` and reduces each
/// bucket with every aggregate in `aggregates`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use dashboard_analytics::aggregate::{resample_daily, NamedAggregate};
///
/// let d = |s: &str| NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap();
/// // (date, order id, price)
/// let records = vec![
///     (d("2023-01-01"), "o1", 5.0),
///     (d("2023-01-01"), "o1", 3.0),
///     (d("2023-01-03"), "o2", 7.0),
/// ];
///
/// let rows = resample_daily(
///     &records,
///     |r| r.0,
///     &[
///         NamedAggregate::count_distinct("order_count", |r: &(NaiveDate, &str, f64)| r.1.to_string()),
///         NamedAggregate::sum("revenue", |r: &(NaiveDate, &str, f64)| Some(r.2)),
///     ],
/// );
///
/// // 2023-01-02 has no records and is not emitted.
/// assert_eq!(rows.len(), 2);
/// assert_eq!(rows[0].values, vec![1.0, 8.0]);
/// assert_eq!(rows[1].values, vec![1.0, 7.0]);
/// ```
pub fn resample_daily<R>(
    records: &[R],
    date_fn: impl Fn(&R) -> NaiveDate,
    aggregates: &[NamedAggregate<R>],
) -> Vec<DailyRow> {
    let mut buckets: BTreeMap<NaiveDate, Vec<Accumulator>> = BTreeMap::new();

    for record in records {
        let day = date_fn(record);
        let accumulators = buckets.entry(day).or_insert_with(|| {
            aggregates
                .iter()
                .map(|agg| match agg.reducer {
                    Reducer::Sum(_) => Accumulator::Sum(0.0),
                    Reducer::CountDistinct(_) => Accumulator::Distinct(HashSet::new()),
                })
                .collect()
        });

        for (aggregate, accumulator) in aggregates.iter().zip(accumulators.iter_mut()) {
            match (&aggregate.reducer, accumulator) {
                (Reducer::Sum(value_fn), Accumulator::Sum(total)) => {
                    if let Some(value) = value_fn(record) {
                        *total += value;
                    }
                }
                (Reducer::CountDistinct(id_fn), Accumulator::Distinct(set)) => {
                    set.insert(id_fn(record));
                }
                // Accumulators are built from the same aggregate list.
                _ => unreachable!(),
            }
        }
    }

    buckets
        .into_iter()
        .map(|(date, accumulators)| DailyRow {
            date,
            values: accumulators.into_iter().map(Accumulator::finish).collect(),
        })
        .collect()
}
