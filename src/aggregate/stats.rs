//! Summary statistics with explicit empty-input semantics.
//!
//! Every moment of an empty value set is absent (`None`), never zero, NaN
//! or a panic; the presentation layer turns absence into a "no data" state.

use crate::core::domain::{BoxStats, SummaryStats};

/// Arithmetic mean, or `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Mean of a measure over records, excluding records where the measure is
/// missing. `None` when no record carries the measure.
pub fn mean_of<R>(records: &[R], value_fn: impl Fn(&R) -> Option<f64>) -> Option<f64> {
    let values: Vec<f64> = records.iter().filter_map(|r| value_fn(r)).collect();
    mean(&values)
}

/// Computes count, sum and the optional moments for a set of values.
pub fn summarize(values: &[f64]) -> SummaryStats {
    if values.is_empty() {
        return SummaryStats::default();
    }

    let count = values.len();
    let sum: f64 = values.iter().sum();
    let mean = sum / count as f64;

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let median = if count % 2 == 0 {
        (sorted[count / 2 - 1] + sorted[count / 2]) / 2.0
    } else {
        sorted[count / 2]
    };

    let variance = values
        .iter()
        .map(|v| {
            let diff = v - mean;
            diff * diff
        })
        .sum::<f64>()
        / count as f64;

    SummaryStats {
        count,
        sum,
        mean: Some(mean),
        median: Some(median),
        std_dev: Some(variance.sqrt()),
        min: sorted.first().copied(),
        max: sorted.last().copied(),
    }
}

/// Five-number summary for a box plot, or `None` for an empty slice.
/// Quartiles use linear interpolation between order statistics.
pub fn box_stats(values: &[f64]) -> Option<BoxStats> {
    if values.is_empty() {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    Some(BoxStats {
        min: sorted[0],
        q1: quantile(&sorted, 0.25),
        median: quantile(&sorted, 0.5),
        q3: quantile(&sorted, 0.75),
        max: sorted[sorted.len() - 1],
    })
}

/// `sorted` must be non-empty and ascending.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let position = (sorted.len() - 1) as f64 * q;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    if lower == upper {
        return sorted[lower];
    }
    let weight = position - lower as f64;
    sorted[lower] * (1.0 - weight) + sorted[upper] * weight
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summarize_known_values() {
        let stats = summarize(&[1.0, 2.0, 3.0, 4.0, 5.0]);

        assert_eq!(stats.count, 5);
        assert_eq!(stats.sum, 15.0);
        assert_eq!(stats.mean, Some(3.0));
        assert_eq!(stats.median, Some(3.0));
        assert_eq!(stats.min, Some(1.0));
        assert_eq!(stats.max, Some(5.0));
        assert!((stats.std_dev.unwrap() - std::f64::consts::SQRT_2).abs() < 1e-9);
    }

    #[test]
    fn even_count_median_interpolates() {
        let stats = summarize(&[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(stats.median, Some(2.5));
    }

    #[test]
    fn empty_input_is_absent_not_zero() {
        let stats = summarize(&[]);
        assert_eq!(stats.count, 0);
        assert_eq!(stats.sum, 0.0);
        assert_eq!(stats.mean, None);
        assert_eq!(stats.median, None);
        assert_eq!(stats.std_dev, None);
        assert_eq!(stats.min, None);
        assert_eq!(stats.max, None);

        assert_eq!(mean(&[]), None);
        assert_eq!(box_stats(&[]), None);
    }

    #[test]
    fn mean_of_skips_missing_measures() {
        let records = vec![Some(2.0), None, Some(4.0)];
        assert_eq!(mean_of(&records, |r| *r), Some(3.0));

        let all_missing: Vec<Option<f64>> = vec![None, None];
        assert_eq!(mean_of(&all_missing, |r| *r), None);
    }

    #[test]
    fn box_stats_quartiles() {
        let stats = box_stats(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        assert_eq!(stats.min, 1.0);
        assert_eq!(stats.q1, 2.0);
        assert_eq!(stats.median, 3.0);
        assert_eq!(stats.q3, 4.0);
        assert_eq!(stats.max, 5.0);
    }
}
