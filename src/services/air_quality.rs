//! Air-quality dashboard views.

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::aggregate::{box_stats, group_mean, mean_of, range_filter};
use crate::core::domain::{BoxStats, DateRange, GroupRow};
use crate::models::AirQualityReading;
use std::collections::BTreeMap;

/// PM2.5 readings of one station, in record order, for the trend chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationSeries {
    pub station: String,
    pub points: Vec<(NaiveDateTime, f64)>,
}

/// One CO/NO2 paired observation for the scatter view. Only readings
/// carrying both measures are emitted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PollutantPair {
    pub station: String,
    pub co: f64,
    pub no2: f64,
}

/// Wind-speed box summary for one station.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationBoxStats {
    pub station: String,
    pub stats: BoxStats,
}

/// Everything the air-quality dashboard renders for one date-range
/// selection.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AirQualityDashboard {
    /// Headline means over the filtered range; absent when no reading in
    /// range carries the measure.
    pub mean_pm25: Option<f64>,
    pub mean_no2: Option<f64>,
    pub mean_co: Option<f64>,
    /// Mean PM2.5 per station, alphabetical by station.
    pub pm25_by_station: Vec<GroupRow>,
    pub pm25_series: Vec<StationSeries>,
    pub co_no2_points: Vec<PollutantPair>,
    pub wind_by_station: Vec<StationBoxStats>,
}

/// Computes the air-quality dashboard views over the readings in `range`.
///
/// Readings are hourly but the range picker works at date resolution, so
/// the filter compares calendar days.
pub fn compute_air_quality_dashboard(
    records: &[AirQualityReading],
    range: &DateRange<NaiveDate>,
) -> AirQualityDashboard {
    let filtered = range_filter(records, range, |r| r.date());
    log::debug!(
        "air-quality dashboard: {} of {} readings in range",
        filtered.len(),
        records.len()
    );

    let pm25_by_station = group_mean(
        &filtered,
        |r| Some(r.station.clone()),
        |r| r.pm25,
    )
    .by_key();

    // Per-station groupings below keep record order within a station and
    // emit stations alphabetically.
    let mut series: BTreeMap<String, Vec<(NaiveDateTime, f64)>> = BTreeMap::new();
    let mut wind: BTreeMap<String, Vec<f64>> = BTreeMap::new();
    let mut co_no2_points = Vec::new();

    for reading in &filtered {
        if let Some(pm25) = reading.pm25 {
            series
                .entry(reading.station.clone())
                .or_default()
                .push((reading.datetime, pm25));
        }
        if let Some(speed) = reading.wind_speed {
            wind.entry(reading.station.clone()).or_default().push(speed);
        }
        if let (Some(co), Some(no2)) = (reading.co, reading.no2) {
            co_no2_points.push(PollutantPair {
                station: reading.station.clone(),
                co,
                no2,
            });
        }
    }

    AirQualityDashboard {
        mean_pm25: mean_of(&filtered, |r| r.pm25),
        mean_no2: mean_of(&filtered, |r| r.no2),
        mean_co: mean_of(&filtered, |r| r.co),
        pm25_by_station,
        pm25_series: series
            .into_iter()
            .map(|(station, points)| StationSeries { station, points })
            .collect(),
        co_no2_points,
        wind_by_station: wind
            .into_iter()
            .filter_map(|(station, speeds)| {
                box_stats(&speeds).map(|stats| StationBoxStats { station, stats })
            })
            .collect(),
    }
}
