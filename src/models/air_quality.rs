//! Hourly air-quality readings.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// One hourly reading from a monitoring station.
///
/// The PRSA-style source has gaps: every pollutant measure is optional, and
/// a missing measure excludes the reading from sums and means for that
/// measure instead of being coerced to zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirQualityReading {
    pub datetime: NaiveDateTime,
    pub station: String,
    pub pm25: Option<f64>,
    pub no2: Option<f64>,
    pub co: Option<f64>,
    pub wind_speed: Option<f64>,
}

impl AirQualityReading {
    /// Calendar day of the reading; the dashboard's range picker works at
    /// date resolution even though readings are hourly.
    pub fn date(&self) -> NaiveDate {
        self.datetime.date()
    }
}
