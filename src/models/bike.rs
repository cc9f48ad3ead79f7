//! Bike-sharing rental records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One day of rental activity.
///
/// `season` and `weather` are the dataset's raw category codes; the bike
/// dashboard service maps them through its label tables at aggregation time
/// so the record stays a faithful row of the source table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BikeDailyRecord {
    pub date: NaiveDate,
    /// Season code, 1 = Spring .. 4 = Winter.
    pub season: i64,
    /// Weather situation code, 1 = Clear .. 4 = Heavy Rain.
    pub weather: i64,
    pub working_day: bool,
    /// Total rentals that day.
    pub count: u32,
}

/// One hour of rental activity, used for the hourly-profile view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BikeHourlyRecord {
    pub date: NaiveDate,
    /// Hour of day, 0..=23.
    pub hour: u32,
    pub count: u32,
}
