//! Bike-sharing dashboard views.

use chrono::NaiveDate;
use serde::Serialize;

use crate::aggregate::{group_sum, range_filter, stats};
use crate::core::domain::{DateRange, GroupRow};
use crate::core::labels::LabelTable;
use crate::models::{BikeDailyRecord, BikeHourlyRecord};
use crate::services::label_or_warn;

/// Season code table: 1 = Spring .. 4 = Winter.
pub fn season_labels() -> LabelTable {
    LabelTable::new(&[(1, "Spring"), (2, "Summer"), (3, "Fall"), (4, "Winter")])
}

/// Weather situation code table.
pub fn weather_labels() -> LabelTable {
    LabelTable::new(&[
        (1, "Clear"),
        (2, "Mist + Cloudy"),
        (3, "Light Snow / Rain"),
        (4, "Heavy Rain"),
    ])
}

/// Working-day flag table: 0 = Holiday, 1 = Working Day.
pub fn working_day_labels() -> LabelTable {
    LabelTable::new(&[(0, "Holiday"), (1, "Working Day")])
}

/// One point of the daily rental trend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyRentalPoint {
    pub date: NaiveDate,
    pub count: u32,
}

/// One point of the hourly rental profile.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HourlyRentalPoint {
    pub hour: u32,
    pub count: u32,
}

/// Everything the bike dashboard renders for one date-range selection.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BikeDashboard {
    pub total_rentals: u64,
    /// Mean rentals per recorded day; absent when the range is empty.
    pub mean_daily_rentals: Option<f64>,
    pub daily_rentals: Vec<DailyRentalPoint>,
    /// Rental sums in season display order.
    pub by_season: Vec<GroupRow>,
    /// Rental sums in weather display order.
    pub by_weather: Vec<GroupRow>,
    /// Holiday vs working day rental sums.
    pub by_working_day: Vec<GroupRow>,
}

/// Computes the bike dashboard views over the records in `range`.
///
/// Custom label tables (e.g. from TOML configuration) can be supplied with
/// [`compute_bike_dashboard_with_labels`]; this entry point uses the
/// dataset's standard code tables.
pub fn compute_bike_dashboard(
    records: &[BikeDailyRecord],
    range: &DateRange<NaiveDate>,
) -> BikeDashboard {
    compute_bike_dashboard_with_labels(
        records,
        range,
        &season_labels(),
        &weather_labels(),
        &working_day_labels(),
    )
}

pub fn compute_bike_dashboard_with_labels(
    records: &[BikeDailyRecord],
    range: &DateRange<NaiveDate>,
    seasons: &LabelTable,
    weather: &LabelTable,
    working_day: &LabelTable,
) -> BikeDashboard {
    let filtered = range_filter(records, range, |r| r.date);
    log::debug!("bike dashboard: {} of {} records in range", filtered.len(), records.len());

    let counts: Vec<f64> = filtered.iter().map(|r| f64::from(r.count)).collect();

    let by_season = group_sum(
        &filtered,
        |r| label_or_warn(seasons, "season", r.season),
        |r| Some(f64::from(r.count)),
    );
    let by_weather = group_sum(
        &filtered,
        |r| label_or_warn(weather, "weather", r.weather),
        |r| Some(f64::from(r.count)),
    );
    let by_working_day = group_sum(
        &filtered,
        |r| label_or_warn(working_day, "working day", i64::from(r.working_day)),
        |r| Some(f64::from(r.count)),
    );

    BikeDashboard {
        total_rentals: filtered.iter().map(|r| u64::from(r.count)).sum(),
        mean_daily_rentals: stats::mean(&counts),
        daily_rentals: filtered
            .iter()
            .map(|r| DailyRentalPoint {
                date: r.date,
                count: r.count,
            })
            .collect(),
        by_season: by_season.in_order(seasons.display_order()),
        by_weather: by_weather.in_order(weather.display_order()),
        by_working_day: by_working_day.in_order(working_day.display_order()),
    }
}

/// Rentals per hour of day for one chosen date, from the hourly table.
/// Hours with no record are not emitted.
pub fn hourly_profile(records: &[BikeHourlyRecord], date: NaiveDate) -> Vec<HourlyRentalPoint> {
    let mut points: Vec<HourlyRentalPoint> = records
        .iter()
        .filter(|r| r.date == date)
        .map(|r| HourlyRentalPoint {
            hour: r.hour,
            count: r.count,
        })
        .collect();
    points.sort_by_key(|p| p.hour);
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn record(day: &str, season: i64, weather: i64, working_day: bool, count: u32) -> BikeDailyRecord {
        BikeDailyRecord {
            date: date(day),
            season,
            weather,
            working_day,
            count,
        }
    }

    #[test]
    fn aggregates_filtered_range() {
        let records = vec![
            record("2023-01-01", 1, 1, true, 10),
            record("2023-01-02", 2, 2, false, 20),
            record("2023-01-03", 2, 1, true, 30),
        ];
        let range = DateRange::new(date("2023-01-01"), date("2023-01-02"));

        let dashboard = compute_bike_dashboard(&records, &range);

        assert_eq!(dashboard.total_rentals, 30);
        assert_eq!(dashboard.mean_daily_rentals, Some(15.0));
        assert_eq!(dashboard.daily_rentals.len(), 2);

        assert_eq!(
            dashboard.by_season,
            vec![
                GroupRow {
                    key: "Spring".into(),
                    value: 10.0
                },
                GroupRow {
                    key: "Summer".into(),
                    value: 20.0
                },
            ]
        );
        assert_eq!(dashboard.by_working_day.len(), 2);
        assert_eq!(dashboard.by_working_day[0].key, "Holiday");
        assert_eq!(dashboard.by_working_day[0].value, 20.0);
    }

    #[test]
    fn single_day_scenario() {
        let records = vec![
            record("2023-01-01", 1, 1, true, 10),
            record("2023-01-02", 2, 1, true, 20),
        ];
        let range = DateRange::new(date("2023-01-01"), date("2023-01-01"));

        let dashboard = compute_bike_dashboard(&records, &range);

        assert_eq!(dashboard.by_season.len(), 1);
        assert_eq!(dashboard.by_season[0].key, "Spring");
        assert_eq!(dashboard.by_season[0].value, 10.0);
    }

    #[test]
    fn unmapped_code_is_excluded() {
        let records = vec![
            record("2023-01-01", 1, 1, true, 10),
            record("2023-01-02", 9, 1, true, 20),
        ];
        let range = DateRange::new(date("2023-01-01"), date("2023-01-02"));

        let dashboard = compute_bike_dashboard(&records, &range);

        // Code 9 has no season label; its record is absent from the season
        // view but still counted in the totals.
        assert_eq!(dashboard.by_season.len(), 1);
        assert_eq!(dashboard.total_rentals, 30);
    }

    #[test]
    fn empty_range_produces_empty_views() {
        let records = vec![record("2023-01-01", 1, 1, true, 10)];
        let range = DateRange::new(date("2023-02-01"), date("2023-01-01"));

        let dashboard = compute_bike_dashboard(&records, &range);

        assert_eq!(dashboard.total_rentals, 0);
        assert_eq!(dashboard.mean_daily_rentals, None);
        assert!(dashboard.daily_rentals.is_empty());
        assert!(dashboard.by_season.is_empty());
    }

    #[test]
    fn configured_label_tables_replace_defaults() {
        use crate::core::labels::LabelsConfig;

        let config = LabelsConfig::from_toml_str(
            r#"
            [tables.season]
            labels = { 1 = "Wet", 2 = "Dry" }
            order = ["Dry", "Wet"]
            "#,
        )
        .unwrap();

        let records = vec![
            record("2023-01-01", 1, 1, true, 10),
            record("2023-01-02", 2, 1, true, 20),
        ];
        let range = DateRange::new(date("2023-01-01"), date("2023-01-02"));

        let dashboard = compute_bike_dashboard_with_labels(
            &records,
            &range,
            config.table("season").unwrap(),
            &weather_labels(),
            &working_day_labels(),
        );

        assert_eq!(dashboard.by_season[0].key, "Dry");
        assert_eq!(dashboard.by_season[0].value, 20.0);
        assert_eq!(dashboard.by_season[1].key, "Wet");
    }

    #[test]
    fn hourly_profile_for_one_date() {
        let records = vec![
            BikeHourlyRecord {
                date: date("2023-01-01"),
                hour: 8,
                count: 12,
            },
            BikeHourlyRecord {
                date: date("2023-01-02"),
                hour: 8,
                count: 99,
            },
            BikeHourlyRecord {
                date: date("2023-01-01"),
                hour: 7,
                count: 5,
            },
        ];

        let profile = hourly_profile(&records, date("2023-01-01"));
        assert_eq!(profile.len(), 2);
        assert_eq!(profile[0].hour, 7);
        assert_eq!(profile[1].count, 12);
    }
}
