//! CSV parsing via polars.
//!
//! Each dataset gets a `parse_*_csv` function that reads the file into a
//! DataFrame, casts columns to the expected types (CSV inference may pick
//! i64 for a price column with no decimal points, or i64 for an id), and
//! extracts typed records column-wise. Required fields and timestamps fail
//! fast; optional pollutant measures stay `None` where the cell is null.

use chrono::{NaiveDate, NaiveDateTime};
use polars::prelude::*;
use std::path::Path;

use crate::models::{AirQualityReading, BikeDailyRecord, BikeHourlyRecord, OrderRecord};
use crate::parsing::error::{ParseError, ParseResult};

/// Expected column types for one dataset's CSV layout.
struct CsvSchema {
    string_columns: &'static [&'static str],
    float_columns: &'static [&'static str],
    int_columns: &'static [&'static str],
}

/// Parse a CSV file and cast the listed columns to their expected types.
/// Columns absent from the file are left for the extractors to report.
fn read_csv(path: &Path, schema: &CsvSchema) -> ParseResult<DataFrame> {
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(path.into()))?
        .finish()?;

    let column_names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|s| s.to_string())
        .collect();

    let mut lazy_df = df.lazy();

    for name in schema.string_columns {
        if column_names.iter().any(|c| c == name) {
            lazy_df = lazy_df.with_column(col(*name).cast(DataType::String));
        }
    }

    for name in schema.int_columns {
        if column_names.iter().any(|c| c == name) {
            lazy_df = lazy_df.with_column(col(*name).cast(DataType::Int64));
        }
    }

    for name in schema.float_columns {
        if column_names.iter().any(|c| c == name) {
            lazy_df = lazy_df.with_column(
                when(col(*name).is_not_null())
                    .then(col(*name).cast(DataType::Float64))
                    .otherwise(lit(NULL).cast(DataType::Float64))
                    .alias(*name),
            );
        }
    }

    Ok(lazy_df.collect()?)
}

fn column<'a>(df: &'a DataFrame, name: &str) -> ParseResult<&'a Column> {
    df.column(name)
        .map_err(|_| ParseError::MissingColumn(name.to_string()))
}

fn parse_date(value: &str, row: usize) -> ParseResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| ParseError::InvalidTimestamp {
        row,
        value: value.to_string(),
    })
}

fn required_str(values: &StringChunked, row: usize, name: &str) -> ParseResult<String> {
    values
        .get(row)
        .map(str::to_string)
        .ok_or_else(|| ParseError::InvalidValue {
            row,
            column: name.to_string(),
        })
}

fn required_f64(values: &Float64Chunked, row: usize, name: &str) -> ParseResult<f64> {
    values.get(row).ok_or_else(|| ParseError::InvalidValue {
        row,
        column: name.to_string(),
    })
}

fn required_i64(values: &Int64Chunked, row: usize, name: &str) -> ParseResult<i64> {
    values.get(row).ok_or_else(|| ParseError::InvalidValue {
        row,
        column: name.to_string(),
    })
}

/// Physical counts are non-negative; a negative cell is a data error, not a
/// value to clamp.
fn required_count(values: &Int64Chunked, row: usize, name: &str) -> ParseResult<u32> {
    let value = required_i64(values, row, name)?;
    u32::try_from(value).map_err(|_| ParseError::InvalidValue {
        row,
        column: name.to_string(),
    })
}

const BIKE_DAILY_SCHEMA: CsvSchema = CsvSchema {
    string_columns: &["dteday"],
    float_columns: &[],
    int_columns: &["season", "weathersit", "workingday", "cnt"],
};

/// Parse the daily bike-sharing table (`day.csv` layout).
pub fn parse_bike_daily_csv(path: &Path) -> ParseResult<Vec<BikeDailyRecord>> {
    let df = read_csv(path, &BIKE_DAILY_SCHEMA)?;

    let dates = column(&df, "dteday")?.str()?;
    let seasons = column(&df, "season")?.i64()?;
    let weather = column(&df, "weathersit")?.i64()?;
    let working_days = column(&df, "workingday")?.i64()?;
    let counts = column(&df, "cnt")?.i64()?;

    let mut records = Vec::with_capacity(df.height());
    for i in 0..df.height() {
        let raw_date = required_str(dates, i, "dteday")?;
        records.push(BikeDailyRecord {
            date: parse_date(&raw_date, i)?,
            season: required_i64(seasons, i, "season")?,
            weather: required_i64(weather, i, "weathersit")?,
            working_day: required_i64(working_days, i, "workingday")? != 0,
            count: required_count(counts, i, "cnt")?,
        });
    }

    Ok(records)
}

const BIKE_HOURLY_SCHEMA: CsvSchema = CsvSchema {
    string_columns: &["dteday"],
    float_columns: &[],
    int_columns: &["hr", "cnt"],
};

/// Parse the hourly bike-sharing table (`hour.csv` layout).
pub fn parse_bike_hourly_csv(path: &Path) -> ParseResult<Vec<BikeHourlyRecord>> {
    let df = read_csv(path, &BIKE_HOURLY_SCHEMA)?;

    let dates = column(&df, "dteday")?.str()?;
    let hours = column(&df, "hr")?.i64()?;
    let counts = column(&df, "cnt")?.i64()?;

    let mut records = Vec::with_capacity(df.height());
    for i in 0..df.height() {
        let raw_date = required_str(dates, i, "dteday")?;
        records.push(BikeHourlyRecord {
            date: parse_date(&raw_date, i)?,
            hour: required_count(hours, i, "hr")?,
            count: required_count(counts, i, "cnt")?,
        });
    }

    Ok(records)
}

const ORDERS_SCHEMA: CsvSchema = CsvSchema {
    string_columns: &[
        "order_date",
        "order_id",
        "customer_id",
        "product_name",
        "gender",
        "age_group",
        "state",
    ],
    float_columns: &["total_price"],
    int_columns: &["quantity_x"],
};

/// Parse the merged orders table (`all_data.csv` layout).
pub fn parse_orders_csv(path: &Path) -> ParseResult<Vec<OrderRecord>> {
    let df = read_csv(path, &ORDERS_SCHEMA)?;

    let dates = column(&df, "order_date")?.str()?;
    let order_ids = column(&df, "order_id")?.str()?;
    let customer_ids = column(&df, "customer_id")?.str()?;
    let products = column(&df, "product_name")?.str()?;
    let quantities = column(&df, "quantity_x")?.i64()?;
    let prices = column(&df, "total_price")?.f64()?;
    let genders = column(&df, "gender")?.str()?;
    let age_groups = column(&df, "age_group")?.str()?;
    let states = column(&df, "state")?.str()?;

    let mut records = Vec::with_capacity(df.height());
    for i in 0..df.height() {
        let raw_date = required_str(dates, i, "order_date")?;
        records.push(OrderRecord {
            order_date: parse_date(&raw_date, i)?,
            order_id: required_str(order_ids, i, "order_id")?,
            customer_id: required_str(customer_ids, i, "customer_id")?,
            product_name: required_str(products, i, "product_name")?,
            quantity: required_count(quantities, i, "quantity_x")?,
            total_price: required_f64(prices, i, "total_price")?,
            gender: required_str(genders, i, "gender")?,
            age_group: required_str(age_groups, i, "age_group")?,
            state: required_str(states, i, "state")?,
        });
    }

    Ok(records)
}

const AIR_QUALITY_SCHEMA: CsvSchema = CsvSchema {
    string_columns: &["station"],
    float_columns: &["PM2.5", "NO2", "CO", "WSPM"],
    int_columns: &["year", "month", "day", "hour"],
};

/// Parse an hourly air-quality table (PRSA layout). The timestamp is
/// assembled from the year/month/day/hour columns.
pub fn parse_air_quality_csv(path: &Path) -> ParseResult<Vec<AirQualityReading>> {
    let df = read_csv(path, &AIR_QUALITY_SCHEMA)?;

    let years = column(&df, "year")?.i64()?;
    let months = column(&df, "month")?.i64()?;
    let days = column(&df, "day")?.i64()?;
    let hours = column(&df, "hour")?.i64()?;
    let stations = column(&df, "station")?.str()?;
    let pm25 = column(&df, "PM2.5")?.f64()?;
    let no2 = column(&df, "NO2")?.f64()?;
    let co = column(&df, "CO")?.f64()?;
    let wind = column(&df, "WSPM")?.f64()?;

    let mut records = Vec::with_capacity(df.height());
    for i in 0..df.height() {
        let year = required_i64(years, i, "year")?;
        let month = required_i64(months, i, "month")?;
        let day = required_i64(days, i, "day")?;
        let hour = required_i64(hours, i, "hour")?;

        let datetime = assemble_datetime(year, month, day, hour).ok_or_else(|| {
            ParseError::InvalidTimestamp {
                row: i,
                value: format!("{}-{}-{} {}:00", year, month, day, hour),
            }
        })?;

        records.push(AirQualityReading {
            datetime,
            station: required_str(stations, i, "station")?,
            pm25: pm25.get(i),
            no2: no2.get(i),
            co: co.get(i),
            wind_speed: wind.get(i),
        });
    }

    Ok(records)
}

fn assemble_datetime(year: i64, month: i64, day: i64, hour: i64) -> Option<NaiveDateTime> {
    let year = i32::try_from(year).ok()?;
    let month = u32::try_from(month).ok()?;
    let day = u32::try_from(day).ok()?;
    let hour = u32::try_from(hour).ok()?;
    NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(hour, 0, 0)
}
