//! Dataset loaders.
//!
//! Each loader parses a source file into typed records and then enforces
//! the handoff contract of the aggregation pipeline: rows are deduplicated
//! (first occurrence wins) and sorted by timestamp. The sort is stable, so
//! same-timestamp records keep their file order.

use anyhow::{Context, Result};
use std::collections::HashSet;
use std::hash::Hash;
use std::path::Path;

use crate::models::{AirQualityReading, BikeDailyRecord, BikeHourlyRecord, OrderRecord};
use crate::parsing::{csv_parser, json_parser};

/// Drops later duplicates of an identical key, keeping the first
/// occurrence.
fn dedup_keep_first<R, K>(records: Vec<R>, what: &str, key_fn: impl Fn(&R) -> K) -> Vec<R>
where
    K: Eq + Hash,
{
    let mut seen = HashSet::with_capacity(records.len());
    let mut kept = Vec::with_capacity(records.len());
    let mut dropped = 0usize;

    for record in records {
        if seen.insert(key_fn(&record)) {
            kept.push(record);
        } else {
            dropped += 1;
        }
    }

    if dropped > 0 {
        log::warn!("{}: dropped {} duplicate rows", what, dropped);
    }
    kept
}

/// Loader for the bike-sharing tables.
pub struct BikeDataLoader;

impl BikeDataLoader {
    /// Load the daily table (`day.csv` layout).
    pub fn load_daily(path: &Path) -> Result<Vec<BikeDailyRecord>> {
        let records = csv_parser::parse_bike_daily_csv(path)
            .with_context(|| format!("Failed to parse bike daily CSV: {}", path.display()))?;

        let mut records = dedup_keep_first(records, "bike daily", |r| {
            (r.date, r.season, r.weather, r.working_day, r.count)
        });
        records.sort_by_key(|r| r.date);

        log::info!("loaded {} bike daily records", records.len());
        Ok(records)
    }

    /// Load the hourly table (`hour.csv` layout).
    pub fn load_hourly(path: &Path) -> Result<Vec<BikeHourlyRecord>> {
        let records = csv_parser::parse_bike_hourly_csv(path)
            .with_context(|| format!("Failed to parse bike hourly CSV: {}", path.display()))?;

        let mut records =
            dedup_keep_first(records, "bike hourly", |r| (r.date, r.hour, r.count));
        records.sort_by_key(|r| (r.date, r.hour));

        log::info!("loaded {} bike hourly records", records.len());
        Ok(records)
    }
}

/// Loader for the merged orders table. Accepts CSV or JSON.
pub struct OrdersLoader;

impl OrdersLoader {
    /// Load order records from a file, auto-detecting JSON or CSV by
    /// extension.
    pub fn load_from_file(path: &Path) -> Result<Vec<OrderRecord>> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .context("File has no extension")?;

        match extension.to_lowercase().as_str() {
            "csv" => Self::load_from_csv(path),
            "json" => {
                let json = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read JSON file: {}", path.display()))?;
                Self::load_from_json_str(&json)
            }
            _ => anyhow::bail!("Unsupported file format: {}", extension),
        }
    }

    pub fn load_from_csv(path: &Path) -> Result<Vec<OrderRecord>> {
        let records = csv_parser::parse_orders_csv(path)
            .with_context(|| format!("Failed to parse orders CSV: {}", path.display()))?;
        Ok(Self::finish(records))
    }

    pub fn load_from_json_str(json_str: &str) -> Result<Vec<OrderRecord>> {
        let records = json_parser::parse_orders_json_str(json_str)
            .context("Failed to parse orders JSON")?;
        Ok(Self::finish(records))
    }

    fn finish(records: Vec<OrderRecord>) -> Vec<OrderRecord> {
        let mut records = dedup_keep_first(records, "orders", |r| {
            (
                r.order_date,
                r.order_id.clone(),
                r.customer_id.clone(),
                r.product_name.clone(),
                r.quantity,
                r.total_price.to_bits(),
            )
        });
        records.sort_by_key(|r| r.order_date);

        log::info!("loaded {} order records", records.len());
        records
    }
}

/// Loader for hourly air-quality tables.
pub struct AirQualityLoader;

impl AirQualityLoader {
    pub fn load(path: &Path) -> Result<Vec<AirQualityReading>> {
        let records = csv_parser::parse_air_quality_csv(path)
            .with_context(|| format!("Failed to parse air quality CSV: {}", path.display()))?;

        let mut records = dedup_keep_first(records, "air quality", |r| {
            (r.datetime, r.station.clone())
        });
        records.sort_by_key(|r| r.datetime);

        log::info!("loaded {} air quality readings", records.len());
        Ok(records)
    }
}
