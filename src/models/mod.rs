//! Typed record models for the three source datasets.
//!
//! One row of a source table, with the timestamp already parsed and measures
//! that can be missing held as `Option`. Records arrive from the loading
//! boundary ([`crate::io`]) already deduplicated and sorted by timestamp.

pub mod air_quality;
pub mod bike;
pub mod orders;

pub use air_quality::AirQualityReading;
pub use bike::{BikeDailyRecord, BikeHourlyRecord};
pub use orders::OrderRecord;
