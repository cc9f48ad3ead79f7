//! High-level data loading.
//!
//! Loaders wrap the parsers with the guarantees the aggregation pipeline
//! relies on: every timestamp parsed (or the load fails fast), duplicate
//! rows dropped, records sorted by timestamp.

pub mod loaders;


pub use loaders::{AirQualityLoader, BikeDataLoader, OrdersLoader};
