//! Aggregation core for a family of CSV-backed dashboards.
//!
//! Three dashboards (bike rentals, e-commerce orders, air quality) share the
//! same pipeline: load a record table, filter it to a date range, and reduce
//! the filtered set to a handful of summary tables. This crate implements
//! that pipeline once, dataset-agnostically:
//!
//! - [`aggregate`]: pure filter/group/resample/RFM functions driven by
//!   accessor closures; no state, no I/O
//! - [`services`]: per-dashboard view assembly wiring the aggregator to a
//!   concrete dataset's columns
//! - [`models`]: typed record structs for the three datasets
//! - [`parsing`] + [`io`]: the tabular-data-loading boundary (CSV via
//!   polars, JSON via serde)
//! - [`core`]: shared domain types (date ranges, group summaries, summary
//!   statistics, label tables)
//!
//! Chart rendering, interactive widgets and locale formatting are external
//! collaborators: every view type here serializes to plain `(key, value)`
//! rows and leaves presentation to the caller.

pub mod aggregate;
pub mod core;
pub mod io;
pub mod models;
pub mod parsing;
pub mod services;

pub use crate::core::domain::{DateRange, GroupRow, GroupSummary, RfmRow, RfmSummary};
