//! Shared domain types used across the aggregation pipeline.
//!
//! # Modules
//!
//! - [`domain`]: date ranges, group summaries, RFM rows, summary statistics
//! - [`labels`]: declarative code-to-label tables with display ordering

pub mod domain;
pub mod labels;
