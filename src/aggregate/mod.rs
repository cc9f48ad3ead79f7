//! The dataset-agnostic aggregation engine.
//!
//! Every function here is a pure function of an input record slice and the
//! accessor closures the caller supplies; nothing is cached, retained or
//! mutated in place. An empty input is never an error: each operation
//! produces a well-formed empty or absent result that flows through the rest
//! of the pipeline.
//!
//! # Modules
//!
//! - [`filter`]: closed-interval range filtering
//! - [`group`]: partition-and-reduce (sum, distinct count, mean)
//! - [`resample`]: sparse daily bucketing with named aggregations
//! - [`rfm`]: recency/frequency/monetary customer summaries
//! - [`stats`]: summary statistics with absent-when-empty moments

pub mod filter;
pub mod group;
pub mod resample;
pub mod rfm;
pub mod stats;

pub use filter::range_filter;
pub use group::{group_mean, group_sum, group_unique_count};
pub use resample::{resample_daily, DailyRow, NamedAggregate};
pub use rfm::compute_rfm;
pub use stats::{box_stats, mean, mean_of, summarize};
