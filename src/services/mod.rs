//! Per-dashboard view assembly.
//!
//! Each service wires the generic aggregation engine to one dataset's
//! columns and produces the exact set of summary tables its dashboard
//! renders. Services are pure: they take the record table and the selected
//! date range as parameters (there is no process-wide dataset) and recompute
//! every view from scratch on each call.

pub mod air_quality;
pub mod bike;
pub mod orders;

pub use air_quality::{compute_air_quality_dashboard, AirQualityDashboard};
pub use bike::{compute_bike_dashboard, hourly_profile, BikeDashboard};
pub use orders::{compute_orders_dashboard, OrdersDashboard};

use crate::core::labels::LabelTable;

/// Maps a category code through a label table, logging unmapped codes.
/// Returning `None` excludes the record from the summary being built.
pub(crate) fn label_or_warn(table: &LabelTable, what: &str, code: i64) -> Option<String> {
    match table.label(code) {
        Some(label) => Some(label.to_string()),
        None => {
            log::warn!("unmapped {} code {}, record excluded", what, code);
            None
        }
    }
}
