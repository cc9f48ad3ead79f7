//! E-commerce order line records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One order line: an order/customer pair with the product sold and the
/// demographic attributes the dashboard groups by.
///
/// A multi-line order repeats `order_id`; the aggregations that count orders
/// count distinct identifiers, never rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub order_date: NaiveDate,
    pub order_id: String,
    pub customer_id: String,
    pub product_name: String,
    pub quantity: u32,
    pub total_price: f64,
    pub gender: String,
    pub age_group: String,
    pub state: String,
}
