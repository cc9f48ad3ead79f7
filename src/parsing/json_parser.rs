//! JSON parsing for order records.
//!
//! Orders are the one dataset that also arrives as JSON (an export of the
//! same merged table). The document is an array of row objects using the
//! CSV column names; identifiers are accepted as either strings or
//! integers.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};

use crate::models::OrderRecord;
use crate::parsing::error::{ParseError, ParseResult};

/// Custom deserializer that accepts either string or integer identifiers.
fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrInt {
        String(String),
        Int(i64),
    }

    match StringOrInt::deserialize(deserializer)? {
        StringOrInt::String(s) => Ok(s),
        StringOrInt::Int(i) => Ok(i.to_string()),
    }
}

/// Raw JSON structure for one order row.
#[derive(Debug, Deserialize)]
struct RawOrder {
    order_date: String,
    #[serde(deserialize_with = "deserialize_id")]
    order_id: String,
    #[serde(deserialize_with = "deserialize_id")]
    customer_id: String,
    product_name: String,
    #[serde(rename = "quantity_x")]
    quantity: u32,
    total_price: f64,
    gender: String,
    age_group: String,
    state: String,
}

/// Parse an array of order rows from a JSON string.
pub fn parse_orders_json_str(json_str: &str) -> ParseResult<Vec<OrderRecord>> {
    let raw_orders: Vec<RawOrder> = serde_json::from_str(json_str)?;

    let mut records = Vec::with_capacity(raw_orders.len());
    for (i, raw) in raw_orders.into_iter().enumerate() {
        let order_date = NaiveDate::parse_from_str(raw.order_date.trim(), "%Y-%m-%d").map_err(
            |_| ParseError::InvalidTimestamp {
                row: i,
                value: raw.order_date.clone(),
            },
        )?;

        records.push(OrderRecord {
            order_date,
            order_id: raw.order_id,
            customer_id: raw.customer_id,
            product_name: raw.product_name,
            quantity: raw.quantity,
            total_price: raw.total_price,
            gender: raw.gender,
            age_group: raw.age_group,
            state: raw.state,
        });
    }

    Ok(records)
}
