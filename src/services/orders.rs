//! E-commerce orders dashboard views.

use chrono::NaiveDate;
use serde::Serialize;

use crate::aggregate::{
    compute_rfm, group_sum, group_unique_count, range_filter, resample_daily, NamedAggregate,
};
use crate::core::domain::{DateRange, GroupRow, RfmSummary};
use crate::models::OrderRecord;

/// Fixed display order for the age-group view. Caller-facing ordering, not
/// an enum artifact: Youth before Adults before Seniors.
pub const AGE_GROUP_ORDER: [&str; 3] = ["Youth", "Adults", "Seniors"];

/// Distinct orders and revenue for one day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyOrdersPoint {
    pub date: NaiveDate,
    pub order_count: u64,
    pub revenue: f64,
}

/// Everything the orders dashboard renders for one date-range selection.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OrdersDashboard {
    /// Sum of the daily distinct-order counts.
    pub total_orders: u64,
    /// Raw revenue total; currency formatting is the caller's concern.
    pub total_revenue: f64,
    pub daily_orders: Vec<DailyOrdersPoint>,
    /// Quantity sold per product, best sellers first. The worst performers
    /// are the tail of the same ranking.
    pub product_quantities: Vec<GroupRow>,
    /// Distinct customers per gender.
    pub by_gender: Vec<GroupRow>,
    /// Distinct customers per age group, in Youth/Adults/Seniors order.
    pub by_age_group: Vec<GroupRow>,
    /// Distinct customers per state, largest first.
    pub by_state: Vec<GroupRow>,
    pub rfm: RfmSummary,
}

/// Computes the orders dashboard views over the records in `range`.
pub fn compute_orders_dashboard(
    records: &[OrderRecord],
    range: &DateRange<NaiveDate>,
) -> OrdersDashboard {
    let filtered = range_filter(records, range, |r| r.order_date);
    log::debug!(
        "orders dashboard: {} of {} records in range",
        filtered.len(),
        records.len()
    );

    let daily = resample_daily(
        &filtered,
        |r| r.order_date,
        &[
            NamedAggregate::count_distinct("order_count", |r: &OrderRecord| r.order_id.clone()),
            NamedAggregate::sum("revenue", |r: &OrderRecord| Some(r.total_price)),
        ],
    );
    let daily_orders: Vec<DailyOrdersPoint> = daily
        .iter()
        .map(|row| DailyOrdersPoint {
            date: row.date,
            order_count: row.values[0] as u64,
            revenue: row.values[1],
        })
        .collect();

    let product_quantities = group_sum(
        &filtered,
        |r| Some(r.product_name.clone()),
        |r| Some(f64::from(r.quantity)),
    )
    .by_value_desc();

    let by_gender = group_unique_count(
        &filtered,
        |r| Some(r.gender.clone()),
        |r| r.customer_id.clone(),
    )
    .by_key();

    let by_age_group = group_unique_count(
        &filtered,
        |r| Some(r.age_group.clone()),
        |r| r.customer_id.clone(),
    )
    .in_order(&AGE_GROUP_ORDER);

    let by_state = group_unique_count(
        &filtered,
        |r| Some(r.state.clone()),
        |r| r.customer_id.clone(),
    )
    .by_value_desc();

    let rfm = compute_rfm(
        &filtered,
        |r| r.customer_id.clone(),
        |r| r.order_id.clone(),
        |r| r.order_date,
        |r| r.total_price,
    );

    OrdersDashboard {
        total_orders: daily_orders.iter().map(|p| p.order_count).sum(),
        total_revenue: daily_orders.iter().map(|p| p.revenue).sum(),
        daily_orders,
        product_quantities,
        by_gender,
        by_age_group,
        by_state,
        rfm,
    }
}
