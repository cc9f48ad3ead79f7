//! End-to-end properties of the filter-and-aggregate pipeline.

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;

use dashboard_analytics::aggregate::{compute_rfm, group_sum, range_filter};
use dashboard_analytics::core::domain::DateRange;
use dashboard_analytics::models::{BikeDailyRecord, OrderRecord};
use dashboard_analytics::services::{
    compute_bike_dashboard, compute_orders_dashboard, OrdersDashboard,
};

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn base_date() -> NaiveDate {
    date("2023-01-01")
}

fn bike_record(day_offset: i64, season: i64, count: u32) -> BikeDailyRecord {
    BikeDailyRecord {
        date: base_date() + Duration::days(day_offset),
        season,
        weather: 1,
        working_day: true,
        count,
    }
}

fn order_line(day_offset: i64, order: &str, customer: &str, price: f64) -> OrderRecord {
    OrderRecord {
        order_date: base_date() + Duration::days(day_offset),
        order_id: order.to_string(),
        customer_id: customer.to_string(),
        product_name: "Shirt".to_string(),
        quantity: 1,
        total_price: price,
        gender: "F".to_string(),
        age_group: "Youth".to_string(),
        state: "NSW".to_string(),
    }
}

prop_compose! {
    fn arb_bike_records()(
        rows in prop::collection::vec((0i64..365, 1i64..=4, 0u32..5000), 0..60)
    ) -> Vec<BikeDailyRecord> {
        rows.into_iter()
            .map(|(offset, season, count)| bike_record(offset, season, count))
            .collect()
    }
}

prop_compose! {
    fn arb_order_lines()(
        rows in prop::collection::vec((0i64..365, 0u8..10, 0u8..6, 0u32..10_000), 1..60)
    ) -> Vec<OrderRecord> {
        rows.into_iter()
            .map(|(offset, order, customer, cents)| {
                order_line(
                    offset,
                    &format!("o{order}"),
                    &format!("c{customer}"),
                    f64::from(cents) / 100.0,
                )
            })
            .collect()
    }
}

proptest! {
    // rangeFilter(R, s, e) with s > e is always empty.
    #[test]
    fn inverted_range_always_empty(
        records in arb_bike_records(),
        start in 0i64..400,
        gap in 1i64..100,
    ) {
        let range = DateRange::new(
            base_date() + Duration::days(start),
            base_date() + Duration::days(start - gap),
        );
        prop_assert!(range_filter(&records, &range, |r| r.date).is_empty());
    }

    // Filtering at the full span of the data is the identity, order
    // preserved.
    #[test]
    fn full_range_is_identity(records in arb_bike_records()) {
        prop_assume!(!records.is_empty());
        let min = records.iter().map(|r| r.date).min().unwrap();
        let max = records.iter().map(|r| r.date).max().unwrap();

        let filtered = range_filter(&records, &DateRange::new(min, max), |r| r.date);
        prop_assert_eq!(filtered, records);
    }

    // Partition sums neither lose nor double-count records.
    #[test]
    fn group_sums_preserve_total(records in arb_bike_records()) {
        let summary = group_sum(
            &records,
            |r| Some(r.season.to_string()),
            |r| Some(f64::from(r.count)),
        );
        let direct: f64 = records.iter().map(|r| f64::from(r.count)).sum();
        prop_assert!((summary.total() - direct).abs() < 1e-6);
    }

    // Every emitted RFM row satisfies the invariants.
    #[test]
    fn rfm_invariants_hold(records in arb_order_lines()) {
        let summary = compute_rfm(
            &records,
            |r| r.customer_id.clone(),
            |r| r.order_id.clone(),
            |r| r.order_date,
            |r| r.total_price,
        );
        for row in &summary.rows {
            prop_assert!(row.recency_days >= 0);
            prop_assert!(row.frequency >= 1);
        }

        // Every distinct customer in the input is present.
        let distinct: std::collections::HashSet<_> =
            records.iter().map(|r| r.customer_id.clone()).collect();
        prop_assert_eq!(summary.rows.len(), distinct.len());
    }

    // The pipeline is a pure function: identical inputs, identical outputs.
    #[test]
    fn orders_pipeline_is_idempotent(records in arb_order_lines()) {
        let range = DateRange::new(base_date(), base_date() + Duration::days(200));
        let first: OrdersDashboard = compute_orders_dashboard(&records, &range);
        let second = compute_orders_dashboard(&records, &range);
        prop_assert_eq!(first, second);
    }
}

#[test]
fn single_day_range_keeps_one_record() {
    let records = vec![bike_record(0, 1, 10), bike_record(1, 2, 20)];
    let range = DateRange::new(date("2023-01-01"), date("2023-01-01"));

    let filtered = range_filter(&records, &range, |r| r.date);
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].count, 10);

    let dashboard = compute_bike_dashboard(&records, &range);
    assert_eq!(dashboard.by_season.len(), 1);
    assert_eq!(dashboard.by_season[0].key, "Spring");
    assert_eq!(dashboard.by_season[0].value, 10.0);
}

#[test]
fn empty_filtered_set_flows_through_every_view() {
    let records = vec![order_line(0, "o1", "c1", 5.0)];
    // Nothing in 2024.
    let range = DateRange::new(date("2024-01-01"), date("2024-12-31"));

    let dashboard = compute_orders_dashboard(&records, &range);

    assert!(dashboard.daily_orders.is_empty());
    assert!(dashboard.product_quantities.is_empty());
    assert!(dashboard.by_gender.is_empty());
    assert_eq!(dashboard.total_orders, 0);
    assert_eq!(dashboard.rfm.avg_recency, None);
    assert_eq!(dashboard.rfm.avg_monetary, None);
}

#[test]
fn rfm_same_vs_distinct_order_ids() {
    // Same customer on 2023-01-01 (price 5) and 2023-01-10 (price 7).
    let same_order = vec![
        order_line(0, "o1", "c1", 5.0),
        order_line(9, "o1", "c1", 7.0),
    ];
    let range = DateRange::new(date("2023-01-01"), date("2023-01-31"));

    let dashboard = compute_orders_dashboard(&same_order, &range);
    let row = &dashboard.rfm.rows[0];
    assert_eq!(row.recency_days, 0);
    assert_eq!(row.frequency, 1);
    assert_eq!(row.monetary, 12.0);

    let distinct_orders = vec![
        order_line(0, "o1", "c1", 5.0),
        order_line(9, "o2", "c1", 7.0),
    ];
    let dashboard = compute_orders_dashboard(&distinct_orders, &range);
    let row = &dashboard.rfm.rows[0];
    assert_eq!(row.recency_days, 0);
    assert_eq!(row.frequency, 2);
    assert_eq!(row.monetary, 12.0);
}

#[test]
fn resampled_days_match_distinct_dates_in_range() {
    let records = vec![
        order_line(0, "o1", "c1", 5.0),
        order_line(0, "o2", "c2", 6.0),
        order_line(4, "o3", "c1", 7.0),
    ];
    let range = DateRange::new(date("2023-01-01"), date("2023-01-31"));

    let dashboard = compute_orders_dashboard(&records, &range);

    // Sparse: exactly the two distinct dates, no synthetic zero days.
    assert_eq!(dashboard.daily_orders.len(), 2);
    assert_eq!(dashboard.daily_orders[0].date, date("2023-01-01"));
    assert_eq!(dashboard.daily_orders[0].order_count, 2);
    assert_eq!(dashboard.daily_orders[1].date, date("2023-01-05"));
}
