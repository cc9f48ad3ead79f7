use crate::parsing::error::ParseError;
use crate::parsing::json_parser::parse_orders_json_str;

#[test]
fn parses_order_rows() {
    let json = r#"[
        {
            "order_date": "2023-01-01",
            "order_id": "o1",
            "customer_id": "c1",
            "product_name": "Shirt",
            "quantity_x": 2,
            "total_price": 30.5,
            "gender": "F",
            "age_group": "Youth",
            "state": "NSW"
        },
        {
            "order_date": "2023-01-02",
            "order_id": 1002,
            "customer_id": 502,
            "product_name": "Hat",
            "quantity_x": 1,
            "total_price": 10.0,
            "gender": "M",
            "age_group": "Adults",
            "state": "VIC"
        }
    ]"#;

    let records = parse_orders_json_str(json).unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].order_id, "o1");
    // Integer identifiers are accepted and stringified.
    assert_eq!(records[1].order_id, "1002");
    assert_eq!(records[1].customer_id, "502");
    assert_eq!(records[0].quantity, 2);
}

#[test]
fn rejects_malformed_timestamp() {
    let json = r#"[
        {
            "order_date": "01/02/2023",
            "order_id": "o1",
            "customer_id": "c1",
            "product_name": "Shirt",
            "quantity_x": 2,
            "total_price": 30.5,
            "gender": "F",
            "age_group": "Youth",
            "state": "NSW"
        }
    ]"#;

    let err = parse_orders_json_str(json).unwrap_err();
    assert!(matches!(err, ParseError::InvalidTimestamp { row: 0, .. }));
}

#[test]
fn rejects_missing_fields() {
    let json = r#"[{ "order_date": "2023-01-01" }]"#;
    let err = parse_orders_json_str(json).unwrap_err();
    assert!(matches!(err, ParseError::Json(_)));
}

#[test]
fn empty_array_is_not_an_error() {
    let records = parse_orders_json_str("[]").unwrap();
    assert!(records.is_empty());
}
