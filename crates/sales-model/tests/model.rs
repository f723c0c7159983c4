//! Tests for sales-model types.

use std::collections::BTreeMap;

use sales_model::{FieldValue, OutputFormat, RawRecord, Record, SUMMARY_SKU, Summary};

fn widget_record() -> Record {
    let mut extra = BTreeMap::new();
    extra.insert("name".to_string(), FieldValue::from("Widget, large"));
    extra.insert("notes".to_string(), FieldValue::Missing);
    Record {
        sku: "SKU1".to_string(),
        cost: 10.0,
        price: 15.0,
        qty: -2.0,
        profit: -10.0,
        profit_margin: 1.0 / 3.0,
        extra,
    }
}

#[test]
fn raw_record_round_trips_through_json() {
    let raw = RawRecord::new()
        .with("sku", "SKU1")
        .with("cost", "10")
        .with("price", FieldValue::Number(15.5))
        .with("qty", FieldValue::Missing);
    let json = serde_json::to_string(&raw).expect("serialize raw record");
    assert_eq!(json, r#"{"cost":"10","price":15.5,"qty":null,"sku":"SKU1"}"#);
    let round: RawRecord = serde_json::from_str(&json).expect("deserialize raw record");
    assert_eq!(round, raw);
}

#[test]
fn record_round_trips_with_extra_columns() {
    let record = widget_record();
    let json = serde_json::to_string(&record).expect("serialize record");
    let round: Record = serde_json::from_str(&json).expect("deserialize record");
    assert_eq!(round, record);
}

#[test]
fn record_without_sku_deserializes_to_empty_sku() {
    let json = r#"{"cost":1,"price":2,"qty":3,"profit":3,"profit_margin":0.5}"#;
    let record: Record = serde_json::from_str(json).expect("deserialize record");
    assert_eq!(record.sku, "");
    assert!(record.extra.is_empty());
}

#[test]
fn summary_serializes_renderer_field_names() {
    let summary = Summary {
        sku: SUMMARY_SKU.to_string(),
        cost: 7.5,
        price: 10.0,
        qty: 12.0,
        profit: 10.0,
        profit_margin: 0.25,
    };
    let value = serde_json::to_value(&summary).expect("serialize summary");
    let mut keys: Vec<&str> = value
        .as_object()
        .expect("summary is an object")
        .keys()
        .map(String::as_str)
        .collect();
    keys.sort_unstable();
    assert_eq!(
        keys,
        vec!["cost", "price", "profit", "profit_margin", "qty", "sku"]
    );
    assert_eq!(value["sku"], "Summary");
}

#[test]
fn output_format_serde_uses_lowercase_names() {
    let json = serde_json::to_string(&OutputFormat::Json).expect("serialize format");
    assert_eq!(json, "\"json\"");
    let format: OutputFormat = serde_json::from_str("\"array\"").expect("deserialize format");
    assert_eq!(format, OutputFormat::Array);
}
