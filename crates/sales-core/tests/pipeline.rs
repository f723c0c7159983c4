//! End-to-end tests for the sales pipeline.

use std::fs;

use sales_core::{
    CoreError, Dataset, OutputFormat, ProcessingOptions, SummaryOutput, ValidationError,
    ZeroRevenuePolicy, process_file, process_json_reader, process_reader,
};
use sales_ingest::IngestError;
use tempfile::TempDir;

const EXAMPLE_CSV: &str = "sku,cost,price,qty\nSKU1,10,15,2\nSKU2,5,5,10\n";

fn process(contents: &str) -> Result<Dataset, CoreError> {
    process_reader(contents.as_bytes(), &ProcessingOptions::default())
}

#[test]
fn example_dataset_is_enriched() {
    let dataset = process(EXAMPLE_CSV).expect("process example");
    assert_eq!(dataset.len(), 2);

    let first = &dataset.records()[0];
    assert_eq!(first.sku, "SKU1");
    assert_eq!(first.profit, 10.0);
    assert!((first.profit_margin - 1.0 / 3.0).abs() < 1e-12);

    let second = &dataset.records()[1];
    assert_eq!(second.profit, 0.0);
    assert_eq!(second.profit_margin, 0.0);

    insta::assert_snapshot!(
        dataset.to_json().expect("serialize dataset"),
        @r#"[{"sku":"SKU1","cost":10.0,"price":15.0,"qty":2.0,"profit":10.0,"profit_margin":0.3333333333333333},{"sku":"SKU2","cost":5.0,"price":5.0,"qty":10.0,"profit":0.0,"profit_margin":0.0}]"#
    );
}

#[test]
fn example_summary() {
    let dataset = process(EXAMPLE_CSV).expect("process example");
    let summary = dataset.summary().expect("summarize");
    assert_eq!(summary.sku, "Summary");
    assert_eq!(summary.qty, 12.0);
    assert_eq!(summary.profit, 10.0);
    assert_eq!(summary.cost, 7.5);
    assert_eq!(summary.price, 10.0);
    assert!((summary.profit_margin - 1.0 / 6.0).abs() < 1e-12);

    let output = dataset
        .summary_as(OutputFormat::from_name("Json"))
        .expect("summarize as json");
    let SummaryOutput::Json(json) = output else {
        panic!("expected json summary");
    };
    insta::assert_snapshot!(
        json,
        @r#"{"sku":"Summary","cost":7.5,"price":10.0,"qty":12.0,"profit":10.0,"profit_margin":0.16666666666666666}"#
    );
}

#[test]
fn extra_columns_survive_enrichment() {
    let dataset = process("sku,name,cost,price,qty\nSKU1,\"Widget, blue\",1,2,3\n")
        .expect("process csv");
    let json = dataset.to_json().expect("serialize dataset");
    assert_eq!(
        json,
        r#"[{"sku":"SKU1","cost":1.0,"price":2.0,"qty":3.0,"profit":3.0,"profit_margin":0.5,"name":"Widget, blue"}]"#
    );
}

#[test]
fn header_only_source_is_empty_and_cannot_be_summarized() {
    let dataset = process("sku,cost,price,qty\n").expect("process header only");
    assert!(dataset.is_empty());
    assert_eq!(dataset.to_json().expect("serialize dataset"), "[]");
    assert!(matches!(dataset.summary(), Err(CoreError::EmptyDataset)));
}

#[test]
fn missing_qty_column_aborts_processing() {
    let err = process("sku,cost,price\nSKU1,10,15\n").unwrap_err();
    assert!(matches!(
        err.validation(),
        Some(ValidationError::MissingFields { fields }) if fields == &["qty".to_string()]
    ));
}

#[test]
fn non_numeric_cost_aborts_processing() {
    let err = process("sku,cost,price,qty\nSKU1,10,15,2\nSKU2,abc,5,10\n").unwrap_err();
    match err {
        CoreError::InvalidRecord { row, source } => {
            assert_eq!(row, 2);
            assert_eq!(
                source,
                ValidationError::NotNumeric {
                    field: "cost".to_string(),
                    value: "abc".to_string()
                }
            );
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn row_of_empty_cells_aborts_processing() {
    let err = process("sku,cost,price,qty\nA,1,2,3\n,,,\nB,1,2,3\n").unwrap_err();
    assert!(matches!(
        &err,
        CoreError::InvalidRecord {
            row: 2,
            source: ValidationError::NotNumeric { field, .. },
        } if field == "cost"
    ));
}

#[test]
fn overflowing_row_aborts_processing() {
    let err = process("sku,cost,price,qty\nA,1,2,3\nB,1e308,1e308,1e308\n").unwrap_err();
    assert!(matches!(
        &err,
        CoreError::InvalidRecord {
            row: 2,
            source: ValidationError::Overflow { field: "profit", .. },
        }
    ));
}

#[test]
fn strict_options_reject_ragged_rows_and_zero_revenue() {
    let strict = ProcessingOptions::strict();
    let err = process_reader("sku,cost,price,qty\nSKU1,1,2\n".as_bytes(), &strict).unwrap_err();
    assert!(matches!(
        err,
        CoreError::Ingest(IngestError::ColumnCountMismatch { .. })
    ));

    let options = ProcessingOptions::default().with_zero_revenue(ZeroRevenuePolicy::Reject);
    let err = process_reader("sku,cost,price,qty\nSKU1,1,2,0\n".as_bytes(), &options).unwrap_err();
    assert!(matches!(
        err.validation(),
        Some(ValidationError::ZeroRevenue { .. })
    ));
}

#[test]
fn processes_file_and_reports_missing_file() {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("sales.csv");
    fs::write(&path, EXAMPLE_CSV).expect("write file");

    let dataset = process_file(&path, &ProcessingOptions::default()).expect("process file");
    assert_eq!(dataset.len(), 2);

    let err = process_file(&dir.path().join("missing.csv"), &ProcessingOptions::default())
        .unwrap_err();
    assert!(matches!(
        err,
        CoreError::Ingest(IngestError::FileNotFound { .. })
    ));
}

#[test]
fn json_output_round_trips() {
    let dataset = process(EXAMPLE_CSV).expect("process example");
    let json = dataset.to_json().expect("serialize dataset");

    let decoded: Dataset = serde_json::from_str(&json).expect("deserialize dataset");
    assert_eq!(decoded, dataset);

    let reprocessed = process_json_reader(json.as_bytes(), &ProcessingOptions::default())
        .expect("process json");
    assert_eq!(reprocessed, dataset);
}

#[test]
fn json_source_with_non_record_element_is_rejected() {
    let err = process_json_reader(
        r#"[{"sku":"A","cost":1,"price":2,"qty":3}, "B"]"#.as_bytes(),
        &ProcessingOptions::default(),
    )
    .unwrap_err();
    assert!(matches!(
        err,
        CoreError::Ingest(IngestError::NotARecord { index: 1, .. })
    ));
}
