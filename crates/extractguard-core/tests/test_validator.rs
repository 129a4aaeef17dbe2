use extractguard_core::{LogicalType, ReaderConfigBuilder, TypeSchema, Validator};
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use tempfile::{tempdir, TempDir};

const ORDER_COLUMNS: [&str; 3] = ["order_id", "customer_id", "amount"];

fn write_extract(dir: &TempDir, name: &str, lines: &[&str]) -> PathBuf {
    let file_path = dir.path().join(name);
    let mut file = File::create(&file_path).unwrap();
    for line in lines {
        writeln!(file, "{}", line).unwrap();
    }
    file_path
}

#[test]
fn test_end_to_end_clean_extract() {
    let dir = tempdir().unwrap();
    let path = write_extract(
        &dir,
        "order_extract.csv",
        &["order_id|customer_id|amount", "1|100|25.50", "2|101|10.00"],
    );

    let mut validator = Validator::new();
    assert!(validator.validate_file(&path, Some(&ORDER_COLUMNS[..])));
    assert!(validator.check_null_values(&path, &["order_id", "customer_id"]));
    assert!(validator.check_row_count(&path, 1, None));

    let report = validator.build_report();
    // the structural check records both the row count and the header match
    assert_eq!(report.passed.len(), 4);
    assert_eq!(report.total_checks, 4);
    assert!(report.failed.is_empty());
    assert!(report.warnings.is_empty());
    assert_eq!(format!("{:.2}", report.success_rate), "100.00");
    assert!(report.is_passed());
}

#[test]
fn test_end_to_end_without_expected_columns() {
    let dir = tempdir().unwrap();
    let path = write_extract(
        &dir,
        "order_extract.csv",
        &["order_id|customer_id|amount", "1|100|25.50", "2|101|10.00"],
    );

    let mut validator = Validator::new();
    assert!(validator.validate_file(&path, None));
    assert!(validator.check_null_values(&path, &["order_id", "customer_id"]));
    assert!(validator.check_row_count(&path, 1, None));

    let report = validator.build_report();
    assert_eq!(report.passed.len(), 3);
    assert_eq!(report.failed.len(), 0);
    assert_eq!(report.success_rate, 100.0);
}

#[test]
fn test_header_only_extract_is_empty() {
    let dir = tempdir().unwrap();
    let path = write_extract(&dir, "empty.csv", &["order_id|amount"]);

    let mut validator = Validator::new();
    assert!(!validator.validate_file(&path, Some(&["order_id", "amount"][..])));

    let report = validator.build_report();
    assert_eq!(report.failed, vec![format!("File {} is empty", path.display())]);
    assert!(report.passed.is_empty());
}

#[test]
fn test_zero_byte_extract_is_empty() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("zero.csv");
    File::create(&path).unwrap();

    let mut validator = Validator::new();
    assert!(!validator.validate_file(&path, None));
    assert!(!validator.check_row_count(&path, 1, None));
    assert_eq!(validator.build_report().failed.len(), 2);
}

#[test]
fn test_column_mismatch() {
    let dir = tempdir().unwrap();
    let path = write_extract(&dir, "orders.csv", &["customer_id|order_id", "1|2"]);

    let mut validator = Validator::new();
    assert!(!validator.validate_file(&path, Some(&["order_id", "customer_id"][..])));

    let report = validator.build_report();
    assert_eq!(report.passed.len(), 1);
    assert_eq!(
        report.failed[0],
        format!(
            "Column mismatch in {}. Expected: [\"order_id\", \"customer_id\"], Got: [\"customer_id\", \"order_id\"]",
            path.display()
        )
    );
}

#[test]
fn test_padded_header_does_not_match() {
    let dir = tempdir().unwrap();
    let path = write_extract(&dir, "orders.csv", &[" order_id |customer_id", "1|2"]);

    let mut validator = Validator::new();
    assert!(!validator.validate_file(&path, Some(&["order_id", "customer_id"][..])));

    let report = validator.build_report();
    assert_eq!(report.failed.len(), 1);
    assert!(report.failed[0].contains("Got: [\" order_id \", \"customer_id\"]"));
}

#[test]
fn test_quoted_header_with_delimiter() {
    let dir = tempdir().unwrap();
    let path = write_extract(&dir, "orders.csv", &["\"a|b\"|c", "1|2"]);

    let mut validator = Validator::new();
    assert!(validator.validate_file(&path, Some(&["a|b", "c"][..])));
}

#[test]
fn test_ragged_record_is_a_read_error() {
    let dir = tempdir().unwrap();
    let path = write_extract(&dir, "ragged.csv", &["a|b|c", "1|2|3", "4|5"]);

    let mut validator = Validator::new();
    assert!(!validator.validate_file(&path, None));

    let report = validator.build_report();
    let prefix = format!("Error reading {}: Arrow error", path.display());
    assert!(report.failed[0].starts_with(&prefix));
}

#[test]
fn test_null_check_reports_first_offending_column() {
    let dir = tempdir().unwrap();
    let path = write_extract(
        &dir,
        "orders.csv",
        &["order_id|customer_id|amount", "1||5", "|NULL|7", "3||"],
    );

    let mut validator = Validator::new();
    assert!(!validator.check_null_values(&path, &["order_id", "customer_id"]));
    assert!(!validator.check_null_values(&path, &["customer_id", "order_id"]));

    let failed = validator.accumulator().failed();
    assert_eq!(
        failed[0],
        format!(
            "1 null values found in critical column 'order_id' in {}",
            path.display()
        )
    );
    assert_eq!(
        failed[1],
        format!(
            "3 null values found in critical column 'customer_id' in {}",
            path.display()
        )
    );
}

#[test]
fn test_null_check_missing_column_is_warning() {
    let dir = tempdir().unwrap();
    let path = write_extract(&dir, "orders.csv", &["order_id", "1", "2"]);

    let mut validator = Validator::new();
    assert!(validator.check_null_values(&path, &["order_id", "region"]));

    let report = validator.build_report();
    assert_eq!(
        report.warnings,
        vec![format!("Column region not found in {}", path.display())]
    );
    assert_eq!(report.total_checks, 1);
}

#[test]
fn test_type_check() {
    let dir = tempdir().unwrap();
    let path = write_extract(
        &dir,
        "orders.csv",
        &[
            "order_id|amount|created_at|note",
            "1|10.5|2024-01-01 10:00:00|ok",
            "2|7|2024-01-02T11:30:00|n/a",
            "3||2024-01-03|x",
        ],
    );

    let schema = TypeSchema::new()
        .with_column("order_id", LogicalType::Integer)
        .with_column("amount", LogicalType::Float)
        .with_column("created_at", LogicalType::Timestamp);

    let mut validator = Validator::new();
    assert!(validator.check_data_types(&path, &schema));

    let bad_schema = TypeSchema::new().with_column("note", LogicalType::Integer);
    assert!(!validator.check_data_types(&path, &bad_schema));

    let report = validator.build_report();
    assert_eq!(report.passed, vec![format!("Data types validated for {}", path.display())]);
    assert_eq!(
        report.failed,
        vec![format!("Column note in {} cannot be converted to integer", path.display())]
    );
}

#[test]
fn test_row_count_bounds() {
    let dir = tempdir().unwrap();
    let three = write_extract(&dir, "three.csv", &["id", "1", "2", "3"]);
    let five = write_extract(&dir, "five.csv", &["id", "1", "2", "3", "4", "5"]);
    let lines: Vec<String> = std::iter::once("id".to_string())
        .chain((1..=11).map(|i| i.to_string()))
        .collect();
    let line_refs: Vec<&str> = lines.iter().map(|s| s.as_str()).collect();
    let eleven = write_extract(&dir, "eleven.csv", &line_refs);

    let mut validator = Validator::new();
    assert!(!validator.check_row_count(&three, 5, None));
    assert!(validator.check_row_count(&five, 5, None));
    assert!(!validator.check_row_count(&eleven, 1, Some(10)));
    assert!(validator.check_row_count(&eleven, 1, Some(11)));
}

#[test]
fn test_build_report_is_idempotent() {
    let dir = tempdir().unwrap();
    let path = write_extract(&dir, "orders.csv", &["id", "1"]);

    let mut validator = Validator::new();
    validator.validate_file(&path, None);
    validator.check_row_count(&path, 5, None);

    let first = validator.build_report();
    let second = validator.build_report();
    assert_eq!(first, second);
    assert_eq!(first.total_checks, 2);
    assert_eq!(format!("{:.2}", first.success_rate), "50.00");
}

#[test]
fn test_report_tracks_session_progress() {
    let dir = tempdir().unwrap();
    let path = write_extract(&dir, "orders.csv", &["id", "1"]);

    let mut validator = Validator::new();
    validator.validate_file(&path, None);
    assert_eq!(validator.build_report().total_checks, 1);
    validator.check_row_count(&path, 1, None);
    assert_eq!(validator.build_report().total_checks, 2);
}

#[test]
fn test_headerless_extract_with_provided_names() {
    let dir = tempdir().unwrap();
    let path = write_extract(&dir, "raw.csv", &["1|100|25.50", "2|101|10.00"]);

    let config = ReaderConfigBuilder::new()
        .with_column_names(["order_id", "customer_id", "amount"])
        .build();
    let mut validator = Validator::with_config(config);

    assert!(validator.validate_file(&path, Some(&ORDER_COLUMNS[..])));
    assert!(validator.check_row_count(&path, 2, Some(2)));
}

#[test]
fn test_render_report_layout() {
    let dir = tempdir().unwrap();
    let path = write_extract(&dir, "orders.csv", &["id|name", "1|", "2|b"]);

    let mut validator = Validator::new();
    validator.validate_file(&path, None);
    validator.check_null_values(&path, &["name", "region"]);

    let rendered = validator.render_report();
    assert!(rendered.contains("Total Checks: 2"));
    assert!(rendered.contains("Success Rate: 50.00%"));
    assert!(rendered.contains("✗ FAILED CHECKS:"));
    assert!(rendered.contains("1 null values found in critical column 'name'"));
    // the check stopped at `name`, `region` was never looked at
    assert!(!rendered.contains("⚠ WARNINGS:"));
}
