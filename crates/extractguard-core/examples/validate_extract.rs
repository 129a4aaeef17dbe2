//! Validate one `|`-delimited extract and print the report.
//!
//! Run with:
//! ```bash
//! cargo run --example validate_extract -- /path/to/order_extract.csv
//! ```

use extractguard_core::{LogicalType, TypeSchema, Validator};
use std::env;
use std::time::Instant;

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <extract_path>", args[0]);
        std::process::exit(1);
    }
    let path = &args[1];

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(tracing::Level::INFO)
        .init();

    let schema = TypeSchema::new()
        .with_column("order_id", LogicalType::Integer)
        .with_column("amount", LogicalType::Float)
        .with_column("order_date", LogicalType::Timestamp);

    let start = Instant::now();
    let mut validator = Validator::new();
    let columns = ["order_id", "customer_id", "amount", "order_date"];
    validator.validate_file(path, Some(&columns[..]));
    validator.check_null_values(path, &["order_id", "customer_id"]);
    validator.check_data_types(path, &schema);
    validator.check_row_count(path, 1, Some(1_000_000));

    validator.print_report();
    eprintln!("Validated in {:.2?}", start.elapsed());

    if !validator.build_report().is_passed() {
        std::process::exit(1);
    }
}
