//! Delimited extract reader
//!
//! Loads a whole extract into memory as Arrow record batches, every column
//! typed as UTF-8. Type conformance is decided later by the checks, so the
//! reader never rejects a value; it only rejects structure (unreadable file,
//! records whose field count disagrees with the header).
//!
//! ## Usage
//!
//! ```no_run
//! use extractguard_core::readers::{read_extract, ReaderConfig};
//!
//! let extract = read_extract("order_extract.csv", &ReaderConfig::default())?;
//! println!("{} rows", extract.num_rows());
//! # Ok::<(), extractguard_core::ExtractError>(())
//! ```

use arrow::csv::reader::Format;
use arrow::csv::ReaderBuilder as CsvReaderBuilder;
use arrow::datatypes::{DataType, Field, Schema};
use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use crate::errors::ExtractError;
use crate::extract::Extract;
use crate::readers::config::{HeaderMode, ReaderConfig};

/// CSV dialect shared by the first-record read and the record reader
fn csv_format(config: &ReaderConfig) -> Result<Format, ExtractError> {
    let mut format = Format::default()
        .with_delimiter(config.delimiter)
        .with_header(config.has_header());
    if let Some(null_regex) = config.null_regex()? {
        format = format.with_null_regex(null_regex);
    }
    Ok(format)
}

/// Parse the first record of the file.
///
/// With a header row these are the column names, exactly as written;
/// otherwise only their count matters. Empty when the file holds no record.
fn read_first_record(path: &Path, format: &Format) -> Result<Vec<String>, ExtractError> {
    let (schema, _) = format.infer_schema(File::open(path)?, Some(0))?;
    let mut names: Vec<String> = schema
        .fields()
        .iter()
        .map(|f| f.name().clone())
        .collect();
    // Spreadsheet exports sometimes lead with a BOM
    if let Some(first) = names.first_mut() {
        if let Some(stripped) = first.strip_prefix('\u{feff}') {
            *first = stripped.to_string();
        }
    }
    Ok(names)
}

/// Resolve the column names for the extract according to the header mode
fn resolve_columns(
    first_record: Vec<String>,
    config: &ReaderConfig,
) -> Result<Vec<String>, ExtractError> {
    match &config.header {
        HeaderMode::FirstRow => Ok(first_record),
        HeaderMode::Provided(names) => {
            if names.is_empty() {
                return Err(ExtractError::InvalidHeader(
                    "no column names were provided".to_string(),
                ));
            }
            Ok(names.clone())
        }
        HeaderMode::Generated => Ok((1..=first_record.len())
            .map(|i| format!("column_{}", i))
            .collect()),
    }
}

/// Generate a UTF-8 schema from column names
fn generate_schema(columns: &[String]) -> Schema {
    let fields: Vec<Field> = columns
        .iter()
        .map(|c| Field::new(c, DataType::Utf8, true))
        .collect();
    Schema::new(fields)
}

/// Load a delimited extract from `path`.
///
/// A file without any record yields an empty extract (no header, no records).
pub fn read_extract<P: AsRef<Path>>(
    path: P,
    config: &ReaderConfig,
) -> Result<Extract, ExtractError> {
    let path = path.as_ref();
    let format = csv_format(config)?;

    let first_record = read_first_record(path, &format)?;
    if first_record.is_empty() {
        return Ok(Extract::empty());
    }

    let columns = resolve_columns(first_record, config)?;
    let schema = Arc::new(generate_schema(&columns));

    let reader = CsvReaderBuilder::new(schema)
        .with_format(format)
        .with_batch_size(config.batch_size)
        .build(File::open(path)?)?;
    let batches = reader.collect::<Result<Vec<_>, _>>()?;

    Ok(Extract::new(columns, batches))
}
