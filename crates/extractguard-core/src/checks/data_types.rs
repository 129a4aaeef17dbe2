use arrow::{compute, datatypes::DataType, error::ArrowError};
use arrow_array::{Array, StringArray};
use tracing::{debug, warn};

use crate::{
    checks::Check,
    engine::ResultAccumulator,
    errors::ExtractError,
    extract::Extract,
    types::{LogicalType, TypeSchema},
    utils::date_parser::parse_timestamp_column,
};

/// Every value of each declared column must parse as its logical type.
///
/// All-or-nothing per column: a single unparseable value fails the whole
/// check, and columns after the first offending one are not inspected.
/// Nulls are not type errors.
#[derive(Debug, Clone)]
pub struct TypeCheck {
    schema: TypeSchema,
}

impl TypeCheck {
    pub fn new(schema: TypeSchema) -> Self {
        Self { schema }
    }

    pub fn schema(&self) -> &TypeSchema {
        &self.schema
    }
}

/// Null count after casting the trimmed values of `array` to `to_type`
fn cast_nulls(array: &StringArray, to_type: &DataType) -> Result<usize, ArrowError> {
    let trimmed: StringArray = array.iter().map(|v| v.map(str::trim)).collect();
    Ok(compute::cast(&trimmed, to_type)?.null_count())
}

/// Number of non-null values in `array` that do not parse as `logical_type`.
///
/// Surrounding whitespace is ignored for every type.
pub fn count_unparseable(
    array: &dyn Array,
    logical_type: LogicalType,
) -> Result<usize, ExtractError> {
    let strings = array
        .as_any()
        .downcast_ref::<StringArray>()
        .ok_or_else(|| {
            ArrowError::CastError(format!(
                "expected a UTF-8 column, found {}",
                array.data_type()
            ))
        })?;

    let base_nulls = strings.null_count();
    let parsed_nulls = match logical_type {
        LogicalType::Integer => cast_nulls(strings, &DataType::Int64)?,
        LogicalType::Float => cast_nulls(strings, &DataType::Float64)?,
        LogicalType::Timestamp => parse_timestamp_column(strings).null_count(),
    };
    Ok(parsed_nulls.saturating_sub(base_nulls))
}

impl Check for TypeCheck {
    fn name(&self) -> &'static str {
        "TypeCheck"
    }

    fn evaluate(
        &self,
        extract: &Extract,
        path: &str,
        log: &mut ResultAccumulator,
    ) -> Result<bool, ExtractError> {
        for (column, logical_type) in self.schema.iter() {
            let Some(chunks) = extract.column_chunks(column) else {
                warn!(path, column, "typed column not found");
                log.record_warning(format!("Column {} not found in {}", column, path));
                continue;
            };

            let mut errors = 0;
            for chunk in &chunks {
                errors += count_unparseable(chunk.as_ref(), logical_type)?;
            }

            if errors > 0 {
                debug!(path, column, %logical_type, errors, "unparseable values");
                log.record_failure(format!(
                    "Column {} in {} cannot be converted to {}",
                    column, path, logical_type
                ));
                return Ok(false);
            }
        }

        log.record_pass(format!("Data types validated for {}", path));
        Ok(true)
    }

    fn fault_message(&self, _path: &str, error: &ExtractError) -> String {
        format!("Error checking data types: {}", error)
    }
}
