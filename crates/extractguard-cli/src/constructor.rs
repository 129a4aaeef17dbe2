use extractguard_core::{
    HeaderMode, LogicalType, NullCheck, ReaderConfig, ReaderConfigBuilder, RowCountCheck,
    StructureCheck, TypeCheck, TypeSchema, ValidationSuite,
};

use crate::errors::ConfigError;
use crate::parser::Extract;

pub fn construct_reader_config(extract: &Extract) -> Result<ReaderConfig, ConfigError> {
    let delimiter = match extract.delimiter.as_bytes() {
        [byte] if byte.is_ascii() => *byte,
        _ => {
            return Err(ConfigError::Delimiter {
                extract: extract.name.clone(),
                delimiter: extract.delimiter.clone(),
            })
        }
    };

    let header = match (&extract.columns, extract.header) {
        (Some(_), Some(true)) => {
            return Err(ConfigError::HeaderConflict {
                extract: extract.name.clone(),
            })
        }
        (Some(columns), _) => HeaderMode::Provided(columns.clone()),
        (None, Some(false)) => HeaderMode::Generated,
        (None, _) => HeaderMode::FirstRow,
    };

    Ok(ReaderConfigBuilder::new()
        .with_delimiter(delimiter)
        .with_header(header)
        .build())
}

fn construct_type_schema(extract: &Extract) -> Result<TypeSchema, ConfigError> {
    let mut schema = TypeSchema::new();
    for entry in &extract.types {
        let logical_type: LogicalType =
            entry
                .datatype
                .parse()
                .map_err(|_| ConfigError::UnknownType {
                    extract: extract.name.clone(),
                    column_name: entry.column.clone(),
                    type_name: entry.datatype.clone(),
                })?;
        schema.insert(entry.column.clone(), logical_type);
    }
    Ok(schema)
}

/// Build the checks declared for one extract.
///
/// The structural and row-count checks always run; the null and type checks
/// only when columns are declared for them.
pub fn construct_suite(extract: &Extract) -> Result<ValidationSuite, ConfigError> {
    let min_rows = extract.min_rows.unwrap_or(1);
    if let Some(max_rows) = extract.max_rows {
        if min_rows > max_rows {
            return Err(ConfigError::RowBounds {
                extract: extract.name.clone(),
                min_rows,
                max_rows,
            });
        }
    }

    let mut structure = StructureCheck::new();
    if let Some(columns) = &extract.expected_columns {
        structure = structure.with_expected_columns(columns.iter().cloned());
    }
    let mut suite = ValidationSuite::new(&extract.path).with_check(structure);

    if !extract.critical_columns.is_empty() {
        let critical_columns = extract.critical_columns.iter().cloned();
        suite.add_check(Box::new(NullCheck::new(critical_columns)));
    }

    let schema = construct_type_schema(extract)?;
    if !schema.is_empty() {
        suite.add_check(Box::new(TypeCheck::new(schema)));
    }

    suite.add_check(Box::new(RowCountCheck::new(min_rows, extract.max_rows)));
    Ok(suite)
}
