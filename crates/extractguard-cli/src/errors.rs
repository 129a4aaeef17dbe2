use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file contains no extract")]
    NoExtract,
    #[error("Extract '{extract}': delimiter must be a single ASCII character, got '{delimiter}'")]
    Delimiter { extract: String, delimiter: String },
    #[error("Extract '{extract}': 'columns' describes a headerless file but 'header' is true")]
    HeaderConflict { extract: String },
    #[error("Extract '{extract}': column '{column_name}' has unknown type '{type_name}'. Supported: integer, float, timestamp")]
    UnknownType {
        extract: String,
        column_name: String,
        type_name: String,
    },
    #[error("Extract '{extract}': min_rows ({min_rows}) is greater than max_rows ({max_rows})")]
    RowBounds {
        extract: String,
        min_rows: usize,
        max_rows: usize,
    },
    #[error("Extract names must be unique, '{extract}' appears more than once")]
    DuplicateExtract { extract: String },
}
