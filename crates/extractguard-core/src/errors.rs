use thiserror::Error;

/// Operational faults raised while loading an extract or preparing a check.
///
/// These never escape a check call: the check converts them into a failure
/// message and logs the full error.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// The extract could not be opened or read
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// The Arrow CSV reader or a cast kernel rejected the data
    /// (e.g. a record with the wrong number of fields)
    #[error("Arrow error: {0}")]
    ArrowError(#[from] arrow::error::ArrowError),

    /// The header row could not be turned into a schema
    #[error("Invalid header: {0}")]
    InvalidHeader(String),

    /// The type name is not one of integer, float or timestamp
    #[error("Unknown logical type '{0}'. Supported: integer, float, timestamp")]
    UnknownType(String),

    /// A null marker could not be compiled into a matcher
    #[error("Invalid null marker: {0}")]
    InvalidNullMarker(#[from] regex::Error),
}
