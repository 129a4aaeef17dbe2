//! Data-quality gate for delimited extracts.
//!
//! A [`Validator`] session runs independent checks (structure, nulls in
//! critical columns, column types, row count) against an extract written by
//! an upstream extraction step, and summarizes the outcomes in a
//! [`ValidationReport`] that tells the pipeline whether the extract is safe
//! to load.
//!
//! ```no_run
//! use extractguard_core::Validator;
//!
//! let mut validator = Validator::new();
//! validator.validate_file("order_extract.csv", None);
//! validator.check_null_values("order_extract.csv", &["order_id", "customer_id"]);
//! validator.check_row_count("order_extract.csv", 1, None);
//! validator.print_report();
//! ```
pub mod checks;
pub mod engine;
pub mod errors;
pub mod extract;
pub mod readers;
pub mod report;
pub mod types;
pub mod utils;
pub mod validator;

pub use checks::{Check, NullCheck, RowCountCheck, StructureCheck, TypeCheck};
pub use engine::{ResultAccumulator, ValidationSuite};
pub use errors::ExtractError;
pub use extract::Extract;
pub use readers::{HeaderMode, ReaderConfig, ReaderConfigBuilder};
pub use report::ValidationReport;
pub use types::{LogicalType, TypeSchema};
pub use validator::Validator;
