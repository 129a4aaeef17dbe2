//! Checks run against a loaded extract.
//!
//! Each check describes what "valid" means for one aspect of an extract and
//! writes its outcome into a [`ResultAccumulator`]. A check returns
//! `Ok(false)` for a validation failure; `Err` is reserved for operational
//! faults, which the [`Validator`](crate::Validator) turns into failure
//! messages.
pub mod data_types;
pub mod nulls;
pub mod row_count;
pub mod structure;

pub use data_types::TypeCheck;
pub use nulls::NullCheck;
pub use row_count::RowCountCheck;
pub use structure::StructureCheck;

use crate::{engine::ResultAccumulator, errors::ExtractError, extract::Extract};

pub trait Check: Send + Sync {
    /// Returns the name of the check.
    fn name(&self) -> &'static str;

    /// Evaluate the check on `extract`, appending its messages to `log`.
    fn evaluate(
        &self,
        extract: &Extract,
        path: &str,
        log: &mut ResultAccumulator,
    ) -> Result<bool, ExtractError>;

    /// Failure message recorded when the extract cannot be loaded or the
    /// check hits an operational fault.
    fn fault_message(&self, path: &str, error: &ExtractError) -> String;
}
