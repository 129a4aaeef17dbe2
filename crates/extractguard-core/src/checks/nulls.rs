use tracing::warn;

use crate::{checks::Check, engine::ResultAccumulator, errors::ExtractError, extract::Extract};

/// No null values allowed in the critical columns.
///
/// Columns are inspected in the order given and the first column holding a
/// null fails the check; the remaining columns are not looked at. A critical
/// column missing from the header is only a warning.
#[derive(Debug, Clone)]
pub struct NullCheck {
    critical_columns: Vec<String>,
}

impl NullCheck {
    pub fn new<I, S>(critical_columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            critical_columns: critical_columns.into_iter().map(Into::into).collect(),
        }
    }

    pub fn critical_columns(&self) -> &[String] {
        &self.critical_columns
    }
}

impl Check for NullCheck {
    fn name(&self) -> &'static str {
        "NullCheck"
    }

    fn evaluate(
        &self,
        extract: &Extract,
        path: &str,
        log: &mut ResultAccumulator,
    ) -> Result<bool, ExtractError> {
        for column in &self.critical_columns {
            let Some(null_count) = extract.null_count(column) else {
                warn!(path, column = column.as_str(), "critical column not found");
                log.record_warning(format!("Column {} not found in {}", column, path));
                continue;
            };

            if null_count > 0 {
                log.record_failure(format!(
                    "{} null values found in critical column '{}' in {}",
                    null_count, column, path
                ));
                return Ok(false);
            }
        }

        log.record_pass(format!("No null values in critical columns for {}", path));
        Ok(true)
    }

    fn fault_message(&self, _path: &str, error: &ExtractError) -> String {
        format!("Error checking nulls: {}", error)
    }
}
