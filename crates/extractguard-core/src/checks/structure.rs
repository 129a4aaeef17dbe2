use tracing::debug;

use crate::{checks::Check, engine::ResultAccumulator, errors::ExtractError, extract::Extract};

/// File non-emptiness and, optionally, exact header shape.
#[derive(Debug, Clone, Default)]
pub struct StructureCheck {
    expected_columns: Option<Vec<String>>,
}

impl StructureCheck {
    pub fn new() -> Self {
        Self::default()
    }

    /// Require the header to equal `columns`: same names, same order, same count.
    pub fn with_expected_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.expected_columns = Some(columns.into_iter().map(Into::into).collect());
        self
    }

    pub fn expected_columns(&self) -> Option<&[String]> {
        self.expected_columns.as_deref()
    }
}

impl Check for StructureCheck {
    fn name(&self) -> &'static str {
        "StructureCheck"
    }

    fn evaluate(
        &self,
        extract: &Extract,
        path: &str,
        log: &mut ResultAccumulator,
    ) -> Result<bool, ExtractError> {
        let rows = extract.num_rows();
        if rows == 0 {
            log.record_failure(format!("File {} is empty", path));
            return Ok(false);
        }
        log.record_pass(format!("File {} contains {} rows", path, rows));

        if let Some(expected) = &self.expected_columns {
            if extract.header() != expected.as_slice() {
                debug!(path, expected = ?expected, found = ?extract.header(), "header mismatch");
                log.record_failure(format!(
                    "Column mismatch in {}. Expected: {:?}, Got: {:?}",
                    path,
                    expected,
                    extract.header()
                ));
                return Ok(false);
            }
            log.record_pass(format!("Column structure validated for {}", path));
        }

        Ok(true)
    }

    fn fault_message(&self, path: &str, error: &ExtractError) -> String {
        format!("Error reading {}: {}", path, error)
    }
}
