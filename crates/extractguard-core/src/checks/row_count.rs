use crate::{checks::Check, engine::ResultAccumulator, errors::ExtractError, extract::Extract};

/// Row count within `[min_rows, max_rows]`.
///
/// `max_rows = None` means no upper bound; `Some(0)` is a real bound of zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowCountCheck {
    min_rows: usize,
    max_rows: Option<usize>,
}

impl Default for RowCountCheck {
    fn default() -> Self {
        Self {
            min_rows: 1,
            max_rows: None,
        }
    }
}

impl RowCountCheck {
    pub fn new(min_rows: usize, max_rows: Option<usize>) -> Self {
        Self { min_rows, max_rows }
    }

    pub fn with_min_rows(self, min_rows: usize) -> Self {
        Self { min_rows, ..self }
    }

    pub fn with_max_rows(self, max_rows: usize) -> Self {
        Self {
            max_rows: Some(max_rows),
            ..self
        }
    }

    pub fn min_rows(&self) -> usize {
        self.min_rows
    }

    pub fn max_rows(&self) -> Option<usize> {
        self.max_rows
    }
}

impl Check for RowCountCheck {
    fn name(&self) -> &'static str {
        "RowCountCheck"
    }

    fn evaluate(
        &self,
        extract: &Extract,
        path: &str,
        log: &mut ResultAccumulator,
    ) -> Result<bool, ExtractError> {
        let rows = extract.num_rows();

        if rows < self.min_rows {
            log.record_failure(format!(
                "{} has {} rows, below minimum threshold of {}",
                path, rows, self.min_rows
            ));
            return Ok(false);
        }

        if let Some(max_rows) = self.max_rows {
            if rows > max_rows {
                log.record_failure(format!(
                    "{} has {} rows, above maximum threshold of {}",
                    path, rows, max_rows
                ));
                return Ok(false);
            }
        }

        log.record_pass(format!("Row count {} is within threshold for {}", rows, path));
        Ok(true)
    }

    fn fault_message(&self, _path: &str, error: &ExtractError) -> String {
        format!("Error checking row count: {}", error)
    }
}
