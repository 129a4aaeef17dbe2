pub mod formatters;

use extractguard_core::ValidationReport;
pub use formatters::{json::JsonFormatter, stdout::StdOutFormatter};

/// Verdict of one check run against one extract
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    pub check: &'static str,
    pub passed: bool,
}

/// Receives the progress of a validation run and presents it.
pub trait Reporter {
    fn on_start(&self);
    fn on_extract_start(&self, current: usize, total: usize, name: &str);
    fn on_extract_result(&mut self, name: &str, path: &str, outcomes: &[CheckOutcome]);
    fn on_report(&mut self, report: &ValidationReport);
}
