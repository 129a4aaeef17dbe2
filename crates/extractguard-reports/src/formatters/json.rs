use chrono::Local;
use extractguard_core::ValidationReport;
use serde::{Deserialize, Serialize};
use serde_json::Error;

use crate::{CheckOutcome, Reporter};

#[derive(Serialize, Deserialize)]
pub struct JsonFormatter {
    version: String,
    timestamp: String,
    passed: bool,
    extracts: Vec<ExtractFormatter>,
    report: Option<ValidationReport>,
}

#[derive(Serialize, Deserialize)]
struct ExtractFormatter {
    name: String,
    path: String,
    pass: bool,
    checks: Vec<CheckFormatter>,
}

#[derive(Serialize, Deserialize)]
struct CheckFormatter {
    name: String,
    pass: bool,
}

impl JsonFormatter {
    pub fn new(version: String) -> Self {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        Self {
            version,
            timestamp,
            passed: true,
            extracts: Vec::new(),
            report: None,
        }
    }

    /// Timestamp suitable for a file name
    pub fn file_stamp(&self) -> String {
        self.timestamp.replace([' ', ':'], "-")
    }

    pub fn to_json(&self) -> Result<String, Error> {
        serde_json::to_string_pretty(self)
    }
}

impl Reporter for JsonFormatter {
    fn on_start(&self) {}

    fn on_extract_start(&self, _current: usize, _total: usize, _name: &str) {}

    fn on_extract_result(&mut self, name: &str, path: &str, outcomes: &[CheckOutcome]) {
        let checks: Vec<CheckFormatter> = outcomes
            .iter()
            .map(|o| CheckFormatter {
                name: o.check.to_string(),
                pass: o.passed,
            })
            .collect();
        let pass = checks.iter().all(|c| c.pass);
        self.passed &= pass;
        self.extracts.push(ExtractFormatter {
            name: name.to_string(),
            path: path.to_string(),
            pass,
            checks,
        });
    }

    fn on_report(&mut self, report: &ValidationReport) {
        self.passed &= report.is_passed();
        self.report = Some(report.clone());
    }
}
