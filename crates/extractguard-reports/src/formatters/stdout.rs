use extractguard_core::ValidationReport;

use crate::{CheckOutcome, Reporter};

pub struct StdOutFormatter {
    intro: String,
    intro_len: usize,
}

impl StdOutFormatter {
    pub fn new(version: String) -> Self {
        let s = format!("ExtractGuard v{} - Extract Validation", version);
        let n = s.chars().count();
        Self {
            intro: s,
            intro_len: n,
        }
    }

    /// One line per extract: how many of its checks passed
    pub fn format_extract_line(name: &str, path: &str, outcomes: &[CheckOutcome]) -> String {
        let passed = outcomes.iter().filter(|o| o.passed).count();
        let status = if passed == outcomes.len() {
            "PASSED"
        } else {
            "FAILED"
        };
        let failing: Vec<&str> = outcomes
            .iter()
            .filter(|o| !o.passed)
            .map(|o| o.check)
            .collect();

        let mut line = format!(
            "  {} ({}) - {}/{} checks passed - {}",
            name,
            path,
            passed,
            outcomes.len(),
            status
        );
        if !failing.is_empty() {
            line.push_str(&format!(" [{}]", failing.join(", ")));
        }
        line
    }
}

impl Reporter for StdOutFormatter {
    fn on_start(&self) {
        println!("{}", self.intro);
        println!("{}", "=".repeat(self.intro_len));
    }

    fn on_extract_start(&self, current: usize, total: usize, name: &str) {
        println!("  [{}/{}] {}", current, total, name);
    }

    fn on_extract_result(&mut self, name: &str, path: &str, outcomes: &[CheckOutcome]) {
        println!("{}", Self::format_extract_line(name, path, outcomes));
    }

    fn on_report(&mut self, report: &ValidationReport) {
        print!("{}", report);
    }
}
