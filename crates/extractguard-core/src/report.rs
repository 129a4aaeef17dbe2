use std::fmt;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::engine::ResultAccumulator;

const BANNER_WIDTH: usize = 60;

/// Snapshot of a validation session, derived from its accumulator.
///
/// Recomputed on every request, so it always reflects the accumulator at the
/// time it was built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub timestamp: DateTime<Local>,
    pub total_checks: usize,
    pub success_rate: f64,
    pub passed: Vec<String>,
    pub failed: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn from_accumulator(acc: &ResultAccumulator) -> Self {
        let total_checks = acc.passed().len() + acc.failed().len();
        let success_rate = if total_checks > 0 {
            acc.passed().len() as f64 / total_checks as f64 * 100.
        } else {
            0.0
        };

        Self {
            timestamp: acc.timestamp(),
            total_checks,
            success_rate,
            passed: acc.passed().to_vec(),
            failed: acc.failed().to_vec(),
            warnings: acc.warnings().to_vec(),
        }
    }

    /// True when no check failed. Warnings do not count.
    pub fn is_passed(&self) -> bool {
        self.failed.is_empty()
    }
}

impl From<&ResultAccumulator> for ValidationReport {
    fn from(acc: &ResultAccumulator) -> Self {
        Self::from_accumulator(acc)
    }
}

fn write_section(f: &mut fmt::Formatter<'_>, title: &str, messages: &[String]) -> fmt::Result {
    writeln!(f)?;
    writeln!(f, "{}", title)?;
    for message in messages {
        writeln!(f, "  • {}", message)?;
    }
    Ok(())
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let banner = "=".repeat(BANNER_WIDTH);

        writeln!(f)?;
        writeln!(f, "{}", banner)?;
        writeln!(f, "DATA VALIDATION REPORT")?;
        writeln!(f, "{}", banner)?;
        writeln!(
            f,
            "Timestamp: {}",
            self.timestamp.format("%Y-%m-%dT%H:%M:%S%.6f")
        )?;
        writeln!(f, "Total Checks: {}", self.total_checks)?;
        writeln!(f, "Success Rate: {:.2}%", self.success_rate)?;

        write_section(f, "✓ PASSED CHECKS:", &self.passed)?;
        if !self.failed.is_empty() {
            write_section(f, "✗ FAILED CHECKS:", &self.failed)?;
        }
        if !self.warnings.is_empty() {
            write_section(f, "⚠ WARNINGS:", &self.warnings)?;
        }

        writeln!(f, "{}", banner)
    }
}
