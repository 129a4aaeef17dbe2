//! Check outcome accumulation.
//!
//! `ResultAccumulator` is the append-only log a validation session writes
//! into: every check appends pass, failure or warning messages, and nothing
//! ever removes or rewrites one.
use chrono::{DateTime, Local};

#[derive(Debug, Clone)]
pub struct ResultAccumulator {
    timestamp: DateTime<Local>,
    passed: Vec<String>,
    failed: Vec<String>,
    warnings: Vec<String>,
}

impl Default for ResultAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultAccumulator {
    /// Create an empty accumulator stamped with the current time.
    pub fn new() -> Self {
        Self::with_timestamp(Local::now())
    }

    pub fn with_timestamp(timestamp: DateTime<Local>) -> Self {
        Self {
            timestamp,
            passed: Vec::new(),
            failed: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn record_pass(&mut self, message: impl Into<String>) {
        self.passed.push(message.into());
    }

    pub fn record_failure(&mut self, message: impl Into<String>) {
        self.failed.push(message.into());
    }

    pub fn record_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    pub fn timestamp(&self) -> DateTime<Local> {
        self.timestamp
    }

    pub fn passed(&self) -> &[String] {
        &self.passed
    }

    pub fn failed(&self) -> &[String] {
        &self.failed
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Append every message of `other` after the ones already recorded.
    ///
    /// The timestamp of `self` is kept.
    pub fn merge(&mut self, other: ResultAccumulator) {
        self.passed.extend(other.passed);
        self.failed.extend(other.failed);
        self.warnings.extend(other.warnings);
    }
}
