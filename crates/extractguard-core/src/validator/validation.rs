//! Validation session.
//!
//! This module provides the main entry point (`Validator`): one session that
//! runs independent checks against delimited extracts and accumulates their
//! outcomes into a single report.

use std::path::Path;

use tracing::{error, info, info_span, Dispatch};

use crate::checks::{Check, NullCheck, RowCountCheck, StructureCheck, TypeCheck};
use crate::engine::ResultAccumulator;
use crate::readers::{read_extract, ReaderConfig};
use crate::report::ValidationReport;
use crate::types::TypeSchema;

/// Run `f` under `dispatch` when one is configured, otherwise under the
/// thread's current default subscriber.
pub(crate) fn with_dispatch<T>(dispatch: Option<&Dispatch>, f: impl FnOnce() -> T) -> T {
    match dispatch {
        Some(dispatch) => tracing::dispatcher::with_default(dispatch, f),
        None => f(),
    }
}

/// Load the extract at `path` and evaluate `check` on it.
///
/// Load errors and faults raised by the check are converted into a failure
/// message and logged; they never escape.
pub(crate) fn evaluate_check(
    path: &Path,
    check: &dyn Check,
    config: &ReaderConfig,
    log: &mut ResultAccumulator,
) -> bool {
    let path_str = path.display().to_string();
    let span = info_span!("check", check = check.name(), path = path_str.as_str());
    let _guard = span.enter();

    let outcome = read_extract(path, config).and_then(|extract| {
        info!(
            rows = extract.num_rows(),
            columns = extract.header().len(),
            "loaded extract"
        );
        check.evaluate(&extract, &path_str, log)
    });

    match outcome {
        Ok(passed) => {
            info!(passed, "check finished");
            passed
        }
        Err(e) => {
            error!(error = %e, details = ?e, "check aborted");
            log.record_failure(check.fault_message(&path_str, &e));
            false
        }
    }
}

/// A validation session.
///
/// Owns the accumulator every check appends to. Checks never stop the
/// session: each returns its own verdict and the caller decides whether to
/// carry on.
pub struct Validator {
    accumulator: ResultAccumulator,
    config: ReaderConfig,
    dispatch: Option<Dispatch>,
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator {
    /// Create a new session reading `|`-delimited extracts with a header row
    pub fn new() -> Self {
        Self::with_config(ReaderConfig::default())
    }

    pub fn with_config(config: ReaderConfig) -> Self {
        Self {
            accumulator: ResultAccumulator::new(),
            config,
            dispatch: None,
        }
    }

    /// Route this session's log events to `dispatch` instead of the global
    /// subscriber.
    pub fn with_dispatch(self, dispatch: Dispatch) -> Self {
        Self {
            dispatch: Some(dispatch),
            ..self
        }
    }

    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    pub fn accumulator(&self) -> &ResultAccumulator {
        &self.accumulator
    }

    /// End the session, keeping its messages.
    pub fn into_accumulator(self) -> ResultAccumulator {
        self.accumulator
    }

    pub(crate) fn dispatch(&self) -> Option<&Dispatch> {
        self.dispatch.as_ref()
    }

    pub(crate) fn accumulator_mut(&mut self) -> &mut ResultAccumulator {
        &mut self.accumulator
    }

    /// Run any [`Check`] against the extract at `path`.
    pub fn run_check<P: AsRef<Path>>(&mut self, path: P, check: &dyn Check) -> bool {
        let path = path.as_ref();
        let Self {
            accumulator,
            config,
            dispatch,
        } = self;
        with_dispatch(dispatch.as_ref(), || {
            evaluate_check(path, check, config, accumulator)
        })
    }

    /// Fail on an empty extract and, when `expected_columns` is given, on any
    /// header that is not exactly `expected_columns`.
    pub fn validate_file<P: AsRef<Path>>(
        &mut self,
        path: P,
        expected_columns: Option<&[&str]>,
    ) -> bool {
        let mut check = StructureCheck::new();
        if let Some(columns) = expected_columns {
            check = check.with_expected_columns(columns.iter().copied());
        }
        self.run_check(path, &check)
    }

    /// Fail on the first critical column, in the given order, holding a null.
    pub fn check_null_values<P: AsRef<Path>>(
        &mut self,
        path: P,
        critical_columns: &[&str],
    ) -> bool {
        self.run_check(path, &NullCheck::new(critical_columns.iter().copied()))
    }

    /// Fail on the first declared column holding a value that does not parse
    /// as its declared type.
    pub fn check_data_types<P: AsRef<Path>>(&mut self, path: P, schema: &TypeSchema) -> bool {
        self.run_check(path, &TypeCheck::new(schema.clone()))
    }

    /// Fail when the row count is below `min_rows` or above `max_rows`.
    pub fn check_row_count<P: AsRef<Path>>(
        &mut self,
        path: P,
        min_rows: usize,
        max_rows: Option<usize>,
    ) -> bool {
        self.run_check(path, &RowCountCheck::new(min_rows, max_rows))
    }

    pub fn build_report(&self) -> ValidationReport {
        ValidationReport::from_accumulator(&self.accumulator)
    }

    /// The report in its console layout.
    pub fn render_report(&self) -> String {
        self.build_report().to_string()
    }

    pub fn print_report(&self) {
        println!("{}", self.render_report());
    }
}
