//! Ordered groups of checks against one extract.
//!
//! A suite runs its checks either one after the other on the session
//! accumulator, or concurrently with each check writing to a private
//! accumulator. In the concurrent case the private accumulators are merged
//! back in declaration order, so both modes leave the session with the same
//! messages in the same order.
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::checks::Check;
use crate::engine::ResultAccumulator;
use crate::validator::{evaluate_check, with_dispatch};
use crate::Validator;

pub struct ValidationSuite {
    path: PathBuf,
    checks: Vec<Box<dyn Check>>,
}

impl ValidationSuite {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            checks: Vec::new(),
        }
    }

    pub fn with_check(mut self, check: impl Check + 'static) -> Self {
        self.checks.push(Box::new(check));
        self
    }

    pub fn add_check(&mut self, check: Box<dyn Check>) {
        self.checks.push(check);
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.checks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    /// Check names in declaration order
    pub fn check_names(&self) -> Vec<&'static str> {
        self.checks.iter().map(|c| c.name()).collect()
    }

    /// Run every check in order on the validator's session.
    ///
    /// Returns one verdict per check, in declaration order.
    pub fn run(&self, validator: &mut Validator) -> Vec<bool> {
        self.checks
            .iter()
            .map(|check| validator.run_check(&self.path, check.as_ref()))
            .collect()
    }

    /// Run the checks concurrently, then merge their messages into the
    /// validator's session in declaration order.
    pub fn run_parallel(&self, validator: &mut Validator) -> Vec<bool> {
        let config = validator.config().clone();
        let dispatch = validator.dispatch().cloned();
        let timestamp = validator.accumulator().timestamp();

        let outcomes: Vec<(bool, ResultAccumulator)> = self
            .checks
            .par_iter()
            .map(|check| {
                let mut log = ResultAccumulator::with_timestamp(timestamp);
                let passed = with_dispatch(dispatch.as_ref(), || {
                    evaluate_check(&self.path, check.as_ref(), &config, &mut log)
                });
                (passed, log)
            })
            .collect();

        let session = validator.accumulator_mut();
        outcomes
            .into_iter()
            .map(|(passed, log)| {
                session.merge(log);
                passed
            })
            .collect()
    }
}
