//! Stage descriptors and the stage lifecycle.
//!
//! A [`StageSpec`] is the declaration of one stage: its name, the heading
//! printed when it begins, and the result substituted when it is skipped.
//! Constructing one registers the name (idempotently) — that is the
//! definition-time event the registry grows from.
//!
//! [`DriverScript`] is the extension point scripts implement. Its provided
//! [`DriverScript::run_stage`] wraps a unit of work with the full lifecycle:
//! begin, run or skip, then end-of-stage bookkeeping that runs exactly once
//! whether the work succeeded, was skipped, or failed.

use anyhow::Result;

use crate::driver::Driver;
use crate::error::DriverError;
use crate::ledger::StageOutcome;
use crate::registry::StageRegistry;

/// Declaration of one stage: name, heading, and skip substitute.
#[derive(Debug, Clone)]
pub struct StageSpec<R = bool> {
    name: String,
    heading: String,
    skip_result: R,
}

impl StageSpec<bool> {
    /// Declare a stage whose skip result is `true` ("treat as succeeded").
    ///
    /// # Errors
    /// Returns [`DriverError::InvalidStageName`] if `name` is not a valid
    /// identifier.
    pub fn new(
        registry: &mut StageRegistry,
        name: &str,
        heading: &str,
    ) -> Result<Self, DriverError> {
        Self::with_skip_result(registry, name, heading, true)
    }
}

impl<R: Clone> StageSpec<R> {
    /// Declare a stage with an explicit skip result.
    ///
    /// Declaring two specs with the same name is legal: the registry dedups,
    /// and each spec wraps work independently. The ledger keys on the name,
    /// so the later invocation's duration overwrites the earlier one's entry.
    ///
    /// # Errors
    /// Returns [`DriverError::InvalidStageName`] if `name` is not a valid
    /// identifier.
    pub fn with_skip_result(
        registry: &mut StageRegistry,
        name: &str,
        heading: &str,
        skip_result: R,
    ) -> Result<Self, DriverError> {
        registry.register(name)?;
        Ok(Self {
            name: name.to_string(),
            heading: heading.to_string(),
            skip_result,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn heading(&self) -> &str {
        &self.heading
    }

    pub fn skip_result(&self) -> &R {
        &self.skip_result
    }
}

/// Base trait for driver scripts.
///
/// Implementors embed a [`Driver`] and expose it through the two accessors;
/// everything else is provided. Each stage of the script is a plain method
/// that hands its body to [`DriverScript::run_stage`] together with the
/// stage's [`StageSpec`].
pub trait DriverScript {
    fn driver(&self) -> &Driver;
    fn driver_mut(&mut self) -> &mut Driver;

    /// Run one stage through the begin/run-or-skip/end lifecycle.
    ///
    /// The heading is printed unconditionally. If the stage is selected, the
    /// work runs and its result is returned; otherwise a skip notice is
    /// printed and the spec's skip result is returned. Either way — and also
    /// when the work fails — the duration is recorded under the stage name
    /// and the stage-duration line is logged before this returns. A work
    /// error is returned unchanged; nothing here retries or swallows it.
    fn run_stage<R, F>(&mut self, spec: &StageSpec<R>, work: F) -> Result<R>
    where
        Self: Sized,
        R: Clone,
        F: FnOnce(&mut Self) -> Result<R>,
    {
        self.driver_mut().begin_stage(spec.name(), spec.heading());
        let (result, outcome) = if self.driver().should_run(spec.name()) {
            match work(self) {
                Ok(value) => (Ok(value), StageOutcome::Completed),
                Err(err) => (Err(err), StageOutcome::Failed),
            }
        } else {
            self.driver_mut().skip_stage();
            (Ok(spec.skip_result().clone()), StageOutcome::Skipped)
        };
        self.driver_mut().end_stage(outcome);
        result
    }
}
