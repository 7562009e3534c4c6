// crates/boardcheck-core/src/runner.rs
// ============================================================================
// Module: Suite Runner
// Description: Sequential, failure-isolating executor for ordered cases.
// Purpose: Run every registered case to completion regardless of failures.
// Dependencies: std
// ============================================================================

//! ## Overview
//! The runner executes cases strictly in registration order; the caller is
//! responsible for ordering cases so fixture producers precede consumers.
//! Each case runs inside a result boundary: any [`CaseFailure`] becomes a
//! failed [`TestResult`] and the run continues. Cases run at most once and
//! are never retried.

use std::future::Future;
use std::pin::Pin;

use crate::failure::CaseFailure;
use crate::report::RunReport;
use crate::report::TestResult;

// ============================================================================
// SECTION: Case Types
// ============================================================================

/// Outcome of one case body: a pass note or a structured failure.
pub type CaseResult = Result<String, CaseFailure>;

/// Boxed future produced by a case body borrowing the shared context.
pub type CaseFuture<'a> = Pin<Box<dyn Future<Output = CaseResult> + 'a>>;

/// Boxed case body invoked with mutable access to the shared context.
type CaseFn<C> = Box<dyn for<'a> Fn(&'a mut C) -> CaseFuture<'a>>;

/// A named, single-shot unit of work scheduled on a runner.
pub struct TestCase<C> {
    /// Human-readable case name, reused in results and failure messages.
    name: String,
    /// The case body.
    run: CaseFn<C>,
}

impl<C> TestCase<C> {
    /// Creates a case from a name and a body returning a boxed future.
    pub fn new<F>(name: &str, run: F) -> Self
    where
        F: for<'a> Fn(&'a mut C) -> CaseFuture<'a> + 'static,
    {
        Self {
            name: name.to_string(),
            run: Box::new(run),
        }
    }

    /// Returns the case name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

// ============================================================================
// SECTION: Runner
// ============================================================================

/// Ordered, sequential case executor over a shared mutable context.
pub struct SuiteRunner<C> {
    /// Registered cases in execution order.
    cases: Vec<TestCase<C>>,
}

impl<C> Default for SuiteRunner<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> SuiteRunner<C> {
    /// Creates a runner with no registered cases.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cases: Vec::new(),
        }
    }

    /// Registers a case at the end of the execution order.
    pub fn register<F>(&mut self, name: &str, run: F)
    where
        F: for<'a> Fn(&'a mut C) -> CaseFuture<'a> + 'static,
    {
        self.cases.push(TestCase::new(name, run));
    }

    /// Returns the number of registered cases.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cases.len()
    }

    /// Returns true when no cases are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Executes every case in order and returns the aggregated report.
    ///
    /// The observer fires once per case, immediately after the case reaches
    /// a terminal outcome, so callers can stream progress. A failing case
    /// never aborts the run.
    pub async fn run(self, ctx: &mut C, observe: &mut dyn FnMut(&TestResult)) -> RunReport {
        let mut report = RunReport::new();
        for case in self.cases {
            let result = match (case.run)(ctx).await {
                Ok(message) => TestResult {
                    name: case.name,
                    passed: true,
                    message,
                },
                Err(failure) => TestResult {
                    name: case.name,
                    passed: false,
                    message: failure.to_string(),
                },
            };
            observe(&result);
            report.record(result);
        }
        report
    }
}
