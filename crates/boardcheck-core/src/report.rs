// crates/boardcheck-core/src/report.rs
// ============================================================================
// Module: Run Report
// Description: Result aggregation, success rate, and verdict bands.
// Purpose: Accumulate case results and gate the overall run outcome.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! The run report collects one [`TestResult`] per executed case, keeps
//! pass/fail counters and ordered failure messages, and computes the final
//! success rate and verdict. An empty run reports a 0% rate rather than a
//! division error.

use serde::Serialize;

// ============================================================================
// SECTION: Thresholds
// ============================================================================

/// Success-rate percentage at or above which a run counts as passing.
pub const PASS_THRESHOLD: f64 = 75.0;

/// Success-rate percentage for the excellent band.
const EXCELLENT_THRESHOLD: f64 = 90.0;

/// Success-rate percentage for the needs-work band.
const NEEDS_WORK_THRESHOLD: f64 = 50.0;

// ============================================================================
// SECTION: Result Types
// ============================================================================

/// Outcome of a single executed case.
#[derive(Debug, Clone, Serialize)]
pub struct TestResult {
    /// Case name as registered with the runner.
    pub name: String,
    /// True when every assertion in the case held.
    pub passed: bool,
    /// Diagnostic message: pass note or failure description.
    pub message: String,
}

/// Qualitative verdict bands over the final success rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Verdict {
    /// Rate at or above 90%.
    Excellent,
    /// Rate at or above 75%; the run passes.
    Good,
    /// Rate at or above 50%.
    NeedsWork,
    /// Rate below 50%, including empty runs.
    Critical,
}

impl Verdict {
    /// Maps a success-rate percentage onto a verdict band.
    #[must_use]
    pub fn from_rate(rate: f64) -> Self {
        if rate >= EXCELLENT_THRESHOLD {
            Self::Excellent
        } else if rate >= PASS_THRESHOLD {
            Self::Good
        } else if rate >= NEEDS_WORK_THRESHOLD {
            Self::NeedsWork
        } else {
            Self::Critical
        }
    }

    /// Returns the short verdict label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::NeedsWork => "needs-work",
            Self::Critical => "critical",
        }
    }
}

// ============================================================================
// SECTION: Report
// ============================================================================

/// Aggregated results for one harness run.
#[derive(Debug, Default, Serialize)]
pub struct RunReport {
    /// Every recorded result, in execution order.
    results: Vec<TestResult>,
    /// Count of passing cases.
    passed: u32,
    /// Count of failing cases.
    failed: u32,
    /// Failure messages formatted as `"{name}: {message}"`, in order.
    failures: Vec<String>,
}

impl RunReport {
    /// Creates an empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one case result, updating counters and the failure list.
    pub fn record(&mut self, result: TestResult) {
        if result.passed {
            self.passed = self.passed.saturating_add(1);
        } else {
            self.failed = self.failed.saturating_add(1);
            self.failures.push(format!("{}: {}", result.name, result.message));
        }
        self.results.push(result);
    }

    /// Returns the recorded results in execution order.
    #[must_use]
    pub fn results(&self) -> &[TestResult] {
        &self.results
    }

    /// Returns the ordered failure messages.
    #[must_use]
    pub fn failures(&self) -> &[String] {
        &self.failures
    }

    /// Returns the count of passing cases.
    #[must_use]
    pub const fn passed(&self) -> u32 {
        self.passed
    }

    /// Returns the count of failing cases.
    #[must_use]
    pub const fn failed(&self) -> u32 {
        self.failed
    }

    /// Returns the total number of recorded cases.
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.passed.saturating_add(self.failed)
    }

    /// Returns the success rate as a percentage in `[0, 100]`.
    ///
    /// An empty run reports 0 rather than an undefined division.
    #[must_use]
    pub fn success_rate(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        f64::from(self.passed) * 100.0 / f64::from(total)
    }

    /// Returns the verdict band for the current success rate.
    #[must_use]
    pub fn verdict(&self) -> Verdict {
        Verdict::from_rate(self.success_rate())
    }

    /// Returns true when the run meets the overall pass threshold.
    #[must_use]
    pub fn meets_threshold(&self) -> bool {
        self.success_rate() >= PASS_THRESHOLD
    }
}
