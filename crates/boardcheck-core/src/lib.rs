// crates/boardcheck-core/src/lib.rs
// ============================================================================
// Module: Boardcheck Core Library
// Description: Sequential test harness primitives for API verification runs.
// Purpose: Provide fixtures, failure taxonomy, runner, and result aggregation.
// Dependencies: serde, serde_json, thiserror
// ============================================================================

//! ## Overview
//! Core harness primitives shared by every Boardcheck suite: the fixture
//! store that threads server-created entities between ordered cases, the
//! failure taxonomy that keeps every fault inside its case boundary, the
//! sequential runner, and the run report with its verdict bands.
//!
//! Invariants:
//! - A case failure never aborts the run; it becomes a failed result.
//! - Result order matches registration order.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod failure;
pub mod fixtures;
pub mod report;
pub mod runner;

// ============================================================================
// SECTION: Tests
// ============================================================================


// ============================================================================
// SECTION: Re-exports
// ============================================================================

pub use failure::CaseFailure;
pub use fixtures::FixtureRole;
pub use fixtures::FixtureStore;
pub use report::PASS_THRESHOLD;
pub use report::RunReport;
pub use report::TestResult;
pub use report::Verdict;
pub use runner::CaseResult;
pub use runner::SuiteRunner;
pub use runner::TestCase;
