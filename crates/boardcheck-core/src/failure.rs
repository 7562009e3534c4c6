// crates/boardcheck-core/src/failure.rs
// ============================================================================
// Module: Case Failure Taxonomy
// Description: Structured failure reasons for individual harness cases.
// Purpose: Convert every fault into a recordable, non-fatal case outcome.
// Dependencies: thiserror
// ============================================================================

//! ## Overview
//! Every fault a case can hit (connection loss, timeout, a contract
//! violation in the response, or a missing prerequisite fixture) maps onto
//! one [`CaseFailure`] variant. Failures carry human-readable diagnostics and
//! are recorded, never propagated past the case boundary.

use thiserror::Error;

use crate::fixtures::FixtureRole;

// ============================================================================
// SECTION: Failure Types
// ============================================================================

/// Failure reasons for a single harness case.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Clone, Error)]
pub enum CaseFailure {
    /// The HTTP exchange failed at the connection level.
    #[error("network error: {0}")]
    Network(String),
    /// The HTTP exchange exceeded the configured client timeout.
    #[error("request timed out: {0}")]
    Timeout(String),
    /// A response arrived but violated the expected contract.
    #[error("assertion failed: {0}")]
    Assertion(String),
    /// A prerequisite fixture was never created by an earlier case.
    #[error("missing fixture: {0} was not created by an earlier case")]
    MissingFixture(FixtureRole),
}

impl CaseFailure {
    /// Builds an assertion failure for an unexpected status code.
    #[must_use]
    pub fn status(endpoint: &str, expected: u16, actual: u16, body: &str) -> Self {
        Self::Assertion(format!("{endpoint}: expected status {expected}, got {actual} - {body}"))
    }
}
