// crates/boardcheck-suites/src/context.rs
// ============================================================================
// Module: Suite Context
// Description: Shared mutable state threaded through a suite run.
// Purpose: Hold the single HTTP client and the fixture store.
// Dependencies: boardcheck-core, boardcheck-client
// ============================================================================

//! ## Overview
//! One context per run: the shared client built once with its timeout, and
//! the fixture store that later cases read. Execution is sequential, so the
//! context is handed to each case by mutable borrow.

use std::time::SystemTime;
use std::time::UNIX_EPOCH;

use boardcheck_client::ApiClient;
use boardcheck_core::FixtureStore;

// ============================================================================
// SECTION: Context
// ============================================================================

/// Shared state for one suite run.
pub struct SuiteContext {
    /// Client for the service under test, reused by every case.
    pub api: ApiClient,
    /// Entities created by earlier cases.
    pub fixtures: FixtureStore,
}

impl SuiteContext {
    /// Creates a fresh context around a configured client.
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            fixtures: FixtureStore::new(),
        }
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Builds a run-unique email address so repeated runs against a persistent
/// backend never collide on the duplicate-email check.
#[must_use]
pub fn unique_email(label: &str) -> String {
    let nanos = SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_nanos();
    format!("{label}.{nanos}@example.com")
}
