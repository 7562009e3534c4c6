// crates/boardcheck-client/src/lib.rs
// ============================================================================
// Module: Boardcheck Client Library
// Description: HTTP client for the project-management service contract.
// Purpose: Issue documented REST calls and hand raw plus typed responses
//          to suite cases.
// Dependencies: reqwest, serde, serde_json, url
// ============================================================================

//! ## Overview
//! One shared HTTP client per run, built once with a bounded timeout and
//! reused for every sequential call. The service is an external collaborator:
//! this crate owns only the observed contract, never the backend. Responses
//! are surfaced as raw JSON plus typed decoders so cases can assert on both
//! structure and absence of fields.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod error;
pub mod http;
pub mod types;

// ============================================================================
// SECTION: Tests
// ============================================================================


// ============================================================================
// SECTION: Re-exports
// ============================================================================

pub use error::ClientError;
pub use http::ApiClient;
pub use http::ApiResponse;
pub use http::DEFAULT_TIMEOUT;
