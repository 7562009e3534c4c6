// crates/boardcheck-client/src/error.rs
// ============================================================================
// Module: Client Errors
// Description: Error taxonomy for HTTP exchanges with the service.
// Purpose: Map transport faults into the harness failure taxonomy.
// Dependencies: thiserror, reqwest
// ============================================================================

//! ## Overview
//! Connection-level faults split into network and timeout variants so the
//! harness can report them distinctly; a response that arrives but cannot be
//! parsed is a contract violation, not a transport fault. Configuration
//! errors only occur while building the client and are fatal to the run.

use boardcheck_core::CaseFailure;
use thiserror::Error;

// ============================================================================
// SECTION: Error Types
// ============================================================================

/// Errors raised by the service client.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The client could not be constructed (bad base URL, builder failure).
    #[error("client configuration error: {0}")]
    Config(String),
    /// The HTTP exchange failed before a response arrived.
    #[error("network error: {0}")]
    Network(String),
    /// The HTTP exchange exceeded the client timeout.
    #[error("request timed out: {0}")]
    Timeout(String),
    /// A response arrived but its body was not the expected JSON shape.
    #[error("invalid response body: {0}")]
    InvalidBody(String),
}

impl ClientError {
    /// Classifies a reqwest transport error for a labeled exchange.
    #[must_use]
    pub fn from_transport(exchange: &str, err: &reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(format!("{exchange}: {err}"))
        } else {
            Self::Network(format!("{exchange}: {err}"))
        }
    }
}

impl From<ClientError> for CaseFailure {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Network(message) => Self::Network(message),
            ClientError::Timeout(message) => Self::Timeout(message),
            ClientError::InvalidBody(message) | ClientError::Config(message) => {
                Self::Assertion(message)
            }
        }
    }
}
