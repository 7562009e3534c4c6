// crates/boardcheck-suites/tests/helpers/mod.rs
// ============================================================================
// Module: Suite Test Helpers
// Description: Shared helpers for boardcheck suite tests.
// Purpose: Provide the stub service and readiness polling.
// Dependencies: boardcheck-client, tokio
// ============================================================================

//! ## Overview
//! Shared helpers for the suite integration tests: the in-memory stub
//! service and a readiness probe that polls the root endpoint instead of
//! sleeping an arbitrary amount.

pub mod stub_api;

use std::time::Duration;
use std::time::Instant;

use boardcheck_client::ApiClient;
use tokio::time::sleep;

/// Polls the root endpoint until the service responds or the timeout
/// expires.
pub async fn wait_for_service_ready(
    client: &ApiClient,
    timeout: Duration,
) -> Result<(), String> {
    let start = Instant::now();
    let mut attempts = 0u32;
    loop {
        attempts = attempts.saturating_add(1);
        match client.root().await {
            Ok(_) => return Ok(()),
            Err(err) => {
                if start.elapsed() > timeout {
                    return Err(format!(
                        "service readiness timeout after {attempts} attempts: {err}"
                    ));
                }
                sleep(Duration::from_millis(50)).await;
            }
        }
    }
}
