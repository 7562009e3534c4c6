// crates/boardcheck-suites/src/checks.rs
// ============================================================================
// Module: Response Checks
// Description: Assertion helpers over raw JSON responses.
// Purpose: Produce uniform, bounded diagnostics for contract mismatches.
// Dependencies: boardcheck-core, boardcheck-client, serde_json
// ============================================================================

//! ## Overview
//! Thin assertion helpers shared by both suites. Every helper returns a
//! [`CaseFailure::Assertion`] with the actual status or payload excerpt so a
//! failed case is diagnosable from its one-line message.

use boardcheck_client::ApiResponse;
use boardcheck_core::CaseFailure;
use serde_json::Value;

// ============================================================================
// SECTION: Status Checks
// ============================================================================

/// Asserts the response carries the expected status code.
///
/// # Errors
///
/// Returns [`CaseFailure::Assertion`] including the actual status and a body
/// excerpt on mismatch.
pub fn expect_status(
    exchange: &str,
    response: &ApiResponse,
    expected: u16,
) -> Result<(), CaseFailure> {
    if response.status == expected {
        return Ok(());
    }
    Err(CaseFailure::status(exchange, expected, response.status, &response.body_snippet()))
}

// ============================================================================
// SECTION: Payload Checks
// ============================================================================

/// Reads a named field out of a JSON object.
///
/// # Errors
///
/// Returns [`CaseFailure::Assertion`] when the field is absent.
pub fn field<'a>(context: &str, value: &'a Value, name: &str) -> Result<&'a Value, CaseFailure> {
    value
        .get(name)
        .ok_or_else(|| CaseFailure::Assertion(format!("{context}: missing field {name}")))
}

/// Reads a named string field out of a JSON object.
///
/// # Errors
///
/// Returns [`CaseFailure::Assertion`] when the field is absent or not a
/// string.
pub fn str_field<'a>(context: &str, value: &'a Value, name: &str) -> Result<&'a str, CaseFailure> {
    field(context, value, name)?.as_str().ok_or_else(|| {
        CaseFailure::Assertion(format!("{context}: field {name} is not a string"))
    })
}

/// Interprets a JSON value as an array.
///
/// # Errors
///
/// Returns [`CaseFailure::Assertion`] when the value is not an array.
pub fn array<'a>(context: &str, value: &'a Value) -> Result<&'a [Value], CaseFailure> {
    value
        .as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| CaseFailure::Assertion(format!("{context}: expected a json array")))
}

/// Asserts a string contains an expected substring.
///
/// # Errors
///
/// Returns [`CaseFailure::Assertion`] carrying the actual text on mismatch.
pub fn expect_contains(context: &str, actual: &str, needle: &str) -> Result<(), CaseFailure> {
    if actual.contains(needle) {
        return Ok(());
    }
    Err(CaseFailure::Assertion(format!("{context}: expected \"{needle}\" in \"{actual}\"")))
}

/// Asserts a field is absent from a JSON object. Used for the guarantee that
/// credential material never round-trips.
///
/// # Errors
///
/// Returns [`CaseFailure::Assertion`] when the field is present.
pub fn expect_absent(context: &str, value: &Value, name: &str) -> Result<(), CaseFailure> {
    if value.get(name).is_none() {
        return Ok(());
    }
    Err(CaseFailure::Assertion(format!("{context}: field {name} must not be returned")))
}
