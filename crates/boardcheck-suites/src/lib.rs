// crates/boardcheck-suites/src/lib.rs
// ============================================================================
// Module: Boardcheck Suites Library
// Description: Ordered case definitions for the basic and enhanced suites.
// Purpose: Wire client calls, fixtures, and assertions into runnable suites.
// Dependencies: boardcheck-core, boardcheck-client, serde_json
// ============================================================================

//! ## Overview
//! Two suite variants cover the service contract: `basic` follows the core
//! user/project/task lifecycle including every validation and error path,
//! `enhanced` exercises roles, profiles, invitations, comments, and the
//! activity log. Case order encodes data dependencies and is part of each
//! suite's definition; the runner never reorders.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod basic;
pub mod checks;
pub mod context;
pub mod enhanced;

// ============================================================================
// SECTION: Tests
// ============================================================================


// ============================================================================
// SECTION: Re-exports
// ============================================================================

pub use context::SuiteContext;
