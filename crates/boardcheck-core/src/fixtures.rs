// crates/boardcheck-core/src/fixtures.rs
// ============================================================================
// Module: Fixture Store
// Description: Role-keyed storage for server-created entities.
// Purpose: Thread entities created by earlier cases into dependent cases.
// Dependencies: serde_json
// ============================================================================

//! ## Overview
//! The fixture store maps a closed set of symbolic roles to the last-known
//! server-returned representation of each entity. Later cases may overwrite
//! an entry after a successful mutation; entries never roll back and live
//! until the process exits. The runner is single-threaded, so no locking is
//! required.

use std::collections::BTreeMap;
use std::fmt;

use serde_json::Value;

use crate::failure::CaseFailure;

// ============================================================================
// SECTION: Roles
// ============================================================================

/// Symbolic roles for entities shared between ordered cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FixtureRole {
    /// The registered user that owns the run's project.
    OwnerUser,
    /// A second registered user invited into the project.
    MemberUser,
    /// The project created for the run.
    PrimaryProject,
    /// The task created inside the primary project.
    PrimaryTask,
    /// An issued, not-yet-accepted invitation.
    PendingInvitation,
}

impl FixtureRole {
    /// Returns the canonical role name used in diagnostics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OwnerUser => "owner user",
            Self::MemberUser => "member user",
            Self::PrimaryProject => "primary project",
            Self::PrimaryTask => "primary task",
            Self::PendingInvitation => "pending invitation",
        }
    }
}

impl fmt::Display for FixtureRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SECTION: Store
// ============================================================================

/// In-memory mapping from fixture roles to server-returned entities.
#[derive(Debug, Default)]
pub struct FixtureStore {
    /// Current entity representation per role.
    entries: BTreeMap<FixtureRole, Value>,
}

impl FixtureStore {
    /// Creates an empty fixture store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores or overwrites the entity for a role.
    pub fn set(&mut self, role: FixtureRole, value: Value) {
        self.entries.insert(role, value);
    }

    /// Returns the stored entity for a role, if any.
    #[must_use]
    pub fn get(&self, role: FixtureRole) -> Option<&Value> {
        self.entries.get(&role)
    }

    /// Returns the stored entity for a role or a missing-fixture failure.
    ///
    /// # Errors
    ///
    /// Returns [`CaseFailure::MissingFixture`] when no earlier case created
    /// the requested role.
    pub fn require(&self, role: FixtureRole) -> Result<&Value, CaseFailure> {
        self.entries.get(&role).ok_or(CaseFailure::MissingFixture(role))
    }

    /// Returns the `id` field of a stored entity as an owned string.
    ///
    /// # Errors
    ///
    /// Returns [`CaseFailure::MissingFixture`] when the role is absent, or
    /// [`CaseFailure::Assertion`] when the stored entity has no string `id`.
    pub fn require_id(&self, role: FixtureRole) -> Result<String, CaseFailure> {
        let entity = self.require(role)?;
        entity
            .get("id")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| CaseFailure::Assertion(format!("fixture {role} has no string id")))
    }

    /// Returns a named string field of a stored entity as an owned string.
    ///
    /// # Errors
    ///
    /// Returns [`CaseFailure::MissingFixture`] when the role is absent, or
    /// [`CaseFailure::Assertion`] when the field is missing or not a string.
    pub fn require_str(&self, role: FixtureRole, field: &str) -> Result<String, CaseFailure> {
        let entity = self.require(role)?;
        entity
            .get(field)
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| {
                CaseFailure::Assertion(format!("fixture {role} has no string field {field}"))
            })
    }
}
