// crates/boardcheck-client/src/types.rs
// ============================================================================
// Module: Contract Types
// Description: Typed representations of service payloads.
// Purpose: Let cases assert response structure through serde decoding.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! Typed mirrors of the observed service contract. Required fields double as
//! structure assertions: decoding fails when the service drops a field the
//! contract promises. Fields the contract marks optional stay `Option` or
//! default so their absence is not a failure.

use serde::Deserialize;
use serde_json::Value;

// ============================================================================
// SECTION: Users
// ============================================================================

/// A registered user as returned by the service.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Server-assigned identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Unique email address.
    pub email: String,
    /// Assigned role, when the deployment supports roles.
    #[serde(default)]
    pub role: Option<String>,
    /// Avatar descriptor, when present.
    #[serde(default)]
    pub avatar: Option<Value>,
    /// User settings blob, when present.
    #[serde(default)]
    pub settings: Option<Value>,
    /// Extended profile blob, when present.
    #[serde(default)]
    pub profile: Option<Value>,
}

/// Envelope for register/login responses.
#[derive(Debug, Clone, Deserialize)]
pub struct UserEnvelope {
    /// The authenticated or newly created user.
    pub user: User,
}

// ============================================================================
// SECTION: Projects
// ============================================================================

/// Project-level settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSettings {
    /// Visibility mode (for example `private` or `team`).
    pub visibility: String,
    /// Whether members may issue invitations.
    pub allow_member_invites: bool,
}

/// Project task counters.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectStats {
    /// Total tasks ever created in the project.
    pub total_tasks: u64,
    /// Tasks currently in a completed state.
    pub completed_tasks: u64,
}

/// Membership entry inside a project.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectMember {
    /// Identifier of the member user.
    pub user_id: String,
    /// Role the member holds in the project.
    #[serde(default)]
    pub role: Option<String>,
}

/// A project as returned by the service.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Server-assigned identifier.
    pub id: String,
    /// Project name.
    pub name: String,
    /// Free-form description.
    #[serde(default)]
    pub description: Option<String>,
    /// Identifier of the owning user.
    #[serde(default)]
    pub owner_id: Option<String>,
    /// Project settings; required by the contract.
    pub settings: ProjectSettings,
    /// Task counters; required by the contract.
    pub stats: ProjectStats,
    /// Membership entries.
    pub members: Vec<ProjectMember>,
    /// Denormalized member profiles, when the listing includes them.
    #[serde(default)]
    pub member_details: Option<Vec<User>>,
}

// ============================================================================
// SECTION: Invitations
// ============================================================================

/// An issued project invitation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invitation {
    /// Opaque acceptance token.
    pub token: String,
    /// Shareable acceptance URL.
    pub invite_url: String,
    /// Target project identifier, when echoed back.
    #[serde(default)]
    pub project_id: Option<String>,
    /// Invited email address, when echoed back.
    #[serde(default)]
    pub email: Option<String>,
}

/// Envelope for invitation-creation responses.
#[derive(Debug, Clone, Deserialize)]
pub struct InvitationEnvelope {
    /// The issued invitation.
    pub invitation: Invitation,
}

// ============================================================================
// SECTION: Tasks and Comments
// ============================================================================

/// A comment attached to a task, with its author denormalized.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    /// Comment text.
    pub content: String,
    /// Identifier of the authoring user.
    pub user_id: String,
    /// Denormalized author record; the contract promises at least a name.
    pub user: CommentAuthor,
}

/// Denormalized author fields inside a comment.
#[derive(Debug, Clone, Deserialize)]
pub struct CommentAuthor {
    /// Author display name.
    pub name: String,
}

/// A task as returned by the service.
///
/// The four collection fields are required on purpose: the contract promises
/// them on every created task, so a missing field fails the decode and with
/// it the case.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Server-assigned identifier.
    pub id: String,
    /// Task title.
    pub title: String,
    /// Free-form description.
    #[serde(default)]
    pub description: Option<String>,
    /// Owning project identifier.
    pub project_id: String,
    /// Workflow status.
    pub status: String,
    /// Priority label.
    pub priority: String,
    /// Assigned user, when set.
    #[serde(default)]
    pub assignee_id: Option<String>,
    /// Free-form tags.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Due date in ISO-8601 form, when set.
    #[serde(default)]
    pub due_date: Option<String>,
    /// Estimated effort in hours, when set.
    #[serde(default)]
    pub estimated_hours: Option<f64>,
    /// Recorded effort in hours, when set.
    #[serde(default)]
    pub actual_hours: Option<f64>,
    /// Attached comments.
    pub comments: Vec<Value>,
    /// Nested sub-tasks.
    pub sub_tasks: Vec<Value>,
    /// Task dependencies.
    pub dependencies: Vec<Value>,
    /// File attachments.
    pub attachments: Vec<Value>,
}

// ============================================================================
// SECTION: Activities
// ============================================================================

/// One entry of a project's activity log.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    /// Server-assigned identifier.
    pub id: String,
    /// Project the activity belongs to.
    pub project_id: String,
    /// User who triggered the activity.
    pub user_id: String,
    /// Action tag, for example `task_created`.
    pub action: String,
    /// Action-specific metadata.
    pub metadata: Value,
    /// Creation timestamp.
    pub created_at: String,
}
