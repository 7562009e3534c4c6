// crates/boardcheck-suites/src/enhanced.rs
// ============================================================================
// Module: Enhanced Suite
// Description: Coverage for roles, profiles, invitations, comments, and
//              activity logging.
// Purpose: Exercise the collaborative feature set in dependency order.
// Dependencies: boardcheck-core, boardcheck-client, serde_json
// ============================================================================

//! ## Overview
//! The enhanced suite layers the collaborative contract on top of the core
//! lifecycle: role-tagged registration, profile retrieval and merge,
//! team-visible project creation, the full invitation workflow, comments
//! with denormalized authors, activity retrieval, and member statistics.
//! The invitation chain is the longest dependency path in either suite:
//! owner and member users must exist before the project, the project before
//! the invitation, the invitation before acceptance and membership checks.

use boardcheck_client::types::Activity;
use boardcheck_client::types::Comment;
use boardcheck_client::types::InvitationEnvelope;
use boardcheck_client::types::Project;
use boardcheck_client::types::Task;
use boardcheck_client::types::UserEnvelope;
use boardcheck_core::CaseFailure;
use boardcheck_core::CaseResult;
use boardcheck_core::FixtureRole;
use boardcheck_core::SuiteRunner;
use serde_json::json;

use crate::checks::expect_contains;
use crate::checks::expect_status;
use crate::checks::field;
use crate::checks::str_field;
use crate::context::SuiteContext;
use crate::context::unique_email;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Substring the root endpoint must report as its product identity.
const PRODUCT_NAME: &str = "Project Management API";

/// Password used when registering the owner user.
const OWNER_PASSWORD: &str = "SecureOwnerPass123!";

/// Password used when registering the member user.
const MEMBER_PASSWORD: &str = "SecureDevPass123!";

/// Due date sent with the fully populated task.
const TASK_DUE_DATE: &str = "2027-01-15T00:00:00Z";

/// Activity actions the log is expected to contain after this suite's
/// earlier cases ran.
const EXPECTED_ACTIONS: [&str; 5] =
    ["project_created", "member_invited", "member_joined", "task_created", "task_status_changed"];

/// Minimum number of distinct expected actions for the activity case.
const MIN_DISTINCT_ACTIONS: usize = 3;

// ============================================================================
// SECTION: Suite Definition
// ============================================================================

/// Builds the enhanced suite with its cases in dependency order.
#[must_use]
pub fn suite() -> SuiteRunner<SuiteContext> {
    let mut runner = SuiteRunner::new();
    runner.register("api root endpoint", |ctx| Box::pin(api_root(ctx)));
    runner.register("owner registration with role", |ctx| Box::pin(register_owner(ctx)));
    runner.register("developer registration with role", |ctx| Box::pin(register_member(ctx)));
    runner.register("profile retrieval", |ctx| Box::pin(get_profile(ctx)));
    runner.register("profile update", |ctx| Box::pin(update_profile(ctx)));
    runner.register("team project creation", |ctx| Box::pin(create_team_project(ctx)));
    runner.register("invitation delivery", |ctx| Box::pin(send_invitation(ctx)));
    runner.register("invitation acceptance", |ctx| Box::pin(accept_invitation(ctx)));
    runner.register("membership after acceptance", |ctx| Box::pin(membership_visible(ctx)));
    runner.register("task creation with advanced fields", |ctx| Box::pin(create_full_task(ctx)));
    runner.register("task comment", |ctx| Box::pin(add_comment(ctx)));
    runner.register("comment visible in listing", |ctx| Box::pin(comment_listed(ctx)));
    runner.register("task update with tracking fields", |ctx| Box::pin(update_with_tracking(ctx)));
    runner.register("activity log retrieval", |ctx| Box::pin(activity_log(ctx)));
    runner.register("member details and statistics", |ctx| Box::pin(member_details(ctx)));
    runner
}

// ============================================================================
// SECTION: Connectivity and Registration Cases
// ============================================================================

/// Probes the root endpoint for the product identity message.
async fn api_root(ctx: &mut SuiteContext) -> CaseResult {
    let response = ctx.api.root().await?;
    expect_status("GET /", &response, 200)?;
    let message = str_field("root response", &response.body, "message")?;
    expect_contains("root message", message, PRODUCT_NAME)?;
    Ok("service is reachable".to_string())
}

/// Registers the owner with an explicit role and checks the extended
/// profile structure.
async fn register_owner(ctx: &mut SuiteContext) -> CaseResult {
    let email = unique_email("alex.thompson");
    let body = json!({
        "name": "Alex Thompson",
        "email": email,
        "password": OWNER_PASSWORD,
        "role": "owner",
    });
    let response = ctx.api.register(&body).await?;
    expect_status("POST /auth/register", &response, 200)?;
    let envelope: UserEnvelope = response.decode()?;
    if envelope.user.role.as_deref() != Some("owner") {
        return Err(CaseFailure::Assertion(format!(
            "owner registration returned role {:?}",
            envelope.user.role.as_deref()
        )));
    }
    let user = field("register response", &response.body, "user")?;
    for part in ["settings", "profile", "avatar"] {
        field("registered owner", user, part)?;
    }
    ctx.fixtures.set(FixtureRole::OwnerUser, user.clone());
    Ok(format!("owner created: {}", envelope.user.name))
}

/// Registers the developer user with an explicit role.
async fn register_member(ctx: &mut SuiteContext) -> CaseResult {
    let email = unique_email("maria.rodriguez");
    let body = json!({
        "name": "Maria Rodriguez",
        "email": email,
        "password": MEMBER_PASSWORD,
        "role": "developer",
    });
    let response = ctx.api.register(&body).await?;
    expect_status("POST /auth/register", &response, 200)?;
    let envelope: UserEnvelope = response.decode()?;
    if envelope.user.role.as_deref() != Some("developer") {
        return Err(CaseFailure::Assertion(format!(
            "developer registration returned role {:?}",
            envelope.user.role.as_deref()
        )));
    }
    let user = field("register response", &response.body, "user")?.clone();
    ctx.fixtures.set(FixtureRole::MemberUser, user);
    Ok(format!("developer created: {}", envelope.user.name))
}

// ============================================================================
// SECTION: Profile Cases
// ============================================================================

/// Fetches the owner's full profile.
async fn get_profile(ctx: &mut SuiteContext) -> CaseResult {
    let owner_id = ctx.fixtures.require_id(FixtureRole::OwnerUser)?;
    let response = ctx.api.user(&owner_id).await?;
    expect_status("GET /users/{id}", &response, 200)?;
    let id = str_field("profile response", &response.body, "id")?;
    if id != owner_id {
        return Err(CaseFailure::Assertion(format!(
            "profile returned id {id} for user {owner_id}"
        )));
    }
    field("profile response", &response.body, "settings")?;
    field("profile response", &response.body, "profile")?;
    Ok("profile retrieved with settings and profile blocks".to_string())
}

/// Applies a partial profile/settings update and checks the merge.
async fn update_profile(ctx: &mut SuiteContext) -> CaseResult {
    let owner_id = ctx.fixtures.require_id(FixtureRole::OwnerUser)?;
    let bio = "Experienced project manager with 10+ years in tech";
    let body = json!({
        "profile": {
            "bio": bio,
            "location": "San Francisco, CA",
            "timezone": "America/Los_Angeles",
        },
        "settings": {
            "theme": "dark",
            "notifications": {"email": false, "push": true, "mentions": true},
        },
    });
    let response = ctx.api.update_user(&owner_id, &body).await?;
    expect_status("PUT /users/{id}", &response, 200)?;
    let profile = field("updated user", &response.body, "profile")?;
    let settings = field("updated user", &response.body, "settings")?;
    if str_field("updated profile", profile, "bio")? != bio {
        return Err(CaseFailure::Assertion("profile bio not merged".to_string()));
    }
    if str_field("updated settings", settings, "theme")? != "dark" {
        return Err(CaseFailure::Assertion("settings theme not merged".to_string()));
    }
    ctx.fixtures.set(FixtureRole::OwnerUser, response.body.clone());
    Ok("profile and settings merged".to_string())
}

// ============================================================================
// SECTION: Project and Invitation Cases
// ============================================================================

/// Creates a team-visible project and checks the extended structure.
async fn create_team_project(ctx: &mut SuiteContext) -> CaseResult {
    let owner_id = ctx.fixtures.require_id(FixtureRole::OwnerUser)?;
    let body = json!({
        "name": "Advanced E-commerce Platform",
        "description": "Next-generation e-commerce platform with recommendations",
        "ownerId": owner_id,
        "visibility": "team",
    });
    let response = ctx.api.create_project(&body).await?;
    expect_status("POST /projects", &response, 200)?;
    let project: Project = response.decode()?;
    if project.settings.visibility != "team" {
        return Err(CaseFailure::Assertion(format!(
            "project visibility is {} instead of team",
            project.settings.visibility
        )));
    }
    if !project.settings.allow_member_invites {
        return Err(CaseFailure::Assertion("member invites disabled on new project".to_string()));
    }
    if project.stats.total_tasks != 0 || project.stats.completed_tasks != 0 {
        return Err(CaseFailure::Assertion(format!(
            "new project stats not zeroed: {}/{}",
            project.stats.completed_tasks, project.stats.total_tasks
        )));
    }
    ctx.fixtures.set(FixtureRole::PrimaryProject, response.body.clone());
    Ok(format!("team project created: {}", project.name))
}

/// Issues an invitation for the developer and stores it as a fixture.
async fn send_invitation(ctx: &mut SuiteContext) -> CaseResult {
    let project_id = ctx.fixtures.require_id(FixtureRole::PrimaryProject)?;
    let owner_id = ctx.fixtures.require_id(FixtureRole::OwnerUser)?;
    let member_email = ctx.fixtures.require_str(FixtureRole::MemberUser, "email")?;
    let body = json!({
        "projectId": project_id,
        "email": member_email,
        "role": "developer",
        "invitedBy": owner_id,
    });
    let response = ctx.api.create_invitation(&body).await?;
    expect_status("POST /invitations", &response, 200)?;
    let envelope: InvitationEnvelope = response.decode()?;
    let invitation = field("invitation response", &response.body, "invitation")?.clone();
    ctx.fixtures.set(FixtureRole::PendingInvitation, invitation);
    Ok(format!("invitation issued, url {}", envelope.invitation.invite_url))
}

/// Accepts the pending invitation as the developer.
async fn accept_invitation(ctx: &mut SuiteContext) -> CaseResult {
    let token = ctx.fixtures.require_str(FixtureRole::PendingInvitation, "token")?;
    let member_id = ctx.fixtures.require_id(FixtureRole::MemberUser)?;
    let response = ctx.api.accept_invitation(&token, &json!({"userId": member_id})).await?;
    expect_status("POST /invitations/{token}/accept", &response, 200)?;
    let message = str_field("accept response", &response.body, "message")?;
    expect_contains("accept message", message, "successfully")?;
    Ok("invitation accepted".to_string())
}

/// Checks the accepted developer appears as a project member.
async fn membership_visible(ctx: &mut SuiteContext) -> CaseResult {
    let owner_id = ctx.fixtures.require_id(FixtureRole::OwnerUser)?;
    let project_id = ctx.fixtures.require_id(FixtureRole::PrimaryProject)?;
    let member_id = ctx.fixtures.require_id(FixtureRole::MemberUser)?;
    let response = ctx.api.projects_for_user(&owner_id).await?;
    expect_status("GET /projects", &response, 200)?;
    let projects: Vec<Project> = response.decode()?;
    let project = projects
        .into_iter()
        .find(|project| project.id == project_id)
        .ok_or_else(|| CaseFailure::Assertion(format!("project {project_id} not in listing")))?;
    if !project.members.iter().any(|member| member.user_id == member_id) {
        return Err(CaseFailure::Assertion(format!(
            "member {member_id} not present in project members"
        )));
    }
    Ok("accepted member present in project".to_string())
}

// ============================================================================
// SECTION: Task, Comment, and Activity Cases
// ============================================================================

/// Creates a task with every optional field populated.
async fn create_full_task(ctx: &mut SuiteContext) -> CaseResult {
    let project_id = ctx.fixtures.require_id(FixtureRole::PrimaryProject)?;
    let member_id = ctx.fixtures.require_id(FixtureRole::MemberUser)?;
    let tags = ["ai", "machine-learning", "backend"];
    let body = json!({
        "title": "Implement product recommendations",
        "description": "Ranking pipeline for personalized product recommendations",
        "projectId": project_id,
        "status": "todo",
        "priority": "high",
        "assigneeId": member_id,
        "tags": tags,
        "dueDate": TASK_DUE_DATE,
        "estimatedHours": 40,
    });
    let response = ctx.api.create_task(&body).await?;
    expect_status("POST /tasks", &response, 200)?;
    let task: Task = response.decode()?;
    if task.assignee_id.as_deref() != Some(member_id.as_str()) {
        return Err(CaseFailure::Assertion("assignee not set on created task".to_string()));
    }
    if task.tags != tags {
        return Err(CaseFailure::Assertion(format!("tags not echoed: {:?}", task.tags)));
    }
    if task.estimated_hours != Some(40.0) || task.due_date.is_none() {
        return Err(CaseFailure::Assertion("estimate or due date not set".to_string()));
    }
    if !task.comments.is_empty() || !task.sub_tasks.is_empty() {
        return Err(CaseFailure::Assertion("new task collections not empty".to_string()));
    }
    ctx.fixtures.set(FixtureRole::PrimaryTask, response.body.clone());
    Ok(format!("task created with all fields: {}", task.title))
}

/// Adds a comment as the owner and checks the denormalized author.
async fn add_comment(ctx: &mut SuiteContext) -> CaseResult {
    let task_id = ctx.fixtures.require_id(FixtureRole::PrimaryTask)?;
    let owner_id = ctx.fixtures.require_id(FixtureRole::OwnerUser)?;
    let owner_name = ctx.fixtures.require_str(FixtureRole::OwnerUser, "name")?;
    let content = "Great progress - make sure to A/B test the ranking quality.";
    let body = json!({"content": content, "userId": owner_id});
    let response = ctx.api.add_comment(&task_id, &body).await?;
    expect_status("POST /tasks/{id}/comments", &response, 200)?;
    let comment: Comment = response.decode()?;
    if comment.content != content {
        return Err(CaseFailure::Assertion("comment content not echoed".to_string()));
    }
    if comment.user.name != owner_name {
        return Err(CaseFailure::Assertion(format!(
            "comment author {} does not match {owner_name}",
            comment.user.name
        )));
    }
    Ok("comment created with denormalized author".to_string())
}

/// Confirms the comment shows up when listing the project's tasks.
async fn comment_listed(ctx: &mut SuiteContext) -> CaseResult {
    let project_id = ctx.fixtures.require_id(FixtureRole::PrimaryProject)?;
    let task_id = ctx.fixtures.require_id(FixtureRole::PrimaryTask)?;
    let response = ctx.api.tasks_for_project(&project_id).await?;
    expect_status("GET /tasks", &response, 200)?;
    let tasks: Vec<Task> = response.decode()?;
    let task = tasks
        .into_iter()
        .find(|task| task.id == task_id)
        .ok_or_else(|| CaseFailure::Assertion(format!("task {task_id} not in listing")))?;
    if task.comments.is_empty() {
        return Err(CaseFailure::Assertion("comment missing from listed task".to_string()));
    }
    Ok(format!("task carries {} comment(s)", task.comments.len()))
}

/// Updates the task with tracking fields and re-checks identity.
async fn update_with_tracking(ctx: &mut SuiteContext) -> CaseResult {
    let task_id = ctx.fixtures.require_id(FixtureRole::PrimaryTask)?;
    let member_id = ctx.fixtures.require_id(FixtureRole::MemberUser)?;
    let body = json!({
        "status": "inprogress",
        "priority": "urgent",
        "actualHours": 8,
        "updatedBy": member_id,
    });
    let response = ctx.api.update_task(&task_id, &body).await?;
    expect_status("PUT /tasks/{id}", &response, 200)?;
    let task: Task = response.decode()?;
    if task.id != task_id {
        return Err(CaseFailure::Assertion(format!(
            "update of task {task_id} returned a different id {}",
            task.id
        )));
    }
    if task.status != "inprogress" || task.priority != "urgent" || task.actual_hours != Some(8.0) {
        return Err(CaseFailure::Assertion(format!(
            "tracking update not reflected: status {}, priority {}, actual {:?}",
            task.status, task.priority, task.actual_hours
        )));
    }
    ctx.fixtures.set(FixtureRole::PrimaryTask, response.body.clone());
    Ok(format!("task updated, status {}", task.status))
}

/// Retrieves the project's activity log and checks action coverage.
async fn activity_log(ctx: &mut SuiteContext) -> CaseResult {
    let project_id = ctx.fixtures.require_id(FixtureRole::PrimaryProject)?;
    let response = ctx.api.activities_for_project(&project_id).await?;
    expect_status("GET /activities", &response, 200)?;
    let activities: Vec<Activity> = response.decode()?;
    if activities.is_empty() {
        return Err(CaseFailure::Assertion("activity log is empty".to_string()));
    }
    let distinct = EXPECTED_ACTIONS
        .iter()
        .filter(|action| activities.iter().any(|activity| activity.action == **action))
        .count();
    if distinct < MIN_DISTINCT_ACTIONS {
        let seen: Vec<&str> =
            activities.iter().map(|activity| activity.action.as_str()).collect();
        return Err(CaseFailure::Assertion(format!(
            "only {distinct} expected action kinds present, saw {seen:?}"
        )));
    }
    Ok(format!("{} activities with {distinct} expected action kinds", activities.len()))
}

/// Checks member details and task statistics on the project listing.
async fn member_details(ctx: &mut SuiteContext) -> CaseResult {
    let owner_id = ctx.fixtures.require_id(FixtureRole::OwnerUser)?;
    let project_id = ctx.fixtures.require_id(FixtureRole::PrimaryProject)?;
    let member_id = ctx.fixtures.require_id(FixtureRole::MemberUser)?;
    let response = ctx.api.projects_for_user(&owner_id).await?;
    expect_status("GET /projects", &response, 200)?;
    let projects: Vec<Project> = response.decode()?;
    let project = projects
        .into_iter()
        .find(|project| project.id == project_id)
        .ok_or_else(|| CaseFailure::Assertion(format!("project {project_id} not in listing")))?;
    let details = project.member_details.ok_or_else(|| {
        CaseFailure::Assertion("listing carries no member details".to_string())
    })?;
    for expected in [&owner_id, &member_id] {
        if !details.iter().any(|user| &user.id == expected) {
            return Err(CaseFailure::Assertion(format!(
                "user {expected} missing from member details"
            )));
        }
    }
    if project.stats.total_tasks == 0 {
        return Err(CaseFailure::Assertion("project stats not updated".to_string()));
    }
    Ok(format!(
        "{} member profiles listed, {} task(s) counted",
        details.len(),
        project.stats.total_tasks
    ))
}
