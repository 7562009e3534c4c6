// crates/boardcheck-suites/src/basic.rs
// ============================================================================
// Module: Basic Suite
// Description: Core lifecycle coverage for the project-management API.
// Purpose: Exercise auth, project, and task endpoints in dependency order.
// Dependencies: boardcheck-core, boardcheck-client, serde_json
// ============================================================================

//! ## Overview
//! The basic suite walks the core contract end to end: identity probe,
//! registration with its validation and duplicate paths, login with correct
//! and wrong credentials, then the project and task lifecycle through
//! creation, listing, update, and deletion. Producers run before consumers;
//! a case whose prerequisite fixture is missing fails closed without
//! touching the network.

use boardcheck_client::types::Project;
use boardcheck_client::types::Task;
use boardcheck_client::types::UserEnvelope;
use boardcheck_core::CaseFailure;
use boardcheck_core::CaseResult;
use boardcheck_core::FixtureRole;
use boardcheck_core::SuiteRunner;
use serde_json::json;

use crate::checks::array;
use crate::checks::expect_absent;
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
const OWNER_PASSWORD: &str = "SecurePass123!";

/// Deliberately wrong password for the 401 path.
const WRONG_PASSWORD: &str = "WrongPassword123!";

/// Task id that no server will ever have assigned.
const UNKNOWN_TASK_ID: &str = "non-existent-task-id";

// ============================================================================
// SECTION: Suite Definition
// ============================================================================

/// Builds the basic suite with its cases in dependency order.
#[must_use]
pub fn suite() -> SuiteRunner<SuiteContext> {
    let mut runner = SuiteRunner::new();
    runner.register("api root endpoint", |ctx| Box::pin(api_root(ctx)));
    runner.register("user registration", |ctx| Box::pin(register_user(ctx)));
    runner.register("registration omits password", |ctx| Box::pin(registration_omits_password(ctx)));
    runner.register("registration validation", |ctx| Box::pin(registration_validation(ctx)));
    runner.register("duplicate registration", |ctx| Box::pin(duplicate_registration(ctx)));
    runner.register("user login", |ctx| Box::pin(login(ctx)));
    runner.register("login with wrong password", |ctx| Box::pin(login_wrong_password(ctx)));
    runner.register("login with unknown email", |ctx| Box::pin(login_unknown_email(ctx)));
    runner.register("project creation", |ctx| Box::pin(create_project(ctx)));
    runner.register("project creation validation", |ctx| Box::pin(project_validation(ctx)));
    runner.register("project listing", |ctx| Box::pin(list_projects(ctx)));
    runner.register("project listing validation", |ctx| Box::pin(listing_validation(ctx)));
    runner.register("task creation", |ctx| Box::pin(create_task(ctx)));
    runner.register("task creation validation", |ctx| Box::pin(task_validation(ctx)));
    runner.register("task listing", |ctx| Box::pin(list_tasks(ctx)));
    runner.register("task update", |ctx| Box::pin(update_task(ctx)));
    runner.register("task update for unknown id", |ctx| Box::pin(update_unknown_task(ctx)));
    runner.register("task deletion", |ctx| Box::pin(delete_task(ctx)));
    runner.register("task deletion for unknown id", |ctx| Box::pin(delete_unknown_task(ctx)));
    runner
}

// ============================================================================
// SECTION: Connectivity Cases
// ============================================================================

/// Probes the root endpoint for the product identity message.
async fn api_root(ctx: &mut SuiteContext) -> CaseResult {
    let response = ctx.api.root().await?;
    expect_status("GET /", &response, 200)?;
    let message = str_field("root response", &response.body, "message")?;
    expect_contains("root message", message, PRODUCT_NAME)?;
    Ok("service is reachable".to_string())
}

// ============================================================================
// SECTION: Authentication Cases
// ============================================================================

/// Registers the owner user and stores the returned record as a fixture.
async fn register_user(ctx: &mut SuiteContext) -> CaseResult {
    let email = unique_email("sarah.johnson");
    let body = json!({
        "name": "Sarah Johnson",
        "email": email,
        "password": OWNER_PASSWORD,
    });
    let response = ctx.api.register(&body).await?;
    expect_status("POST /auth/register", &response, 200)?;
    let envelope: UserEnvelope = response.decode()?;
    if envelope.user.email != email {
        return Err(CaseFailure::Assertion(format!(
            "register response echoed email {} instead of {email}",
            envelope.user.email
        )));
    }
    let user = field("register response", &response.body, "user")?.clone();
    ctx.fixtures.set(FixtureRole::OwnerUser, user);
    Ok(format!("user created: {}", envelope.user.name))
}

/// Verifies the registration response never includes the password.
async fn registration_omits_password(ctx: &mut SuiteContext) -> CaseResult {
    let user = ctx.fixtures.require(FixtureRole::OwnerUser)?;
    expect_absent("registered user", user, "password")?;
    Ok("password not returned in response".to_string())
}

/// Confirms registration rejects a payload missing required fields.
async fn registration_validation(ctx: &mut SuiteContext) -> CaseResult {
    let response = ctx.api.register(&json!({"name": "Test User"})).await?;
    expect_status("POST /auth/register", &response, 400)?;
    Ok("missing fields rejected".to_string())
}

/// Confirms a second registration with the fixture email yields 400.
///
/// The fixture entry is deliberately left untouched: a rejected duplicate
/// must not replace the owner record.
async fn duplicate_registration(ctx: &mut SuiteContext) -> CaseResult {
    let email = ctx.fixtures.require_str(FixtureRole::OwnerUser, "email")?;
    let body = json!({
        "name": "Sarah Johnson Duplicate",
        "email": email,
        "password": "AnotherPass123!",
    });
    let response = ctx.api.register(&body).await?;
    expect_status("POST /auth/register", &response, 400)?;
    let error = str_field("duplicate response", &response.body, "error")?;
    if !error.to_lowercase().contains("already exists") {
        return Err(CaseFailure::Assertion(format!(
            "duplicate response: expected an already-exists error, got \"{error}\""
        )));
    }
    Ok("duplicate email rejected".to_string())
}

/// Logs in with the registered credentials and checks identity stability.
async fn login(ctx: &mut SuiteContext) -> CaseResult {
    let email = ctx.fixtures.require_str(FixtureRole::OwnerUser, "email")?;
    let expected_id = ctx.fixtures.require_id(FixtureRole::OwnerUser)?;
    let body = json!({"email": email, "password": OWNER_PASSWORD});
    let response = ctx.api.login(&body).await?;
    expect_status("POST /auth/login", &response, 200)?;
    let envelope: UserEnvelope = response.decode()?;
    if envelope.user.id != expected_id {
        return Err(CaseFailure::Assertion(format!(
            "login returned id {} for the user registered as {expected_id}",
            envelope.user.id
        )));
    }
    let user = field("login response", &response.body, "user")?;
    expect_absent("logged-in user", user, "password")?;
    Ok(format!("login successful for {}", envelope.user.name))
}

/// Confirms a wrong password is rejected with 401.
async fn login_wrong_password(ctx: &mut SuiteContext) -> CaseResult {
    let email = ctx.fixtures.require_str(FixtureRole::OwnerUser, "email")?;
    let body = json!({"email": email, "password": WRONG_PASSWORD});
    let response = ctx.api.login(&body).await?;
    expect_status("POST /auth/login", &response, 401)?;
    Ok("wrong password rejected".to_string())
}

/// Confirms an unknown email is rejected with 401.
async fn login_unknown_email(ctx: &mut SuiteContext) -> CaseResult {
    let body = json!({"email": "nonexistent@example.com", "password": "SomePassword123!"});
    let response = ctx.api.login(&body).await?;
    expect_status("POST /auth/login", &response, 401)?;
    Ok("unknown email rejected".to_string())
}

// ============================================================================
// SECTION: Project Cases
// ============================================================================

/// Creates the run's project and stores it as a fixture.
async fn create_project(ctx: &mut SuiteContext) -> CaseResult {
    let owner_id = ctx.fixtures.require_id(FixtureRole::OwnerUser)?;
    let body = json!({
        "name": "E-commerce Platform Redesign",
        "description": "Complete redesign of the company's e-commerce platform",
        "ownerId": owner_id,
    });
    let response = ctx.api.create_project(&body).await?;
    expect_status("POST /projects", &response, 200)?;
    let project: Project = response.decode()?;
    if project.name != "E-commerce Platform Redesign" {
        return Err(CaseFailure::Assertion(format!(
            "project created with unexpected name {}",
            project.name
        )));
    }
    ctx.fixtures.set(FixtureRole::PrimaryProject, response.body.clone());
    Ok(format!("project created: {}", project.name))
}

/// Confirms project creation rejects a payload missing name and owner.
async fn project_validation(ctx: &mut SuiteContext) -> CaseResult {
    let body = json!({"description": "Project without name or owner"});
    let response = ctx.api.create_project(&body).await?;
    expect_status("POST /projects", &response, 400)?;
    Ok("missing fields rejected".to_string())
}

/// Lists the owner's projects and looks for the fixture project.
async fn list_projects(ctx: &mut SuiteContext) -> CaseResult {
    let owner_id = ctx.fixtures.require_id(FixtureRole::OwnerUser)?;
    let project_id = ctx.fixtures.require_id(FixtureRole::PrimaryProject)?;
    let response = ctx.api.projects_for_user(&owner_id).await?;
    expect_status("GET /projects", &response, 200)?;
    let projects: Vec<Project> = response.decode()?;
    if !projects.iter().any(|project| project.id == project_id) {
        return Err(CaseFailure::Assertion(format!(
            "project {project_id} missing from listing of {} projects",
            projects.len()
        )));
    }
    Ok(format!("retrieved {} projects including the fixture project", projects.len()))
}

/// Confirms the listing requires the `userId` query parameter.
async fn listing_validation(ctx: &mut SuiteContext) -> CaseResult {
    let response = ctx.api.projects_unscoped().await?;
    expect_status("GET /projects", &response, 400)?;
    Ok("missing userId rejected".to_string())
}

// ============================================================================
// SECTION: Task Cases
// ============================================================================

/// Creates the run's task and stores it as a fixture.
async fn create_task(ctx: &mut SuiteContext) -> CaseResult {
    let project_id = ctx.fixtures.require_id(FixtureRole::PrimaryProject)?;
    let body = json!({
        "title": "Implement user authentication system",
        "description": "Secure authentication with token issuance and password hashing",
        "projectId": project_id,
        "status": "todo",
        "priority": "high",
    });
    let response = ctx.api.create_task(&body).await?;
    expect_status("POST /tasks", &response, 200)?;
    let task: Task = response.decode()?;
    ctx.fixtures.set(FixtureRole::PrimaryTask, response.body.clone());
    Ok(format!("task created: {}", task.title))
}

/// Confirms task creation rejects a payload missing title and project.
async fn task_validation(ctx: &mut SuiteContext) -> CaseResult {
    let body = json!({"description": "Task without title or project"});
    let response = ctx.api.create_task(&body).await?;
    expect_status("POST /tasks", &response, 400)?;
    Ok("missing fields rejected".to_string())
}

/// Lists the project's tasks and looks for the fixture task.
async fn list_tasks(ctx: &mut SuiteContext) -> CaseResult {
    let project_id = ctx.fixtures.require_id(FixtureRole::PrimaryProject)?;
    let task_id = ctx.fixtures.require_id(FixtureRole::PrimaryTask)?;
    let response = ctx.api.tasks_for_project(&project_id).await?;
    expect_status("GET /tasks", &response, 200)?;
    let tasks: Vec<Task> = response.decode()?;
    if !tasks.iter().any(|task| task.id == task_id) {
        return Err(CaseFailure::Assertion(format!(
            "task {task_id} missing from listing of {} tasks",
            tasks.len()
        )));
    }
    Ok(format!("retrieved {} tasks including the fixture task", tasks.len()))
}

/// Updates the fixture task and checks the identity stayed stable.
async fn update_task(ctx: &mut SuiteContext) -> CaseResult {
    let task_id = ctx.fixtures.require_id(FixtureRole::PrimaryTask)?;
    let body = json!({
        "status": "in-progress",
        "priority": "medium",
        "description": "Updated: secure authentication with session management",
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
    if task.status != "in-progress" || task.priority != "medium" {
        return Err(CaseFailure::Assertion(format!(
            "update not reflected: status {}, priority {}",
            task.status, task.priority
        )));
    }
    ctx.fixtures.set(FixtureRole::PrimaryTask, response.body.clone());
    Ok(format!("task updated, status {}", task.status))
}

/// Confirms a PUT against an unknown task id yields 404.
async fn update_unknown_task(ctx: &mut SuiteContext) -> CaseResult {
    let response = ctx.api.update_task(UNKNOWN_TASK_ID, &json!({"status": "done"})).await?;
    expect_status("PUT /tasks/{id}", &response, 404)?;
    Ok("unknown task rejected".to_string())
}

/// Deletes the fixture task and verifies the listing no longer has it.
async fn delete_task(ctx: &mut SuiteContext) -> CaseResult {
    let task_id = ctx.fixtures.require_id(FixtureRole::PrimaryTask)?;
    let project_id = ctx.fixtures.require_id(FixtureRole::PrimaryProject)?;
    let response = ctx.api.delete_task(&task_id).await?;
    expect_status("DELETE /tasks/{id}", &response, 200)?;
    let message = str_field("delete response", &response.body, "message")?;
    expect_contains("delete message", &message.to_lowercase(), "deleted")?;

    let listing = ctx.api.tasks_for_project(&project_id).await?;
    expect_status("GET /tasks", &listing, 200)?;
    let tasks = array("task listing", &listing.body)?;
    let still_there = tasks
        .iter()
        .any(|task| task.get("id").and_then(serde_json::Value::as_str) == Some(task_id.as_str()));
    if still_there {
        return Err(CaseFailure::Assertion(format!(
            "task {task_id} still present after deletion"
        )));
    }
    Ok("task deleted and absent from listing".to_string())
}

/// Confirms a DELETE against an unknown task id yields 404.
async fn delete_unknown_task(ctx: &mut SuiteContext) -> CaseResult {
    let response = ctx.api.delete_task(UNKNOWN_TASK_ID).await?;
    expect_status("DELETE /tasks/{id}", &response, 404)?;
    Ok("unknown task rejected".to_string())
}
