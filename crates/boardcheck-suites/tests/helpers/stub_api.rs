// crates/boardcheck-suites/tests/helpers/stub_api.rs
// ============================================================================
// Module: Stub API
// Description: In-memory project-management service for suite tests.
// Purpose: Exercise both suites against a known-good contract.
// Dependencies: axum, tokio, serde_json
// ============================================================================

//! ## Overview
//! A minimal in-process implementation of the project-management contract
//! both suites target. State lives in a mutex-guarded store; every handler
//! mirrors the reference service's validation, error shapes, and activity
//! recording so an all-green run against this stub means the suites encode
//! the contract correctly.

#![allow(
    clippy::missing_docs_in_private_items,
    reason = "Stub handlers mirror the contract directly and stay undocumented."
)]

use std::collections::HashMap;
use std::net::TcpListener as StdTcpListener;
use std::sync::Arc;
use std::sync::Mutex;
use std::thread;

use axum::Json;
use axum::Router;
use axum::extract::Path;
use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::routing::post;
use axum::routing::put;
use serde_json::Value;
use serde_json::json;
use tokio::runtime::Builder;
use tokio::sync::oneshot;

/// Fixed timestamp stamped on every stub-created record.
const STUB_TIMESTAMP: &str = "2026-08-30T12:00:00.000Z";

// ============================================================================
// SECTION: State
// ============================================================================

#[derive(Default)]
struct StubState {
    users: Vec<Value>,
    passwords: HashMap<String, String>,
    projects: Vec<Value>,
    invitations: HashMap<String, Value>,
    tasks: Vec<Value>,
    activities: Vec<Value>,
    next_id: u64,
}

impl StubState {
    fn fresh_id(&mut self, prefix: &str) -> String {
        self.next_id += 1;
        format!("{prefix}{}", self.next_id)
    }

    fn record_activity(&mut self, project_id: &str, user_id: &str, action: &str, metadata: Value) {
        let id = self.fresh_id("activity-");
        self.activities.push(json!({
            "id": id,
            "projectId": project_id,
            "userId": user_id,
            "action": action,
            "metadata": metadata,
            "createdAt": STUB_TIMESTAMP,
        }));
    }

    fn user_by_id(&self, user_id: &str) -> Option<&Value> {
        self.users.iter().find(|user| user["id"] == user_id)
    }

    fn project_mut(&mut self, project_id: &str) -> Option<&mut Value> {
        self.projects.iter_mut().find(|project| project["id"] == project_id)
    }
}

type SharedState = Arc<Mutex<StubState>>;

type ApiReply = (StatusCode, Json<Value>);

fn error_reply(status: StatusCode, message: &str) -> ApiReply {
    (status, Json(json!({"error": message})))
}

fn lock_failure() -> ApiReply {
    error_reply(StatusCode::INTERNAL_SERVER_ERROR, "stub state lock poisoned")
}

fn str_of(body: &Value, name: &str) -> Option<String> {
    body.get(name).and_then(Value::as_str).map(str::to_string)
}

// ============================================================================
// SECTION: Handle
// ============================================================================

/// Handle for the stub service; shuts the server down on drop.
pub struct StubApiHandle {
    base_url: String,
    shutdown: Option<oneshot::Sender<()>>,
    join: Option<thread::JoinHandle<()>>,
}

impl StubApiHandle {
    /// Returns the API base URL, including the `/api` prefix.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Drop for StubApiHandle {
    fn drop(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
        if let Some(join) = self.join.take() {
            let _ = join.join();
        }
    }
}

/// Spawns the stub service on an ephemeral local port.
pub fn spawn_stub_api() -> Result<StubApiHandle, String> {
    let listener = StdTcpListener::bind("127.0.0.1:0")
        .map_err(|err| format!("stub api bind failed: {err}"))?;
    listener
        .set_nonblocking(true)
        .map_err(|err| format!("stub api nonblocking failed: {err}"))?;
    let addr = listener.local_addr().map_err(|err| format!("stub api local addr failed: {err}"))?;
    let base_url = format!("http://{addr}/api");

    let state: SharedState = Arc::new(Mutex::new(StubState::default()));
    let app = Router::new()
        .route("/api/", get(api_root))
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
        .route("/api/users/{id}", get(get_user).put(update_user))
        .route("/api/projects", post(create_project).get(list_projects))
        .route("/api/invitations", post(create_invitation))
        .route("/api/invitations/{token}/accept", post(accept_invitation))
        .route("/api/tasks", post(create_task).get(list_tasks))
        .route("/api/tasks/{id}", put(update_task).delete(delete_task))
        .route("/api/tasks/{id}/comments", post(add_comment))
        .route("/api/activities", get(list_activities))
        .with_state(state);

    let (shutdown_tx, shutdown_rx) = oneshot::channel();
    let join = thread::spawn(move || {
        let runtime = match Builder::new_current_thread().enable_all().build() {
            Ok(runtime) => runtime,
            Err(_) => return,
        };
        runtime.block_on(async move {
            let listener = match tokio::net::TcpListener::from_std(listener) {
                Ok(listener) => listener,
                Err(_) => return,
            };
            let server = axum::serve(listener, app).with_graceful_shutdown(async move {
                let _ = shutdown_rx.await;
            });
            let _ = server.await;
        });
    });

    Ok(StubApiHandle {
        base_url,
        shutdown: Some(shutdown_tx),
        join: Some(join),
    })
}

// ============================================================================
// SECTION: Identity Handlers
// ============================================================================

async fn api_root() -> ApiReply {
    (
        StatusCode::OK,
        Json(json!({
            "message": "Project Management API v2.0 - Enhanced Edition",
            "version": "2.0.0",
        })),
    )
}

async fn register(State(state): State<SharedState>, Json(body): Json<Value>) -> ApiReply {
    let Ok(mut store) = state.lock() else {
        return lock_failure();
    };
    let (Some(name), Some(email), Some(password)) =
        (str_of(&body, "name"), str_of(&body, "email"), str_of(&body, "password"))
    else {
        return error_reply(StatusCode::BAD_REQUEST, "Name, email, and password are required");
    };
    if store.users.iter().any(|user| user["email"] == email.as_str()) {
        return error_reply(StatusCode::BAD_REQUEST, "User with this email already exists");
    }
    let role = str_of(&body, "role").unwrap_or_else(|| "member".to_string());
    let id = store.fresh_id("user-");
    store.passwords.insert(email.clone(), password);
    let user = json!({
        "id": id,
        "name": name.clone(),
        "email": email,
        "role": role,
        "avatar": format!("https://avatars.example.com/{name}.png"),
        "settings": {
            "theme": "light",
            "notifications": {"email": true, "push": true, "mentions": true},
        },
        "profile": {"bio": "", "location": "", "timezone": "UTC"},
        "createdAt": STUB_TIMESTAMP,
    });
    store.users.push(user.clone());
    (StatusCode::OK, Json(json!({"user": user, "message": "User registered successfully"})))
}

async fn login(State(state): State<SharedState>, Json(body): Json<Value>) -> ApiReply {
    let Ok(store) = state.lock() else {
        return lock_failure();
    };
    let (Some(email), Some(password)) = (str_of(&body, "email"), str_of(&body, "password")) else {
        return error_reply(StatusCode::BAD_REQUEST, "Email and password are required");
    };
    let known = store.passwords.get(&email);
    if known != Some(&password) {
        return error_reply(StatusCode::UNAUTHORIZED, "Invalid credentials");
    }
    match store.users.iter().find(|user| user["email"] == email.as_str()) {
        Some(user) => {
            (StatusCode::OK, Json(json!({"user": user, "message": "Login successful"})))
        }
        None => error_reply(StatusCode::UNAUTHORIZED, "Invalid credentials"),
    }
}

async fn get_user(State(state): State<SharedState>, Path(user_id): Path<String>) -> ApiReply {
    let Ok(store) = state.lock() else {
        return lock_failure();
    };
    match store.user_by_id(&user_id) {
        Some(user) => (StatusCode::OK, Json(user.clone())),
        None => error_reply(StatusCode::NOT_FOUND, "User not found"),
    }
}

async fn update_user(
    State(state): State<SharedState>,
    Path(user_id): Path<String>,
    Json(body): Json<Value>,
) -> ApiReply {
    let Ok(mut store) = state.lock() else {
        return lock_failure();
    };
    let Some(user) = store.users.iter_mut().find(|user| user["id"] == user_id.as_str()) else {
        return error_reply(StatusCode::NOT_FOUND, "User not found");
    };
    for scalar in ["name", "avatar"] {
        if let Some(value) = body.get(scalar) {
            user[scalar] = value.clone();
        }
    }
    for block in ["profile", "settings"] {
        if let Some(Value::Object(updates)) = body.get(block) {
            for (key, value) in updates {
                user[block][key] = value.clone();
            }
        }
    }
    (StatusCode::OK, Json(user.clone()))
}

// ============================================================================
// SECTION: Project Handlers
// ============================================================================

async fn create_project(State(state): State<SharedState>, Json(body): Json<Value>) -> ApiReply {
    let Ok(mut store) = state.lock() else {
        return lock_failure();
    };
    let (Some(name), Some(owner_id)) = (str_of(&body, "name"), str_of(&body, "ownerId")) else {
        return error_reply(StatusCode::BAD_REQUEST, "Name and ownerId are required");
    };
    let visibility = str_of(&body, "visibility").unwrap_or_else(|| "private".to_string());
    let id = store.fresh_id("project-");
    let project = json!({
        "id": id.clone(),
        "name": name.clone(),
        "description": str_of(&body, "description").unwrap_or_default(),
        "ownerId": owner_id.clone(),
        "settings": {"visibility": visibility, "allowMemberInvites": true},
        "stats": {"totalTasks": 0, "completedTasks": 0},
        "members": [{"userId": owner_id.clone(), "role": "owner", "joinedAt": STUB_TIMESTAMP}],
        "createdAt": STUB_TIMESTAMP,
    });
    store.projects.push(project.clone());
    store.record_activity(&id, &owner_id, "project_created", json!({"projectName": name}));
    (StatusCode::OK, Json(project))
}

async fn list_projects(
    State(state): State<SharedState>,
    Query(query): Query<HashMap<String, String>>,
) -> ApiReply {
    let Ok(store) = state.lock() else {
        return lock_failure();
    };
    let Some(user_id) = query.get("userId") else {
        return error_reply(StatusCode::BAD_REQUEST, "userId query parameter is required");
    };
    let listed: Vec<Value> = store
        .projects
        .iter()
        .filter(|project| member_ids(project).iter().any(|member| member == user_id))
        .map(|project| {
            let mut entry = project.clone();
            let details: Vec<Value> = member_ids(project)
                .iter()
                .filter_map(|member| store.user_by_id(member).cloned())
                .collect();
            entry["memberDetails"] = Value::Array(details);
            entry
        })
        .collect();
    (StatusCode::OK, Json(Value::Array(listed)))
}

fn member_ids(project: &Value) -> Vec<String> {
    project["members"]
        .as_array()
        .map(|members| {
            members
                .iter()
                .filter_map(|member| member.get("userId").and_then(Value::as_str))
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

// ============================================================================
// SECTION: Invitation Handlers
// ============================================================================

async fn create_invitation(State(state): State<SharedState>, Json(body): Json<Value>) -> ApiReply {
    let Ok(mut store) = state.lock() else {
        return lock_failure();
    };
    let (Some(project_id), Some(email), Some(invited_by)) =
        (str_of(&body, "projectId"), str_of(&body, "email"), str_of(&body, "invitedBy"))
    else {
        return error_reply(StatusCode::BAD_REQUEST, "projectId, email, and invitedBy are required");
    };
    if store.project_mut(&project_id).is_none() {
        return error_reply(StatusCode::NOT_FOUND, "Project not found");
    }
    let role = str_of(&body, "role").unwrap_or_else(|| "member".to_string());
    let token = store.fresh_id("invite-token-");
    let invitation = json!({
        "token": token.clone(),
        "inviteUrl": format!("http://localhost:3000/invite/{token}"),
        "projectId": project_id.clone(),
        "email": email.clone(),
        "role": role,
        "invitedBy": invited_by.clone(),
        "status": "pending",
        "createdAt": STUB_TIMESTAMP,
    });
    store.invitations.insert(token, invitation.clone());
    store.record_activity(&project_id, &invited_by, "member_invited", json!({"email": email}));
    (StatusCode::OK, Json(json!({"invitation": invitation, "message": "Invitation sent"})))
}

async fn accept_invitation(
    State(state): State<SharedState>,
    Path(token): Path<String>,
    Json(body): Json<Value>,
) -> ApiReply {
    let Ok(mut store) = state.lock() else {
        return lock_failure();
    };
    let Some(user_id) = str_of(&body, "userId") else {
        return error_reply(StatusCode::BAD_REQUEST, "userId is required");
    };
    let Some(invitation) = store.invitations.get(&token).cloned() else {
        return error_reply(StatusCode::NOT_FOUND, "Invitation not found");
    };
    let project_id = str_of(&invitation, "projectId").unwrap_or_default();
    let role = str_of(&invitation, "role").unwrap_or_else(|| "member".to_string());
    let Some(project) = store.project_mut(&project_id) else {
        return error_reply(StatusCode::NOT_FOUND, "Project not found");
    };
    let already_member = member_ids(project).iter().any(|member| member == &user_id);
    if !already_member {
        if let Some(members) = project["members"].as_array_mut() {
            members.push(json!({
                "userId": user_id.clone(),
                "role": role.clone(),
                "joinedAt": STUB_TIMESTAMP,
            }));
        }
    }
    let project = project.clone();
    store.invitations.remove(&token);
    store.record_activity(&project_id, &user_id, "member_joined", json!({"role": role}));
    (
        StatusCode::OK,
        Json(json!({"message": "Invitation accepted successfully", "project": project})),
    )
}

// ============================================================================
// SECTION: Task Handlers
// ============================================================================

async fn create_task(State(state): State<SharedState>, Json(body): Json<Value>) -> ApiReply {
    let Ok(mut store) = state.lock() else {
        return lock_failure();
    };
    let (Some(title), Some(project_id)) = (str_of(&body, "title"), str_of(&body, "projectId"))
    else {
        return error_reply(StatusCode::BAD_REQUEST, "Title and projectId are required");
    };
    let Some(project) = store.project_mut(&project_id) else {
        return error_reply(StatusCode::NOT_FOUND, "Project not found");
    };
    let total = project["stats"]["totalTasks"].as_u64().unwrap_or(0);
    project["stats"]["totalTasks"] = json!(total + 1);
    let creator = str_of(&body, "assigneeId").unwrap_or_default();
    let id = store.fresh_id("task-");
    let task = json!({
        "id": id,
        "title": title.clone(),
        "description": str_of(&body, "description").unwrap_or_default(),
        "projectId": project_id.clone(),
        "status": str_of(&body, "status").unwrap_or_else(|| "todo".to_string()),
        "priority": str_of(&body, "priority").unwrap_or_else(|| "medium".to_string()),
        "assigneeId": body.get("assigneeId").cloned().unwrap_or(Value::Null),
        "tags": body.get("tags").cloned().unwrap_or_else(|| json!([])),
        "dueDate": body.get("dueDate").cloned().unwrap_or(Value::Null),
        "estimatedHours": body.get("estimatedHours").cloned().unwrap_or(Value::Null),
        "actualHours": Value::Null,
        "comments": [],
        "subTasks": [],
        "dependencies": [],
        "attachments": [],
        "createdAt": STUB_TIMESTAMP,
    });
    store.tasks.push(task.clone());
    store.record_activity(&project_id, &creator, "task_created", json!({"taskTitle": title}));
    (StatusCode::OK, Json(task))
}

async fn list_tasks(
    State(state): State<SharedState>,
    Query(query): Query<HashMap<String, String>>,
) -> ApiReply {
    let Ok(store) = state.lock() else {
        return lock_failure();
    };
    let Some(project_id) = query.get("projectId") else {
        return error_reply(StatusCode::BAD_REQUEST, "projectId query parameter is required");
    };
    let listed: Vec<Value> = store
        .tasks
        .iter()
        .filter(|task| task["projectId"] == project_id.as_str())
        .cloned()
        .collect();
    (StatusCode::OK, Json(Value::Array(listed)))
}

async fn update_task(
    State(state): State<SharedState>,
    Path(task_id): Path<String>,
    Json(body): Json<Value>,
) -> ApiReply {
    let Ok(mut store) = state.lock() else {
        return lock_failure();
    };
    let Some(index) = store.tasks.iter().position(|task| task["id"] == task_id.as_str()) else {
        return error_reply(StatusCode::NOT_FOUND, "Task not found");
    };
    let previous_status = str_of(&store.tasks[index], "status").unwrap_or_default();
    let updatable = [
        "title",
        "description",
        "status",
        "priority",
        "assigneeId",
        "tags",
        "dueDate",
        "estimatedHours",
        "actualHours",
    ];
    for name in updatable {
        if let Some(value) = body.get(name) {
            store.tasks[index][name] = value.clone();
        }
    }
    let task = store.tasks[index].clone();
    let new_status = str_of(&task, "status").unwrap_or_default();
    if new_status != previous_status {
        let project_id = str_of(&task, "projectId").unwrap_or_default();
        let actor = str_of(&body, "updatedBy").unwrap_or_default();
        store.record_activity(
            &project_id,
            &actor,
            "task_status_changed",
            json!({"from": previous_status, "to": new_status}),
        );
    }
    (StatusCode::OK, Json(task))
}

async fn delete_task(State(state): State<SharedState>, Path(task_id): Path<String>) -> ApiReply {
    let Ok(mut store) = state.lock() else {
        return lock_failure();
    };
    let Some(index) = store.tasks.iter().position(|task| task["id"] == task_id.as_str()) else {
        return error_reply(StatusCode::NOT_FOUND, "Task not found");
    };
    let task = store.tasks.remove(index);
    let project_id = str_of(&task, "projectId").unwrap_or_default();
    if let Some(project) = store.project_mut(&project_id) {
        let total = project["stats"]["totalTasks"].as_u64().unwrap_or(0);
        project["stats"]["totalTasks"] = json!(total.saturating_sub(1));
    }
    (StatusCode::OK, Json(json!({"message": "Task deleted successfully"})))
}

async fn add_comment(
    State(state): State<SharedState>,
    Path(task_id): Path<String>,
    Json(body): Json<Value>,
) -> ApiReply {
    let Ok(mut store) = state.lock() else {
        return lock_failure();
    };
    let (Some(content), Some(user_id)) = (str_of(&body, "content"), str_of(&body, "userId"))
    else {
        return error_reply(StatusCode::BAD_REQUEST, "Content and userId are required");
    };
    let author = match store.user_by_id(&user_id) {
        Some(user) => json!({
            "name": user["name"].clone(),
            "avatar": user["avatar"].clone(),
        }),
        None => return error_reply(StatusCode::NOT_FOUND, "User not found"),
    };
    let comment_id = store.fresh_id("comment-");
    let comment = json!({
        "id": comment_id,
        "content": content,
        "userId": user_id.clone(),
        "user": author,
        "createdAt": STUB_TIMESTAMP,
    });
    let Some(task) = store.tasks.iter_mut().find(|task| task["id"] == task_id.as_str()) else {
        return error_reply(StatusCode::NOT_FOUND, "Task not found");
    };
    if let Some(comments) = task["comments"].as_array_mut() {
        comments.push(comment.clone());
    }
    let project_id = str_of(task, "projectId").unwrap_or_default();
    store.record_activity(&project_id, &user_id, "comment_added", json!({"taskId": task_id}));
    (StatusCode::OK, Json(comment))
}

// ============================================================================
// SECTION: Activity Handlers
// ============================================================================

async fn list_activities(
    State(state): State<SharedState>,
    Query(query): Query<HashMap<String, String>>,
) -> ApiReply {
    let Ok(store) = state.lock() else {
        return lock_failure();
    };
    let Some(project_id) = query.get("projectId") else {
        return error_reply(StatusCode::BAD_REQUEST, "projectId query parameter is required");
    };
    let listed: Vec<Value> = store
        .activities
        .iter()
        .filter(|activity| activity["projectId"] == project_id.as_str())
        .cloned()
        .collect();
    (StatusCode::OK, Json(Value::Array(listed)))
}
