// crates/boardcheck-client/src/http.rs
// ============================================================================
// Module: Service HTTP Client
// Description: REST calls against the project-management service contract.
// Purpose: One method per documented endpoint over a single shared client.
// Dependencies: reqwest, serde_json, url
// ============================================================================

//! ## Overview
//! The client is built once per run with a bounded timeout and reused for
//! every call; execution is sequential, so no internal synchronization is
//! needed. Every method returns an [`ApiResponse`] carrying the raw status
//! and JSON body. Calls are issued exactly once: the harness asserts current
//! behavior, so transport faults are reported, not retried.

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use crate::error::ClientError;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default bound on each HTTP round trip.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Maximum body length reproduced in diagnostics.
const SNIPPET_MAX_CHARS: usize = 200;

// ============================================================================
// SECTION: Response Type
// ============================================================================

/// Raw outcome of one HTTP exchange: status code plus parsed JSON body.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// HTTP status code of the response.
    pub status: u16,
    /// Parsed JSON body; `Null` when the body was empty.
    pub body: Value,
}

impl ApiResponse {
    /// Decodes the body into a typed representation.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidBody`] when the body does not match the
    /// expected shape.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, ClientError> {
        serde_json::from_value(self.body.clone())
            .map_err(|err| ClientError::InvalidBody(err.to_string()))
    }

    /// Returns a bounded rendering of the body for failure diagnostics.
    #[must_use]
    pub fn body_snippet(&self) -> String {
        let rendered = self.body.to_string();
        if rendered.chars().count() <= SNIPPET_MAX_CHARS {
            return rendered;
        }
        rendered.chars().take(SNIPPET_MAX_CHARS).collect()
    }
}

// ============================================================================
// SECTION: Client
// ============================================================================

/// HTTP client for the project-management service.
#[derive(Debug, Clone)]
pub struct ApiClient {
    /// Base URL including the `/api` prefix, without a trailing slash.
    base_url: String,
    /// Shared reqwest client with the run's timeout applied.
    http: Client,
}

impl ApiClient {
    /// Creates a client for a base URL with a per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Config`] when the URL does not parse or the
    /// underlying client cannot be built. Both indicate a harness
    /// configuration bug and are fatal to the run.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        let parsed = Url::parse(base_url)
            .map_err(|err| ClientError::Config(format!("invalid base url {base_url}: {err}")))?;
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| ClientError::Config(format!("failed to build http client: {err}")))?;
        Ok(Self {
            base_url: parsed.as_str().trim_end_matches('/').to_string(),
            http,
        })
    }

    /// Returns the configured base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Joins a contract path onto the base URL.
    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    // ------------------------------------------------------------------
    // Contract: root
    // ------------------------------------------------------------------

    /// `GET /api/`: service identity probe.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] on transport failure or a non-JSON body.
    pub async fn root(&self) -> Result<ApiResponse, ClientError> {
        self.get(&self.endpoint("/")).await
    }

    // ------------------------------------------------------------------
    // Contract: authentication and users
    // ------------------------------------------------------------------

    /// `POST /api/auth/register`: create a user account.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] on transport failure or a non-JSON body.
    pub async fn register(&self, body: &Value) -> Result<ApiResponse, ClientError> {
        self.post(&self.endpoint("/auth/register"), body).await
    }

    /// `POST /api/auth/login`: authenticate with email and password.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] on transport failure or a non-JSON body.
    pub async fn login(&self, body: &Value) -> Result<ApiResponse, ClientError> {
        self.post(&self.endpoint("/auth/login"), body).await
    }

    /// `GET /api/users/{id}`: fetch a full user profile.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] on transport failure or a non-JSON body.
    pub async fn user(&self, user_id: &str) -> Result<ApiResponse, ClientError> {
        self.get(&self.endpoint(&format!("/users/{user_id}"))).await
    }

    /// `PUT /api/users/{id}`: merge a partial profile/settings update.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] on transport failure or a non-JSON body.
    pub async fn update_user(&self, user_id: &str, body: &Value) -> Result<ApiResponse, ClientError> {
        self.put(&self.endpoint(&format!("/users/{user_id}")), body).await
    }

    // ------------------------------------------------------------------
    // Contract: projects and invitations
    // ------------------------------------------------------------------

    /// `POST /api/projects`: create a project.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] on transport failure or a non-JSON body.
    pub async fn create_project(&self, body: &Value) -> Result<ApiResponse, ClientError> {
        self.post(&self.endpoint("/projects"), body).await
    }

    /// `GET /api/projects?userId=...`: list projects visible to a user.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] on transport failure or a non-JSON body.
    pub async fn projects_for_user(&self, user_id: &str) -> Result<ApiResponse, ClientError> {
        self.get_with_query(&self.endpoint("/projects"), &[("userId", user_id)]).await
    }

    /// `GET /api/projects` without the required `userId` query parameter.
    ///
    /// Exists so validation cases can exercise the 400 path.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] on transport failure or a non-JSON body.
    pub async fn projects_unscoped(&self) -> Result<ApiResponse, ClientError> {
        self.get(&self.endpoint("/projects")).await
    }

    /// `POST /api/invitations`: issue a project invitation.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] on transport failure or a non-JSON body.
    pub async fn create_invitation(&self, body: &Value) -> Result<ApiResponse, ClientError> {
        self.post(&self.endpoint("/invitations"), body).await
    }

    /// `POST /api/invitations/{token}/accept`: accept an invitation.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] on transport failure or a non-JSON body.
    pub async fn accept_invitation(
        &self,
        token: &str,
        body: &Value,
    ) -> Result<ApiResponse, ClientError> {
        self.post(&self.endpoint(&format!("/invitations/{token}/accept")), body).await
    }

    // ------------------------------------------------------------------
    // Contract: tasks, comments, activities
    // ------------------------------------------------------------------

    /// `POST /api/tasks`: create a task inside a project.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] on transport failure or a non-JSON body.
    pub async fn create_task(&self, body: &Value) -> Result<ApiResponse, ClientError> {
        self.post(&self.endpoint("/tasks"), body).await
    }

    /// `GET /api/tasks?projectId=...`: list a project's tasks.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] on transport failure or a non-JSON body.
    pub async fn tasks_for_project(&self, project_id: &str) -> Result<ApiResponse, ClientError> {
        self.get_with_query(&self.endpoint("/tasks"), &[("projectId", project_id)]).await
    }

    /// `PUT /api/tasks/{id}`: apply a partial task update.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] on transport failure or a non-JSON body.
    pub async fn update_task(&self, task_id: &str, body: &Value) -> Result<ApiResponse, ClientError> {
        self.put(&self.endpoint(&format!("/tasks/{task_id}")), body).await
    }

    /// `DELETE /api/tasks/{id}`: delete a task.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] on transport failure or a non-JSON body.
    pub async fn delete_task(&self, task_id: &str) -> Result<ApiResponse, ClientError> {
        let exchange = format!("DELETE {}", self.endpoint(&format!("/tasks/{task_id}")));
        let response = self
            .http
            .delete(self.endpoint(&format!("/tasks/{task_id}")))
            .send()
            .await
            .map_err(|err| ClientError::from_transport(&exchange, &err))?;
        Self::read_response(&exchange, response).await
    }

    /// `POST /api/tasks/{id}/comments`: add a comment to a task.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] on transport failure or a non-JSON body.
    pub async fn add_comment(&self, task_id: &str, body: &Value) -> Result<ApiResponse, ClientError> {
        self.post(&self.endpoint(&format!("/tasks/{task_id}/comments")), body).await
    }

    /// `GET /api/activities?projectId=...`: list a project's activity log.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] on transport failure or a non-JSON body.
    pub async fn activities_for_project(&self, project_id: &str) -> Result<ApiResponse, ClientError> {
        self.get_with_query(&self.endpoint("/activities"), &[("projectId", project_id)]).await
    }

    // ------------------------------------------------------------------
    // Transport plumbing
    // ------------------------------------------------------------------

    /// Issues a GET request and reads the response.
    async fn get(&self, url: &str) -> Result<ApiResponse, ClientError> {
        let exchange = format!("GET {url}");
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|err| ClientError::from_transport(&exchange, &err))?;
        Self::read_response(&exchange, response).await
    }

    /// Issues a GET request with query parameters and reads the response.
    async fn get_with_query(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<ApiResponse, ClientError> {
        let exchange = format!("GET {url}");
        let response = self
            .http
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|err| ClientError::from_transport(&exchange, &err))?;
        Self::read_response(&exchange, response).await
    }

    /// Issues a POST request with a JSON body and reads the response.
    async fn post(&self, url: &str, body: &Value) -> Result<ApiResponse, ClientError> {
        let exchange = format!("POST {url}");
        let response = self
            .http
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|err| ClientError::from_transport(&exchange, &err))?;
        Self::read_response(&exchange, response).await
    }

    /// Issues a PUT request with a JSON body and reads the response.
    async fn put(&self, url: &str, body: &Value) -> Result<ApiResponse, ClientError> {
        let exchange = format!("PUT {url}");
        let response = self
            .http
            .put(url)
            .json(body)
            .send()
            .await
            .map_err(|err| ClientError::from_transport(&exchange, &err))?;
        Self::read_response(&exchange, response).await
    }

    /// Reads a response body as JSON, treating an empty body as `Null`.
    async fn read_response(
        exchange: &str,
        response: reqwest::Response,
    ) -> Result<ApiResponse, ClientError> {
        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|err| ClientError::from_transport(exchange, &err))?;
        let body = if text.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text).map_err(|err| {
                ClientError::InvalidBody(format!("{exchange}: malformed json: {err}"))
            })?
        };
        Ok(ApiResponse {
            status,
            body,
        })
    }
}
