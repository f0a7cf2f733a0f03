//! HTTP transport for the taskboard API.
//!
//! Every outbound request is augmented with the session's bearer token when
//! one is present. Failures are mapped to [`ApiError`] categories; the
//! categories the interceptor owns (connectivity, 401, 403, 404) are
//! reported to the user here, exactly once per failed request, so the state
//! layer never reports them again.

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use taskboard_core::{ApiError, ApiResult, Navigator, Notify};
use taskboard_domain::{
    AddMemberPayload, AuthResponse, Comment, CreateCommentPayload, CreateProjectPayload,
    CreateTaskPayload, CreateTeamPayload, LoginPayload, Project, ProjectId, RegisterPayload, Task,
    TaskChanges, TaskId, Team, TeamId, TeamMember, User,
};

use crate::api::Api;
use crate::session::{SessionStore, TOKEN_KEY, USER_KEY};

/// Extract a human-readable message from a JSON error body.
///
/// Tries `message`, then `error`, then falls back to the raw body.
fn extract_error_message(body: &str) -> String {
    if let Ok(json) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(msg) = json.get("message").and_then(|v| v.as_str()) {
            return msg.to_string();
        }
        if let Some(msg) = json.get("error").and_then(|v| v.as_str()) {
            return msg.to_string();
        }
    }
    body.to_string()
}

pub struct ApiClient {
    http: Client,
    base_url: String,
    session: Arc<dyn SessionStore>,
    notifier: Arc<dyn Notify>,
    navigator: Arc<dyn Navigator>,
}

impl ApiClient {
    pub fn new(
        base_url: impl Into<String>,
        session: Arc<dyn SessionStore>,
        notifier: Arc<dyn Notify>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            session,
            notifier,
            navigator,
        }
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let mut request = self
            .http
            .request(method, format!("{}{}", self.base_url, path));
        if let Some(token) = self.session.get(TOKEN_KEY) {
            request = request.bearer_auth(token);
        }
        request
    }

    /// Send a request and run the response through the cross-cutting failure
    /// handling.
    async fn execute(&self, request: RequestBuilder) -> ApiResult<Response> {
        let response = match request.send().await {
            Ok(response) => response,
            Err(err) => {
                tracing::warn!(error = %err, "request failed before reaching the server");
                self.notifier
                    .error("Connection problem, check your network and try again");
                return Err(ApiError::Connectivity(err.to_string()));
            }
        };

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = extract_error_message(&body);
        let err = ApiError::from_status(status.as_u16(), message);
        tracing::debug!(status = status.as_u16(), error = %err, "request rejected");

        match &err {
            ApiError::Unauthorized(_) => {
                self.notifier
                    .error("Authentication failed, please sign in again");
                self.session.remove(TOKEN_KEY);
                self.session.remove(USER_KEY);
                self.navigator.redirect_to_login();
            }
            ApiError::Forbidden(message) => {
                if message.is_empty() {
                    self.notifier
                        .error("You do not have permission to do that");
                } else {
                    self.notifier.error(message);
                }
            }
            ApiError::NotFound(_) => {
                self.notifier.error("The requested item could not be found");
            }
            _ => {}
        }
        Err(err)
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
        let status = response.status().as_u16();
        response.json().await.map_err(|err| ApiError::Unknown {
            status,
            message: format!("invalid response body: {err}"),
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let response = self.execute(self.request(Method::GET, path)).await?;
        Self::decode(response).await
    }

    async fn get_json_with_query<T: DeserializeOwned, Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> ApiResult<T> {
        let response = self
            .execute(self.request(Method::GET, path).query(query))
            .await?;
        Self::decode(response).await
    }

    async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let response = self
            .execute(self.request(Method::POST, path).json(body))
            .await?;
        Self::decode(response).await
    }

    /// POST where the caller does not consume the response body.
    async fn post_unit<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> ApiResult<()> {
        self.execute(self.request(Method::POST, path).json(body))
            .await?;
        Ok(())
    }

    async fn patch_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let response = self
            .execute(self.request(Method::PATCH, path).json(body))
            .await?;
        Self::decode(response).await
    }

    async fn delete(&self, path: &str) -> ApiResult<()> {
        self.execute(self.request(Method::DELETE, path)).await?;
        Ok(())
    }
}

#[async_trait]
impl Api for ApiClient {
    async fn login(&self, payload: &LoginPayload) -> ApiResult<AuthResponse> {
        self.post_json("/auth/login", payload).await
    }

    async fn register(&self, payload: &RegisterPayload) -> ApiResult<AuthResponse> {
        self.post_json("/auth/register", payload).await
    }

    async fn list_teams(&self) -> ApiResult<Vec<Team>> {
        self.get_json("/teams").await
    }

    async fn create_team(&self, payload: &CreateTeamPayload) -> ApiResult<Team> {
        self.post_json("/teams", payload).await
    }

    async fn delete_team(&self, id: TeamId) -> ApiResult<()> {
        self.delete(&format!("/teams/{id}")).await
    }

    async fn list_members(&self, team_id: TeamId) -> ApiResult<Vec<TeamMember>> {
        self.get_json(&format!("/teams/{team_id}/members")).await
    }

    async fn add_member(&self, team_id: TeamId, payload: &AddMemberPayload) -> ApiResult<()> {
        self.post_unit(&format!("/teams/{team_id}/members"), payload)
            .await
    }

    async fn list_users(&self) -> ApiResult<Vec<User>> {
        self.get_json("/users").await
    }

    async fn list_projects(&self) -> ApiResult<Vec<Project>> {
        self.get_json("/projects").await
    }

    async fn create_project(&self, payload: &CreateProjectPayload) -> ApiResult<Project> {
        self.post_json("/projects", payload).await
    }

    async fn delete_project(&self, id: ProjectId) -> ApiResult<()> {
        self.delete(&format!("/projects/{id}")).await
    }

    async fn list_tasks(&self, project_id: ProjectId) -> ApiResult<Vec<Task>> {
        self.get_json_with_query("/tasks", &[("projectId", project_id)])
            .await
    }

    async fn create_task(&self, payload: &CreateTaskPayload) -> ApiResult<Task> {
        self.post_json("/tasks", payload).await
    }

    async fn update_task(&self, id: TaskId, changes: &TaskChanges) -> ApiResult<Task> {
        self.patch_json(&format!("/tasks/{id}"), changes).await
    }

    async fn delete_task(&self, id: TaskId) -> ApiResult<()> {
        self.delete(&format!("/tasks/{id}")).await
    }

    async fn list_comments(&self, task_id: TaskId) -> ApiResult<Vec<Comment>> {
        self.get_json_with_query("/comments", &[("taskId", task_id)])
            .await
    }

    async fn create_comment(&self, payload: &CreateCommentPayload) -> ApiResult<Comment> {
        self.post_json("/comments", payload).await
    }
}
