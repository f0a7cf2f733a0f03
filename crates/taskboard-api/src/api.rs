//! Operations contract between the state layer and the transport.

use async_trait::async_trait;
use taskboard_core::ApiResult;
use taskboard_domain::{
    AddMemberPayload, AuthResponse, Comment, CreateCommentPayload, CreateProjectPayload,
    CreateTaskPayload, CreateTeamPayload, LoginPayload, Project, ProjectId, RegisterPayload, Task,
    TaskChanges, TaskId, Team, TeamId, TeamMember, User,
};

/// Every remote operation the state layer performs.
///
/// Implemented by the HTTP [`crate::ApiClient`]; state containers depend on
/// this trait so tests can substitute a scripted implementation.
#[async_trait]
pub trait Api: Send + Sync {
    // Auth
    async fn login(&self, payload: &LoginPayload) -> ApiResult<AuthResponse>;
    async fn register(&self, payload: &RegisterPayload) -> ApiResult<AuthResponse>;

    // Teams and membership
    async fn list_teams(&self) -> ApiResult<Vec<Team>>;
    async fn create_team(&self, payload: &CreateTeamPayload) -> ApiResult<Team>;
    async fn delete_team(&self, id: TeamId) -> ApiResult<()>;
    async fn list_members(&self, team_id: TeamId) -> ApiResult<Vec<TeamMember>>;
    async fn add_member(&self, team_id: TeamId, payload: &AddMemberPayload) -> ApiResult<()>;
    async fn list_users(&self) -> ApiResult<Vec<User>>;

    // Projects
    async fn list_projects(&self) -> ApiResult<Vec<Project>>;
    async fn create_project(&self, payload: &CreateProjectPayload) -> ApiResult<Project>;
    async fn delete_project(&self, id: ProjectId) -> ApiResult<()>;

    // Tasks
    async fn list_tasks(&self, project_id: ProjectId) -> ApiResult<Vec<Task>>;
    async fn create_task(&self, payload: &CreateTaskPayload) -> ApiResult<Task>;
    async fn update_task(&self, id: TaskId, changes: &TaskChanges) -> ApiResult<Task>;
    async fn delete_task(&self, id: TaskId) -> ApiResult<()>;

    // Comments
    async fn list_comments(&self, task_id: TaskId) -> ApiResult<Vec<Comment>>;
    async fn create_comment(&self, payload: &CreateCommentPayload) -> ApiResult<Comment>;
}
