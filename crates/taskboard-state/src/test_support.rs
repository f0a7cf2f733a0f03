//! Shared test doubles for the container tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use mockall::mock;
use taskboard_api::Api;
use taskboard_core::{ApiResult, Navigator};
use taskboard_domain::{
    AddMemberPayload, AuthResponse, Comment, CreateCommentPayload, CreateProjectPayload,
    CreateTaskPayload, CreateTeamPayload, LoginPayload, Project, ProjectId, RegisterPayload, Task,
    TaskChanges, TaskId, TaskPriority, TaskStatus, Team, TeamId, TeamMember, User,
};

mock! {
    pub ScriptedApi {}

    #[async_trait]
    impl Api for ScriptedApi {
        async fn login(&self, payload: &LoginPayload) -> ApiResult<AuthResponse>;
        async fn register(&self, payload: &RegisterPayload) -> ApiResult<AuthResponse>;
        async fn list_teams(&self) -> ApiResult<Vec<Team>>;
        async fn create_team(&self, payload: &CreateTeamPayload) -> ApiResult<Team>;
        async fn delete_team(&self, id: TeamId) -> ApiResult<()>;
        async fn list_members(&self, team_id: TeamId) -> ApiResult<Vec<TeamMember>>;
        async fn add_member(&self, team_id: TeamId, payload: &AddMemberPayload) -> ApiResult<()>;
        async fn list_users(&self) -> ApiResult<Vec<User>>;
        async fn list_projects(&self) -> ApiResult<Vec<Project>>;
        async fn create_project(&self, payload: &CreateProjectPayload) -> ApiResult<Project>;
        async fn delete_project(&self, id: ProjectId) -> ApiResult<()>;
        async fn list_tasks(&self, project_id: ProjectId) -> ApiResult<Vec<Task>>;
        async fn create_task(&self, payload: &CreateTaskPayload) -> ApiResult<Task>;
        async fn update_task(&self, id: TaskId, changes: &TaskChanges) -> ApiResult<Task>;
        async fn delete_task(&self, id: TaskId) -> ApiResult<()>;
        async fn list_comments(&self, task_id: TaskId) -> ApiResult<Vec<Comment>>;
        async fn create_comment(&self, payload: &CreateCommentPayload) -> ApiResult<Comment>;
    }
}

/// Counts redirects so teardown behavior can be asserted.
#[derive(Default)]
pub struct RecordingNavigator {
    redirects: AtomicUsize,
}

impl RecordingNavigator {
    pub fn redirect_count(&self) -> usize {
        self.redirects.load(Ordering::SeqCst)
    }
}

impl Navigator for RecordingNavigator {
    fn redirect_to_login(&self) {
        self.redirects.fetch_add(1, Ordering::SeqCst);
    }
}

pub fn user(id: i64, name: &str) -> User {
    User {
        id,
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        role: None,
    }
}

pub fn team(id: i64, name: &str) -> Team {
    Team {
        id,
        name: name.to_string(),
        created_at: None,
        members_count: None,
    }
}

pub fn project(id: i64, name: &str, team_id: i64) -> Project {
    Project {
        id,
        name: name.to_string(),
        description: None,
        team_id,
        status: None,
        created_at: None,
    }
}

pub fn task(id: i64, title: &str, status: TaskStatus) -> Task {
    Task {
        id,
        title: title.to_string(),
        description: String::new(),
        status,
        priority: TaskPriority::Normal,
        project_id: 1,
        assignee_id: None,
        due_date: None,
        order_index: None,
    }
}
