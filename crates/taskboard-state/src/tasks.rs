//! Tasks container.

use std::sync::{Arc, Mutex};

use taskboard_api::Api;
use taskboard_core::{ApiResult, Notify};
use taskboard_domain::{
    CreateTaskPayload, ProjectId, Task, TaskChanges, TaskId, TaskPriority, TaskStatus,
};

use crate::auth::AuthState;
use crate::collection::{lock, report_local_failure, run_load, Collection, LoadingGuard};

pub struct TasksStore {
    api: Arc<dyn Api>,
    notifier: Arc<dyn Notify>,
    auth: Arc<AuthState>,
    tasks: Mutex<Collection<Task>>,
}

impl TasksStore {
    pub fn new(api: Arc<dyn Api>, notifier: Arc<dyn Notify>, auth: Arc<AuthState>) -> Self {
        Self {
            api,
            notifier,
            auth,
            tasks: Mutex::new(Collection::default()),
        }
    }

    pub fn tasks(&self) -> Vec<Task> {
        lock(&self.tasks).items.clone()
    }

    pub fn is_loading(&self) -> bool {
        lock(&self.tasks).loading
    }

    pub fn error(&self) -> Option<String> {
        lock(&self.tasks).error.clone()
    }

    pub async fn load_tasks(&self, project_id: ProjectId) -> ApiResult<()> {
        run_load(
            &self.tasks,
            &*self.notifier,
            "Could not load tasks",
            self.api.list_tasks(project_id),
        )
        .await
    }

    /// Create a task. An unset assignee defaults to the signed-in user and
    /// an unset order index to the top of the column.
    pub async fn create_task(&self, mut payload: CreateTaskPayload) -> ApiResult<Task> {
        let _guard = LoadingGuard::begin(&self.tasks);
        if payload.assignee_id.is_none() {
            payload.assignee_id = self.auth.current_user().map(|u| u.id);
        }
        if payload.order_index.is_none() {
            payload.order_index = Some(0);
        }
        match self.api.create_task(&payload).await {
            Ok(task) => {
                lock(&self.tasks).items.push(task.clone());
                self.notifier.success("Task created");
                Ok(task)
            }
            Err(err) => {
                report_local_failure(&*self.notifier, &err, "Could not create the task");
                Err(err)
            }
        }
    }

    /// Patch a task on the server, then replace the local entity with the
    /// server's version wholesale so server-computed fields stay consistent.
    /// Local state is not touched before the request completes.
    pub async fn update_task(&self, id: TaskId, changes: TaskChanges) -> ApiResult<Task> {
        match self.api.update_task(id, &changes).await {
            Ok(updated) => {
                {
                    let mut collection = lock(&self.tasks);
                    if let Some(task) = collection.items.iter_mut().find(|t| t.id == id) {
                        *task = updated.clone();
                    }
                }
                self.notifier.success("Task updated");
                Ok(updated)
            }
            Err(err) => {
                report_local_failure(&*self.notifier, &err, "Could not update the task");
                Err(err)
            }
        }
    }

    pub async fn set_priority(&self, id: TaskId, priority: TaskPriority) -> ApiResult<Task> {
        self.update_task(id, TaskChanges::priority(priority)).await
    }

    pub async fn delete_task(&self, id: TaskId) -> ApiResult<()> {
        match self.api.delete_task(id).await {
            Ok(()) => {
                lock(&self.tasks).items.retain(|t| t.id != id);
                self.notifier.success("Task deleted");
                Ok(())
            }
            Err(err) => {
                report_local_failure(&*self.notifier, &err, "Could not delete the task");
                Err(err)
            }
        }
    }

    /// Optimistic status mutation for the board flow: flips the local status
    /// ahead of server confirmation and returns the previous value so the
    /// caller can roll back from the captured snapshot.
    pub(crate) fn set_status_local(&self, id: TaskId, status: TaskStatus) -> Option<TaskStatus> {
        let mut collection = lock(&self.tasks);
        let task = collection.items.iter_mut().find(|t| t.id == id)?;
        let previous = task.status;
        task.status = status;
        Some(previous)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{task, user, MockScriptedApi, RecordingNavigator};
    use taskboard_api::InMemorySessionStore;
    use taskboard_core::{ApiError, RecordingNotifier};
    use taskboard_domain::{AuthResponse, LoginPayload};

    fn store(api: MockScriptedApi, auth: Arc<AuthState>) -> (TasksStore, Arc<RecordingNotifier>) {
        let notifier = Arc::new(RecordingNotifier::new());
        (
            TasksStore::new(Arc::new(api), notifier.clone(), auth),
            notifier,
        )
    }

    fn unauthenticated() -> Arc<AuthState> {
        Arc::new(AuthState::new(
            Arc::new(MockScriptedApi::new()),
            Arc::new(InMemorySessionStore::new()),
            Arc::new(RecordingNotifier::new()),
            Arc::new(RecordingNavigator::default()),
        ))
    }

    #[tokio::test]
    async fn test_load_scoped_by_project() {
        let mut api = MockScriptedApi::new();
        api.expect_list_tasks()
            .withf(|project_id| *project_id == 3)
            .returning(|_| Ok(vec![task(1, "a", TaskStatus::Todo)]));
        let (store, _) = store(api, unauthenticated());

        store.load_tasks(3).await.unwrap();
        assert_eq!(store.tasks().len(), 1);
    }

    #[tokio::test]
    async fn test_create_defaults_assignee_to_current_user() {
        let mut login_api = MockScriptedApi::new();
        login_api.expect_login().returning(|_| {
            Ok(AuthResponse {
                token: "tok".to_string(),
                user: user(42, "Dana"),
            })
        });
        let auth = Arc::new(AuthState::new(
            Arc::new(login_api),
            Arc::new(InMemorySessionStore::new()),
            Arc::new(RecordingNotifier::new()),
            Arc::new(RecordingNavigator::default()),
        ));
        auth.login(LoginPayload {
            email: "dana@example.com".to_string(),
            password: "s".to_string(),
        })
        .await
        .unwrap();

        let mut api = MockScriptedApi::new();
        api.expect_create_task()
            .withf(|payload| payload.assignee_id == Some(42) && payload.order_index == Some(0))
            .returning(|payload| {
                let mut created = task(9, &payload.title, TaskStatus::Todo);
                created.assignee_id = payload.assignee_id;
                Ok(created)
            });
        let (store, notifier) = store(api, auth);

        let created = store
            .create_task(CreateTaskPayload::new(1, "Ship it"))
            .await
            .unwrap();

        assert_eq!(created.assignee_id, Some(42));
        assert_eq!(store.tasks().iter().filter(|t| t.id == 9).count(), 1);
        assert_eq!(notifier.messages(), vec!["Task created".to_string()]);
    }

    #[tokio::test]
    async fn test_explicit_assignee_wins_over_default() {
        let mut api = MockScriptedApi::new();
        api.expect_create_task()
            .withf(|payload| payload.assignee_id == Some(7))
            .returning(|payload| {
                let mut created = task(9, &payload.title, TaskStatus::Todo);
                created.assignee_id = payload.assignee_id;
                Ok(created)
            });
        let (store, _) = store(api, unauthenticated());

        let mut payload = CreateTaskPayload::new(1, "Ship it");
        payload.assignee_id = Some(7);
        store.create_task(payload).await.unwrap();
    }

    #[tokio::test]
    async fn test_update_replaces_entity_with_server_version() {
        let mut api = MockScriptedApi::new();
        api.expect_list_tasks()
            .returning(|_| Ok(vec![task(5, "old title", TaskStatus::Todo)]));
        api.expect_update_task().returning(|id, _| {
            let mut updated = task(id, "server title", TaskStatus::InProgress);
            updated.order_index = Some(3);
            Ok(updated)
        });
        let (store, _) = store(api, unauthenticated());
        store.load_tasks(1).await.unwrap();

        store
            .update_task(5, TaskChanges::status(TaskStatus::InProgress))
            .await
            .unwrap();

        let tasks = store.tasks();
        assert_eq!(tasks[0].title, "server title", "full replace, not a merge");
        assert_eq!(tasks[0].status, TaskStatus::InProgress);
        assert_eq!(tasks[0].order_index, Some(3));
    }

    #[tokio::test]
    async fn test_update_failure_surfaces_validation_message() {
        let mut api = MockScriptedApi::new();
        api.expect_list_tasks()
            .returning(|_| Ok(vec![task(5, "a", TaskStatus::Todo)]));
        api.expect_update_task().returning(|_, _| {
            Err(ApiError::Validation {
                message: Some("due date is in the past".into()),
            })
        });
        let (store, notifier) = store(api, unauthenticated());
        store.load_tasks(1).await.unwrap();

        let result = store
            .update_task(5, TaskChanges::status(TaskStatus::Done))
            .await;

        assert!(result.is_err());
        assert_eq!(store.tasks()[0].status, TaskStatus::Todo, "no local change");
        assert_eq!(
            notifier.messages(),
            vec!["due date is in the past".to_string()]
        );
    }

    #[tokio::test]
    async fn test_delete_removes_entity() {
        let mut api = MockScriptedApi::new();
        api.expect_list_tasks()
            .returning(|_| Ok(vec![task(5, "a", TaskStatus::Todo), task(6, "b", TaskStatus::Done)]));
        api.expect_delete_task().returning(|_| Ok(()));
        let (store, _) = store(api, unauthenticated());
        store.load_tasks(1).await.unwrap();

        store.delete_task(5).await.unwrap();

        assert!(store.tasks().iter().all(|t| t.id != 5));
        assert_eq!(store.tasks().len(), 1);
    }

    #[tokio::test]
    async fn test_set_status_local_returns_previous() {
        let mut api = MockScriptedApi::new();
        api.expect_list_tasks()
            .returning(|_| Ok(vec![task(5, "a", TaskStatus::Todo)]));
        let (store, _) = store(api, unauthenticated());
        store.load_tasks(1).await.unwrap();

        let previous = store.set_status_local(5, TaskStatus::Done);
        assert_eq!(previous, Some(TaskStatus::Todo));
        assert_eq!(store.tasks()[0].status, TaskStatus::Done);

        assert_eq!(store.set_status_local(99, TaskStatus::Done), None);
    }
}
