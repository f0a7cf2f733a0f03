//! Comments container, scoped to the task whose detail view is open.

use std::sync::{Arc, Mutex};

use taskboard_api::Api;
use taskboard_core::{ApiError, ApiResult, Notify};
use taskboard_domain::comment::normalized_body;
use taskboard_domain::{Comment, CreateCommentPayload, TaskId};

use crate::collection::{lock, report_local_failure, run_load, Collection, LoadingGuard};

pub struct CommentsStore {
    api: Arc<dyn Api>,
    notifier: Arc<dyn Notify>,
    comments: Mutex<Collection<Comment>>,
}

impl CommentsStore {
    pub fn new(api: Arc<dyn Api>, notifier: Arc<dyn Notify>) -> Self {
        Self {
            api,
            notifier,
            comments: Mutex::new(Collection::default()),
        }
    }

    pub fn comments(&self) -> Vec<Comment> {
        lock(&self.comments).items.clone()
    }

    pub fn is_loading(&self) -> bool {
        lock(&self.comments).loading
    }

    pub fn error(&self) -> Option<String> {
        lock(&self.comments).error.clone()
    }

    pub async fn load_comments(&self, task_id: TaskId) -> ApiResult<()> {
        run_load(
            &self.comments,
            &*self.notifier,
            "Could not load comments",
            self.api.list_comments(task_id),
        )
        .await
    }

    /// Post a comment. The body is trimmed first; a body that is empty after
    /// trimming is rejected locally and no request is issued.
    pub async fn add_comment(&self, task_id: TaskId, body: &str) -> ApiResult<Comment> {
        let Some(body) = normalized_body(body) else {
            self.notifier.error("A comment cannot be empty");
            return Err(ApiError::Validation {
                message: Some("comment body must not be empty".to_string()),
            });
        };

        let _guard = LoadingGuard::begin(&self.comments);
        let payload = CreateCommentPayload { task_id, body };
        match self.api.create_comment(&payload).await {
            Ok(comment) => {
                lock(&self.comments).items.push(comment.clone());
                self.notifier.success("Comment added");
                Ok(comment)
            }
            Err(err) => {
                report_local_failure(&*self.notifier, &err, "Could not send the comment");
                Err(err)
            }
        }
    }

    /// Called when the task detail view closes.
    pub fn clear_comments(&self) {
        lock(&self.comments).items.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::MockScriptedApi;
    use taskboard_core::RecordingNotifier;

    fn comment(id: i64, task_id: i64, body: &str) -> Comment {
        Comment {
            id,
            task_id,
            user_id: 1,
            body: body.to_string(),
            created_at: chrono::Utc::now(),
            author_name: "Dana".to_string(),
        }
    }

    fn store(api: MockScriptedApi) -> (CommentsStore, Arc<RecordingNotifier>) {
        let notifier = Arc::new(RecordingNotifier::new());
        (CommentsStore::new(Arc::new(api), notifier.clone()), notifier)
    }

    #[tokio::test]
    async fn test_load_scoped_by_task() {
        let mut api = MockScriptedApi::new();
        api.expect_list_comments()
            .withf(|task_id| *task_id == 5)
            .returning(|_| Ok(vec![comment(1, 5, "looks good")]));
        let (store, _) = store(api);

        store.load_comments(5).await.unwrap();
        assert_eq!(store.comments().len(), 1);
    }

    #[tokio::test]
    async fn test_add_comment_trims_body() {
        let mut api = MockScriptedApi::new();
        api.expect_create_comment()
            .withf(|payload| payload.body == "ship it")
            .returning(|payload| Ok(comment(2, payload.task_id, &payload.body)));
        let (store, notifier) = store(api);

        store.add_comment(5, "  ship it  ").await.unwrap();

        assert_eq!(store.comments().len(), 1);
        assert_eq!(notifier.messages(), vec!["Comment added".to_string()]);
    }

    #[tokio::test]
    async fn test_empty_body_rejected_without_request() {
        // no expectation mounted: any request would panic the mock
        let api = MockScriptedApi::new();
        let (store, notifier) = store(api);

        let result = store.add_comment(5, "   \n ").await;

        assert!(matches!(result, Err(ApiError::Validation { .. })));
        assert!(store.comments().is_empty());
        assert!(!store.is_loading());
        assert_eq!(notifier.messages(), vec!["A comment cannot be empty".to_string()]);
    }

    #[tokio::test]
    async fn test_clear_comments_on_leaving_detail_view() {
        let mut api = MockScriptedApi::new();
        api.expect_list_comments()
            .returning(|_| Ok(vec![comment(1, 5, "a"), comment(2, 5, "b")]));
        let (store, _) = store(api);
        store.load_comments(5).await.unwrap();

        store.clear_comments();
        assert!(store.comments().is_empty());
    }
}
