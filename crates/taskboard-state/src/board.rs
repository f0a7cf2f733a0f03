//! The drag-and-drop status transition flow.
//!
//! The three column sequences are derived from the task container and the
//! active search string, then reordered in place by drag events. Ordering is
//! presentation-only; only a cross-column move talks to the server.

use std::sync::{Arc, Mutex, PoisonError};

use taskboard_core::ApiResult;
use taskboard_domain::{BoardColumns, DragDrop, Task, TaskChanges, TaskStatus};

use crate::tasks::TasksStore;

pub struct BoardFlow {
    tasks: Arc<TasksStore>,
    columns: Mutex<BoardColumns>,
    search: Mutex<String>,
}

impl BoardFlow {
    pub fn new(tasks: Arc<TasksStore>) -> Self {
        Self {
            tasks,
            columns: Mutex::new(BoardColumns::default()),
            search: Mutex::new(String::new()),
        }
    }

    pub fn search(&self) -> String {
        self.search
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn set_search(&self, query: impl Into<String>) {
        *self.search.lock().unwrap_or_else(PoisonError::into_inner) = query.into();
        self.refresh();
    }

    /// Rebuild the columns from the current task collection and search.
    /// Discards any presentation-only ordering from earlier drags.
    pub fn refresh(&self) {
        let snapshot = self.tasks.tasks();
        let query = self.search();
        *self.columns.lock().unwrap_or_else(PoisonError::into_inner) =
            BoardColumns::derive(&snapshot, &query);
    }

    pub fn column(&self, status: TaskStatus) -> Vec<Task> {
        self.columns
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .column(status)
            .to_vec()
    }

    /// Handle a drop event.
    ///
    /// Within one column the move is local only. Across columns the move is
    /// applied optimistically, then confirmed with a status-only patch; a
    /// rejected patch rolls the board back to the captured pre-drag state,
    /// which is visible as a flicker back.
    pub async fn drop(&self, event: DragDrop) -> ApiResult<()> {
        if event.from == event.to {
            self.columns
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .move_within(event.to, event.from_index, event.to_index);
            return Ok(());
        }

        // capture the previous state, then mutate ahead of confirmation
        let moved = {
            let mut columns = self.columns.lock().unwrap_or_else(PoisonError::into_inner);
            columns.transfer(event.from, event.to, event.from_index, event.to_index)
        };
        let Some(task_id) = moved else {
            tracing::debug!(?event, "drop ignored, stale drag event");
            return Ok(());
        };
        let previous_status = self
            .tasks
            .set_status_local(task_id, event.to)
            .unwrap_or(event.from);

        match self
            .tasks
            .update_task(task_id, TaskChanges::status(event.to))
            .await
        {
            Ok(_) => Ok(()),
            Err(err) => {
                // roll back from the captured snapshot only
                self.tasks.set_status_local(task_id, previous_status);
                self.columns
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .transfer(event.to, event.from, event.to_index, event.from_index);
                Err(err)
            }
        }
    }
}
