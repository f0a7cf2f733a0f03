//! Board column model for the drag-and-drop flow.

use crate::task::{Task, TaskStatus};
use crate::views::board_column;

/// A drag-drop event between (or within) board columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragDrop {
    pub from: TaskStatus,
    pub to: TaskStatus,
    pub from_index: usize,
    pub to_index: usize,
}

/// The three ordered column sequences of the board.
///
/// Ordering inside a column is presentation-only and never persisted; it
/// survives until the columns are re-derived from the task collection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoardColumns {
    todo: Vec<Task>,
    in_progress: Vec<Task>,
    done: Vec<Task>,
}

impl BoardColumns {
    /// Partition a task snapshot into the three columns, applying the search
    /// query to each.
    pub fn derive(tasks: &[Task], query: &str) -> Self {
        Self {
            todo: board_column(tasks, TaskStatus::Todo, query),
            in_progress: board_column(tasks, TaskStatus::InProgress, query),
            done: board_column(tasks, TaskStatus::Done, query),
        }
    }

    pub fn column(&self, status: TaskStatus) -> &[Task] {
        match status {
            TaskStatus::Todo => &self.todo,
            TaskStatus::InProgress => &self.in_progress,
            TaskStatus::Done => &self.done,
        }
    }

    fn column_mut(&mut self, status: TaskStatus) -> &mut Vec<Task> {
        match status {
            TaskStatus::Todo => &mut self.todo,
            TaskStatus::InProgress => &mut self.in_progress,
            TaskStatus::Done => &mut self.done,
        }
    }

    /// Reorder a task inside one column. Out-of-range source indices are
    /// ignored; the destination index is clamped.
    pub fn move_within(&mut self, status: TaskStatus, from_index: usize, to_index: usize) {
        let column = self.column_mut(status);
        if from_index >= column.len() {
            tracing::debug!(
                status = status.as_str(),
                from_index,
                "reorder ignored, stale source index"
            );
            return;
        }
        let task = column.remove(from_index);
        let to_index = to_index.min(column.len());
        column.insert(to_index, task);
    }

    /// Move a task from one column to another at the destination index,
    /// updating its status field to match the destination column. Returns
    /// the id of the moved task, or `None` when the source index is stale.
    pub fn transfer(
        &mut self,
        from: TaskStatus,
        to: TaskStatus,
        from_index: usize,
        to_index: usize,
    ) -> Option<crate::task::TaskId> {
        let source = self.column_mut(from);
        if from_index >= source.len() {
            tracing::debug!(
                from = from.as_str(),
                to = to.as_str(),
                from_index,
                "transfer ignored, stale source index"
            );
            return None;
        }
        let mut task = source.remove(from_index);
        task.status = to;
        let id = task.id;
        let target = self.column_mut(to);
        let to_index = to_index.min(target.len());
        target.insert(to_index, task);
        Some(id)
    }
}
