//! Task filtering.
//!
//! Provides the TaskFilter trait and the filter implementations the derived
//! views are built from.

use crate::task::{Task, TaskStatus};

/// Trait for filtering tasks by various criteria.
pub trait TaskFilter {
    /// Returns true if the task matches the filter criteria.
    fn matches(&self, task: &Task) -> bool;
}

/// Filter tasks by exact status.
pub struct StatusFilter {
    status: TaskStatus,
}

impl StatusFilter {
    /// Create a new status filter.
    pub fn new(status: TaskStatus) -> Self {
        Self { status }
    }
}

impl TaskFilter for StatusFilter {
    fn matches(&self, task: &Task) -> bool {
        task.status == self.status
    }
}

/// Case-insensitive substring search against title or description.
///
/// An empty query matches every task.
pub struct TextSearch {
    query: String,
}

impl TextSearch {
    /// Create a new text search with the given query.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into().trim().to_lowercase(),
        }
    }

    /// Get the normalized search query.
    pub fn query(&self) -> &str {
        &self.query
    }
}

impl TaskFilter for TextSearch {
    fn matches(&self, task: &Task) -> bool {
        if self.query.is_empty() {
            return true;
        }
        task.title.to_lowercase().contains(&self.query)
            || task.description.to_lowercase().contains(&self.query)
    }
}

/// Combine multiple filters with AND logic.
///
/// A task matches only if it passes all filters.
pub struct CompositeFilter {
    filters: Vec<Box<dyn TaskFilter>>,
}

impl CompositeFilter {
    /// Create an empty composite filter (matches all tasks).
    pub fn new() -> Self {
        Self { filters: vec![] }
    }

    /// Add a filter to the composite (builder pattern).
    pub fn with_filter(mut self, filter: Box<dyn TaskFilter>) -> Self {
        self.filters.push(filter);
        self
    }

    /// Check if the composite has no filters.
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

impl Default for CompositeFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskFilter for CompositeFilter {
    fn matches(&self, task: &Task) -> bool {
        // Empty composite matches all tasks
        if self.filters.is_empty() {
            return true;
        }
        self.filters.iter().all(|f| f.matches(task))
    }
}
