use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::task::TaskId;
use crate::user::UserId;

pub type CommentId = i64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: CommentId,
    pub task_id: TaskId,
    pub user_id: UserId,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub author_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentPayload {
    pub task_id: TaskId,
    pub body: String,
}

/// Trim a raw comment body. Returns `None` when nothing is left, which the
/// caller must reject before any request is issued.
pub fn normalized_body(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalized_body_trims() {
        assert_eq!(normalized_body("  hello  "), Some("hello".to_string()));
    }

    #[test]
    fn test_normalized_body_rejects_whitespace() {
        assert_eq!(normalized_body("   \n\t  "), None);
        assert_eq!(normalized_body(""), None);
    }
}
