use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type TeamId = i64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Maintained server-side; refreshed by reloading the team list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub members_count: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateTeamPayload {
    pub name: String,
}
