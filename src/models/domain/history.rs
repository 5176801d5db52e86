use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One row of the past-quizzes list.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct HistoryEntry {
    pub id: i64,
    pub title: String,
    pub url: String,
    pub summary: String,
    pub created_at: DateTime<Utc>,
}
