use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The scored result of one quiz attempt. Computed exactly once when the
/// attempt is submitted and never recomputed afterwards, so a stored score
/// stays stable even if the matching policy changes later.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct AttemptScore {
    pub id: String,
    pub points_earned: i16,
    pub total_possible: i16,
    pub question_results: Vec<QuestionResult>,
    pub submitted_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuestionResult {
    pub question_index: usize,
    pub selected_option: Option<String>,
    pub is_correct: bool,
}

impl AttemptScore {
    pub fn is_perfect(&self) -> bool {
        self.points_earned == self.total_possible
    }
}
