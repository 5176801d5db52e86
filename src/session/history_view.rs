use std::sync::Arc;

use crate::clients::QuizHistoryClient;
use crate::errors::AppError;
use crate::models::domain::{HistoryEntry, Quiz};

/// State of the past-quizzes list. A failed load is an inline error the
/// user retries with an explicit refresh.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HistoryListState {
    Loading,
    Loaded(Vec<HistoryEntry>),
    Failed(AppError),
}

/// State of the read-only quiz detail. The open quiz bypasses the live
/// session entirely: it is a pre-scored display with no selections, and
/// which options count as correct comes from the shared grading rules.
/// A failed load is a blocking notice the user dismisses.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizDetailState {
    Closed,
    Loading,
    Open(Quiz),
    Failed(AppError),
}

pub struct HistoryView {
    client: Arc<dyn QuizHistoryClient>,
    list: HistoryListState,
    detail: QuizDetailState,
}

impl HistoryView {
    pub fn new(client: Arc<dyn QuizHistoryClient>) -> Self {
        Self {
            client,
            list: HistoryListState::Loading,
            detail: QuizDetailState::Closed,
        }
    }

    /// Load (or reload) the history list.
    pub async fn refresh(&mut self) {
        self.list = HistoryListState::Loading;
        match self.client.list_quizzes().await {
            Ok(entries) => {
                log::debug!("Loaded {} history entries", entries.len());
                self.list = HistoryListState::Loaded(entries);
            }
            Err(err) => {
                log::warn!("History refresh failed: {}", err);
                self.list = HistoryListState::Failed(err);
            }
        }
    }

    /// Open the read-only detail of a past quiz.
    pub async fn open_quiz(&mut self, id: i64) {
        self.detail = QuizDetailState::Loading;
        match self.client.get_quiz(id).await {
            Ok(quiz) => {
                log::debug!("Opened quiz details for article {}", id);
                self.detail = QuizDetailState::Open(quiz);
            }
            Err(err) => {
                log::warn!("Quiz detail fetch failed for article {}: {}", id, err);
                self.detail = QuizDetailState::Failed(err);
            }
        }
    }

    pub fn close_quiz(&mut self) {
        self.detail = QuizDetailState::Closed;
    }

    /// Dismiss a blocking detail-fetch notice.
    pub fn dismiss_error(&mut self) {
        if matches!(self.detail, QuizDetailState::Failed(_)) {
            self.detail = QuizDetailState::Closed;
        }
    }

    pub fn list_state(&self) -> &HistoryListState {
        &self.list
    }

    pub fn detail_state(&self) -> &QuizDetailState {
        &self.detail
    }
}
