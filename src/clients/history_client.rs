use async_trait::async_trait;
use reqwest::Client;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::{HistoryEntry, Quiz},
        dto::{ErrorBody, HistoryItemDto, QuizDto},
    },
};

/// Read-only access to previously generated quizzes. The backend owns the
/// storage; this side only lists and rehydrates.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuizHistoryClient: Send + Sync {
    async fn list_quizzes(&self) -> AppResult<Vec<HistoryEntry>>;
    async fn get_quiz(&self, id: i64) -> AppResult<Quiz>;
}

pub struct HttpQuizHistoryClient {
    client: Client,
    base_url: String,
}

impl HttpQuizHistoryClient {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl QuizHistoryClient for HttpQuizHistoryClient {
    async fn list_quizzes(&self) -> AppResult<Vec<HistoryEntry>> {
        log::debug!("Fetching quiz history list");

        let response = self
            .client
            .get(format!("{}/quizzes", self.base_url))
            .send()
            .await
            .map_err(|e| AppError::HistoryFetchFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::HistoryFetchFailed(format!(
                "backend returned status {}",
                status.as_u16()
            )));
        }

        let items: Vec<HistoryItemDto> = response
            .json()
            .await
            .map_err(|e| AppError::HistoryFetchFailed(e.to_string()))?;

        Ok(items.into_iter().map(HistoryEntry::from).collect())
    }

    async fn get_quiz(&self, id: i64) -> AppResult<Quiz> {
        log::debug!("Fetching quiz details for article {}", id);

        let response = self
            .client
            .get(format!("{}/quiz/{}", self.base_url, id))
            .send()
            .await
            .map_err(|e| AppError::QuizDetailFetchFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response
                .json::<ErrorBody>()
                .await
                .map(|body| body.detail)
                .unwrap_or_else(|_| format!("backend returned status {}", status.as_u16()));
            return Err(AppError::QuizDetailFetchFailed(detail));
        }

        let dto: QuizDto = response
            .json()
            .await
            .map_err(|e| AppError::QuizDetailFetchFailed(e.to_string()))?;

        Ok(dto.into())
    }
}
