use async_trait::async_trait;
use reqwest::Client;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::Quiz,
        dto::{ErrorBody, QuizDto},
    },
};

/// Quiz generation behind the backend service. A 400 means the article URL
/// was rejected; any other failure status carries the server's detail
/// message; transport errors name the expected backend location.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuizGeneratorClient: Send + Sync {
    async fn generate_quiz(&self, url: &str) -> AppResult<Quiz>;
}

pub struct HttpQuizGeneratorClient {
    client: Client,
    base_url: String,
}

impl HttpQuizGeneratorClient {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl QuizGeneratorClient for HttpQuizGeneratorClient {
    async fn generate_quiz(&self, url: &str) -> AppResult<Quiz> {
        log::info!("Requesting quiz generation for {}", url);

        let response = self
            .client
            .post(format!("{}/generate-quiz", self.base_url))
            .query(&[("url", url)])
            .send()
            .await
            .map_err(|e| AppError::Unreachable {
                base_url: self.base_url.clone(),
                detail: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let detail = response
                .json::<ErrorBody>()
                .await
                .map(|body| body.detail)
                .unwrap_or_else(|_| {
                    status
                        .canonical_reason()
                        .unwrap_or("unknown error")
                        .to_string()
                });

            log::warn!("Quiz generation failed with status {}: {}", status, detail);
            return Err(match status.as_u16() {
                400 => AppError::InvalidArticle(detail),
                code => AppError::GenerationFailed {
                    status: code,
                    detail,
                },
            });
        }

        let dto: QuizDto = response.json().await.map_err(|e| AppError::GenerationFailed {
            status: status.as_u16(),
            detail: format!("malformed quiz payload: {}", e),
        })?;

        log::info!(
            "Quiz generation succeeded for {} ({} questions)",
            url,
            dto.quiz.len()
        );
        Ok(dto.into())
    }
}
