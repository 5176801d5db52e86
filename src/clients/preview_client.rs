use async_trait::async_trait;
use reqwest::Client;

use crate::{
    errors::{AppError, AppResult},
    models::{domain::ArticlePreview, dto::PreviewDto},
};

/// Fast title/summary lookup for an article URL. Failures are always
/// translated to `PreviewUnavailable`; the preview path never surfaces
/// an error to the user.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ArticlePreviewClient: Send + Sync {
    async fn preview_article(&self, url: &str) -> AppResult<ArticlePreview>;
}

pub struct HttpPreviewClient {
    client: Client,
    base_url: String,
}

impl HttpPreviewClient {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl ArticlePreviewClient for HttpPreviewClient {
    async fn preview_article(&self, url: &str) -> AppResult<ArticlePreview> {
        log::debug!("Fetching article preview for {}", url);

        let response = self
            .client
            .get(format!("{}/preview-article", self.base_url))
            .query(&[("url", url)])
            .send()
            .await
            .map_err(|e| AppError::PreviewUnavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::PreviewUnavailable(format!(
                "backend returned status {}",
                status.as_u16()
            )));
        }

        let dto: PreviewDto = response
            .json()
            .await
            .map_err(|e| AppError::PreviewUnavailable(e.to_string()))?;

        Ok(dto.into())
    }
}
