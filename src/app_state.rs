use std::sync::Arc;

use crate::{
    clients::{
        ArticlePreviewClient, HttpPreviewClient, HttpQuizGeneratorClient, HttpQuizHistoryClient,
        QuizGeneratorClient, QuizHistoryClient,
    },
    config::Config,
    errors::{AppError, AppResult},
    session::{HistoryView, QuizSession},
};

/// Wiring point: one shared HTTP client behind the three backend
/// collaborators, handed out to sessions and history views.
#[derive(Clone)]
pub struct AppState {
    pub preview_client: Arc<dyn ArticlePreviewClient>,
    pub generator_client: Arc<dyn QuizGeneratorClient>,
    pub history_client: Arc<dyn QuizHistoryClient>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| AppError::Unreachable {
                base_url: config.api_base_url.clone(),
                detail: format!("failed to build HTTP client: {}", e),
            })?;

        let base_url = config.api_base_url.clone();
        let preview_client = Arc::new(HttpPreviewClient::new(client.clone(), base_url.clone()));
        let generator_client =
            Arc::new(HttpQuizGeneratorClient::new(client.clone(), base_url.clone()));
        let history_client = Arc::new(HttpQuizHistoryClient::new(client, base_url));

        Ok(Self {
            preview_client,
            generator_client,
            history_client,
            config: Arc::new(config),
        })
    }

    pub fn new_session(&self) -> QuizSession {
        QuizSession::new(
            Arc::clone(&self.generator_client),
            Arc::clone(&self.preview_client),
            self.config.preview_debounce(),
        )
    }

    pub fn new_history_view(&self) -> HistoryView {
        HistoryView::new(Arc::clone(&self.history_client))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_cloneable() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[tokio::test]
    async fn test_app_state_hands_out_fresh_sessions() {
        let state = AppState::new(Config::test_config()).expect("state should build");

        let session = state.new_session();
        assert_eq!(
            session.state().await,
            crate::session::SessionState::Idle
        );

        let view = state.new_history_view();
        assert!(matches!(
            view.list_state(),
            crate::session::HistoryListState::Loading
        ));
    }
}
