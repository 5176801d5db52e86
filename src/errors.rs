use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    #[error("Preview unavailable: {0}")]
    PreviewUnavailable(String),

    #[error("Invalid article: {0}")]
    InvalidArticle(String),

    #[error("Quiz generation failed ({status}): {detail}")]
    GenerationFailed { status: u16, detail: String },

    #[error("Connection error: {detail}. Check that the quiz backend is running at {base_url}")]
    Unreachable { base_url: String, detail: String },

    #[error("Failed to load quiz history: {0}")]
    HistoryFetchFailed(String),

    #[error("Failed to load quiz details: {0}")]
    QuizDetailFetchFailed(String),
}

impl AppError {
    /// True for failures that degrade silently instead of being shown to the user.
    pub fn is_silent(&self) -> bool {
        matches!(self, AppError::PreviewUnavailable(_))
    }
}

pub type AppResult<T> = Result<T, AppError>;
