pub mod history_view;
pub mod preview_controller;
pub mod quiz_session;
pub mod state;

pub use history_view::{HistoryListState, HistoryView, QuizDetailState};
pub use preview_controller::{is_wikipedia_article_url, PreviewController};
pub use quiz_session::{QuizSession, SubmitOutcome};
pub use state::{PreviewState, SessionState};
