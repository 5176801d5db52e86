pub mod generator_client;
pub mod history_client;
pub mod preview_client;

pub use generator_client::{HttpQuizGeneratorClient, QuizGeneratorClient};
pub use history_client::{HttpQuizHistoryClient, QuizHistoryClient};
pub use preview_client::{ArticlePreviewClient, HttpPreviewClient};
