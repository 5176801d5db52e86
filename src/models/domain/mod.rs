pub mod attempt;
pub mod history;
pub mod preview;
pub mod question;
pub mod quiz;

pub use attempt::{AttemptScore, QuestionResult};
pub use history::HistoryEntry;
pub use preview::ArticlePreview;
pub use question::{Difficulty, Question};
pub use quiz::{KeyEntities, Quiz};
