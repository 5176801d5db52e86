pub mod quiz_dto;
pub mod response;

pub use quiz_dto::{QuestionDto, QuizDto};
pub use response::{ErrorBody, HistoryItemDto, PreviewDto};
