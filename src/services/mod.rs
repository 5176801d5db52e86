pub mod grading_service;
pub mod section_service;

pub use grading_service::GradingService;
pub use section_service::{IndexedQuestion, SectionGroup, SectionService, DEFAULT_SECTION};
