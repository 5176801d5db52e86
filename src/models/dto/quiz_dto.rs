use serde::{Deserialize, Serialize};

use crate::models::domain::question::Difficulty;
use crate::models::domain::quiz::KeyEntities;
use crate::models::domain::{Question, Quiz};

/// Question as served by the backend (`quiz` array entries of
/// `/generate-quiz` and `/quiz/{id}`).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct QuestionDto {
    pub question: String,
    pub options: Vec<String>,
    pub answer: String,
    pub difficulty: String,
    pub explanation: String,
    #[serde(default)]
    pub section: Option<String>,
}

impl From<QuestionDto> for Question {
    fn from(dto: QuestionDto) -> Self {
        Question {
            text: dto.question,
            options: dto.options,
            answer: dto.answer,
            explanation: dto.explanation,
            difficulty: Difficulty::parse_lenient(&dto.difficulty),
            section: dto.section.filter(|s| !s.trim().is_empty()),
        }
    }
}

/// Full quiz payload of `/generate-quiz` and `/quiz/{id}`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct QuizDto {
    pub id: i64,
    pub url: String,
    pub title: String,
    pub summary: String,
    #[serde(default)]
    pub sections: Vec<String>,
    #[serde(default)]
    pub key_entities: KeyEntities,
    pub quiz: Vec<QuestionDto>,
    #[serde(default)]
    pub related_topics: Vec<String>,
}

impl From<QuizDto> for Quiz {
    fn from(dto: QuizDto) -> Self {
        Quiz {
            id: dto.id,
            title: dto.title,
            url: dto.url,
            summary: dto.summary,
            sections: dto.sections,
            key_entities: dto.key_entities,
            questions: dto.quiz.into_iter().map(Question::from).collect(),
            related_topics: dto.related_topics,
        }
    }
}
