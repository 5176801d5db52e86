use serde::{Deserialize, Serialize};

use crate::models::domain::question::Question;

/// A generated quiz, identified by the article URL that produced it.
/// Immutable once received from the generator.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Quiz {
    pub id: i64,
    pub title: String,
    pub url: String,
    pub summary: String,
    pub sections: Vec<String>,
    pub key_entities: KeyEntities,
    pub questions: Vec<Question>,
    pub related_topics: Vec<String>,
}

/// Entities the scraper extracted from the article, grouped by kind.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct KeyEntities {
    #[serde(default)]
    pub people: Vec<String>,
    #[serde(default)]
    pub organizations: Vec<String>,
    #[serde(default)]
    pub locations: Vec<String>,
}

impl Quiz {
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }
}
