use serde::{Deserialize, Serialize};

/// A single quiz question as produced by the generator. Immutable once received.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Question {
    pub text: String,
    pub options: Vec<String>,
    pub answer: String,
    pub explanation: String,
    pub difficulty: Difficulty,
    pub section: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// The generator is not strict about casing; unknown values fall back to Medium.
    pub fn parse_lenient(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "easy" => Difficulty::Easy,
            "hard" => Difficulty::Hard,
            _ => Difficulty::Medium,
        }
    }
}
