use std::collections::BTreeMap;

use chrono::Utc;
use once_cell::sync::Lazy;
use regex::Regex;
use uuid::Uuid;

use crate::models::domain::{AttemptScore, Question, QuestionResult, Quiz};

/// Leading enumeration label such as "A.", "2)" or "c-".
static ENUM_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^[a-d0-9][.)\-]\s*").expect("valid prefix regex"));

/// A bare letter answer: the generator sometimes returns "B" instead of the
/// option text.
static LETTER_ANSWER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^[a-d]$").expect("valid letter regex"));

pub struct GradingService;

impl GradingService {
    /// Decide whether a displayed option is the ground-truth answer. The
    /// generator's answer field is inconsistent (full option text, a bare
    /// letter, or a prefixed label), so matching is layered, short-circuiting
    /// on the first rule that holds. Total: malformed input yields `false`.
    pub fn matches_answer(option: &str, answer: &str) -> bool {
        let opt = option.trim();
        let ans = answer.trim();
        if opt.is_empty() || ans.is_empty() {
            return false;
        }

        // Exact match, ignoring case.
        if opt.to_lowercase() == ans.to_lowercase() {
            return true;
        }

        // Match after stripping enumeration prefixes from both sides.
        let clean_opt = Self::strip_prefix(opt);
        let clean_ans = Self::strip_prefix(ans);
        if !clean_opt.is_empty() && clean_opt == clean_ans {
            return true;
        }

        // The answer is just the letter: accept an option labeled with it.
        if LETTER_ANSWER.is_match(ans) {
            let label = format!("{}.", ans.to_uppercase());
            if opt.to_uppercase().starts_with(&label) {
                return true;
            }
        }

        // Substring fallback, guarded against short answers like "ab".
        if clean_ans.len() > 3 && clean_opt.contains(&clean_ans) {
            return true;
        }

        false
    }

    fn strip_prefix(s: &str) -> String {
        ENUM_PREFIX.replace(s, "").to_lowercase().trim().to_string()
    }

    /// Grade a full attempt. Called exactly once per submission; unanswered
    /// questions contribute zero points.
    pub fn grade_attempt(quiz: &Quiz, selections: &BTreeMap<usize, String>) -> AttemptScore {
        let mut points_earned: i16 = 0;
        let mut question_results = Vec::with_capacity(quiz.questions.len());

        for (index, question) in quiz.questions.iter().enumerate() {
            let selected = selections.get(&index);
            let is_correct = selected
                .map(|option| Self::matches_answer(option, &question.answer))
                .unwrap_or(false);

            if is_correct {
                points_earned += 1;
            }

            question_results.push(QuestionResult {
                question_index: index,
                selected_option: selected.cloned(),
                is_correct,
            });
        }

        AttemptScore {
            id: Uuid::new_v4().to_string(),
            points_earned,
            total_possible: quiz.questions.len() as i16,
            question_results,
            submitted_at: Utc::now(),
        }
    }

    /// Which options of a question count as correct. Used by the read-only
    /// history display, which has no selections to grade.
    pub fn correct_option_indices(question: &Question) -> Vec<usize> {
        question
            .options
            .iter()
            .enumerate()
            .filter(|(_, option)| Self::matches_answer(option, &question.answer))
            .map(|(index, _)| index)
            .collect()
    }
}
