use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use crate::clients::{ArticlePreviewClient, QuizGeneratorClient};
use crate::errors::{AppError, AppResult};
use crate::models::domain::{AttemptScore, Quiz};
use crate::services::GradingService;
use crate::session::preview_controller::PreviewController;
use crate::session::state::{PreviewState, SessionState};

/// Lifecycle phase owned by the session. The input phase covers the
/// `Idle`/`PreviewPending`/`PreviewReady` variants of `SessionState`, which
/// are derived from the preview controller when a snapshot is taken.
enum Phase {
    Input,
    Generating {
        url: String,
    },
    Active {
        quiz: Quiz,
        selections: BTreeMap<usize, String>,
    },
    Submitted {
        quiz: Quiz,
        selections: BTreeMap<usize, String>,
        score: AttemptScore,
    },
}

impl Phase {
    fn name(&self) -> &'static str {
        match self {
            Phase::Input => "input",
            Phase::Generating { .. } => "generating",
            Phase::Active { .. } => "active",
            Phase::Submitted { .. } => "submitted",
        }
    }
}

/// Result of a submit request. An incomplete attempt needs an explicit
/// user confirmation before it is scored; until then the state is untouched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Scored(AttemptScore),
    ConfirmationRequired { answered: usize, total: usize },
    NotActive,
}

/// The quiz session state machine. All mutation goes through its methods;
/// the owner processes one event at a time, so no locking is involved beyond
/// the preview controller's internal slot.
pub struct QuizSession {
    generator: Arc<dyn QuizGeneratorClient>,
    preview: PreviewController,
    phase: Phase,
    last_error: Option<AppError>,
}

impl QuizSession {
    pub fn new(
        generator: Arc<dyn QuizGeneratorClient>,
        preview_client: Arc<dyn ArticlePreviewClient>,
        preview_debounce: Duration,
    ) -> Self {
        Self {
            generator,
            preview: PreviewController::new(preview_client, preview_debounce),
            phase: Phase::Input,
            last_error: None,
        }
    }

    /// The user edited the URL input. Only meaningful in the input phase.
    pub async fn edit_url(&mut self, url: &str) {
        if !matches!(self.phase, Phase::Input) {
            log::warn!("Ignoring URL edit while {}", self.phase.name());
            return;
        }
        self.preview.on_url_changed(url).await;
    }

    /// Submit a URL for quiz generation. At most one generation request is
    /// outstanding at a time: the request is issued from the input phase and
    /// awaited in place. Any preview is cleared immediately and no preview
    /// may commit while generation runs.
    pub async fn generate(&mut self, url: &str) -> AppResult<()> {
        if !matches!(self.phase, Phase::Input) {
            log::warn!("Ignoring generation request while {}", self.phase.name());
            return Ok(());
        }

        self.preview.suppress().await;
        self.last_error = None;
        self.phase = Phase::Generating {
            url: url.to_string(),
        };
        log::info!("Generating quiz for {}", url);

        match self.generator.generate_quiz(url).await {
            Ok(quiz) => {
                log::info!(
                    "Quiz ready: {} ({} questions)",
                    quiz.title,
                    quiz.question_count()
                );
                self.phase = Phase::Active {
                    quiz,
                    selections: BTreeMap::new(),
                };
                Ok(())
            }
            Err(err) => {
                log::warn!("Quiz generation failed: {}", err);
                self.phase = Phase::Input;
                self.preview.reset().await;
                self.last_error = Some(err.clone());
                Err(err)
            }
        }
    }

    /// Record a single-select answer. Re-selection overwrites the previous
    /// choice for that question; selecting after submission is a no-op.
    pub fn select_option(&mut self, question_index: usize, option: &str) {
        match &mut self.phase {
            Phase::Active { quiz, selections } => {
                if question_index >= quiz.questions.len() {
                    log::warn!(
                        "Ignoring selection for out-of-range question index {}",
                        question_index
                    );
                    return;
                }
                selections.insert(question_index, option.to_string());
            }
            Phase::Submitted { .. } => {
                log::debug!("Ignoring selection after submission");
            }
            Phase::Input | Phase::Generating { .. } => {
                log::warn!("Ignoring selection outside an active quiz");
            }
        }
    }

    /// Submit the attempt. Refuses with `ConfirmationRequired` when not all
    /// questions are answered; the caller confirms with the user and calls
    /// `submit_answers_confirmed` to proceed anyway.
    pub fn submit_answers(&mut self) -> SubmitOutcome {
        if let Phase::Active { quiz, selections } = &self.phase {
            if selections.len() < quiz.questions.len() {
                return SubmitOutcome::ConfirmationRequired {
                    answered: selections.len(),
                    total: quiz.questions.len(),
                };
            }
        } else {
            return SubmitOutcome::NotActive;
        }
        self.finalize_submission()
    }

    /// Submit even with unanswered questions (user confirmed).
    pub fn submit_answers_confirmed(&mut self) -> SubmitOutcome {
        if !matches!(self.phase, Phase::Active { .. }) {
            return SubmitOutcome::NotActive;
        }
        self.finalize_submission()
    }

    /// The one place a score is computed. The stored result is never
    /// recomputed, so an attempt's score stays stable even if the matching
    /// policy changes later.
    fn finalize_submission(&mut self) -> SubmitOutcome {
        let phase = std::mem::replace(&mut self.phase, Phase::Input);
        match phase {
            Phase::Active { quiz, selections } => {
                let score = GradingService::grade_attempt(&quiz, &selections);
                log::info!(
                    "Attempt submitted: {}/{}",
                    score.points_earned,
                    score.total_possible
                );
                let outcome = SubmitOutcome::Scored(score.clone());
                self.phase = Phase::Submitted {
                    quiz,
                    selections,
                    score,
                };
                outcome
            }
            other => {
                self.phase = other;
                SubmitOutcome::NotActive
            }
        }
    }

    /// Fresh attempt at the same quiz.
    pub fn try_again(&mut self) {
        let phase = std::mem::replace(&mut self.phase, Phase::Input);
        match phase {
            Phase::Submitted { quiz, .. } => {
                log::info!("Restarting attempt for {}", quiz.title);
                self.phase = Phase::Active {
                    quiz,
                    selections: BTreeMap::new(),
                };
            }
            other => {
                log::warn!("Ignoring try-again while {}", other.name());
                self.phase = other;
            }
        }
    }

    /// Back to the URL input for another article.
    pub async fn reset(&mut self) {
        log::debug!("Session reset from {}", self.phase.name());
        self.phase = Phase::Input;
        self.last_error = None;
        self.preview.reset().await;
    }

    /// The error surfaced by the most recent failed generation, if any.
    pub fn last_error(&self) -> Option<&AppError> {
        self.last_error.as_ref()
    }

    /// Snapshot of the current session state. Input-phase variants are
    /// derived from the preview controller, so inconsistent combinations
    /// (a live preview on a submitted quiz, say) cannot be observed.
    pub async fn state(&self) -> SessionState {
        match &self.phase {
            Phase::Input => {
                let url = self.preview.current_url().await;
                match self.preview.state().await {
                    PreviewState::Loading => SessionState::PreviewPending { url },
                    PreviewState::Ready(preview) => SessionState::PreviewReady { url, preview },
                    PreviewState::Idle | PreviewState::Unavailable => SessionState::Idle,
                }
            }
            Phase::Generating { url } => SessionState::Generating { url: url.clone() },
            Phase::Active { quiz, selections } => SessionState::Active {
                quiz: quiz.clone(),
                selections: selections.clone(),
            },
            Phase::Submitted {
                quiz,
                selections,
                score,
            } => SessionState::Submitted {
                quiz: quiz.clone(),
                selections: selections.clone(),
                score: score.clone(),
            },
        }
    }
}
