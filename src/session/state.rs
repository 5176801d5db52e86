use std::collections::BTreeMap;

use crate::models::domain::{ArticlePreview, AttemptScore, Quiz};

/// The one quiz-session state, replacing the original UI's pile of loading/
/// preview/submitted booleans. Exactly one variant is active at a time and
/// transitions are the only mutation path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    PreviewPending {
        url: String,
    },
    PreviewReady {
        url: String,
        preview: ArticlePreview,
    },
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

impl SessionState {
    pub fn name(&self) -> &'static str {
        match self {
            SessionState::Idle => "idle",
            SessionState::PreviewPending { .. } => "preview-pending",
            SessionState::PreviewReady { .. } => "preview-ready",
            SessionState::Generating { .. } => "generating",
            SessionState::Active { .. } => "active",
            SessionState::Submitted { .. } => "submitted",
        }
    }
}

/// Preview lookup state as exposed by the controller.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum PreviewState {
    #[default]
    Idle,
    Loading,
    Ready(ArticlePreview),
    Unavailable,
}
