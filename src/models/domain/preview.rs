use serde::{Deserialize, Serialize};

/// Lightweight article preview shown while the user is still typing a URL.
/// Ephemeral: superseded by any newer preview and cleared on generation start.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct ArticlePreview {
    pub title: String,
    pub summary: String,
}
