use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::models::domain::{ArticlePreview, HistoryEntry};

/// Payload of `GET /preview-article`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PreviewDto {
    pub title: String,
    pub summary: String,
}

impl From<PreviewDto> for ArticlePreview {
    fn from(dto: PreviewDto) -> Self {
        ArticlePreview {
            title: dto.title,
            summary: dto.summary,
        }
    }
}

/// One element of the `GET /quizzes` array. The backend serializes full
/// article rows; only the fields the session core uses are kept here, and
/// `created_at` arrives as a naive UTC timestamp.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HistoryItemDto {
    pub id: i64,
    pub url: String,
    pub title: String,
    #[serde(default)]
    pub summary: String,
    pub created_at: NaiveDateTime,
}

impl From<HistoryItemDto> for HistoryEntry {
    fn from(dto: HistoryItemDto) -> Self {
        HistoryEntry {
            id: dto.id,
            title: dto.title,
            url: dto.url,
            summary: dto.summary,
            created_at: dto.created_at.and_utc(),
        }
    }
}

/// FastAPI error envelope: `{"detail": "..."}`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ErrorBody {
    pub detail: String,
}
