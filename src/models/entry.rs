use std::fmt;

use serde::{Deserialize, Serialize};

/// AniList media id.
pub type TitleId = i64;

/// The only media format eligible as an answer.
pub const ALLOWED_FORMAT: MediaFormat = MediaFormat::Tv;

/// Canonical watch status, matching AniList's `MediaListStatus` enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MediaStatus {
    Current,
    Completed,
    Planning,
    Paused,
    Dropped,
    Repeating,
}

impl MediaStatus {
    pub const ALL: [MediaStatus; 6] = [
        MediaStatus::Current,
        MediaStatus::Completed,
        MediaStatus::Planning,
        MediaStatus::Paused,
        MediaStatus::Dropped,
        MediaStatus::Repeating,
    ];

    /// Map a raw token onto the canonical vocabulary.
    ///
    /// Case-insensitive and trimmed. Legacy spellings (`WATCHING`,
    /// `PLAN_TO_WATCH`) are accepted; anything else yields `None`.
    pub fn from_token(token: &str) -> Option<Self> {
        match token.trim().to_ascii_uppercase().as_str() {
            "WATCHING" | "CURRENT" => Some(Self::Current),
            "COMPLETED" => Some(Self::Completed),
            "PLAN_TO_WATCH" | "PLANNING" => Some(Self::Planning),
            "PAUSED" => Some(Self::Paused),
            "DROPPED" => Some(Self::Dropped),
            "REPEATING" => Some(Self::Repeating),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Current => "CURRENT",
            Self::Completed => "COMPLETED",
            Self::Planning => "PLANNING",
            Self::Paused => "PAUSED",
            Self::Dropped => "DROPPED",
            Self::Repeating => "REPEATING",
        }
    }
}

impl fmt::Display for MediaStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// AniList `MediaFormat`. Unrecognized values deserialize to `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MediaFormat {
    Tv,
    TvShort,
    Movie,
    Special,
    Ova,
    Ona,
    Music,
    Manga,
    Novel,
    OneShot,
    #[serde(other)]
    Unknown,
}

/// One watch-list entry as returned for a user. Not persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchEntry {
    pub id: TitleId,
    pub format: Option<MediaFormat>,
    /// Raw status token as reported by the remote source
    pub status: String,
    pub year: Option<i64>,
    pub popularity: Option<i64>,
}
