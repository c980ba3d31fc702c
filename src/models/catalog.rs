use serde::{Deserialize, Serialize};

use super::entry::TitleId;

/// One row of the downloaded catalog file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogRecord {
    pub id: TitleId,
    #[serde(default)]
    pub romaji: String,
    #[serde(default)]
    pub english: String,
}

/// Catalog row with precomputed normalized titles. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub id: TitleId,
    pub romaji: String,
    pub english: String,
    pub normalized_romaji: String,
    pub normalized_english: String,
}

/// Which title field produced a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchKind {
    Romaji,
    English,
}

impl MatchKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Romaji => "Romaji",
            Self::English => "English",
        }
    }
}

/// A single ranked suggestion. Rebuilt on every query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedMatch {
    pub id: TitleId,
    pub kind: MatchKind,
    pub text: String,
    /// Character length of the normalized field that matched
    pub normalized_len: usize,
}
