//! Serde shapes for the GraphQL responses we consume.
//!
//! Every level is optional because AniList returns `null` for hidden or
//! deleted media; rows missing an id are skipped rather than failing the
//! whole list.

use serde::Deserialize;

use crate::models::{CatalogRecord, MediaFormat, TitleId, WatchEntry};

#[derive(Debug, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Option<Vec<GraphQlError>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

impl<T> GraphQlResponse<T> {
    /// First reported error message, if any.
    pub fn first_error(&self) -> Option<&str> {
        self.errors.as_ref().and_then(|errors| errors.first()).map(|e| e.message.as_str())
    }
}

// -- MediaListCollection ----------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct MediaListCollectionData {
    #[serde(rename = "MediaListCollection")]
    pub collection: Option<MediaListCollection>,
}

#[derive(Debug, Deserialize)]
pub struct MediaListCollection {
    pub lists: Option<Vec<Option<MediaListGroup>>>,
}

#[derive(Debug, Deserialize)]
pub struct MediaListGroup {
    pub entries: Option<Vec<Option<MediaListEntry>>>,
}

#[derive(Debug, Deserialize)]
pub struct MediaListEntry {
    pub status: Option<String>,
    pub media: Option<Media>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Media {
    pub id: Option<TitleId>,
    pub format: Option<MediaFormat>,
    pub start_date: Option<FuzzyDate>,
    pub popularity: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct FuzzyDate {
    pub year: Option<i64>,
}

impl MediaListCollectionData {
    /// Flatten every custom/status list into watch entries.
    pub fn into_entries(self) -> Vec<WatchEntry> {
        self.collection
            .and_then(|c| c.lists)
            .unwrap_or_default()
            .into_iter()
            .flatten()
            .flat_map(|group| group.entries.unwrap_or_default())
            .flatten()
            .filter_map(|entry| {
                let media = entry.media?;
                Some(WatchEntry {
                    id: media.id?,
                    format: media.format,
                    status: entry.status.unwrap_or_default(),
                    year: media.start_date.and_then(|d| d.year),
                    popularity: media.popularity,
                })
            })
            .collect()
    }
}

// -- User -------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct UserData {
    #[serde(rename = "User")]
    pub user: Option<UserId>,
}

#[derive(Debug, Deserialize)]
pub struct UserId {
    pub id: i64,
}

// -- Page (catalog dump) ----------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct PageData {
    #[serde(rename = "Page")]
    pub page: PageResult,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResult {
    pub page_info: PageInfo,
    #[serde(default)]
    pub media: Vec<PageMedia>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    #[serde(default)]
    pub has_next_page: bool,
}

#[derive(Debug, Deserialize)]
pub struct PageMedia {
    pub id: TitleId,
    pub title: Option<MediaTitle>,
}

#[derive(Debug, Deserialize)]
pub struct MediaTitle {
    pub romaji: Option<String>,
    pub english: Option<String>,
}

/// One page of catalog rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogPage {
    pub records: Vec<CatalogRecord>,
    pub has_next_page: bool,
}

impl From<PageData> for CatalogPage {
    fn from(data: PageData) -> Self {
        let records = data
            .page
            .media
            .into_iter()
            .map(|media| {
                let title = media.title.unwrap_or(MediaTitle { romaji: None, english: None });
                CatalogRecord {
                    id: media.id,
                    romaji: title.romaji.unwrap_or_default(),
                    english: title.english.unwrap_or_default(),
                }
            })
            .collect();
        Self { records, has_next_page: data.page.page_info.has_next_page }
    }
}
