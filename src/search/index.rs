use log::debug;

use super::normalize::normalize_title;
use crate::models::{CatalogEntry, CatalogRecord, TitleId};

/// Read-only title index, built once per session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogIndex {
    entries: Vec<CatalogEntry>,
}

impl CatalogIndex {
    /// Build the index, trimming titles and skipping records with no usable title.
    pub fn build<I>(records: I) -> Self
    where
        I: IntoIterator<Item = CatalogRecord>,
    {
        let mut skipped = 0usize;
        let entries: Vec<CatalogEntry> = records
            .into_iter()
            .filter_map(|record| {
                let romaji = record.romaji.trim().to_string();
                let english = record.english.trim().to_string();
                if romaji.is_empty() && english.is_empty() {
                    skipped += 1;
                    return None;
                }
                Some(CatalogEntry {
                    id: record.id,
                    normalized_romaji: normalize_title(&romaji),
                    normalized_english: normalize_title(&english),
                    romaji,
                    english,
                })
            })
            .collect();

        debug!("Catalog index built: {} titles ({} without a title skipped)", entries.len(), skipped);
        Self { entries }
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a title by id (linear scan).
    pub fn find(&self, id: TitleId) -> Option<&CatalogEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }
}
