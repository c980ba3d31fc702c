use std::collections::HashSet;

use super::status::normalize_statuses;
use crate::models::{ALLOWED_FORMAT, Bounds, MediaStatus, Settings, TitleId, WatchEntry};

/// Predicates applied to every watch entry before it enters a user's set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryFilter {
    statuses: HashSet<MediaStatus>,
    year: Bounds,
    popularity: Bounds,
}

impl EntryFilter {
    pub fn new(statuses: &[MediaStatus], year: Bounds, popularity: Bounds) -> Self {
        Self { statuses: statuses.iter().copied().collect(), year, popularity }
    }

    /// Build the filter from a settings snapshot, normalizing its statuses.
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            &normalize_statuses(&settings.statuses),
            settings.year_range(),
            settings.popularity_range(),
        )
    }

    /// Accept an entry iff:
    /// 1. its format is [`ALLOWED_FORMAT`]
    /// 2. its normalized status is selected
    /// 3. its year passes the year range
    /// 4. its popularity passes the popularity range
    ///
    /// Missing year/popularity fails an active bound but is fine when the
    /// dimension is unbounded (see [`Bounds::admits`]).
    pub fn accepts(&self, entry: &WatchEntry) -> bool {
        if entry.format != Some(ALLOWED_FORMAT) {
            return false;
        }

        match MediaStatus::from_token(&entry.status) {
            Some(status) if self.statuses.contains(&status) => {}
            _ => return false,
        }

        self.year.admits(entry.year) && self.popularity.admits(entry.popularity)
    }
}

/// Apply the filter to a user's entries, returning the accepted title ids.
pub fn apply_filters(entries: &[WatchEntry], filter: &EntryFilter) -> HashSet<TitleId> {
    entries.iter().filter(|entry| filter.accepts(entry)).map(|entry| entry.id).collect()
}
