//! Prefix/contains ranking of catalog titles.
//!
//! Each title contributes at most one match per non-empty field. Prefix
//! matches come before contains matches; within a tier shorter normalized
//! titles come first, ties broken by display text. Duplicates, i.e. the same
//! title id with an identical normalized text, are dropped before the limit
//! is applied.

use std::cmp::Ordering;
use std::collections::HashSet;

use super::index::CatalogIndex;
use super::normalize::normalize_title;
use crate::models::{CatalogEntry, MatchKind, RankedMatch, TitleId};

/// Default number of suggestions returned.
pub const DEFAULT_LIMIT: usize = 20;

/// Normalize `query` and rank the index against it.
pub fn rank_titles(query: &str, index: &CatalogIndex, limit: usize) -> Vec<RankedMatch> {
    rank_normalized(&normalize_title(query), index, limit)
}

/// Rank against an already-normalized query. An empty query matches nothing.
pub fn rank_normalized(query: &str, index: &CatalogIndex, limit: usize) -> Vec<RankedMatch> {
    if query.is_empty() {
        return Vec::new();
    }

    let mut prefix: Vec<(RankedMatch, &str)> = Vec::new();
    let mut contains: Vec<(RankedMatch, &str)> = Vec::new();

    for entry in index.entries() {
        for kind in [MatchKind::English, MatchKind::Romaji] {
            let (text, normalized) = field(entry, kind);
            if normalized.is_empty() {
                continue;
            }
            let bucket = if normalized.starts_with(query) {
                &mut prefix
            } else if normalized.contains(query) {
                &mut contains
            } else {
                continue;
            };
            bucket.push((
                RankedMatch {
                    id: entry.id,
                    kind,
                    text: text.to_string(),
                    normalized_len: normalized.len(),
                },
                normalized,
            ));
        }
    }

    prefix.sort_by(|a, b| compare_matches(&a.0, &b.0));
    contains.sort_by(|a, b| compare_matches(&a.0, &b.0));

    let mut seen: HashSet<(TitleId, &str)> = HashSet::new();
    prefix
        .into_iter()
        .chain(contains)
        .filter(|(m, normalized)| seen.insert((m.id, *normalized)))
        .map(|(m, _)| m)
        .take(limit)
        .collect()
}

fn field(entry: &CatalogEntry, kind: MatchKind) -> (&str, &str) {
    match kind {
        MatchKind::English => (&entry.english, &entry.normalized_english),
        MatchKind::Romaji => (&entry.romaji, &entry.normalized_romaji),
    }
}

fn compare_matches(a: &RankedMatch, b: &RankedMatch) -> Ordering {
    a.normalized_len.cmp(&b.normalized_len).then_with(|| a.text.cmp(&b.text))
}
