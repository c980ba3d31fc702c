use std::collections::HashSet;

use crate::models::MediaStatus;

/// Statuses used when nothing recognizable was selected.
pub const FALLBACK_STATUSES: [MediaStatus; 2] = [MediaStatus::Current, MediaStatus::Completed];

/// Map raw status tokens onto canonical statuses.
///
/// Unrecognized tokens are dropped, duplicates removed (first occurrence keeps
/// its position). Never returns an empty list: falls back to
/// [`FALLBACK_STATUSES`].
pub fn normalize_statuses<S: AsRef<str>>(tokens: &[S]) -> Vec<MediaStatus> {
    let mut seen = HashSet::new();
    let statuses: Vec<MediaStatus> = tokens
        .iter()
        .filter_map(|token| MediaStatus::from_token(token.as_ref()))
        .filter(|status| seen.insert(*status))
        .collect();

    if statuses.is_empty() { FALLBACK_STATUSES.to_vec() } else { statuses }
}
