//! Error types for answer-pool construction.
//!
//! Only the pool pipeline produces these. Title ranking never fails, and an
//! empty ranked list is a normal outcome rather than an error.

use thiserror::Error;

use crate::models::{CombineMode, MediaStatus};

/// Settings that cannot be used to build a pool.
///
/// Raised before any network activity.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// No AniList usernames are configured.
    #[error("no AniList usernames configured")]
    NoUsers,

    /// The status selection is empty.
    #[error("no statuses selected")]
    NoStatuses,

    /// A range has both bounds set and `min > max`.
    #[error("invalid {field} range: min {min} is greater than max {max}")]
    InvalidRange {
        /// Which dimension the range filters (`year` or `popularity`).
        field: &'static str,
        /// Configured lower bound.
        min: i64,
        /// Configured upper bound.
        max: i64,
    },
}

/// Errors surfaced by the answer-pool pipeline.
#[derive(Debug, Error)]
pub enum Error {
    /// The settings record failed validation.
    #[error("invalid settings: {0}")]
    Configuration(#[from] ConfigError),

    /// Fetching one user's list failed; the whole aggregation is aborted.
    #[error("failed to fetch list for user '{user}': {message}")]
    RemoteFetch {
        /// The user whose fetch failed.
        user: String,
        /// Underlying cause.
        message: String,
    },

    /// Filtering and combination left nothing to pick from.
    #[error("no candidates found (mode={mode}, statuses={})", format_statuses(.statuses))]
    EmptyPool {
        /// Combination mode in effect.
        mode: CombineMode,
        /// Canonical statuses in effect.
        statuses: Vec<MediaStatus>,
    },
}

fn format_statuses(statuses: &[MediaStatus]) -> String {
    statuses.iter().map(|s| s.as_str()).collect::<Vec<_>>().join(",")
}

pub type Result<T> = std::result::Result<T, Error>;
