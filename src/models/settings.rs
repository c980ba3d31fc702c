//! The flat settings record consumed by the answer-pool pipeline.
//!
//! The JSON shape matches the record the settings form stores, so older files
//! keep loading: missing keys take their defaults and the bounds accept
//! numbers, numeric strings or blanks.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::entry::MediaStatus;
use crate::error::ConfigError;

/// How per-user candidate sets are merged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CombineMode {
    /// Titles on any user's filtered list
    #[default]
    #[serde(rename = "OR", alias = "UNION")]
    Union,
    /// Titles on every user's filtered list
    #[serde(rename = "AND", alias = "INTERSECT")]
    Intersect,
}

impl fmt::Display for CombineMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Union => f.write_str("UNION"),
            Self::Intersect => f.write_str("INTERSECT"),
        }
    }
}

/// Inclusive integer range where either side may be unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bounds {
    pub min: Option<i64>,
    pub max: Option<i64>,
}

impl Bounds {
    pub fn new(min: Option<i64>, max: Option<i64>) -> Self {
        Self { min, max }
    }

    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    /// Check a possibly-missing value against the range.
    ///
    /// A missing value fails every active bound, but passes when the range is
    /// fully unbounded.
    pub fn admits(&self, value: Option<i64>) -> bool {
        if let Some(min) = self.min {
            match value {
                Some(v) if v >= min => {}
                _ => return false,
            }
        }
        if let Some(max) = self.max {
            match value {
                Some(v) if v <= max => {}
                _ => return false,
            }
        }
        true
    }

    pub fn check(&self, field: &'static str) -> Result<(), ConfigError> {
        match (self.min, self.max) {
            (Some(min), Some(max)) if min > max => {
                Err(ConfigError::InvalidRange { field, min, max })
            }
            _ => Ok(()),
        }
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.min, self.max) {
            (None, None) => f.write_str("(any)"),
            (Some(min), Some(max)) => write!(f, "{} - {}", min, max),
            (Some(min), None) => write!(f, ">= {}", min),
            (None, Some(max)) => write!(f, "<= {}", max),
        }
    }
}

/// Settings snapshot. The pool pipeline only reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    #[serde(deserialize_with = "super::deserializers::deserialize_string_list")]
    pub anilist_usernames: Vec<String>,
    pub combine: CombineMode,
    /// Raw status tokens; normalized when the pool is built
    #[serde(deserialize_with = "super::deserializers::deserialize_string_list")]
    pub statuses: Vec<String>,
    #[serde(deserialize_with = "super::deserializers::deserialize_optional_int")]
    pub year_min: Option<i64>,
    #[serde(deserialize_with = "super::deserializers::deserialize_optional_int")]
    pub year_max: Option<i64>,
    #[serde(deserialize_with = "super::deserializers::deserialize_optional_int")]
    pub popularity_min: Option<i64>,
    #[serde(deserialize_with = "super::deserializers::deserialize_optional_int")]
    pub popularity_max: Option<i64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            anilist_usernames: Vec::new(),
            combine: CombineMode::Union,
            statuses: [MediaStatus::Current, MediaStatus::Completed, MediaStatus::Planning]
                .iter()
                .map(|s| s.as_str().to_string())
                .collect(),
            year_min: None,
            year_max: None,
            popularity_min: None,
            popularity_max: None,
        }
    }
}

impl Settings {
    pub fn year_range(&self) -> Bounds {
        Bounds::new(self.year_min, self.year_max)
    }

    pub fn popularity_range(&self) -> Bounds {
        Bounds::new(self.popularity_min, self.popularity_max)
    }

    /// Usernames after normalization, with case-insensitive duplicates and
    /// blanks removed. The first spelling of each name wins.
    pub fn normalized_usernames(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.anilist_usernames
            .iter()
            .map(|raw| normalize_username(raw))
            .filter(|name| !name.is_empty())
            .filter(|name| seen.insert(name.to_lowercase()))
            .collect()
    }

    /// Validate before use. Checked by the pool pipeline ahead of any fetch.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.normalized_usernames().is_empty() {
            return Err(ConfigError::NoUsers);
        }
        if self.statuses.iter().all(|s| s.trim().is_empty()) {
            return Err(ConfigError::NoStatuses);
        }
        self.year_range().check("year")?;
        self.popularity_range().check("popularity")?;
        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Human-readable one-line-per-field summary.
    pub fn summary(&self) -> String {
        let users = self.normalized_usernames();
        let users = if users.is_empty() { "(none)".to_string() } else { users.join(", ") };
        let statuses =
            if self.statuses.is_empty() { "(none)".to_string() } else { self.statuses.join(", ") };
        let combine = match self.combine {
            CombineMode::Union => "OR (any user)",
            CombineMode::Intersect => "AND (all users)",
        };

        format!(
            "Users: {}\nCombine: {}\nStatuses: {}\nYear: {}\nPopularity: {}",
            users,
            combine,
            statuses,
            self.year_range(),
            self.popularity_range()
        )
    }
}

/// Clean a username as typed: trim, drop one leading `@`, remove whitespace.
pub fn normalize_username(raw: &str) -> String {
    let trimmed = raw.trim();
    let trimmed = trimmed.strip_prefix('@').unwrap_or(trimmed);
    trimmed.chars().filter(|c| !c.is_whitespace()).collect()
}
