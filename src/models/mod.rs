//! Data models for the answer pool and title catalog.
//!
//! - [`Settings`] - The flat settings record read by the pool pipeline
//! - [`WatchEntry`] - One entry from a user's AniList watch list
//! - [`CatalogRecord`] - Raw `(id, romaji, english)` catalog row
//! - [`CatalogEntry`] / [`RankedMatch`] - Index rows and ranking output
//!
//! Settings use serde with a custom deserializer for the optional integer
//! bounds in the `deserializers` module.

pub mod catalog;
pub mod deserializers;
pub mod entry;
pub mod settings;

pub use catalog::{CatalogEntry, CatalogRecord, MatchKind, RankedMatch};
pub use entry::{ALLOWED_FORMAT, MediaFormat, MediaStatus, TitleId, WatchEntry};
pub use settings::{Bounds, CombineMode, Settings, normalize_username};
