//! Per-entry filtering for watch lists.
//!
//! - [`normalize_statuses`] maps raw/legacy status tokens onto the canonical set
//! - [`EntryFilter`] applies the format, status, year and popularity predicates

pub mod apply;
pub mod status;

pub use apply::{EntryFilter, apply_filters};
pub use status::{FALLBACK_STATUSES, normalize_statuses};
