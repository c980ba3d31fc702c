//! Title search for resolving a player's guess.
//!
//! [`CatalogIndex`] holds every title with its normalized forms; the
//! [`rank_titles`] function orders them against a query. Neither fails on bad
//! input: untitled records are skipped at build time and a query with no
//! matches yields an empty list.

pub mod index;
pub mod normalize;
pub mod rank;

pub use index::CatalogIndex;
pub use normalize::normalize_title;
pub use rank::{DEFAULT_LIMIT, rank_normalized, rank_titles};
