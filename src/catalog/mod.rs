//! Title catalog: downloading the full AniList anime list and reading it back.
//!
//! # Error Handling Strategy
//!
//! Loading follows a **graceful degradation** approach: individual malformed
//! rows are logged and skipped, but a file where more than half the rows are
//! malformed is rejected. Downloading retries a page only on rate limiting;
//! any other failure aborts the download.

pub mod fetch;
pub mod loader;

pub use fetch::{CatalogSource, FetchOptions, fetch_catalog};
pub use loader::{load_catalog, parse_catalog, save_catalog};
