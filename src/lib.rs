//! anidle - logic core of a daily guess-the-anime game
//!
//! The answer for a round is drawn from the AniList watch lists of the
//! configured users. Guesses are resolved against a local title catalog.
//! The crate provides:
//!
//! - Filtering watch-list entries by format, status, year and popularity
//! - Combining per-user candidate sets by union or intersection
//! - Uniform random selection of the answer id
//! - Title normalization and prefix/contains ranking for guesses
//! - A debounced suggestion-box state machine and a terminal front end
//!
//! # Example
//!
//! ```no_run
//! use anidle::anilist::AniListClient;
//! use anidle::{Settings, select_answer_id};
//!
//! let settings = Settings {
//!     anilist_usernames: vec!["alice".to_string()],
//!     ..Settings::default()
//! };
//! let id = select_answer_id(&AniListClient::new(), &settings)?;
//! println!("Today's answer: {}", id);
//! # Ok::<(), anidle::Error>(())
//! ```

pub mod anilist;
pub mod catalog;
pub mod cli;
pub mod error;
pub mod filters;
pub mod matcher;
pub mod models;
pub mod pool;
pub mod search;
pub mod settings_store;
pub mod tui;
pub mod utils;

// Re-export commonly used types
pub use error::{ConfigError, Error, Result};
pub use matcher::SuggestBox;
pub use models::Settings;
pub use pool::{build_candidate_pool, select_answer_id};
pub use search::{CatalogIndex, normalize_title, rank_titles};
