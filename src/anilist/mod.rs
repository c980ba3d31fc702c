//! AniList GraphQL access.
//!
//! The remote protocol is a JSON `{query, variables}` POST answered with
//! `{data, errors}`. A non-empty `errors` list is a failure even on HTTP 200.
//!
//! [`AniListClient`] implements [`crate::pool::ListSource`] for the answer
//! pool and also serves the username check and the paged catalog dump.

pub mod client;
pub mod error;
pub mod response;

pub use client::{ANILIST_ENDPOINT, AniListClient};
pub use error::FetchError;
pub use response::CatalogPage;
