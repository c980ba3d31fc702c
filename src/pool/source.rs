use crate::anilist::FetchError;
use crate::models::WatchEntry;

/// Remote source of a user's watch-list entries.
///
/// `Sync` because the pool builder fetches all users concurrently.
pub trait ListSource: Sync {
    /// Every entry on the user's lists. Must return the complete list or fail.
    fn fetch_entries(&self, user: &str) -> Result<Vec<WatchEntry>, FetchError>;
}
