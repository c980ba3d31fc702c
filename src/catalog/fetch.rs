use std::thread;
use std::time::Duration;

use log::{info, warn};

use crate::anilist::{AniListClient, CatalogPage, FetchError};
use crate::models::CatalogRecord;

/// Paged access to the full title catalog.
pub trait CatalogSource {
    fn fetch_page(&self, page: u32, per_page: u32) -> Result<CatalogPage, FetchError>;
}

impl CatalogSource for AniListClient {
    fn fetch_page(&self, page: u32, per_page: u32) -> Result<CatalogPage, FetchError> {
        self.fetch_catalog_page(page, per_page)
    }
}

/// Pacing for a full catalog download
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchOptions {
    pub per_page: u32,
    /// Pause between successful pages
    pub pause: Duration,
    /// Wait after a 429 before retrying the same page
    pub rate_limit_wait: Duration,
    /// Consecutive 429s tolerated on one page before giving up
    pub max_rate_limit_retries: u32,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            per_page: 50,
            pause: Duration::from_millis(700),
            rate_limit_wait: Duration::from_secs(60),
            max_rate_limit_retries: 5,
        }
    }
}

/// Download every page of the catalog in id order.
pub fn fetch_catalog<S: CatalogSource + ?Sized>(
    source: &S,
    options: &FetchOptions,
) -> Result<Vec<CatalogRecord>, FetchError> {
    let mut records = Vec::new();
    let mut page = 1;
    let mut rate_limited = 0;

    loop {
        let result = match source.fetch_page(page, options.per_page) {
            Ok(result) => result,
            Err(FetchError::RateLimited) if rate_limited < options.max_rate_limit_retries => {
                rate_limited += 1;
                warn!(
                    "Rate limited on page {} ({}/{}), waiting {}s",
                    page,
                    rate_limited,
                    options.max_rate_limit_retries,
                    options.rate_limit_wait.as_secs()
                );
                thread::sleep(options.rate_limit_wait);
                continue;
            }
            Err(e) => return Err(e),
        };
        rate_limited = 0;

        info!("Fetched catalog page {} ({} titles)", page, result.records.len());
        records.extend(result.records);

        if !result.has_next_page {
            break;
        }
        page += 1;
        thread::sleep(options.pause);
    }

    Ok(records)
}
