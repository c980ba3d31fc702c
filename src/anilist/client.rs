//! Blocking AniList GraphQL client backed by `ureq`.

use std::time::Duration;

use log::debug;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

use super::error::FetchError;
use super::response::{
    CatalogPage, GraphQlResponse, MediaListCollectionData, PageData, UserData,
};
use crate::models::WatchEntry;
use crate::pool::ListSource;

pub const ANILIST_ENDPOINT: &str = "https://graphql.anilist.co";

const MEDIA_LIST_QUERY: &str = r#"
query ($userName: String!) {
  MediaListCollection(userName: $userName, type: ANIME) {
    lists {
      entries {
        status
        media {
          id
          format
          startDate { year }
          popularity
        }
      }
    }
  }
}
"#;

const USER_QUERY: &str = r#"
query ($name: String!) {
  User(name: $name) { id }
}
"#;

const CATALOG_PAGE_QUERY: &str = r#"
query ($page: Int!, $perPage: Int!) {
  Page(page: $page, perPage: $perPage) {
    pageInfo { hasNextPage }
    media(type: ANIME, sort: ID) {
      id
      title { romaji english }
    }
  }
}
"#;

/// AniList client. Cheap to share by reference across fetch threads.
pub struct AniListClient {
    http_client: ureq::Agent,
    endpoint: String,
}

impl AniListClient {
    pub fn new() -> Self {
        Self::with_endpoint(ANILIST_ENDPOINT)
    }

    /// Client for a non-default endpoint (used by tests against a local server).
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        let http_client = ureq::AgentBuilder::new()
            .timeout_connect(Duration::from_secs(5))
            .timeout_read(Duration::from_secs(30))
            .timeout_write(Duration::from_secs(15))
            .build();
        Self { http_client, endpoint: endpoint.into() }
    }

    fn request<T: DeserializeOwned>(&self, query: &str, variables: Value) -> Result<T, FetchError> {
        let body = json!({ "query": query, "variables": variables });
        let response = match self
            .http_client
            .post(&self.endpoint)
            .set("Accept", "application/json")
            .send_json(body)
        {
            Ok(response) => response,
            Err(ureq::Error::Status(429, _)) => return Err(FetchError::RateLimited),
            Err(ureq::Error::Status(status, response)) => {
                let message = response
                    .into_json::<GraphQlResponse<Value>>()
                    .ok()
                    .and_then(|parsed| parsed.first_error().map(ToOwned::to_owned))
                    .unwrap_or_else(|| format!("HTTP {}", status));
                return Err(FetchError::Status { status, message });
            }
            Err(ureq::Error::Transport(transport)) => {
                return Err(FetchError::Transport(transport.to_string()));
            }
        };

        let parsed: GraphQlResponse<T> =
            response.into_json().map_err(|e| FetchError::Decode(e.to_string()))?;
        if let Some(message) = parsed.first_error() {
            return Err(FetchError::GraphQl(message.to_string()));
        }
        parsed.data.ok_or_else(|| FetchError::Decode("response has no data".to_string()))
    }

    /// Every anime entry on the user's lists, unfiltered.
    pub fn fetch_media_list(&self, user: &str) -> Result<Vec<WatchEntry>, FetchError> {
        let data: MediaListCollectionData =
            self.request(MEDIA_LIST_QUERY, json!({ "userName": user }))?;
        let entries = data.into_entries();
        debug!("Fetched {} list entries for {}", entries.len(), user);
        Ok(entries)
    }

    /// Whether an AniList account with this name exists.
    ///
    /// AniList answers an unknown name with HTTP 404, which maps to `Ok(false)`.
    pub fn user_exists(&self, name: &str) -> Result<bool, FetchError> {
        match self.request::<UserData>(USER_QUERY, json!({ "name": name })) {
            Ok(data) => Ok(data.user.is_some()),
            Err(FetchError::Status { status: 404, .. }) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// One page of the full anime catalog, ordered by id.
    pub fn fetch_catalog_page(&self, page: u32, per_page: u32) -> Result<CatalogPage, FetchError> {
        let data: PageData =
            self.request(CATALOG_PAGE_QUERY, json!({ "page": page, "perPage": per_page }))?;
        Ok(data.into())
    }
}

impl Default for AniListClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ListSource for AniListClient {
    fn fetch_entries(&self, user: &str) -> Result<Vec<WatchEntry>, FetchError> {
        self.fetch_media_list(user)
    }
}
