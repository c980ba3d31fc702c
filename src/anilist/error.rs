use thiserror::Error;

/// Failure talking to the AniList GraphQL endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Connection, DNS, TLS or timeout failure.
    #[error("transport error: {0}")]
    Transport(String),

    /// Non-success HTTP status other than 429.
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// HTTP 429 from the API.
    #[error("rate limited by AniList")]
    RateLimited,

    /// The response carried a GraphQL `errors` list.
    #[error("AniList request failed: {0}")]
    GraphQl(String),

    /// The body was not the JSON shape we asked for.
    #[error("failed to decode AniList response: {0}")]
    Decode(String),
}
