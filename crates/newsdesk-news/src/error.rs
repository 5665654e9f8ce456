use thiserror::Error;

/// Errors returned by the NewsAPI client.
#[derive(Debug, Error)]
pub enum NewsError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-`"ok"` status.
    #[error("NewsAPI error: {0}")]
    Api(String),

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
}
