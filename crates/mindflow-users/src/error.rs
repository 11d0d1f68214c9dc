use thiserror::Error;

/// Errors returned by [`crate::UsersClient`].
#[derive(Debug, Error)]
pub enum UsersError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The users service answered with an unexpected status.
    #[error("users service returned status {status} for {context}")]
    Status { status: u16, context: String },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid users service base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}
