//! Error types shared across the crate.

/// Errors from the backend HTTP API layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The backend returned a non-2xx status code.
    #[error("API error ({status}): {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The response body could not be decoded.
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// A request URL could not be built from the base URL.
    #[error("invalid request url: {0}")]
    InvalidUrl(String),
}

/// Errors from the persistent key-value store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("store is not a valid JSON object: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Invalid runtime configuration.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid API url '{0}'")]
    InvalidUrl(String),

    #[error("page size must be greater than zero")]
    ZeroPageSize,

    #[error("tick interval must be greater than zero")]
    ZeroTick,
}
