//! Errors raised while talking to the catalog API.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    /// The configured endpoint is not a valid URL.
    #[error("Invalid catalog URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// The HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Failed to reach the catalog or read its response.
    #[error("Connection to catalog failed: {source}")]
    Connection {
        #[source]
        source: reqwest::Error,
    },

    #[error("Catalog request timed out after {duration}s")]
    Timeout { duration: u64 },

    /// The catalog answered with a non-success status.
    #[error("Catalog error: {status} - {message}")]
    Upstream { status: u16, message: String },

    #[error("Failed to decode catalog response: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
    },
}

impl CatalogError {
    /// Whether the data-fetching layer should try again.
    pub fn is_retryable(&self) -> bool {
        match self {
            CatalogError::Connection { .. } | CatalogError::Timeout { .. } => true,
            CatalogError::Upstream { status, .. } => *status >= 500,
            CatalogError::InvalidUrl { .. }
            | CatalogError::Client(_)
            | CatalogError::Decode { .. } => false,
        }
    }

    /// Short machine-readable kind for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            CatalogError::InvalidUrl { .. } => "invalid_url",
            CatalogError::Client(_) => "client",
            CatalogError::Connection { .. } => "connection",
            CatalogError::Timeout { .. } => "timeout",
            CatalogError::Upstream { .. } => "upstream",
            CatalogError::Decode { .. } => "decode",
        }
    }
}
