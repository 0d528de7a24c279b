//! Error types for backend search requests.

use thiserror::Error;

/// Ways a single search request can fail.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The backend answered with a non-success status
    #[error("Backend error: {status}")]
    Backend { status: u16 },

    /// The request could not be completed
    #[error("Connectivity error: {0}")]
    Connectivity(#[source] wreq::Error),

    /// The body was neither a product list nor a result envelope
    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}
