//! Fetch failure kinds.

/// Error returned by a relay fetch. The `Display` text is what the user sees.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Relay or upstream answered with a non-2xx status.
    #[error("Failed to generate web scraper file. Status: {status}. {body}")]
    Transport { status: u32, body: String },
    /// 2xx status but the body is empty after trimming.
    #[error("Received empty response from server")]
    EmptyResponse,
    /// The exchange itself failed (DNS, connect, TLS, malformed response).
    #[error("Network request failed: {0}")]
    Network(#[from] curl::Error),
}

impl FetchError {
    /// HTTP status for transport errors.
    pub fn status(&self) -> Option<u32> {
        match self {
            FetchError::Transport { status, .. } => Some(*status),
            FetchError::EmptyResponse | FetchError::Network(_) => None,
        }
    }
}
