use thiserror::Error;

/// Everything that can go wrong while loading a screen's data.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The player route was opened without a usable `videoId`.
    #[error("video id not provided")]
    MissingVideoId,
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },
    #[error("could not decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl ApiError {
    /// True when the failure happened before any request was made.
    pub fn is_missing_input(&self) -> bool {
        matches!(self, ApiError::MissingVideoId)
    }
}
