//! Error types for the stats backend client.

/// Why a stats lookup failed. Never shown to end users verbatim.
#[derive(thiserror::Error, Debug)]
pub enum FetchError {
    /// Connection failure, timeout, or an interrupted body.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The backend answered with a non-2xx status.
    #[error("Backend returned HTTP {status}")]
    Status {
        /// HTTP status code.
        status: u16,
    },

    /// A 2xx response whose body is not JSON.
    #[error("Invalid JSON body: {0}")]
    Decode(#[from] serde_json::Error),

    /// A 2xx response whose body is JSON `null`.
    #[error("Backend returned an empty body")]
    EmptyBody,
}

impl FetchError {
    /// HTTP status code when the failure came from the backend.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status } => Some(*status),
            Self::Network(e) => e.status().map(|s| s.as_u16()),
            Self::Decode(_) | Self::EmptyBody => None,
        }
    }
}

/// Errors raised while building the HTTP client.
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    /// The configured `User-Agent` is not a valid header value.
    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    /// reqwest refused the client configuration.
    #[error("Failed to create HTTP client: {0}")]
    Build(#[from] reqwest::Error),
}
