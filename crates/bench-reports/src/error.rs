type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors raised by a content fetch.
///
/// Every failure path of a fetch ends in one of these; the underlying
/// transport or decoder error stays reachable through
/// [`std::error::Error::source`].
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The request could not be completed (DNS, connect, TLS, ...).
    #[error("network error fetching {url}")]
    Transport { url: String, source: BoxError },

    /// The host answered with a non-2xx status.
    #[error("failed to fetch {url}: HTTP {status}")]
    Status { url: String, status: u16 },

    /// The response body could not be read.
    #[error("failed to read response body from {url}")]
    Body { url: String, source: BoxError },

    /// The body was not valid JSON.
    #[error("failed to parse JSON from {url}")]
    Decode {
        url: String,
        source: serde_json::Error,
    },
}

impl FetchError {
    pub fn transport(url: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self::Transport {
            url: url.into(),
            source: source.into(),
        }
    }

    pub fn status(url: impl Into<String>, status: u16) -> Self {
        Self::Status {
            url: url.into(),
            status,
        }
    }

    pub fn body(url: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self::Body {
            url: url.into(),
            source: source.into(),
        }
    }

    /// The URL the failed request targeted.
    pub fn url(&self) -> &str {
        match self {
            Self::Transport { url, .. }
            | Self::Status { url, .. }
            | Self::Body { url, .. }
            | Self::Decode { url, .. } => url,
        }
    }

    /// HTTP status, when the host answered.
    pub fn http_status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.http_status() == Some(404)
    }
}
