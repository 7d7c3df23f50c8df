use std::error::Error;

use crate::error::FetchError;

/// A message produced while running several fetches on behalf of a caller.
///
/// Library code never prints; callers decide where these go (the CLI writes
/// them to stderr).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    /// Informational message (progress, partial results).
    Info(String),
    /// Something noteworthy happened but the operation continued.
    Warning(String),
    /// A fetch failed.
    Error(String),
}

impl Feedback {
    pub fn info(msg: impl Into<String>) -> Self {
        Self::Info(msg.into())
    }

    pub fn warning(msg: impl Into<String>) -> Self {
        Self::Warning(msg.into())
    }

    /// Error feedback for a failed fetch, including its source chain.
    pub fn from_fetch_error(label: &str, err: &FetchError) -> Self {
        let mut msg = format!("{label}: {err}");
        let mut source = err.source();
        while let Some(cause) = source {
            msg.push_str(&format!(": {cause}"));
            source = cause.source();
        }
        Self::Error(msg)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Info(msg) | Self::Warning(msg) | Self::Error(msg) => msg,
        }
    }
}

impl std::fmt::Display for Feedback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info(msg) => write!(f, "{msg}"),
            Self::Warning(msg) => write!(f, "warning: {msg}"),
            Self::Error(msg) => write!(f, "error: {msg}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feedback_display() {
        assert_eq!(Feedback::info("msg").to_string(), "msg");
        assert_eq!(Feedback::warning("msg").to_string(), "warning: msg");
        assert_eq!(Feedback::Error("msg".into()).to_string(), "error: msg");
    }

    #[test]
    fn fetch_error_feedback_includes_cause() {
        let err = FetchError::transport("http://host/v1/dev/benchmarks/a.txt", "connection refused");
        let fb = Feedback::from_fetch_error("benchmarks", &err);

        assert!(fb.is_error());
        assert_eq!(
            fb.message(),
            "benchmarks: network error fetching http://host/v1/dev/benchmarks/a.txt: connection refused"
        );
    }

    #[test]
    fn status_feedback_has_no_cause() {
        let err = FetchError::status("http://host/v1/dev/datasheet/a.json", 500);
        let fb = Feedback::from_fetch_error("datasheet", &err);
        assert_eq!(
            fb.to_string(),
            "error: datasheet: failed to fetch http://host/v1/dev/datasheet/a.json: HTTP 500"
        );
    }
}
