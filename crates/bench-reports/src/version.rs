use std::fmt;

/// Release identifier selecting a version-scoped directory on the content host.
/// Opaque: used verbatim as a URL path segment, never validated locally.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version(String);

impl Version {
    pub fn new(version: impl Into<String>) -> Self {
        Self(version.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Version {
    fn from(version: &str) -> Self {
        Self::new(version)
    }
}

impl From<String> for Version {
    fn from(version: String) -> Self {
        Self(version)
    }
}
