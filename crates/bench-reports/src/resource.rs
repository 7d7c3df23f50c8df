use std::fmt;
use std::time::Duration;

use crate::version::Version;

/// Default revalidate interval for every call site (3 minutes).
pub const DEFAULT_REVALIDATE: Duration = Duration::from_secs(180);

pub const COMMIT_HASH_FILE: &str = "COMMIT_HASH.txt";

pub const TAG_BENCHMARKS_COMMIT_HASH: &str = "fetch-applications-benchmarks-commit-hash";
pub const TAG_BENCHMARKS: &str = "fetch-applications-benchmarks";
pub const TAG_DATASHEET: &str = "fetch-datasheet";

/// Caching directive handed to whatever cache sits in front of the host.
///
/// Nothing in this crate caches; the hint only describes how long a response
/// may be served and which tag purges it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheHint {
    pub revalidate: Duration,
    pub tag: &'static str,
}

impl CacheHint {
    /// Value for a `Cache-Control` request header.
    pub fn cache_control(&self) -> String {
        format!("max-age={}", self.revalidate.as_secs())
    }
}

/// How a response body is turned into a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeMode {
    Text,
    Json,
}

/// Directory under `<origin>/<version>/dev/` that a resource lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directory {
    Benchmarks,
    Datasheet,
}

impl Directory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Benchmarks => "benchmarks",
            Self::Datasheet => "datasheet",
        }
    }
}

impl fmt::Display for Directory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One of the three fetchable call sites.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resource {
    /// `benchmarks/COMMIT_HASH.txt`
    BenchmarksCommitHash,
    /// A file under `benchmarks/`.
    Benchmarks(String),
    /// A file under `datasheet/`.
    Datasheet(String),
}

impl Resource {
    pub fn benchmarks(relative_path: impl Into<String>) -> Self {
        Self::Benchmarks(relative_path.into())
    }

    pub fn datasheet(relative_path: impl Into<String>) -> Self {
        Self::Datasheet(relative_path.into())
    }

    pub fn directory(&self) -> Directory {
        match self {
            Self::BenchmarksCommitHash | Self::Benchmarks(_) => Directory::Benchmarks,
            Self::Datasheet(_) => Directory::Datasheet,
        }
    }

    /// File path within the resource's directory, untouched.
    pub fn relative_path(&self) -> &str {
        match self {
            Self::BenchmarksCommitHash => COMMIT_HASH_FILE,
            Self::Benchmarks(path) | Self::Datasheet(path) => path,
        }
    }

    pub fn cache_tag(&self) -> &'static str {
        match self {
            Self::BenchmarksCommitHash => TAG_BENCHMARKS_COMMIT_HASH,
            Self::Benchmarks(_) => TAG_BENCHMARKS,
            Self::Datasheet(_) => TAG_DATASHEET,
        }
    }

    pub fn decode_mode(&self) -> DecodeMode {
        match self {
            Self::BenchmarksCommitHash | Self::Benchmarks(_) => DecodeMode::Text,
            Self::Datasheet(_) => DecodeMode::Json,
        }
    }

    pub fn cache_hint(&self) -> CacheHint {
        self.cache_hint_with(DEFAULT_REVALIDATE)
    }

    pub fn cache_hint_with(&self, revalidate: Duration) -> CacheHint {
        CacheHint {
            revalidate,
            tag: self.cache_tag(),
        }
    }

    /// Path below the origin: `<version>/dev/<directory>/<relative_path>`.
    pub fn path_for(&self, version: &Version) -> String {
        format!(
            "{}/dev/{}/{}",
            version,
            self.directory(),
            self.relative_path()
        )
    }

    /// Full URL for this resource. A trailing `/` on `origin` is ignored.
    pub fn url(&self, origin: &str, version: &Version) -> String {
        format!(
            "{}/{}",
            origin.trim_end_matches('/'),
            self.path_for(version)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORIGIN: &str = "https://raw.githubusercontent.com/risc0/ghpages";

    #[test]
    fn commit_hash_url() {
        let url = Resource::BenchmarksCommitHash.url(ORIGIN, &Version::new("v1.0.0"));
        assert_eq!(
            url,
            "https://raw.githubusercontent.com/risc0/ghpages/v1.0.0/dev/benchmarks/COMMIT_HASH.txt"
        );
    }

    #[test]
    fn benchmarks_url_substitutes_path_exactly() {
        let url = Resource::benchmarks("macOS-apple_m3/data.csv").url(ORIGIN, &Version::new("main"));
        assert_eq!(
            url,
            "https://raw.githubusercontent.com/risc0/ghpages/main/dev/benchmarks/macOS-apple_m3/data.csv"
        );
    }

    #[test]
    fn datasheet_url() {
        let url = Resource::datasheet("foo.json").url(ORIGIN, &Version::new("v1.0.0"));
        assert_eq!(
            url,
            "https://raw.githubusercontent.com/risc0/ghpages/v1.0.0/dev/datasheet/foo.json"
        );
    }

    #[test]
    fn relative_path_is_not_normalized() {
        let resource = Resource::benchmarks("./a//../b.txt");
        assert_eq!(
            resource.path_for(&Version::new("v1")),
            "v1/dev/benchmarks/./a//../b.txt"
        );
    }

    #[test]
    fn trailing_slash_on_origin_is_ignored() {
        let url = Resource::datasheet("x.json").url("http://localhost:8080/", &Version::new("v2"));
        assert_eq!(url, "http://localhost:8080/v2/dev/datasheet/x.json");
    }

    #[test]
    fn each_call_site_has_its_own_tag() {
        assert_eq!(
            Resource::BenchmarksCommitHash.cache_tag(),
            "fetch-applications-benchmarks-commit-hash"
        );
        assert_eq!(
            Resource::benchmarks("a").cache_tag(),
            "fetch-applications-benchmarks"
        );
        assert_eq!(Resource::datasheet("a").cache_tag(), "fetch-datasheet");
    }

    #[test]
    fn decode_modes() {
        assert_eq!(Resource::BenchmarksCommitHash.decode_mode(), DecodeMode::Text);
        assert_eq!(Resource::benchmarks("a").decode_mode(), DecodeMode::Text);
        assert_eq!(Resource::datasheet("a").decode_mode(), DecodeMode::Json);
    }

    #[test]
    fn default_cache_hint_is_three_minutes() {
        let hint = Resource::datasheet("a").cache_hint();
        assert_eq!(hint.revalidate, Duration::from_secs(180));
        assert_eq!(hint.tag, "fetch-datasheet");
        assert_eq!(hint.cache_control(), "max-age=180");
    }
}
