use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::error::FetchError;
use crate::resource::{DecodeMode, Resource};
use crate::version::Version;

/// Origin of the published benchmark and datasheet content.
pub const DEFAULT_ORIGIN: &str = "https://raw.githubusercontent.com/risc0/ghpages";

/// A response body decoded according to its resource's [`DecodeMode`].
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Text(String),
    Json(serde_json::Value),
}

impl Payload {
    /// Text as served; JSON payloads are rendered compactly.
    pub fn into_text(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Json(value) => value.to_string(),
        }
    }
}

/// Fetches version-scoped content from a remote host.
///
/// Implementors provide a single request primitive, [`fetch_text`].
/// [`fetch`] decodes its body by the resource's decode mode and the three
/// call-site operations are built on that. Every call is independent: one
/// request, no state kept between calls.
///
/// [`fetch_text`]: ContentFetcher::fetch_text
/// [`fetch`]: ContentFetcher::fetch
#[async_trait::async_trait]
pub trait ContentFetcher: Send + Sync {
    /// Base URL every resource path is appended to.
    fn origin(&self) -> &str;

    /// Issue one GET for `resource` at `version` and return the body as text.
    /// Non-2xx responses and transport failures are errors.
    async fn fetch_text(&self, version: &Version, resource: &Resource) -> Result<String, FetchError>;

    fn url_for(&self, version: &Version, resource: &Resource) -> String {
        resource.url(self.origin(), version)
    }

    /// One request for `resource`, decoded as text or JSON per
    /// [`Resource::decode_mode`].
    async fn fetch(&self, version: &Version, resource: &Resource) -> Result<Payload, FetchError> {
        let body = self.fetch_text(version, resource).await?;
        match resource.decode_mode() {
            DecodeMode::Text => Ok(Payload::Text(body)),
            DecodeMode::Json => {
                decode_json(&self.url_for(version, resource), &body).map(Payload::Json)
            }
        }
    }

    /// `<origin>/<version>/dev/benchmarks/COMMIT_HASH.txt` as text.
    async fn fetch_applications_benchmarks_commit_hash(
        &self,
        version: &Version,
    ) -> Result<String, FetchError> {
        let payload = self.fetch(version, &Resource::BenchmarksCommitHash).await?;
        Ok(payload.into_text())
    }

    /// `<origin>/<version>/dev/benchmarks/<relative_path>` as text.
    async fn fetch_applications_benchmarks(
        &self,
        version: &Version,
        relative_path: &str,
    ) -> Result<String, FetchError> {
        let payload = self.fetch(version, &Resource::benchmarks(relative_path)).await?;
        Ok(payload.into_text())
    }

    /// `<origin>/<version>/dev/datasheet/<relative_path>` parsed as JSON.
    async fn fetch_datasheet(
        &self,
        version: &Version,
        relative_path: &str,
    ) -> Result<serde_json::Value, FetchError> {
        let resource = Resource::datasheet(relative_path);
        match self.fetch(version, &resource).await? {
            Payload::Json(value) => Ok(value),
            Payload::Text(body) => decode_json(&self.url_for(version, &resource), &body),
        }
    }
}

/// Fetch a datasheet and deserialize it into a caller-defined schema.
pub async fn fetch_datasheet_as<T, F>(
    fetcher: &F,
    version: &Version,
    relative_path: &str,
) -> Result<T, FetchError>
where
    T: DeserializeOwned,
    F: ContentFetcher + ?Sized,
{
    let value = fetcher.fetch_datasheet(version, relative_path).await?;
    serde_json::from_value(value).map_err(|source| FetchError::Decode {
        url: fetcher.url_for(version, &Resource::datasheet(relative_path)),
        source,
    })
}

fn decode_json<T: DeserializeOwned>(url: &str, body: &str) -> Result<T, FetchError> {
    serde_json::from_str(body).map_err(|source| FetchError::Decode {
        url: url.to_owned(),
        source,
    })
}

#[async_trait::async_trait]
impl<T: ContentFetcher + ?Sized> ContentFetcher for Arc<T> {
    fn origin(&self) -> &str {
        (**self).origin()
    }

    async fn fetch_text(&self, version: &Version, resource: &Resource) -> Result<String, FetchError> {
        (**self).fetch_text(version, resource).await
    }

    fn url_for(&self, version: &Version, resource: &Resource) -> String {
        (**self).url_for(version, resource)
    }

    async fn fetch(&self, version: &Version, resource: &Resource) -> Result<Payload, FetchError> {
        (**self).fetch(version, resource).await
    }

    async fn fetch_applications_benchmarks_commit_hash(
        &self,
        version: &Version,
    ) -> Result<String, FetchError> {
        (**self)
            .fetch_applications_benchmarks_commit_hash(version)
            .await
    }

    async fn fetch_applications_benchmarks(
        &self,
        version: &Version,
        relative_path: &str,
    ) -> Result<String, FetchError> {
        (**self)
            .fetch_applications_benchmarks(version, relative_path)
            .await
    }

    async fn fetch_datasheet(
        &self,
        version: &Version,
        relative_path: &str,
    ) -> Result<serde_json::Value, FetchError> {
        (**self).fetch_datasheet(version, relative_path).await
    }
}
