use std::time::Duration;

use bench_reports::{CacheHint, ContentFetcher, DEFAULT_ORIGIN, FetchError, Resource, Version};

/// Header carrying the purge tag for caches that support tagged invalidation.
pub const CACHE_TAG_HEADER: &str = "Cache-Tag";

/// Configuration for a [`RawContentClient`].
#[derive(Debug, Clone, Default)]
pub struct RawContentClientConfig {
    /// Overrides [`DEFAULT_ORIGIN`].
    pub origin: Option<String>,
    pub token: Option<String>,
    /// Overrides [`bench_reports::DEFAULT_REVALIDATE`].
    pub revalidate: Option<Duration>,
}

/// HTTP client for the raw-content host serving benchmark and datasheet files.
///
/// Issues exactly one GET per fetch with no explicit timeout. The cache hint
/// of each resource goes out as request headers; nothing is cached here.
pub struct RawContentClient {
    client: reqwest::Client,
    config: RawContentClientConfig,
}

impl RawContentClient {
    pub fn new(config: RawContentClientConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    fn cache_hint(&self, resource: &Resource) -> CacheHint {
        match self.config.revalidate {
            Some(revalidate) => resource.cache_hint_with(revalidate),
            None => resource.cache_hint(),
        }
    }

    fn build_request(&self, url: &str, resource: &Resource) -> reqwest::RequestBuilder {
        let hint = self.cache_hint(resource);

        let mut req = self
            .client
            .get(url)
            .header("User-Agent", "bench-reports")
            .header(reqwest::header::CACHE_CONTROL, hint.cache_control())
            .header(CACHE_TAG_HEADER, hint.tag);

        if let Some(token) = &self.config.token {
            req = req.header("Authorization", format!("Bearer {token}"));
        }

        req
    }
}

#[async_trait::async_trait]
impl ContentFetcher for RawContentClient {
    fn origin(&self) -> &str {
        self.config.origin.as_deref().unwrap_or(DEFAULT_ORIGIN)
    }

    async fn fetch_text(&self, version: &Version, resource: &Resource) -> Result<String, FetchError> {
        let url = self.url_for(version, resource);

        let response = self
            .build_request(&url, resource)
            .send()
            .await
            .map_err(|e| FetchError::transport(&url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::status(url, status.as_u16()));
        }

        response.text().await.map_err(|e| FetchError::body(url, e))
    }
}
