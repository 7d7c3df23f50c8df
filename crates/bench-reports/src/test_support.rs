use std::collections::HashMap;
use std::sync::Mutex;

use crate::{ContentFetcher, FetchError, Resource, Version};

/// Canned outcome for one URL.
#[derive(Debug, Clone)]
pub enum CannedResponse {
    Body(String),
    Status(u16),
    Transport(String),
}

/// In-memory fetcher for testing. Serves canned responses keyed by full URL
/// and records every URL it was asked for. Unknown URLs answer 404.
pub struct InMemoryFetcher {
    origin: String,
    responses: HashMap<String, CannedResponse>,
    requests: Mutex<Vec<String>>,
}

impl InMemoryFetcher {
    pub fn new(origin: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            responses: HashMap::new(),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn respond(&mut self, version: &Version, resource: &Resource, response: CannedResponse) {
        let url = resource.url(&self.origin, version);
        self.responses.insert(url, response);
    }

    /// URLs requested so far, in call order.
    pub fn requests(&self) -> Vec<String> {
        self.requests
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }
}

#[async_trait::async_trait]
impl ContentFetcher for InMemoryFetcher {
    fn origin(&self) -> &str {
        &self.origin
    }

    async fn fetch_text(&self, version: &Version, resource: &Resource) -> Result<String, FetchError> {
        let url = self.url_for(version, resource);
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(url.clone());
        }

        match self.responses.get(&url) {
            Some(CannedResponse::Body(body)) => Ok(body.clone()),
            Some(CannedResponse::Status(status)) => Err(FetchError::status(url, *status)),
            Some(CannedResponse::Transport(msg)) => Err(FetchError::transport(url, msg.clone())),
            None => Err(FetchError::status(url, 404)),
        }
    }
}
