//! Transport client for the upstream AI inference service.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::error::{RelayError, RelayResult};
use crate::io_struct::{ChatRequest, ChatResponse};

/// Upstream path the query is forwarded to.
pub const CHAT_PATH: &str = "/chat";

/// Capability over the upstream service. The pipeline only ever talks to this
/// trait, so tests can substitute a scripted backend.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    async fn ask(&self, request: &ChatRequest) -> RelayResult<ChatResponse>;
}

/// Production backend: one outbound POST per call, shared `reqwest::Client`
/// with a fixed timeout. No retries.
#[derive(Debug, Clone)]
pub struct HttpChatBackend {
    client: reqwest::Client,
    base_url: String,
}

impl HttpChatBackend {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { client, base_url })
    }

    fn api_path(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }
}

#[async_trait]
impl ChatBackend for HttpChatBackend {
    async fn ask(&self, request: &ChatRequest) -> RelayResult<ChatResponse> {
        let url = self.api_path(CHAT_PATH);
        let resp = self.client.post(&url).json(request).send().await?;

        if let Err(err) = resp.error_for_status_ref() {
            debug!("upstream returned {} for {}", resp.status(), url);
            return Err(err.into());
        }

        // A non-conforming body is a shape failure; a timeout that fires
        // while the body is still streaming stays a timeout.
        resp.json::<ChatResponse>().await.map_err(RelayError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_path_joins_slashes() {
        let backend =
            HttpChatBackend::new("http://localhost:8000/", Duration::from_secs(10)).unwrap();
        assert_eq!(backend.api_path("/chat"), "http://localhost:8000/chat");
        assert_eq!(backend.api_path("chat"), "http://localhost:8000/chat");
    }
}
