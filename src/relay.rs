use std::sync::Arc;
use std::time::Duration;

use crate::config::RelayConfig;
use crate::error::RelayResult;
use crate::io_struct::{ChatRequest, ChatResponse};
use crate::upstream::{ChatBackend, HttpChatBackend};
use crate::validator;

/// Shared per-process state: the upstream capability handle. Immutable after
/// startup; cloned into every actix worker.
#[derive(Clone)]
pub struct RelayState {
    backend: Arc<dyn ChatBackend>,
}

impl RelayState {
    pub fn new(config: &RelayConfig) -> anyhow::Result<Self> {
        let backend = HttpChatBackend::new(
            config.upstream_url.clone(),
            Duration::from_secs(config.request_timeout_secs),
        )?;
        Ok(Self::with_backend(Arc::new(backend)))
    }

    pub fn with_backend(backend: Arc<dyn ChatBackend>) -> Self {
        Self { backend }
    }

    /// The whole pipeline: build the request, call upstream once, check the
    /// response shape, apply the hallucination guard.
    pub async fn process_chat(&self, query: &str) -> RelayResult<ChatResponse> {
        let request = ChatRequest::new(query)?;
        let response = self.backend.ask(&request).await?;
        validator::validate(&response)?;
        Ok(validator::hallucination_guard(response))
    }
}
