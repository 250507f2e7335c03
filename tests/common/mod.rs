//! Shared test doubles for the relay pipeline.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use historymind_relay::error::RelayResult;
use historymind_relay::io_struct::{ChatRequest, ChatResponse};
use historymind_relay::upstream::ChatBackend;

/// Backend that returns a canned result and counts how often it is asked.
pub struct ScriptedBackend {
    result: RelayResult<ChatResponse>,
    calls: AtomicUsize,
}

impl ScriptedBackend {
    pub fn new(result: RelayResult<ChatResponse>) -> Arc<Self> {
        Arc::new(Self {
            result,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ChatBackend for ScriptedBackend {
    async fn ask(&self, _request: &ChatRequest) -> RelayResult<ChatResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result.clone()
    }
}

/// A confident upstream answer with everything else defaulted.
pub fn answered(answer: &str) -> ChatResponse {
    ChatResponse {
        answer: Some(answer.to_string()),
        ..Default::default()
    }
}
