//! Shared test helpers and mock transport.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use palaver::error::ChatError;
use palaver::provider::{ChatCompletionRequest, ChatTransport};

/// A transport that returns canned bodies and records what it was sent.
#[derive(Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<Result<String, ChatError>>>,
    requests: Mutex<Vec<(String, serde_json::Value)>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a well-formed completion whose first choice says `content`.
    pub fn queue_reply(&self, content: &str) {
        self.queue_body(
            serde_json::json!({
                "choices": [{"message": {"role": "assistant", "content": content}}]
            })
            .to_string(),
        );
    }

    /// Queue a raw 2xx body.
    pub fn queue_body(&self, body: impl Into<String>) {
        self.responses.lock().unwrap().push_back(Ok(body.into()));
    }

    /// Queue a failure.
    pub fn queue_error(&self, error: ChatError) {
        self.responses.lock().unwrap().push_back(Err(error));
    }

    /// Every request seen so far, as `(url, json body)`.
    pub fn requests(&self) -> Vec<(String, serde_json::Value)> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatTransport for MockTransport {
    async fn post_json(
        &self,
        url: &str,
        request: &ChatCompletionRequest<'_>,
    ) -> Result<String, ChatError> {
        self.requests
            .lock()
            .unwrap()
            .push((url.to_string(), serde_json::to_value(request).unwrap()));
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ChatError::api(503, "no response queued")))
    }
}
