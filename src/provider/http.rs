//! Shared HTTP client and the reqwest-backed transport.

use std::sync::OnceLock;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use tracing::debug;

use crate::error::ChatError;

use super::{ChatCompletionRequest, ChatTransport};

static SHARED_CLIENT: OnceLock<reqwest::Client> = OnceLock::new();

/// Get (or create) the shared reqwest client.
pub fn shared_client() -> &'static reqwest::Client {
    SHARED_CLIENT.get_or_init(|| {
        reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(120))
            .pool_max_idle_per_host(10)
            .build()
            .expect("Failed to build HTTP client")
    })
}

/// Headers for a JSON request/response exchange.
pub fn json_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers
}

/// Turn a non-2xx status into an error carrying the body text.
pub fn status_to_error(status: u16, body: &str) -> ChatError {
    let message = extract_error_message(body).unwrap_or_else(|| body.to_string());
    ChatError::api(status, message)
}

// OpenAI-style servers wrap failures as {"error": {"message": ...}}.
fn extract_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()?
        .get("error")?
        .get("message")?
        .as_str()
        .map(str::to_string)
}

/// [`ChatTransport`] over `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpTransport {
    /// Transport backed by the shared client.
    pub fn new() -> Self {
        Self::with_client(shared_client().clone())
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ChatTransport for HttpTransport {
    async fn post_json(
        &self,
        url: &str,
        request: &ChatCompletionRequest<'_>,
    ) -> Result<String, ChatError> {
        debug!(
            url,
            model = request.model,
            messages = request.messages.len(),
            "POST chat completion"
        );

        let resp = self
            .client
            .post(url)
            .headers(json_headers())
            .json(request)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body_text = resp.text().await.unwrap_or_default();
            return Err(status_to_error(status.as_u16(), &body_text));
        }

        Ok(resp.text().await?)
    }
}
