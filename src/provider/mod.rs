//! Transport seam and the OpenAI-compatible wire format.

pub mod http;
pub mod openai;

pub use http::HttpTransport;
pub use openai::{ChatCompletionRequest, ChatCompletionResponse};

use async_trait::async_trait;

use crate::error::ChatError;

/// Carries one chat-completion request to an endpoint.
///
/// Implementations issue exactly one POST with a JSON body and return the
/// raw response body on a 2xx status. Non-2xx statuses map to
/// [`ChatError::Api`], connection-level failures to [`ChatError::Network`].
/// No retries.
#[async_trait]
pub trait ChatTransport: Send + Sync {
    async fn post_json(
        &self,
        url: &str,
        request: &ChatCompletionRequest<'_>,
    ) -> Result<String, ChatError>;
}
