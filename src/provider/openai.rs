//! OpenAI Chat Completions wire types.

use serde::{Deserialize, Serialize};

use crate::error::ChatError;
use crate::types::{GenerationSettings, Message};

/// Request body: `{ model, messages, temperature, max_tokens }`.
#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest<'a> {
    pub model: &'a str,
    pub messages: &'a [Message],
    pub temperature: f64,
    pub max_tokens: u32,
}

impl<'a> ChatCompletionRequest<'a> {
    pub fn new(model: &'a str, messages: &'a [Message], settings: &GenerationSettings) -> Self {
        Self {
            model,
            messages,
            temperature: settings.temperature,
            max_tokens: settings.max_tokens,
        }
    }
}

/// Response body. Only `choices[0].message.content` is read; unknown fields
/// are ignored.
#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

impl ChatCompletionResponse {
    /// Content of the first choice.
    pub fn into_content(self) -> Result<String, ChatError> {
        let choice = self
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| ChatError::MissingContent("no choices in response".into()))?;
        choice
            .message
            .content
            .ok_or_else(|| ChatError::MissingContent("choices[0].message.content is null".into()))
    }
}

/// Parse a raw response body and pull out the assistant text.
pub fn extract_content(body: &str) -> Result<String, ChatError> {
    serde_json::from_str::<ChatCompletionResponse>(body)?.into_content()
}
