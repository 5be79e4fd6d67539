//! Conversation client: owns the transcript and runs one exchange per send.

use tracing::{debug, error};

use crate::config::ClientConfig;
use crate::conversation::Conversation;
use crate::error::{ChatError, ErrorKind, Result};
use crate::provider::openai::extract_content;
use crate::provider::{ChatCompletionRequest, ChatTransport, HttpTransport};
use crate::types::{GenerationSettings, Message, Role};

/// Chat client for a single, sequential conversation.
///
/// Mutating operations take `&mut self`; sharing one client across tasks
/// requires external synchronization.
///
/// ```no_run
/// use palaver::prelude::*;
///
/// # async fn example() {
/// let mut client = ChatClient::new(ClientConfig::default());
/// client.add_system_message("You are a helpful AI assistant.");
/// if let Some(reply) = client.send_message("Hello!").await {
///     println!("{reply}");
/// }
/// # }
/// ```
#[derive(Debug)]
pub struct ChatClient<T = HttpTransport> {
    config: ClientConfig,
    history: Conversation,
    transport: T,
}

impl ChatClient<HttpTransport> {
    pub fn new(config: ClientConfig) -> Self {
        Self::with_transport(config, HttpTransport::new())
    }
}

impl<T: ChatTransport> ChatClient<T> {
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self {
            config,
            history: Conversation::new(),
            transport,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// The transcript, in send order.
    pub fn history(&self) -> &[Message] {
        self.history.messages()
    }

    pub fn conversation(&self) -> &Conversation {
        &self.history
    }

    /// Append a turn to the end of the history.
    pub fn add_message(&mut self, role: Role, content: impl Into<String>) {
        self.history.push(Message::new(role, content));
    }

    /// Set the system prompt, keeping it at index 0.
    pub fn add_system_message(&mut self, content: impl Into<String>) {
        self.history.upsert_system(content);
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Send with default settings. See [`ChatClient::send_message_with`].
    pub async fn send_message(&mut self, message: impl Into<String>) -> Option<String> {
        self.send_message_with(message, &GenerationSettings::default())
            .await
    }

    /// Send a user turn and return the assistant reply.
    ///
    /// Any failure is logged at error level and yields `None`. The user turn
    /// stays in the history either way. An empty reply is returned as
    /// `Some("")` but not recorded.
    pub async fn send_message_with(
        &mut self,
        message: impl Into<String>,
        settings: &GenerationSettings,
    ) -> Option<String> {
        match self.try_send_message(message, settings).await {
            Ok(reply) => Some(reply),
            Err(e) => {
                report_failure(&e);
                None
            }
        }
    }

    /// Like [`ChatClient::send_message_with`], but returns the failure.
    pub async fn try_send_message(
        &mut self,
        message: impl Into<String>,
        settings: &GenerationSettings,
    ) -> Result<String> {
        self.history.push(Message::user(message));

        let request = ChatCompletionRequest::new(
            &self.config.model,
            self.history.messages(),
            settings,
        );
        let body = self
            .transport
            .post_json(&self.config.endpoint_url, &request)
            .await?;
        let reply = extract_content(&body)?;

        debug!(chars = reply.len(), "assistant reply received");
        if !reply.is_empty() {
            self.history.push(Message::assistant(reply.clone()));
        }
        Ok(reply)
    }
}

fn report_failure(e: &ChatError) {
    match e.kind() {
        ErrorKind::Transport => {
            error!(kind = %e.kind(), status = ?e.status(), error = %e, "request failed")
        }
        _ => error!(kind = %e.kind(), error = %e, "could not parse response"),
    }
}
