//! Convenience re-exports for common use.

pub use crate::client::ChatClient;
pub use crate::config::ClientConfig;
pub use crate::conversation::Conversation;
pub use crate::error::{ChatError, ErrorKind, Result};
pub use crate::provider::{ChatTransport, HttpTransport};
pub use crate::types::{GenerationSettings, Message, Role};
