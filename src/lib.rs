//! palaver — minimal chat client for OpenAI-compatible endpoints.
//!
//! Keeps a linear conversation history and exchanges it with a
//! chat-completions endpoint, one POST per user turn.
//!
//! # Quick Start
//!
//! ```no_run
//! use palaver::prelude::*;
//!
//! # async fn example() -> palaver::error::Result<()> {
//! let config = ClientConfig::new("http://127.0.0.1:8080/v1/chat/completions", "gpt-3.5-turbo");
//! let mut client = ChatClient::new(config);
//! client.add_system_message("You are a helpful AI assistant.");
//!
//! let reply = client
//!     .try_send_message("Hello!", &GenerationSettings::default())
//!     .await?;
//! println!("{reply}");
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod conversation;
pub mod error;
pub mod prelude;
pub mod provider;
pub mod types;

#[cfg(feature = "cli")]
pub mod cli;
