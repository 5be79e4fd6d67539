//! Error types for palaver.

pub mod unified;

pub use unified::ErrorKind;

use thiserror::Error;

/// Primary error type for all palaver operations.
#[derive(Error, Debug)]
pub enum ChatError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Missing content: {0}")]
    MissingContent(String),
}

impl ChatError {
    /// Create an API error from a status code and response body.
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Network(_) | Self::Api { .. } => ErrorKind::Transport,
            Self::Serialization(_) | Self::MissingContent(_) => ErrorKind::ResponseParse,
            Self::Configuration(_) => ErrorKind::Configuration,
        }
    }

    /// HTTP status, if the endpoint answered with one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, ChatError>;
