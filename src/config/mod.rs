//! Client configuration (layered: code > env > defaults).

use serde::{Deserialize, Serialize};

use crate::error::ChatError;

pub const DEFAULT_ENDPOINT_URL: &str = "http://127.0.0.1:8080";
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

pub const ENDPOINT_URL_ENV: &str = "PALAVER_ENDPOINT_URL";
pub const MODEL_ENV: &str = "PALAVER_MODEL";

/// Where requests go and which model they name.
///
/// The URL is posted to verbatim; no `/chat/completions` suffix is added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub endpoint_url: String,
    pub model: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT_URL, DEFAULT_MODEL)
    }
}

impl ClientConfig {
    pub fn new(endpoint_url: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            endpoint_url: endpoint_url.into(),
            model: model.into(),
        }
    }

    /// Load from `PALAVER_ENDPOINT_URL` / `PALAVER_MODEL`, falling back to defaults.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv(); // load .env if present, ignore error
        let mut config = Self::default();

        if let Ok(url) = std::env::var(ENDPOINT_URL_ENV) {
            if !url.trim().is_empty() {
                config.endpoint_url = url;
            }
        }
        if let Ok(model) = std::env::var(MODEL_ENV) {
            if !model.trim().is_empty() {
                config.model = model;
            }
        }

        config
    }

    /// Reject empty values and endpoints that are not absolute URLs.
    pub fn validate(&self) -> Result<(), ChatError> {
        if self.model.trim().is_empty() {
            return Err(ChatError::Configuration("model must not be empty".into()));
        }
        if self.endpoint_url.trim().is_empty() {
            return Err(ChatError::Configuration(
                "endpoint URL must not be empty".into(),
            ));
        }
        reqwest::Url::parse(&self.endpoint_url).map_err(|e| {
            ChatError::Configuration(format!("invalid endpoint URL '{}': {e}", self.endpoint_url))
        })?;
        Ok(())
    }
}
