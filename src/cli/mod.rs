//! CLI entry point for palaver.

pub mod repl;

pub use repl::{is_exit_command, Repl, EXIT_COMMANDS};

use clap::Parser;

use crate::config::ClientConfig;
use crate::types::GenerationSettings;

pub const DEFAULT_SYSTEM_PROMPT: &str = "You are a helpful AI assistant.";

/// Interactive chat against an OpenAI-compatible endpoint.
#[derive(Parser, Debug)]
#[command(name = "palaver", version, about = "Chat with an OpenAI-compatible endpoint")]
pub struct Cli {
    /// Endpoint URL accepting chat-completion POSTs [env: PALAVER_ENDPOINT_URL]
    #[arg(short, long)]
    pub endpoint: Option<String>,

    /// Model name sent with every request [env: PALAVER_MODEL]
    #[arg(short, long)]
    pub model: Option<String>,

    /// System prompt
    #[arg(short, long, default_value = DEFAULT_SYSTEM_PROMPT)]
    pub system: String,

    /// Start without a system prompt
    #[arg(long, conflicts_with = "system")]
    pub no_system: bool,

    /// Temperature (0.0 - 2.0)
    #[arg(short, long, default_value_t = crate::types::generation::DEFAULT_TEMPERATURE)]
    pub temperature: f64,

    /// Max tokens
    #[arg(long, default_value_t = crate::types::generation::DEFAULT_MAX_TOKENS)]
    pub max_tokens: u32,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Parse CLI arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Environment config with explicit flags layered on top.
    pub fn client_config(&self) -> ClientConfig {
        let mut config = ClientConfig::from_env();
        if let Some(ref endpoint) = self.endpoint {
            config.endpoint_url = endpoint.clone();
        }
        if let Some(ref model) = self.model {
            config.model = model.clone();
        }
        config
    }

    pub fn settings(&self) -> GenerationSettings {
        GenerationSettings::builder()
            .temperature(self.temperature)
            .max_tokens(self.max_tokens)
            .build()
    }

    pub fn system_prompt(&self) -> Option<&str> {
        (!self.no_system).then_some(self.system.as_str())
    }

    /// Log filter directive for the `-v` count.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
