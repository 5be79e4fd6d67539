//! Line-oriented prompt loop over a [`ChatClient`].

use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::info;

use crate::client::ChatClient;
use crate::provider::{ChatTransport, HttpTransport};
use crate::types::GenerationSettings;

/// Inputs that end the session, compared case-insensitively.
pub const EXIT_COMMANDS: [&str; 3] = ["exit", "quit", "終了"];

pub fn is_exit_command(input: &str) -> bool {
    let input = input.trim().to_lowercase();
    EXIT_COMMANDS.contains(&input.as_str())
}

/// Reads user turns, prints assistant replies.
pub struct Repl<T = HttpTransport> {
    client: ChatClient<T>,
    settings: GenerationSettings,
}

impl<T: ChatTransport> Repl<T> {
    pub fn new(client: ChatClient<T>, settings: GenerationSettings) -> Self {
        Self { client, settings }
    }

    pub fn client(&self) -> &ChatClient<T> {
        &self.client
    }

    /// Run until an exit command or end of input.
    pub async fn run<R, W>(&mut self, input: R, out: &mut W) -> std::io::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        writeln!(
            out,
            "Starting chat with {}. Type 'exit' or 'quit' to leave.",
            self.client.config().model
        )?;

        let mut lines = input.lines();
        loop {
            write!(out, "\nYou: ")?;
            out.flush()?;

            let Some(line) = lines.next_line().await? else {
                writeln!(out)?;
                break;
            };

            if is_exit_command(&line) {
                writeln!(out, "Ending chat.")?;
                break;
            }
            if line.trim().is_empty() {
                continue;
            }

            match self.client.send_message_with(line, &self.settings).await {
                Some(reply) if !reply.is_empty() => writeln!(out, "\nAssistant: {reply}")?,
                _ => writeln!(out, "\nError: no response was received.")?,
            }
        }

        info!(turns = self.client.history().len(), "chat session ended");
        Ok(())
    }
}
