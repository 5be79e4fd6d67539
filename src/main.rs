//! palaver CLI binary entry point.

use palaver::cli::{Cli, Repl};
use palaver::client::ChatClient;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse_args();

    // RUST_LOG wins over -v
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = cli.client_config();
    config.validate()?;
    info!(endpoint = %config.endpoint_url, model = %config.model, "starting chat");

    let mut client = ChatClient::new(config);
    if let Some(system) = cli.system_prompt() {
        client.add_system_message(system);
    }

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    Repl::new(client, cli.settings()).run(stdin, &mut stdout).await?;
    Ok(())
}
