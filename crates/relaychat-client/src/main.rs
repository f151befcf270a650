mod cli;
mod repl;

use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use relaychat_client::HttpRelay;
use relaychat_common::RelayChatError;

fn init_logging(level: &str) {
    let directive = format!("relaychat={level},relaychat_client={level},relaychat_config={level}");
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive)),
        )
        .init();
}

fn main() {
    // Environment is mutated before any runtime thread exists.
    relaychat_config::load_dotenv(Path::new(".env"));

    let args = cli::parse();
    init_logging(args.log_level.as_deref().unwrap_or("warn"));

    let result = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(RelayChatError::from)
        .and_then(|runtime| runtime.block_on(run(args)));

    if let Err(e) = result {
        tracing::error!("relaychat failed: {e}");
        eprintln!("relaychat: {e}");
        std::process::exit(1);
    }
}

async fn run(args: cli::Args) -> relaychat_common::Result<()> {
    let config = relaychat_config::load_config(args.config.as_deref()).unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        relaychat_config::RelayChatConfig::default()
    });

    let relay_url = args.relay_url.unwrap_or(config.client.relay_url);
    let transport = HttpRelay::new(&relay_url).map_err(|e| RelayChatError::Network(e.to_string()))?;
    tracing::info!(endpoint = %transport.endpoint(), "Using relay");

    repl::run(Arc::new(transport)).await?;
    Ok(())
}
