//! relaychat-relay: HTTP relay between chat clients and the upstream
//! completion API.
//!
//! Exposes a single stateless route, `POST /api/chatbot`, which prepends a
//! fixed system directive to the caller's history, asks the upstream for one
//! non-streamed completion, and returns its text. Every failure is
//! normalized to `{ "error": string }`.

mod error;
mod handler;
mod protocol;


use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tokio::net::TcpListener;

use relaychat_ai::{DeepSeekClient, DeepSeekConfig};
use relaychat_common::RelayChatError;
use relaychat_config::{RelayChatConfig, API_KEY_ENV};

use crate::handler::{router, AppState};

#[derive(Parser)]
#[command(
    name = "relaychat-relay",
    version,
    about = "HTTP relay forwarding chat histories to the upstream completion API"
)]
struct Args {
    /// Interface to bind (overrides `server.host`).
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on (overrides `server.port`).
    #[arg(short, long)]
    port: Option<u16>,

    /// Config file path override.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log level override (trace, debug, info, warn, error).
    #[arg(long)]
    log_level: Option<String>,

    /// Print the effective config as TOML and exit.
    #[arg(long)]
    print_config: bool,
}

fn init_logging(level: &str) {
    let directive = format!("relaychat_relay={level},relaychat_ai={level},relaychat_config={level}");
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| directive.into()),
        )
        .init();
}

fn main() {
    // Environment is mutated before any runtime thread exists.
    relaychat_config::load_dotenv(Path::new(".env"));

    let args = Args::parse();

    let loaded = relaychat_config::load_config(args.config.as_deref());
    let level = match (&args.log_level, &loaded) {
        (Some(level), _) => level.clone(),
        (None, Ok(config)) => config.logging.level.as_str().to_string(),
        (None, Err(_)) => "info".to_string(),
    };
    init_logging(&level);

    let mut config = match loaded {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Config error: {e}");
            std::process::exit(1);
        }
    };
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = u32::from(port);
    }

    if args.print_config {
        print!("{}", relaychat_config::config_to_toml(&config));
        return;
    }

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            tracing::error!("Failed to create tokio runtime: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = runtime.block_on(run(config)) {
        tracing::error!("relaychat-relay failed: {e}");
        std::process::exit(1);
    }
}

async fn run(config: RelayChatConfig) -> Result<(), RelayChatError> {
    // No credential, no server.
    let api_key = relaychat_config::require_env(API_KEY_ENV)?;

    let upstream = DeepSeekConfig::new(api_key)
        .with_base_url(&config.upstream.base_url)
        .with_model(&config.upstream.model)
        .with_connect_timeout(Duration::from_secs(config.upstream.connect_timeout_secs.into()))
        .with_request_timeout(Duration::from_secs(config.upstream.request_timeout_secs.into()));
    let client = DeepSeekClient::new(upstream).map_err(|e| RelayChatError::Ai(e.to_string()))?;
    tracing::info!(
        model = %client.model(),
        base_url = %config.upstream.base_url,
        "Upstream client ready"
    );

    let app = router(AppState::new(Arc::new(client)));

    let addr = config.server.bind_addr();
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("relaychat-relay listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
    tracing::info!("Ctrl-C received, shutting down");
}
