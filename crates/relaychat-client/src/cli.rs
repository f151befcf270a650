use std::path::PathBuf;

use clap::Parser;

/// relaychat: terminal chat over a relaychat relay server.
#[derive(Parser, Debug)]
#[command(name = "relaychat", version, about)]
pub struct Args {
    /// Relay base URL (overrides `client.relay_url`).
    #[arg(long)]
    pub relay_url: Option<String>,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level override (trace, debug, info, warn, error). Logs go to stderr.
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}
