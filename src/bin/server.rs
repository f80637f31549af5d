//! LexiKV Server Binary
//!
//! Loads the dictionary and serves the definitions API.

use std::sync::Arc;

use clap::Parser;
use lexikv::network::Server;
use lexikv::{Config, RequestHandler, WordStore};
use tracing_subscriber::{fmt, EnvFilter};

/// LexiKV Server
#[derive(Parser, Debug)]
#[command(name = "lexikv-server")]
#[command(about = "Word/definition store over HTTP")]
#[command(version)]
struct Args {
    /// Dictionary file
    #[arg(short, long, default_value = "dictionary.json")]
    data_file: String,

    /// Listen address (host:port)
    #[arg(short, long, default_value = "0.0.0.0:3000")]
    listen: String,

    /// Disable cross-origin requests
    #[arg(long)]
    no_cors: bool,

    /// Log level (overridden by RUST_LOG)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .init();

    tracing::info!("LexiKV Server v{}", lexikv::VERSION);
    tracing::info!("Dictionary file: {}", args.data_file);
    tracing::info!("Listen address: {}", args.listen);

    // Build config from args
    let config = Config::builder()
        .data_file(&args.data_file)
        .listen_addr(&args.listen)
        .cors(!args.no_cors)
        .build();

    if let Err(e) = config.validate() {
        tracing::error!("{}", e);
        std::process::exit(1);
    }

    // Load dictionary
    let store = match WordStore::open(&config.data_file) {
        Ok(s) => Arc::new(s),
        Err(e) => {
            tracing::error!("Failed to load dictionary: {}", e);
            std::process::exit(1);
        }
    };

    let handler = Arc::new(RequestHandler::new(store));

    let server = Server::new(config, handler);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
