//! cxxlex HTTP API Server
//!
//! Serves the lexer over HTTP: a form based `/analyze` endpoint returning the
//! text report, `/analyze_json` returning structured tokens, and the static
//! front end.

pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod server;
pub mod services;

use server::{ServerConfig, start_server};
use tracing_subscriber::EnvFilter;

/// Installs the global tracing subscriber. `RUST_LOG` wins over `default_level`.
pub fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Start the server with the default configuration
pub async fn start() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing("info");
    start_server(ServerConfig::default()).await
}

/// Start the server with a custom configuration
pub async fn start_with_config(
    config: ServerConfig,
    log_level: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    init_tracing(log_level);
    start_server(config).await
}
