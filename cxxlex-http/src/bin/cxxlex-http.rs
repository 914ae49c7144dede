use clap::{Parser, Subcommand};
use cxxlex_http::{self, server::ServerConfig};
use std::path::PathBuf;

/// cxxlex HTTP API Server
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Host address to bind to
    #[arg(short = 'H', long, env = "CXXLEX_HOST", default_value = "127.0.0.1")]
    host: String,

    /// Port to listen on
    #[arg(short, long, env = "CXXLEX_PORT", default_value_t = 5000)]
    port: u16,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Directory with the front end files
    #[arg(short, long, default_value = "static")]
    static_dir: PathBuf,

    /// Subcommands
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the server with a specific configuration file
    Config {
        /// Path to the configuration file
        #[arg(short, long)]
        file: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.command {
        Some(Commands::Config { file }) => {
            println!("Loading configuration from file: {}", file.display());
            cxxlex::config::from_file::<ServerConfig, _>(file)?
        }
        None => ServerConfig {
            host: cli.host,
            port: cli.port,
            static_dir: cli.static_dir,
            ..Default::default()
        },
    };

    println!(
        "Starting cxxlex HTTP server on {}:{}",
        config.host, config.port
    );
    cxxlex_http::start_with_config(config, &cli.log_level).await?;

    Ok(())
}
