use std::{net::SocketAddr, path::PathBuf, sync::Arc};

use axum::{
    Router,
    http::{
        Method,
        header::{AUTHORIZATION, CONTENT_TYPE},
    },
};
use cxxlex::report::ReportConfig;
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::routes::create_router;
use crate::services::{AnalysisService, lexer::ExternalLexerConfig};

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host address to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory holding `index.html` and other front end files
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,

    /// Where native runs save their report; `null` disables saving
    #[serde(default = "default_report_path")]
    pub report_path: Option<PathBuf>,

    /// External lexer tried before the native one
    #[serde(default)]
    pub external_lexer: Option<ExternalLexerConfig>,

    /// Report layout
    #[serde(default)]
    pub report: ReportConfig,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("static")
}

fn default_report_path() -> Option<PathBuf> {
    Some(PathBuf::from("tokens.txt"))
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: default_static_dir(),
            report_path: default_report_path(),
            external_lexer: None,
            report: ReportConfig::default(),
        }
    }
}

/// State shared by all handlers
#[derive(Debug, Clone)]
pub struct AppState {
    pub service: Arc<AnalysisService>,
}

impl AppState {
    pub fn new(config: &ServerConfig) -> Self {
        let service = AnalysisService::from_config(
            config.report.clone(),
            config.report_path.clone(),
            config.external_lexer.clone(),
        );
        Self {
            service: Arc::new(service),
        }
    }
}

/// Build the application with state and middleware
pub fn create_app(config: &ServerConfig) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::PUT,
            Method::POST,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION]);

    create_router(&config.static_dir)
        .with_state(AppState::new(config))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Start the HTTP server
pub async fn start_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let app = create_app(&config);

    info!(
        static_dir = %config.static_dir.display(),
        external = config.external_lexer.is_some(),
        "Initialized analysis service"
    );

    // Parse the socket address
    let addr = format!("{}:{}", config.host, config.port).parse::<SocketAddr>()?;

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
