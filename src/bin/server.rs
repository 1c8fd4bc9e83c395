//! FSI HTTP Server Binary
//!
//! This is the main entry point for the FSI REST API server.
//! It initializes the repository, the model collaborators, and the
//! analysis configuration, sets up the HTTP router, and starts serving
//! requests.
//!
//! # Usage
//!
//! ```bash
//! # Run with the local (in-memory) repository and stub collaborators
//! cargo run --bin fsi-server --features "local-repo,http-server"
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `FSI_CONFIG`: Path to a TOML analysis configuration file (optional)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use fsi_rust::config::AnalysisConfig;
use fsi_rust::db::LocalRepository;
use fsi_rust::http::{create_router, AppState};
use fsi_rust::providers::Providers;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .init();

    info!("Starting FSI HTTP Server");

    // Analysis parameters: config file if given, documented defaults otherwise.
    // Validation happens once here; handlers never re-check.
    let config = match env::var("FSI_CONFIG") {
        Ok(path) => {
            info!("Loading analysis config from {}", path);
            AnalysisConfig::from_file(&path).map_err(|e| anyhow::anyhow!(e))?
        }
        Err(_) => AnalysisConfig::default(),
    };
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    // Construct capabilities once and inject them; no process-wide model
    // singletons.
    let repository = Arc::new(LocalRepository::new());
    let providers = Providers::stubs();
    info!("Repository and collaborators initialized");

    // Create application state
    let state = AppState::new(repository, providers, Arc::new(config));

    // Create router with all endpoints
    let app = create_router(state);

    // Determine bind address
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8080);
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("Server listening on http://{}", addr);
    info!("API documentation: http://{}/health", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
