//! Garden API Server
//!
//! REST API server for the garden idle-farming backend.
//!
//! # Usage
//!
//! ```bash
//! # Start with default settings
//! garden-server
//!
//! # Start with custom config
//! garden-server --config /path/to/config.toml
//!
//! # Sync the seed/location catalog and start
//! garden-server --sync-catalog
//!
//! # Environment overrides
//! GARDEN__SERVER__PORT=8080 garden-server
//! ```

mod config;

use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tokio::signal;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use garden_api::{create_router, ApiConfig, AppState};
use garden_auth::{AuthConfig, AuthService};
use garden_db::{Database, DatabaseConfig as DbConfig};

use crate::config::ServerConfig;

// =============================================================================
// CLI Arguments
// =============================================================================

/// Garden API Server - backend for the garden idle-farming game
#[derive(Parser, Debug)]
#[command(name = "garden-server")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to configuration file (TOML)
    #[arg(short, long, env = "GARDEN_CONFIG")]
    config: Option<String>,

    /// Host to bind to
    #[arg(long, env = "GARDEN_HOST")]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "GARDEN_PORT")]
    port: Option<u16>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "GARDEN_LOG_LEVEL", default_value = "info")]
    log_level: String,

    /// Log format (json, pretty)
    #[arg(long, env = "GARDEN_LOG_FORMAT", default_value = "pretty")]
    log_format: String,

    /// PostgreSQL connection URL
    #[arg(long, env = "DATABASE_URL")]
    database_url: Option<String>,

    /// JWT secret key
    #[arg(long, env = "JWT_SECRET")]
    jwt_secret: Option<String>,

    /// Google OAuth client ID
    #[arg(long, env = "GOOGLE_CLIENT_ID")]
    google_client_id: Option<String>,

    /// Sync the built-in seed/location catalog into the database on startup
    #[arg(long)]
    sync_catalog: bool,

    /// Enable development mode (relaxed security)
    #[arg(long, env = "GARDEN_DEV_MODE")]
    dev_mode: bool,
}

// =============================================================================
// Main Entry Point
// =============================================================================

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Load configuration
    let mut server_config = ServerConfig::load(args.config.as_deref())?;

    // Override with CLI arguments
    if let Some(host) = args.host {
        server_config.server.host = host;
    }
    if let Some(port) = args.port {
        server_config.server.port = port;
    }
    if let Some(db_url) = args.database_url {
        server_config.database.postgres_url = db_url;
    }
    if let Some(jwt_secret) = args.jwt_secret {
        server_config.auth.jwt_secret = jwt_secret;
    }
    if let Some(client_id) = args.google_client_id {
        server_config.auth.google_client_id = client_id;
    }
    server_config.logging.level = args.log_level;
    server_config.logging.format = args.log_format;

    // Initialize logging
    init_logging(&server_config.logging)?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "Starting Garden API Server"
    );

    // Validate configuration
    validate_config(&server_config, args.dev_mode)?;

    // Initialize database
    let db = init_database(&server_config.database).await?;

    // Sync the catalog if requested
    if args.sync_catalog {
        db.catalog_repo().sync().await?;
    }

    // Initialize auth service
    let auth = init_auth(&server_config.auth)?;

    // Create application state
    let state = Arc::new(AppState::new(db, auth));

    // Create router
    let api_config = ApiConfig {
        enable_cors: server_config.api.enable_cors,
        enable_compression: server_config.api.enable_compression,
        enable_tracing: server_config.api.enable_tracing,
    };
    let app = create_router(state, api_config);

    // Get bind address
    let addr = server_config.server.socket_addr();

    tracing::info!(
        host = %server_config.server.host,
        port = %server_config.server.port,
        "Server listening"
    );

    // Start server with graceful shutdown
    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(server_config.server.shutdown_timeout()))
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}

// =============================================================================
// Initialization Functions
// =============================================================================

/// Initialize tracing/logging
fn init_logging(config: &config::LoggingConfig) -> anyhow::Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let subscriber = tracing_subscriber::registry().with(env_filter);

    match config.format.as_str() {
        "json" => {
            subscriber.with(fmt::layer().json().with_target(true)).init();
        }
        _ => {
            subscriber.with(fmt::layer().pretty().with_target(true)).init();
        }
    }

    Ok(())
}

/// Validate configuration
fn validate_config(config: &ServerConfig, dev_mode: bool) -> anyhow::Result<()> {
    if !dev_mode && config.auth.jwt_secret == "change-me-in-production" {
        anyhow::bail!(
            "JWT secret must be changed in production. Set JWT_SECRET environment variable."
        );
    }

    if !dev_mode && config.auth.google_client_id.is_empty() {
        tracing::warn!("GOOGLE_CLIENT_ID is not set; Google sign-in will reject every token");
    }

    Ok(())
}

/// Initialize database connection
async fn init_database(config: &config::DatabaseSettings) -> anyhow::Result<Arc<Database>> {
    tracing::info!("Connecting to database...");

    let db_config = DbConfig {
        postgres_url: config.postgres_url.clone(),
        max_connections: config.max_connections,
        min_connections: config.min_connections,
        acquire_timeout_secs: config.connect_timeout_secs,
    };

    let db = Database::connect(&db_config).await?;

    if config.run_migrations {
        db.migrate().await?;
    }

    let health = db.health_check().await?;
    if !health.healthy {
        anyhow::bail!("Database health check failed");
    }

    tracing::info!("Database connected and healthy");

    Ok(Arc::new(db))
}

/// Initialize authentication service
fn init_auth(config: &config::AuthSettings) -> anyhow::Result<Arc<AuthService>> {
    tracing::info!("Initializing authentication service...");

    let auth_config = AuthConfig {
        jwt: garden_auth::JwtConfig {
            secret: config.jwt_secret.clone(),
            issuer: config.jwt_issuer.clone(),
            audience: config.jwt_audience.clone(),
            access_token_lifetime: Duration::from_secs(config.access_token_lifetime_secs),
        },
        google: garden_auth::GoogleConfig {
            client_id: config.google_client_id.clone(),
            ..Default::default()
        },
    };

    let auth_service = AuthService::new(auth_config);

    tracing::info!(
        google_configured = auth_service.google.is_configured(),
        "Authentication service initialized"
    );

    Ok(Arc::new(auth_service))
}

/// Wait for a shutdown signal
async fn shutdown_signal(timeout: Duration) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown...");
        }
    }

    tracing::info!(
        timeout_secs = timeout.as_secs(),
        "Waiting for in-flight requests to complete..."
    );

    tokio::time::sleep(timeout).await;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing() {
        let args = Args::parse_from(["garden-server", "--port", "8080", "--sync-catalog"]);
        assert_eq!(args.port, Some(8080));
        assert!(args.sync_catalog);
        assert!(!args.dev_mode);
    }

    #[test]
    fn test_validate_config_rejects_default_secret() {
        let config = ServerConfig::default();
        assert!(validate_config(&config, false).is_err());
        assert!(validate_config(&config, true).is_ok());
    }
}
