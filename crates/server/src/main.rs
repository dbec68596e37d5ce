//! Catalog server - product catalog CRUD service.
//!
//! Serves a JSON HTTP API on port 8080 (configurable):
//!
//! - `POST /products` - create a product
//! - `GET /products/{id}` - fetch a product (cache-first)
//! - `GET /products?user_id=<id>` - list products
//!
//! # Architecture
//!
//! - Axum web framework on Tokio
//! - `PostgreSQL` via sqlx (single pool created at startup)
//! - moka in-process read cache (advisory, no invalidation)
//! - Channel-backed image queue stub for asynchronous image processing

#![cfg_attr(not(test), forbid(unsafe_code))]

use catalog_server::config::AppConfig;
use catalog_server::state::AppState;
use catalog_server::{db, routes};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Load configuration from environment
    let config = AppConfig::from_env().expect("Failed to load configuration");

    // Initialize tracing with EnvFilter
    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "catalog_server=info,tower_http=debug".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Initialize database connection pool. This is the only failure that is
    // allowed to halt startup.
    let pool = db::create_pool(&config.database_url)
        .await
        .expect("Failed to create database pool");
    tracing::info!("Database pool created");

    // Build application state (pool, read cache, image queue worker)
    let state = AppState::new(config, pool);

    // Build router
    let app = routes::router()
        .layer(TraceLayer::new_for_http())
        .with_state(state.clone());

    // Start server
    let addr = state.config().socket_addr();
    tracing::info!("catalog server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
