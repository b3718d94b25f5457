//! Perishable Goods Vendor Management System - Backend Server
//!
//! Tracks inventory lots with expiry dates, customer profiles, a
//! sales/payment ledger, and a returnable-crate ledger, and renders
//! printable statements.

use axum::{routing::get, Router};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod error;
mod external;
mod handlers;
mod routes;
mod seed;
mod services;
mod state;

pub use config::Config;
pub use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pgvms_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::load()?;

    tracing::info!("Starting Perishable Goods Vendor Management Server");
    tracing::info!("Environment: {}", config.environment);

    // Collections are transient: seeded at startup, lost on shutdown
    let store = seed::sample_store();
    tracing::info!(
        "Seeded {} lots, {} customers, {} transactions, {} crate entries",
        store.inventory.len(),
        store.customers.len(),
        store.transactions.len(),
        store.crate_ledger.len()
    );

    // Create application state
    let state = AppState::new(store, Arc::new(config.clone()));

    // Build application
    let app = create_app(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes and middleware
fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Perishable Goods Vendor Management System API v1.0"
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
