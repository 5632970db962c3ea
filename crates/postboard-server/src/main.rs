//! Postboard Server
//!
//! Serves text posts from an in-memory store and records file uploads in
//! SQLite (embedded).

mod config;
mod error;
mod handlers;
mod services;
mod storage;

use anyhow::{Context, Result};
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use postboard_core::ports::{PostStore, UploadStore};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::config::Config;
use services::UploadService;
use storage::{Database, MemoryPostStore};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostStore>,
    pub uploads: Arc<UploadService>,
}

#[tokio::main]
async fn main() {
    // Set up panic hook to log crashes
    std::panic::set_hook(Box::new(|info| {
        let location = info
            .location()
            .map(|l| format!("{}:{}", l.file(), l.line()));
        let payload = if let Some(s) = info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "Unknown panic".to_string()
        };
        eprintln!("[PANIC] at {:?}: {}", location, payload);
        tracing::error!("PANIC at {:?}: {}", location, payload);
    }));

    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("[FATAL] Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    info!("Starting Postboard Server v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run_server().await {
        error!("Server failed: {:#}", e);
        std::process::exit(1);
    }
}

async fn run_server() -> Result<()> {
    let config = Config::load().context("Failed to load configuration")?;
    let database_path = config.database_path();
    info!(
        "Config loaded: bind={}, db={}, max_upload_bytes={}",
        config.bind_address, database_path, config.max_upload_bytes
    );

    // Opening the database also ensures the upload table exists
    let db = Arc::new(
        Database::new(&database_path)
            .await
            .context("Failed to initialize database")?,
    );

    let posts = Arc::new(MemoryPostStore::new());
    info!("In-memory post store seeded");

    let state = AppState {
        posts,
        uploads: Arc::new(UploadService::new(db.clone() as Arc<dyn UploadStore>)),
    };

    let app = build_router(state, config.max_upload_bytes as usize);

    let addr = config.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    info!("Server listening on {}", addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Shutting down, closing database");
    db.close().await;

    Ok(())
}

fn build_router(state: AppState, max_upload_bytes: usize) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health))
        .merge(post_routes())
        .route(
            "/upload",
            post(handlers::upload::upload).layer(DefaultBodyLimit::max(max_upload_bytes)),
        )
        // Layers
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn post_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/posts",
            get(handlers::posts::list).post(handlers::posts::create),
        )
        .route("/posts/:id", get(handlers::posts::get))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
