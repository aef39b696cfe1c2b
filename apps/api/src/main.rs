mod auth;
mod config;
mod db;
mod errors;
mod jobs;
mod llm_client;
mod models;
mod profile;
mod recommendation;
mod routes;
mod state;
mod store;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::create_pool;
use crate::llm_client::build_provider;
use crate::recommendation::engine::RecommendationEngine;
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::PgStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={},tower_http={}",
                env!("CARGO_PKG_NAME"),
                &config.rust_log,
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Job Match API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL and the stores on top of it
    let pool = create_pool(&config.database_url).await?;
    let store = Arc::new(PgStore::new(pool));

    // Initialize the completion provider once; the engine owns it from here on
    let provider = build_provider(&config.ai)?;
    info!(
        "Completion provider initialized ({}, model: {}, timeout: {}s)",
        provider.name(),
        config.ai.model,
        config.ai.timeout_secs
    );

    let engine = RecommendationEngine::new(store.clone(), store.clone(), provider);

    let state = AppState {
        users: store.clone(),
        profiles: store.clone(),
        jobs: store,
        engine,
        jwt_secret: config.jwt_secret.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
