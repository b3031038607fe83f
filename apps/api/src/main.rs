mod ai;
mod config;
mod db;
mod errors;
mod extraction;
mod matching;
mod models;
mod roadmap;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::ai::AiService;
use crate::config::Config;
use crate::db::create_pool;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (panics on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_log_filter(&config.rust_log))),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting CareerBridge API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL
    let db = create_pool(&config.database_url).await?;

    // Initialize AI providers
    let ai = AiService::new(config.gemini_api_key.clone(), config.groq_api_key.clone());
    info!(
        "AI service initialized (gemini: {}, groq: {})",
        ai.gemini_enabled(),
        ai.groq_enabled()
    );

    // Build app state
    let state = AppState { db, ai };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Default filter directive when `RUST_LOG` is unset. Tracing targets are
/// rooted at the bin crate name, which differs from the package name here, so
/// the directive is derived from the crate's own module path.
fn default_log_filter(level: &str) -> String {
    format!("{}={level}", module_path!())
}
