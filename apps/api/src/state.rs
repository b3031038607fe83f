use sqlx::PgPool;

use crate::ai::AiService;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub ai: AiService,
}
