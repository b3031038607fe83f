pub mod health;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::extraction::handlers as extraction_handlers;
use crate::matching::handlers as matching_handlers;
use crate::roadmap::handlers as roadmap_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Matching API
        .route(
            "/api/v1/jobs/recommendations",
            get(matching_handlers::handle_recommend_jobs),
        )
        .route(
            "/api/v1/resources/recommendations",
            get(matching_handlers::handle_recommend_resources),
        )
        .route(
            "/api/v1/skills/gap-analysis",
            post(matching_handlers::handle_gap_analysis),
        )
        // AI extraction API
        .route(
            "/api/v1/ai/extract-skills",
            post(extraction_handlers::handle_extract_skills),
        )
        .route(
            "/api/v1/skills/extracted",
            get(extraction_handlers::handle_list_extracted_skills),
        )
        // Roadmap API
        .route(
            "/api/v1/roadmaps",
            post(roadmap_handlers::handle_create_roadmap)
                .get(roadmap_handlers::handle_list_roadmaps),
        )
        .route(
            "/api/v1/roadmaps/:id",
            get(roadmap_handlers::handle_get_roadmap)
                .delete(roadmap_handlers::handle_delete_roadmap),
        )
        .route(
            "/api/v1/roadmaps/:id/progress",
            put(roadmap_handlers::handle_update_progress),
        )
        .with_state(state)
}
