use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::ai::AiProvider;
use crate::errors::AppError;
use crate::models::roadmap::CareerRoadmap;
use crate::roadmap::lifecycle::{
    create_roadmap, delete_roadmap, get_roadmap, list_roadmaps, update_progress,
    CreateRoadmapParams, ProgressUpdate,
};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct CreateRoadmapRequest {
    pub user_id: Uuid,
    pub target_role: String,
    pub timeframe_months: Option<u32>,
    pub learning_hours_per_week: Option<u32>,
    #[serde(default)]
    pub provider: AiProvider,
    pub include_current_skills: Option<bool>,
}

/// POST /api/v1/roadmaps
pub async fn handle_create_roadmap(
    State(state): State<AppState>,
    Json(req): Json<CreateRoadmapRequest>,
) -> Result<(StatusCode, Json<CareerRoadmap>), AppError> {
    let params = CreateRoadmapParams {
        target_role: req.target_role,
        timeframe_months: req.timeframe_months,
        learning_hours_per_week: req.learning_hours_per_week,
        provider: req.provider,
        include_current_skills: req.include_current_skills.unwrap_or(true),
    };
    let roadmap = create_roadmap(&state.db, &state.ai, req.user_id, params).await?;
    Ok((StatusCode::CREATED, Json(roadmap)))
}

#[derive(Deserialize)]
pub struct OwnerQuery {
    pub user_id: Uuid,
}

/// GET /api/v1/roadmaps
pub async fn handle_list_roadmaps(
    State(state): State<AppState>,
    Query(params): Query<OwnerQuery>,
) -> Result<Json<Vec<CareerRoadmap>>, AppError> {
    let roadmaps = list_roadmaps(&state.db, params.user_id).await?;
    Ok(Json(roadmaps))
}

/// GET /api/v1/roadmaps/:id
pub async fn handle_get_roadmap(
    State(state): State<AppState>,
    Path(roadmap_id): Path<Uuid>,
    Query(params): Query<OwnerQuery>,
) -> Result<Json<CareerRoadmap>, AppError> {
    let roadmap = get_roadmap(&state.db, roadmap_id, params.user_id).await?;
    Ok(Json(roadmap))
}

#[derive(Deserialize)]
pub struct ProgressUpdateRequest {
    pub user_id: Uuid,
    pub progress_percentage: i32,
    #[serde(default)]
    pub completed_phases: Vec<i32>,
    pub notes: Option<String>,
}

/// PUT /api/v1/roadmaps/:id/progress
pub async fn handle_update_progress(
    State(state): State<AppState>,
    Path(roadmap_id): Path<Uuid>,
    Json(req): Json<ProgressUpdateRequest>,
) -> Result<Json<CareerRoadmap>, AppError> {
    let update = ProgressUpdate {
        progress_percentage: req.progress_percentage,
        completed_phases: req.completed_phases,
        notes: req.notes,
    };
    let roadmap = update_progress(&state.db, roadmap_id, req.user_id, update).await?;
    Ok(Json(roadmap))
}

/// DELETE /api/v1/roadmaps/:id
pub async fn handle_delete_roadmap(
    State(state): State<AppState>,
    Path(roadmap_id): Path<Uuid>,
    Query(params): Query<OwnerQuery>,
) -> Result<StatusCode, AppError> {
    delete_roadmap(&state.db, roadmap_id, params.user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
