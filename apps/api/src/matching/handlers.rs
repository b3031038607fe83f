use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::matching::gap::{analyze_skill_gap, GapTarget, SkillGapReport};
use crate::matching::jobs::{recommend_jobs, JobFilters, JobMatch};
use crate::matching::resources::{recommend_resources, ResourceFilters, ResourceMatch};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct JobRecommendationQuery {
    pub user_id: Uuid,
    pub experience_level: Option<String>,
    pub job_type: Option<String>,
    pub limit: Option<usize>,
}

/// GET /api/v1/jobs/recommendations
pub async fn handle_recommend_jobs(
    State(state): State<AppState>,
    Query(params): Query<JobRecommendationQuery>,
) -> Result<Json<Vec<JobMatch>>, AppError> {
    let filters = JobFilters {
        experience_level: params.experience_level,
        job_type: params.job_type,
        limit: params.limit,
    };
    let matches = recommend_jobs(&state.db, params.user_id, &filters).await?;
    Ok(Json(matches))
}

#[derive(Deserialize)]
pub struct ResourceRecommendationQuery {
    pub user_id: Uuid,
    pub free_only: Option<bool>,
}

/// GET /api/v1/resources/recommendations
pub async fn handle_recommend_resources(
    State(state): State<AppState>,
    Query(params): Query<ResourceRecommendationQuery>,
) -> Result<Json<Vec<ResourceMatch>>, AppError> {
    let filters = ResourceFilters {
        free_only: params.free_only,
    };
    let matches = recommend_resources(&state.db, params.user_id, &filters).await?;
    Ok(Json(matches))
}

#[derive(Deserialize)]
pub struct GapAnalysisRequest {
    pub user_id: Uuid,
    pub target_role: Option<String>,
    pub job_ids: Option<Vec<Uuid>>,
}

/// POST /api/v1/skills/gap-analysis
pub async fn handle_gap_analysis(
    State(state): State<AppState>,
    Json(req): Json<GapAnalysisRequest>,
) -> Result<Json<SkillGapReport>, AppError> {
    let target = match (req.job_ids, req.target_role) {
        (Some(ids), _) if !ids.is_empty() => GapTarget::Jobs(ids),
        (_, Some(role)) if !role.trim().is_empty() => GapTarget::Role(role),
        _ => {
            return Err(AppError::InvalidInput(
                "Either target_role or a non-empty job_ids list is required".to_string(),
            ))
        }
    };

    let report = analyze_skill_gap(&state.db, req.user_id, &target).await?;
    Ok(Json(report))
}
