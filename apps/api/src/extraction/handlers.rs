use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::ai::parse::ExtractedData;
use crate::ai::AiProvider;
use crate::errors::AppError;
use crate::extraction::{extract_and_merge, list_extracted_skills};
use crate::models::skill::ExtractedSkillRecord;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ExtractSkillsRequest {
    pub user_id: Uuid,
    pub cv_text: String,
    #[serde(default)]
    pub provider: AiProvider,
    #[serde(default)]
    pub update_profile: bool,
}

#[derive(Serialize)]
pub struct ExtractSkillsResponse {
    pub extracted: ExtractedData,
    pub provider: AiProvider,
    pub profile_updated: bool,
}

/// POST /api/v1/ai/extract-skills
pub async fn handle_extract_skills(
    State(state): State<AppState>,
    Json(req): Json<ExtractSkillsRequest>,
) -> Result<Json<ExtractSkillsResponse>, AppError> {
    if req.cv_text.trim().is_empty() {
        return Err(AppError::InvalidInput("cv_text must not be empty".to_string()));
    }

    let extracted = extract_and_merge(
        &state.db,
        &state.ai,
        req.user_id,
        &req.cv_text,
        req.provider,
        req.update_profile,
    )
    .await?;

    Ok(Json(ExtractSkillsResponse {
        extracted,
        provider: req.provider,
        profile_updated: req.update_profile,
    }))
}

#[derive(Deserialize)]
pub struct ExtractedSkillsQuery {
    pub user_id: Uuid,
}

/// GET /api/v1/skills/extracted
pub async fn handle_list_extracted_skills(
    State(state): State<AppState>,
    Query(params): Query<ExtractedSkillsQuery>,
) -> Result<Json<Vec<ExtractedSkillRecord>>, AppError> {
    let records = list_extracted_skills(&state.db, params.user_id).await?;
    Ok(Json(records))
}
