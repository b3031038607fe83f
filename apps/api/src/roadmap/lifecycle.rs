//! Create / update / delete / read operations for career roadmaps.
//!
//! Every read and mutation is scoped to `id AND user_id` in a single
//! statement, so a roadmap owned by another user is indistinguishable from a
//! missing one and concurrent updates never interleave into a half-written
//! row (last writer wins).

use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::ai::parse::parse_json_response;
use crate::ai::{prompts, AiProvider, AiService};
use crate::errors::AppError;
use crate::matching::find_user;
use crate::models::roadmap::{CareerRoadmap, RoadmapDocument};
use crate::roadmap::validation::{validate_document, validate_progress};

const ROADMAP_TEMPERATURE: f32 = 0.7;
const DEFAULT_TIMEFRAME_MONTHS: u32 = 6;
const DEFAULT_LEARNING_HOURS: u32 = 10;
const DEFAULT_APPLICATION_TIMING: &str = "Apply after completing 60-70% of the roadmap";

#[derive(Debug, Clone)]
pub struct CreateRoadmapParams {
    pub target_role: String,
    pub timeframe_months: Option<u32>,
    pub learning_hours_per_week: Option<u32>,
    pub provider: AiProvider,
    pub include_current_skills: bool,
}

#[derive(Debug, Clone)]
pub struct ProgressUpdate {
    pub progress_percentage: i32,
    pub completed_phases: Vec<i32>,
    pub notes: Option<String>,
}

/// Generates a roadmap via the AI provider, validates the structure, and
/// persists it with zero progress. Structurally invalid provider output is
/// rejected and nothing is stored.
pub async fn create_roadmap(
    pool: &PgPool,
    ai: &AiService,
    user_id: Uuid,
    params: CreateRoadmapParams,
) -> Result<CareerRoadmap, AppError> {
    let target_role = params.target_role.trim();
    if target_role.is_empty() {
        return Err(AppError::InvalidInput("target_role is required".to_string()));
    }

    let user = find_user(pool, user_id).await?;
    let timeframe_months = params.timeframe_months.unwrap_or(DEFAULT_TIMEFRAME_MONTHS);
    let learning_hours = params
        .learning_hours_per_week
        .unwrap_or(DEFAULT_LEARNING_HOURS);
    let timeframe_column = positive_i32(timeframe_months, "timeframe_months")?;
    let hours_column = positive_i32(learning_hours, "learning_hours_per_week")?;

    let current_skills: Vec<String> = if params.include_current_skills {
        user.skills.clone()
    } else {
        Vec::new()
    };
    let skills_text = current_skills.join(", ");

    let prompt = prompts::roadmap_prompt(
        target_role,
        (!skills_text.is_empty()).then_some(skills_text.as_str()),
        timeframe_months,
        learning_hours,
    );

    let raw_output = ai
        .invoke(params.provider, &prompt, ROADMAP_TEMPERATURE)
        .await?;
    let value = parse_json_response(&raw_output)?;

    let document: RoadmapDocument = serde_json::from_value(value.clone()).map_err(|e| {
        AppError::MalformedAiResponse(format!("Roadmap payload has unexpected shape: {e}"))
    })?;
    validate_document(&document)?;

    let project_suggestions = value
        .get("project_suggestions")
        .cloned()
        .unwrap_or_else(|| serde_json::json!([]));
    let job_application_timing = value
        .get("job_application_timing")
        .and_then(|v| v.as_str())
        .unwrap_or(DEFAULT_APPLICATION_TIMING);

    let roadmap: CareerRoadmap = sqlx::query_as(
        "INSERT INTO career_roadmaps (
            id, user_id, title, target_role, roadmap_data, ai_provider,
            timeframe_months, learning_hours_per_week, current_skills,
            project_suggestions, job_application_timing
        ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
        RETURNING *",
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(format!("Roadmap to {target_role}"))
    .bind(target_role)
    .bind(Json(&document))
    .bind(params.provider.as_str())
    .bind(timeframe_column)
    .bind(hours_column)
    .bind(&current_skills)
    .bind(Json(&project_suggestions))
    .bind(job_application_timing)
    .fetch_one(pool)
    .await?;

    tracing::info!(
        "Created roadmap {} for user {user_id} ({} phases)",
        roadmap.id,
        document.phases.len()
    );
    Ok(roadmap)
}

/// Fully replaces progress percentage, completed phases, and notes
/// (last-write-wins, no merge). The UI always submits the full state, not a
/// delta. Completed phase numbers are stored sorted and deduplicated.
pub async fn update_progress(
    pool: &PgPool,
    roadmap_id: Uuid,
    owner_id: Uuid,
    update: ProgressUpdate,
) -> Result<CareerRoadmap, AppError> {
    validate_progress(update.progress_percentage)?;

    let mut phases = update.completed_phases;
    phases.sort_unstable();
    phases.dedup();

    let updated: Option<CareerRoadmap> = sqlx::query_as(
        "UPDATE career_roadmaps
         SET progress_percentage = $3,
             completed_phases = $4,
             notes = $5,
             updated_at = CURRENT_TIMESTAMP
         WHERE id = $1 AND user_id = $2
         RETURNING *",
    )
    .bind(roadmap_id)
    .bind(owner_id)
    .bind(update.progress_percentage)
    .bind(&phases)
    .bind(&update.notes)
    .fetch_optional(pool)
    .await?;

    require_owned(updated, roadmap_id)
}

/// Hard delete, no tombstone. `NotFound` when the roadmap does not exist or
/// is owned by someone else.
pub async fn delete_roadmap(
    pool: &PgPool,
    roadmap_id: Uuid,
    owner_id: Uuid,
) -> Result<(), AppError> {
    let result = sqlx::query("DELETE FROM career_roadmaps WHERE id = $1 AND user_id = $2")
        .bind(roadmap_id)
        .bind(owner_id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound(format!("Roadmap {roadmap_id} not found")));
    }
    Ok(())
}

/// All roadmaps owned by the user, newest first.
pub async fn list_roadmaps(pool: &PgPool, owner_id: Uuid) -> Result<Vec<CareerRoadmap>, AppError> {
    let roadmaps = sqlx::query_as(
        "SELECT * FROM career_roadmaps WHERE user_id = $1 ORDER BY created_at DESC",
    )
    .bind(owner_id)
    .fetch_all(pool)
    .await?;
    Ok(roadmaps)
}

pub async fn get_roadmap(
    pool: &PgPool,
    roadmap_id: Uuid,
    owner_id: Uuid,
) -> Result<CareerRoadmap, AppError> {
    let roadmap: Option<CareerRoadmap> =
        sqlx::query_as("SELECT * FROM career_roadmaps WHERE id = $1 AND user_id = $2")
            .bind(roadmap_id)
            .bind(owner_id)
            .fetch_optional(pool)
            .await?;

    require_owned(roadmap, roadmap_id)
}

/// Maps an owner-scoped lookup miss to `NotFound`. The queries above match on
/// `id AND user_id`, so a roadmap owned by another user takes this path too
/// and is reported exactly like a missing one.
fn require_owned<T>(row: Option<T>, roadmap_id: Uuid) -> Result<T, AppError> {
    row.ok_or_else(|| AppError::NotFound(format!("Roadmap {roadmap_id} not found")))
}

/// Converts a client-supplied count to a positive database integer.
fn positive_i32(value: u32, field: &str) -> Result<i32, AppError> {
    if value == 0 {
        return Err(AppError::InvalidInput(format!("{field} must be positive")));
    }
    i32::try_from(value)
        .map_err(|_| AppError::InvalidInput(format!("{field} is too large")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owner_scoped_miss_is_not_found() {
        let id = Uuid::new_v4();
        let err = require_owned::<CareerRoadmap>(None, id).unwrap_err();
        match err {
            AppError::NotFound(msg) => assert!(msg.contains(&id.to_string())),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_owned_row_passes_through() {
        let id = Uuid::new_v4();
        assert_eq!(require_owned(Some(7), id).unwrap(), 7);
    }

    #[test]
    fn test_positive_i32_accepts_defaults() {
        assert_eq!(positive_i32(DEFAULT_TIMEFRAME_MONTHS, "timeframe_months").unwrap(), 6);
        assert_eq!(
            positive_i32(DEFAULT_LEARNING_HOURS, "learning_hours_per_week").unwrap(),
            10
        );
    }

    #[test]
    fn test_positive_i32_rejects_zero() {
        let err = positive_i32(0, "timeframe_months").unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }

    #[test]
    fn test_positive_i32_rejects_values_past_i32() {
        let err = positive_i32(u32::MAX, "learning_hours_per_week").unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }
}
