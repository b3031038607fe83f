use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

/// One stage of a career roadmap.
///
/// `topics` is required and must be non-empty; the optional fields are
/// enrichment the provider may or may not supply. The shape is validated once
/// at the storage boundary (see `roadmap::validation`), never at read time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoadmapPhase {
    pub phase: u32,
    pub title: String,
    #[serde(default)]
    pub topics: Vec<String>,
    pub duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technologies: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resources: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub learning_goals: Option<Vec<String>>,
}

/// The structured roadmap body returned by the AI provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoadmapDocument {
    #[serde(default)]
    pub phases: Vec<RoadmapPhase>,
    #[serde(default)]
    pub prerequisites: Vec<String>,
    pub estimated_duration: Option<String>,
    pub difficulty: Option<String>,
}

/// A persisted career roadmap, owned by exactly one user.
///
/// Lifecycle: created with zero progress, mutated only through the
/// progress-update operation, hard-deleted by the owner. 100% progress is
/// just a value; there is no separate completed state.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CareerRoadmap {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub target_role: String,
    pub roadmap_data: Json<RoadmapDocument>,
    pub ai_provider: String,
    pub timeframe_months: i32,
    pub learning_hours_per_week: i32,
    /// Snapshot of the user's raw skills at generation time.
    pub current_skills: Vec<String>,
    pub project_suggestions: Json<serde_json::Value>,
    pub job_application_timing: String,
    pub progress_percentage: i32,
    pub completed_phases: Vec<i32>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
