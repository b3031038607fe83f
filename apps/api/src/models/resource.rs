use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A learning resource. Read-only input to the resource recommender.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct LearningResource {
    pub id: Uuid,
    pub title: String,
    pub url: Option<String>,
    pub related_skills: Vec<String>,
    pub is_free: bool,
    pub created_at: DateTime<Utc>,
}
