use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A job posting. Read-only input to the job matcher and gap analyzer.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JobPosting {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub required_skills: Vec<String>,
    pub experience_level: Option<String>,
    pub job_type: Option<String>,
    pub salary_min: Option<i32>,
    pub salary_max: Option<i32>,
    pub created_at: DateTime<Utc>,
}
