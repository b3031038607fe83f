use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A platform user.
///
/// `skills` and `target_roles` are raw, insertion-ordered lists kept in the
/// user's original casing for display. All matching goes through the
/// canonical [`SkillSet`](crate::matching::skills::SkillSet), recomputed per
/// request.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub full_name: Option<String>,
    pub skills: Vec<String>,
    pub target_roles: Vec<String>,
    pub experience_level: Option<String>,
    #[serde(skip_serializing, default)]
    pub raw_cv_text: Option<String>,
    pub profile_completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
