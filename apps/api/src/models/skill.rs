use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// One extracted skill per (user, canonical skill name).
///
/// Unique on `(user_id, skill_name)`: re-extraction of the same skill updates
/// the existing row instead of duplicating it.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ExtractedSkillRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    /// Canonical (trimmed, lower-cased) skill name.
    pub skill_name: String,
    pub proficiency: Option<String>,
    pub category: Option<String>,
    pub source: String,
    pub verified: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
