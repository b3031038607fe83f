pub mod gap;
pub mod handlers;
pub mod jobs;
pub mod resources;
pub mod scorer;
pub mod skills;

use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::matching::skills::SkillSet;
use crate::models::user::User;

/// Loads a user by id, mapping absence to `NotFound`.
pub async fn find_user(pool: &PgPool, user_id: Uuid) -> Result<User, AppError> {
    let user: Option<User> = sqlx::query_as("SELECT * FROM users WHERE id = $1")
        .bind(user_id)
        .fetch_optional(pool)
        .await?;
    user.ok_or_else(|| AppError::NotFound(format!("User {user_id} not found")))
}

/// Loads the user's canonical skill set, recomputed from the stored raw list
/// on every request. No cross-request caching by design.
pub async fn candidate_skills(pool: &PgPool, user_id: Uuid) -> Result<SkillSet, AppError> {
    let user = find_user(pool, user_id).await?;
    Ok(SkillSet::from_raw(&user.skills))
}
