//! AI Extraction Orchestrator — sends raw CV text to a provider, repairs and
//! validates the returned JSON, and merges extracted skills into the user's
//! stored profile under at-most-once-per-skill-name semantics.

pub mod handlers;

use sqlx::PgPool;
use uuid::Uuid;

use crate::ai::parse::{parse_extracted, ExtractedData};
use crate::ai::{prompts, AiProvider, AiService};
use crate::errors::AppError;
use crate::matching::find_user;
use crate::matching::skills::canonical;
use crate::models::skill::ExtractedSkillRecord;
use crate::models::user::User;

const EXTRACTION_TEMPERATURE: f32 = 0.3;
const EXTRACTION_SOURCE: &str = "cv_extraction";

/// Runs extraction end to end.
///
/// Idempotent: re-running on the same CV text converges to the same stored
/// skill set and never accumulates duplicates. The audit log is the one
/// exception — it is append-only and records every run, including failed
/// parses, before the error surfaces.
pub async fn extract_and_merge(
    pool: &PgPool,
    ai: &AiService,
    user_id: Uuid,
    cv_text: &str,
    provider: AiProvider,
    update_profile: bool,
) -> Result<ExtractedData, AppError> {
    let user = find_user(pool, user_id).await?;

    let prompt = prompts::extract_skills_prompt(cv_text);
    let raw_output = ai.invoke(provider, &prompt, EXTRACTION_TEMPERATURE).await?;

    let extracted = match parse_extracted(&raw_output) {
        Ok(data) => {
            record_audit(pool, user_id, provider, cv_text, &raw_output, true).await?;
            data
        }
        Err(e) => {
            record_audit(pool, user_id, provider, cv_text, &raw_output, false).await?;
            return Err(e);
        }
    };

    tracing::info!(
        "Extracted {} technical skills for user {user_id} via {}",
        extracted.technical_skills.len(),
        provider.as_str()
    );

    if update_profile {
        merge_into_profile(pool, &user, &extracted, cv_text).await?;
    }

    Ok(extracted)
}

/// All extracted skill records for a user, for profile display and progress
/// tracking.
pub async fn list_extracted_skills(
    pool: &PgPool,
    user_id: Uuid,
) -> Result<Vec<ExtractedSkillRecord>, AppError> {
    find_user(pool, user_id).await?;
    let records = sqlx::query_as(
        "SELECT * FROM extracted_skills WHERE user_id = $1 ORDER BY skill_name",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;
    Ok(records)
}

/// Appends one audit row per extraction attempt. Never mutated, never
/// deduplicated.
async fn record_audit(
    pool: &PgPool,
    user_id: Uuid,
    provider: AiProvider,
    input_text: &str,
    raw_output: &str,
    parse_ok: bool,
) -> Result<(), AppError> {
    sqlx::query(
        "INSERT INTO ai_extraction_log (id, user_id, provider, input_text, raw_output, parse_ok)
         VALUES ($1, $2, $3, $4, $5, $6)",
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(provider.as_str())
    .bind(input_text)
    .bind(raw_output)
    .bind(parse_ok)
    .execute(pool)
    .await?;
    Ok(())
}

/// Upserts each extracted skill keyed by `(user_id, canonical(name))` and
/// extends the user's raw skill and target-role lists with entries not
/// already present (first-occurrence casing preserved).
async fn merge_into_profile(
    pool: &PgPool,
    user: &User,
    extracted: &ExtractedData,
    cv_text: &str,
) -> Result<(), AppError> {
    for skill in &extracted.technical_skills {
        let Some(canon) = canonical(skill.name()) else {
            continue;
        };

        // Single atomic upsert: re-extraction refreshes the row in place.
        sqlx::query(
            "INSERT INTO extracted_skills (id, user_id, skill_name, proficiency, category, source)
             VALUES ($1, $2, $3, $4, $5, $6)
             ON CONFLICT (user_id, skill_name) DO UPDATE
                 SET proficiency = EXCLUDED.proficiency,
                     category = EXCLUDED.category,
                     updated_at = CURRENT_TIMESTAMP",
        )
        .bind(Uuid::new_v4())
        .bind(user.id)
        .bind(&canon)
        .bind(skill.proficiency())
        .bind(skill.category())
        .bind(EXTRACTION_SOURCE)
        .execute(pool)
        .await?;
    }

    let merged_skills = merge_preserving_casing(
        &user.skills,
        extracted.technical_skills.iter().map(|s| s.name()),
    );
    let merged_roles = merge_preserving_casing(&user.target_roles, extracted.roles.iter());

    sqlx::query(
        "UPDATE users
         SET skills = $1,
             target_roles = $2,
             raw_cv_text = $3,
             updated_at = CURRENT_TIMESTAMP
         WHERE id = $4",
    )
    .bind(&merged_skills)
    .bind(&merged_roles)
    .bind(cv_text)
    .bind(user.id)
    .execute(pool)
    .await?;

    Ok(())
}

/// Appends incoming names whose canonical form is not already present.
/// Existing entries keep their position and casing; within the incoming
/// batch, the first casing of each canonical name wins.
pub(crate) fn merge_preserving_casing<I, S>(existing: &[String], incoming: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut merged: Vec<String> = existing.to_vec();
    let mut seen: std::collections::BTreeSet<String> = existing
        .iter()
        .filter_map(|s| canonical(s))
        .collect();

    for name in incoming {
        let Some(canon) = canonical(name.as_ref()) else {
            continue;
        };
        if seen.insert(canon) {
            merged.push(name.as_ref().trim().to_string());
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_merge_appends_new_skills() {
        let merged = merge_preserving_casing(&strings(&["Rust"]), ["Go", "SQL"].iter());
        assert_eq!(merged, strings(&["Rust", "Go", "SQL"]));
    }

    #[test]
    fn test_merge_is_case_insensitive() {
        let merged = merge_preserving_casing(&strings(&["JavaScript"]), ["javascript"].iter());
        assert_eq!(merged, strings(&["JavaScript"]));
    }

    #[test]
    fn test_merge_preserves_first_occurrence_casing() {
        let merged = merge_preserving_casing(&strings(&[]), ["PostgreSQL", "postgresql"].iter());
        assert_eq!(merged, strings(&["PostgreSQL"]));
    }

    #[test]
    fn test_merge_preserves_insertion_order() {
        let merged = merge_preserving_casing(&strings(&["b", "a"]), ["c"].iter());
        assert_eq!(merged, strings(&["b", "a", "c"]));
    }

    #[test]
    fn test_merge_drops_blank_names() {
        let merged = merge_preserving_casing(&strings(&["Rust"]), ["", "   "].iter());
        assert_eq!(merged, strings(&["Rust"]));
    }

    #[test]
    fn test_merge_twice_is_idempotent() {
        let once = merge_preserving_casing(&strings(&["Rust"]), ["Go", " go "].iter());
        let twice = merge_preserving_casing(&once, ["Go", "go"].iter());
        assert_eq!(once, twice);
        assert_eq!(twice, strings(&["Rust", "Go"]));
    }
}
