//! Learning Resource Recommender — ranks resources by how many *new* skills
//! they would teach, not by overlap with what the user already knows.

use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::matching::scorer::round_one_decimal;
use crate::matching::skills::SkillSet;
use crate::models::resource::LearningResource;

/// Optional filters, applied at the storage layer.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ResourceFilters {
    pub free_only: Option<bool>,
}

#[derive(Debug, Serialize)]
pub struct ResourceMatch {
    pub resource: LearningResource,
    pub relevance: f64,
}

/// Relevance = 100 × |related − candidate| / |related|: the share of the
/// resource's skills the user does not already have. A fully-known resource
/// scores 0 (nothing new to teach); an empty related-skill list also scores 0
/// and sorts last.
pub fn relevance(candidate: &SkillSet, related: &SkillSet) -> f64 {
    if related.is_empty() {
        return 0.0;
    }
    let new_skills = related.difference(candidate);
    round_one_decimal(100.0 * new_skills.len() as f64 / related.len() as f64)
}

/// Ranks resources: descending relevance, ties broken by ascending id.
pub fn rank_resources(
    candidate: &SkillSet,
    resources: Vec<LearningResource>,
) -> Vec<ResourceMatch> {
    let mut ranked: Vec<ResourceMatch> = resources
        .into_iter()
        .map(|resource| {
            let related = SkillSet::from_raw(&resource.related_skills);
            ResourceMatch {
                relevance: relevance(candidate, &related),
                resource,
            }
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.relevance
            .total_cmp(&a.relevance)
            .then_with(|| a.resource.id.cmp(&b.resource.id))
    });
    ranked
}

pub async fn recommend_resources(
    pool: &PgPool,
    user_id: Uuid,
    filters: &ResourceFilters,
) -> Result<Vec<ResourceMatch>, AppError> {
    let candidate = super::candidate_skills(pool, user_id).await?;

    let resources: Vec<LearningResource> = sqlx::query_as(
        "SELECT * FROM learning_resources
         WHERE ($1::bool IS NULL OR is_free = $1)
         ORDER BY id",
    )
    .bind(filters.free_only)
    .fetch_all(pool)
    .await?;

    Ok(rank_resources(&candidate, resources))
}
