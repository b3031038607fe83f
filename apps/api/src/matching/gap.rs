//! Skill Gap Analyzer — aggregates required skills across one or many target
//! postings and computes the user's deficit.
//!
//! Structurally distinct from job matching: this answers "what do I need for
//! this *role* broadly", not "how well do I fit this *specific posting*".

use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::matching::scorer::score;
use crate::matching::skills::SkillSet;
use crate::models::job::JobPosting;

/// What the gap analysis aggregates over: all postings loosely matching a
/// role name, or an explicit posting list.
#[derive(Debug, Clone)]
pub enum GapTarget {
    Role(String),
    Jobs(Vec<Uuid>),
}

#[derive(Debug, Serialize)]
pub struct SkillGapReport {
    pub required_skills: SkillSet,
    pub matching_skills: SkillSet,
    pub skill_gaps: SkillSet,
    pub match_percentage: f64,
}

/// Union of the required-skill sets across the given postings.
pub fn aggregate_required(jobs: &[JobPosting]) -> SkillSet {
    let mut required = SkillSet::new();
    for job in jobs {
        required.union_with(&SkillSet::from_raw(&job.required_skills));
    }
    required
}

/// Builds the gap report. Percentage uses the same overlap-over-required
/// formula as the match scorer (0 when nothing is required).
pub fn build_report(candidate: &SkillSet, required: SkillSet) -> SkillGapReport {
    let result = score(candidate, &required);
    SkillGapReport {
        required_skills: required,
        matching_skills: result.matched,
        skill_gaps: result.missing,
        match_percentage: result.score,
    }
}

pub async fn analyze_skill_gap(
    pool: &PgPool,
    user_id: Uuid,
    target: &GapTarget,
) -> Result<SkillGapReport, AppError> {
    let candidate = super::candidate_skills(pool, user_id).await?;

    let jobs: Vec<JobPosting> = match target {
        // Loose case-insensitive title match; the storage query scopes the
        // set and the core trusts it.
        GapTarget::Role(role) => {
            sqlx::query_as("SELECT * FROM job_postings WHERE title ILIKE '%' || $1 || '%'")
                .bind(role)
                .fetch_all(pool)
                .await?
        }
        GapTarget::Jobs(ids) => {
            sqlx::query_as("SELECT * FROM job_postings WHERE id = ANY($1)")
                .bind(ids)
                .fetch_all(pool)
                .await?
        }
    };

    Ok(build_report(&candidate, aggregate_required(&jobs)))
}
