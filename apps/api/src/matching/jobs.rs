//! Job Matcher — ranks job postings for a user with a matched/missing skill
//! breakdown per posting.

use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::matching::scorer::score;
use crate::matching::skills::SkillSet;
use crate::models::job::JobPosting;

pub const DEFAULT_LIMIT: usize = 10;

/// Optional filters, applied at the storage layer. The ranking core never
/// re-filters.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct JobFilters {
    pub experience_level: Option<String>,
    pub job_type: Option<String>,
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct JobMatch {
    pub job: JobPosting,
    pub score: f64,
    pub matched: SkillSet,
    pub missing: SkillSet,
}

/// Ranks postings for a candidate: descending score, ties broken by ascending
/// job id. Truncation happens strictly after sorting so a low-scoring posting
/// can never displace a higher-scoring one.
pub fn rank_jobs(candidate: &SkillSet, jobs: Vec<JobPosting>, limit: usize) -> Vec<JobMatch> {
    let mut ranked: Vec<JobMatch> = jobs
        .into_iter()
        .map(|job| {
            let required = SkillSet::from_raw(&job.required_skills);
            let result = score(candidate, &required);
            JobMatch {
                score: result.score,
                matched: result.matched,
                missing: result.missing,
                job,
            }
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| a.job.id.cmp(&b.job.id))
    });
    ranked.truncate(limit);
    ranked
}

/// Recommends jobs for a user. An empty result (no postings match the
/// filters) is not an error.
pub async fn recommend_jobs(
    pool: &PgPool,
    user_id: Uuid,
    filters: &JobFilters,
) -> Result<Vec<JobMatch>, AppError> {
    let candidate = super::candidate_skills(pool, user_id).await?;

    let postings: Vec<JobPosting> = sqlx::query_as(
        "SELECT * FROM job_postings
         WHERE ($1::text IS NULL OR experience_level = $1)
           AND ($2::text IS NULL OR job_type = $2)
         ORDER BY id",
    )
    .bind(&filters.experience_level)
    .bind(&filters.job_type)
    .fetch_all(pool)
    .await?;

    Ok(rank_jobs(
        &candidate,
        postings,
        filters.limit.unwrap_or(DEFAULT_LIMIT),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn make_job(id_byte: u8, required_skills: Vec<&str>) -> JobPosting {
        JobPosting {
            id: Uuid::from_bytes([id_byte; 16]),
            title: "Backend Engineer".to_string(),
            company: "Acme".to_string(),
            required_skills: required_skills.into_iter().map(String::from).collect(),
            experience_level: Some("mid".to_string()),
            job_type: Some("full_time".to_string()),
            salary_min: None,
            salary_max: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_sorted_descending_by_score() {
        let candidate = SkillSet::from_raw(["rust", "sql"]);
        let jobs = vec![
            make_job(1, vec!["rust", "sql", "docker", "aws"]), // 50.0
            make_job(2, vec!["rust", "sql"]),                  // 100.0
            make_job(3, vec!["go"]),                           // 0.0
        ];

        let ranked = rank_jobs(&candidate, jobs, DEFAULT_LIMIT);
        let scores: Vec<f64> = ranked.iter().map(|m| m.score).collect();
        assert_eq!(scores, vec![100.0, 50.0, 0.0]);
        assert!(scores.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_ties_break_by_ascending_id() {
        let candidate = SkillSet::from_raw(["rust"]);
        let jobs = vec![
            make_job(9, vec!["rust", "sql"]),
            make_job(2, vec!["rust", "go"]),
        ];

        let ranked = rank_jobs(&candidate, jobs, DEFAULT_LIMIT);
        assert_eq!(ranked[0].score, ranked[1].score);
        assert_eq!(ranked[0].job.id, Uuid::from_bytes([2; 16]));
        assert_eq!(ranked[1].job.id, Uuid::from_bytes([9; 16]));
    }

    #[test]
    fn test_truncation_happens_after_sorting() {
        let candidate = SkillSet::from_raw(["rust"]);
        // The highest-scoring job comes last in storage order; a pre-sort
        // truncation would drop it.
        let jobs = vec![
            make_job(1, vec!["go"]),
            make_job(2, vec!["python"]),
            make_job(3, vec!["rust"]),
        ];

        let ranked = rank_jobs(&candidate, jobs, 1);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].score, 100.0);
    }

    #[test]
    fn test_zero_skill_user_gets_all_jobs_in_id_order() {
        let jobs = vec![
            make_job(3, vec!["rust"]),
            make_job(1, vec!["go"]),
            make_job(2, vec!["sql"]),
        ];

        let ranked = rank_jobs(&SkillSet::new(), jobs, DEFAULT_LIMIT);
        assert_eq!(ranked.len(), 3);
        assert!(ranked.iter().all(|m| m.score == 0.0));
        let ids: Vec<Uuid> = ranked.iter().map(|m| m.job.id).collect();
        assert_eq!(
            ids,
            vec![
                Uuid::from_bytes([1; 16]),
                Uuid::from_bytes([2; 16]),
                Uuid::from_bytes([3; 16])
            ]
        );
    }

    #[test]
    fn test_length_never_exceeds_limit() {
        let candidate = SkillSet::from_raw(["rust"]);
        let jobs = (0..20u8).map(|i| make_job(i, vec!["rust"])).collect();
        let ranked = rank_jobs(&candidate, jobs, DEFAULT_LIMIT);
        assert_eq!(ranked.len(), DEFAULT_LIMIT);
    }

    #[test]
    fn test_matched_missing_breakdown() {
        let candidate = SkillSet::from_raw(["JavaScript", "React"]);
        let jobs = vec![make_job(1, vec!["JavaScript", "React", "CSS"])];

        let ranked = rank_jobs(&candidate, jobs, DEFAULT_LIMIT);
        assert_eq!(ranked[0].score, 66.7);
        assert_eq!(
            ranked[0].matched,
            SkillSet::from_raw(["javascript", "react"])
        );
        assert_eq!(ranked[0].missing, SkillSet::from_raw(["css"]));
    }

    #[test]
    fn test_empty_posting_list_is_empty_result() {
        let ranked = rank_jobs(&SkillSet::from_raw(["rust"]), vec![], DEFAULT_LIMIT);
        assert!(ranked.is_empty());
    }
}
