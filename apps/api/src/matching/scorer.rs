//! Match Scorer — pure overlap scoring between a candidate skill set and a
//! requirement skill set. No I/O, no side effects.

use serde::Serialize;

use crate::matching::skills::SkillSet;

/// Ephemeral scored comparison. Produced fresh on every call, never cached.
///
/// Invariants: `score ∈ [0, 100]`, `matched ∪ missing = required`,
/// `matched ∩ missing = ∅`.
#[derive(Debug, Clone, Serialize)]
pub struct MatchResult {
    pub score: f64,
    pub matched: SkillSet,
    pub missing: SkillSet,
}

/// Scores a candidate against a requirement set.
///
/// An empty requirement set scores 0 with empty matched/missing — a posting
/// with no skill data cannot be meaningfully satisfied, and scoring it 100
/// would reward missing data.
pub fn score(candidate: &SkillSet, required: &SkillSet) -> MatchResult {
    if required.is_empty() {
        return MatchResult {
            score: 0.0,
            matched: SkillSet::new(),
            missing: SkillSet::new(),
        };
    }

    let matched = candidate.intersection(required);
    let missing = required.difference(candidate);
    let score = round_one_decimal(100.0 * matched.len() as f64 / required.len() as f64);

    MatchResult {
        score,
        matched,
        missing,
    }
}

/// Rounds half-up to one decimal place. `f64::round` is half-away-from-zero,
/// which coincides with half-up on the non-negative scores used here.
pub fn round_one_decimal(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_required_scores_zero() {
        let candidate = SkillSet::from_raw(["rust"]);
        let result = score(&candidate, &SkillSet::new());
        assert_eq!(result.score, 0.0);
        assert!(result.matched.is_empty());
        assert!(result.missing.is_empty());
    }

    #[test]
    fn test_empty_candidate_scores_zero() {
        let required = SkillSet::from_raw(["rust", "sql"]);
        let result = score(&SkillSet::new(), &required);
        assert_eq!(result.score, 0.0);
        assert!(result.matched.is_empty());
        assert_eq!(result.missing, required);
    }

    #[test]
    fn test_perfect_self_match_scores_100() {
        let s = SkillSet::from_raw(["rust", "sql", "docker"]);
        let result = score(&s, &s);
        assert_eq!(result.score, 100.0);
        assert!(result.missing.is_empty());
        assert_eq!(result.matched, s);
    }

    #[test]
    fn test_two_of_three_rounds_to_66_7() {
        // Candidate {"javascript","react"} vs required ["JavaScript","React","CSS"].
        let candidate = SkillSet::from_raw(["javascript", "react"]);
        let required = SkillSet::from_raw(["JavaScript", "React", "CSS"]);

        let result = score(&candidate, &required);
        assert_eq!(result.score, 66.7);
        assert_eq!(result.matched, SkillSet::from_raw(["javascript", "react"]));
        assert_eq!(result.missing, SkillSet::from_raw(["css"]));
    }

    #[test]
    fn test_one_of_three_rounds_to_33_3() {
        let candidate = SkillSet::from_raw(["node.js"]);
        let required = SkillSet::from_raw(["node.js", "postgresql", "docker"]);
        assert_eq!(score(&candidate, &required).score, 33.3);
    }

    #[test]
    fn test_matched_and_missing_partition_required() {
        let candidate = SkillSet::from_raw(["a", "b", "x"]);
        let required = SkillSet::from_raw(["a", "b", "c", "d"]);
        let result = score(&candidate, &required);

        let mut reunion = result.matched.clone();
        reunion.union_with(&result.missing);
        assert_eq!(reunion, required);
        assert!(result.matched.intersection(&result.missing).is_empty());
    }

    #[test]
    fn test_score_bounded() {
        let candidate = SkillSet::from_raw(["a", "b", "c", "d", "e"]);
        let required = SkillSet::from_raw(["a"]);
        let result = score(&candidate, &required);
        assert!(result.score >= 0.0 && result.score <= 100.0);
        assert_eq!(result.score, 100.0);
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_one_decimal(100.0 * 2.0 / 3.0), 66.7);
        assert_eq!(round_one_decimal(100.0 / 3.0), 33.3);
        assert_eq!(round_one_decimal(50.0), 50.0);
    }
}
