#![allow(dead_code)]

//! Skill canonicalization and set algebra.
//!
//! Every comparison in the matching engine goes through canonical skill names:
//! trimmed, lower-cased, empty strings dropped. Matching is case-insensitive
//! exact-string only — no fuzzy matching and no synonym table ("JS" and
//! "JavaScript" are distinct skills). Known limitation, kept so the contract
//! stays auditable.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Canonicalizes a raw skill token. Returns `None` for strings that
/// canonicalize to empty — noisy free-text input is expected upstream and
/// blanks are dropped silently rather than treated as errors.
pub fn canonical(raw: &str) -> Option<String> {
    let s = raw.trim().to_lowercase();
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

/// A set of canonical skill names.
///
/// Backed by a `BTreeSet` so iteration (and serialized output) is
/// deterministic. Never contains the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkillSet(BTreeSet<String>);

impl SkillSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from raw tokens. Duplicates collapse; blanks drop.
    pub fn from_raw<I, S>(raw: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(
            raw.into_iter()
                .filter_map(|s| canonical(s.as_ref()))
                .collect(),
        )
    }

    pub fn contains(&self, canonical_name: &str) -> bool {
        self.0.contains(canonical_name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn intersection(&self, other: &SkillSet) -> SkillSet {
        Self(self.0.intersection(&other.0).cloned().collect())
    }

    pub fn difference(&self, other: &SkillSet) -> SkillSet {
        Self(self.0.difference(&other.0).cloned().collect())
    }

    pub fn union_with(&mut self, other: &SkillSet) {
        self.0.extend(other.0.iter().cloned());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_trims_and_lowercases() {
        assert_eq!(canonical("  JavaScript "), Some("javascript".to_string()));
    }

    #[test]
    fn test_canonical_drops_empty() {
        assert_eq!(canonical(""), None);
        assert_eq!(canonical("   "), None);
    }

    #[test]
    fn test_from_raw_collapses_duplicates() {
        let set = SkillSet::from_raw(["React", " react ", "REACT", "Rust"]);
        assert_eq!(set.len(), 2);
        assert!(set.contains("react"));
        assert!(set.contains("rust"));
    }

    #[test]
    fn test_from_raw_drops_blanks() {
        let set = SkillSet::from_raw(["", "  ", "Go"]);
        assert_eq!(set.len(), 1);
        assert!(set.contains("go"));
    }

    #[test]
    fn test_set_algebra() {
        let a = SkillSet::from_raw(["rust", "sql", "docker"]);
        let b = SkillSet::from_raw(["sql", "docker", "kubernetes"]);

        let inter = a.intersection(&b);
        assert_eq!(inter.len(), 2);
        assert!(inter.contains("sql"));
        assert!(inter.contains("docker"));

        let diff = b.difference(&a);
        assert_eq!(diff.len(), 1);
        assert!(diff.contains("kubernetes"));

        let mut union = a.clone();
        union.union_with(&b);
        assert_eq!(union.len(), 4);
    }

    #[test]
    fn test_deterministic_iteration() {
        let set = SkillSet::from_raw(["zig", "ada", "c"]);
        let names: Vec<&str> = set.iter().collect();
        assert_eq!(names, vec!["ada", "c", "zig"]);
    }
}
