//! Structural validation of AI-generated roadmaps, applied once at the
//! storage boundary. Downstream rendering assumes the shape and never
//! re-checks it.

use crate::errors::AppError;
use crate::models::roadmap::RoadmapDocument;

/// Validation gate for a generated roadmap: at least one phase, and every
/// phase must carry a non-empty topics list. Invalid output is rejected,
/// never persisted.
pub fn validate_document(doc: &RoadmapDocument) -> Result<(), AppError> {
    if doc.phases.is_empty() {
        return Err(AppError::MalformedAiResponse(
            "Roadmap has no phases".to_string(),
        ));
    }

    for phase in &doc.phases {
        if phase.topics.iter().all(|t| t.trim().is_empty()) {
            return Err(AppError::MalformedAiResponse(format!(
                "Roadmap phase {} ('{}') has no topics",
                phase.phase, phase.title
            )));
        }
    }

    Ok(())
}

/// Range check for progress updates.
pub fn validate_progress(percentage: i32) -> Result<(), AppError> {
    if !(0..=100).contains(&percentage) {
        return Err(AppError::InvalidInput(format!(
            "progress_percentage must be between 0 and 100, got {percentage}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::roadmap::RoadmapPhase;

    fn make_phase(phase: u32, topics: Vec<&str>) -> RoadmapPhase {
        RoadmapPhase {
            phase,
            title: format!("Phase {phase}"),
            topics: topics.into_iter().map(String::from).collect(),
            duration: Some("4 weeks".to_string()),
            technologies: None,
            resources: None,
            learning_goals: None,
        }
    }

    fn make_doc(phases: Vec<RoadmapPhase>) -> RoadmapDocument {
        RoadmapDocument {
            phases,
            prerequisites: vec![],
            estimated_duration: None,
            difficulty: None,
        }
    }

    #[test]
    fn test_valid_document_passes() {
        let doc = make_doc(vec![make_phase(1, vec!["Ownership", "Borrowing"])]);
        assert!(validate_document(&doc).is_ok());
    }

    #[test]
    fn test_empty_phase_list_rejected() {
        let err = validate_document(&make_doc(vec![])).unwrap_err();
        assert!(matches!(err, AppError::MalformedAiResponse(_)));
    }

    #[test]
    fn test_topicless_phase_rejected() {
        let doc = make_doc(vec![
            make_phase(1, vec!["Basics"]),
            make_phase(2, vec![]),
        ]);
        assert!(validate_document(&doc).is_err());
    }

    #[test]
    fn test_blank_topics_rejected() {
        let doc = make_doc(vec![make_phase(1, vec!["", "  "])]);
        assert!(validate_document(&doc).is_err());
    }

    #[test]
    fn test_progress_bounds() {
        assert!(validate_progress(0).is_ok());
        assert!(validate_progress(100).is_ok());
        assert!(matches!(
            validate_progress(-1),
            Err(AppError::InvalidInput(_))
        ));
        assert!(matches!(
            validate_progress(101),
            Err(AppError::InvalidInput(_))
        ));
    }
}
