//! Parsing and repair of provider responses.
//!
//! Policy: strict JSON parse first; on failure, locate the first balanced
//! `{...}` substring (providers sometimes wrap JSON in prose) and parse that.
//! If both fail the operation fails with `MalformedAiResponse` — never a
//! silently fabricated empty result, which would corrupt the user's profile.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Structured data extracted from a CV.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractedData {
    #[serde(default)]
    pub technical_skills: Vec<TechnicalSkill>,
    #[serde(default)]
    pub soft_skills: Vec<String>,
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default)]
    pub tools: Vec<String>,
    #[serde(default)]
    pub certifications: Vec<String>,
}

/// A technical skill as returned by a provider. Providers return either
/// `{"name": ..., "proficiency": ..., "category": ...}` objects or bare
/// strings; both shapes are accepted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TechnicalSkill {
    Detailed {
        name: String,
        #[serde(default)]
        proficiency: Option<String>,
        #[serde(default)]
        category: Option<String>,
    },
    Name(String),
}

impl TechnicalSkill {
    pub fn name(&self) -> &str {
        match self {
            TechnicalSkill::Detailed { name, .. } => name,
            TechnicalSkill::Name(name) => name,
        }
    }

    pub fn proficiency(&self) -> Option<&str> {
        match self {
            TechnicalSkill::Detailed { proficiency, .. } => proficiency.as_deref(),
            TechnicalSkill::Name(_) => None,
        }
    }

    pub fn category(&self) -> Option<&str> {
        match self {
            TechnicalSkill::Detailed { category, .. } => category.as_deref(),
            TechnicalSkill::Name(_) => None,
        }
    }
}

/// Parses a provider text response into a JSON value, applying fence
/// stripping and balanced-brace recovery.
pub fn parse_json_response(text: &str) -> Result<serde_json::Value, AppError> {
    let stripped = strip_json_fences(text);

    if let Ok(value) = serde_json::from_str(stripped) {
        return Ok(value);
    }

    if let Some(embedded) = first_balanced_object(stripped) {
        if let Ok(value) = serde_json::from_str(embedded) {
            return Ok(value);
        }
    }

    Err(AppError::MalformedAiResponse(format!(
        "Provider response is not valid JSON: {}",
        truncate(text, 200)
    )))
}

/// Parses a provider response into typed extraction data.
pub fn parse_extracted(text: &str) -> Result<ExtractedData, AppError> {
    let value = parse_json_response(text)?;
    serde_json::from_value(value).map_err(|e| {
        AppError::MalformedAiResponse(format!("Extraction payload has unexpected shape: {e}"))
    })
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}

/// Returns the first balanced `{...}` substring, tracking string literals and
/// escapes so braces inside strings don't miscount.
fn first_balanced_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let bytes = text.as_bytes();

    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, &b) in bytes[start..].iter().enumerate() {
        if escaped {
            escaped = false;
            continue;
        }
        match b {
            b'\\' if in_string => escaped = true,
            b'"' => in_string = !in_string,
            b'{' if !in_string => depth += 1,
            b'}' if !in_string => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..start + offset + 1]);
                }
            }
            _ => {}
        }
    }
    None
}

fn truncate(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strict_parse() {
        let value = parse_json_response(r#"{"technical_skills": []}"#).unwrap();
        assert!(value.get("technical_skills").is_some());
    }

    #[test]
    fn test_strip_json_fences_with_tag() {
        let input = "```json\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_without_tag() {
        let input = "```\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_embedded_json_in_prose() {
        let input = r#"Sure! Here's the JSON: {"technical_skills":[{"name":"Go","proficiency":"intermediate"}]}"#;
        let data = parse_extracted(input).unwrap();
        assert_eq!(data.technical_skills.len(), 1);
        assert_eq!(data.technical_skills[0].name(), "Go");
        assert_eq!(data.technical_skills[0].proficiency(), Some("intermediate"));
    }

    #[test]
    fn test_braces_inside_strings_do_not_miscount() {
        let input = r#"Result: {"note": "uses {curly} braces", "roles": ["Dev"]} done"#;
        let value = parse_json_response(input).unwrap();
        assert_eq!(value["note"], "uses {curly} braces");
    }

    #[test]
    fn test_unparseable_text_is_an_error() {
        let err = parse_json_response("no json here at all").unwrap_err();
        assert!(matches!(err, AppError::MalformedAiResponse(_)));
    }

    #[test]
    fn test_unbalanced_braces_are_an_error() {
        let err = parse_json_response(r#"prefix {"open": true"#).unwrap_err();
        assert!(matches!(err, AppError::MalformedAiResponse(_)));
    }

    #[test]
    fn test_plain_string_skills_accepted() {
        let input = r#"{"technical_skills": ["Rust", "SQL"], "soft_skills": ["communication"]}"#;
        let data = parse_extracted(input).unwrap();
        assert_eq!(data.technical_skills.len(), 2);
        assert_eq!(data.technical_skills[0].name(), "Rust");
        assert_eq!(data.technical_skills[0].proficiency(), None);
        assert_eq!(data.soft_skills, vec!["communication"]);
    }

    #[test]
    fn test_missing_sections_default_to_empty() {
        let data = parse_extracted(r#"{"technical_skills": [{"name": "Go"}]}"#).unwrap();
        assert!(data.soft_skills.is_empty());
        assert!(data.roles.is_empty());
        assert!(data.certifications.is_empty());
    }
}
