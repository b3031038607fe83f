//! Google Gemini client.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::ai::AiClient;
use crate::errors::AppError;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
/// The model used for all Gemini calls. Intentionally hardcoded to prevent
/// accidental drift.
pub const MODEL: &str = "gemini-2.0-flash";
const REQUEST_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Serialize)]
struct GeminiRequest<'a> {
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    response_mime_type: &'static str,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: String,
}

#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
}

impl GeminiClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
        }
    }
}

#[async_trait]
impl AiClient for GeminiClient {
    async fn generate(&self, prompt: &str, temperature: f32) -> Result<String, AppError> {
        let request_body = GeminiRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config: GenerationConfig {
                temperature,
                response_mime_type: "application/json",
            },
        };

        let url = format!(
            "{GEMINI_API_BASE}/models/{MODEL}:generateContent?key={}",
            self.api_key
        );

        let response = self
            .client
            .post(&url)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| AppError::UpstreamUnavailable(format!("Gemini request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::UpstreamUnavailable(format!(
                "Gemini API returned {status}: {body}"
            )));
        }

        let gemini_response: GeminiResponse = response.json().await.map_err(|e| {
            AppError::MalformedAiResponse(format!("Gemini response envelope: {e}"))
        })?;

        let text = gemini_response
            .candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.clone())
            .ok_or_else(|| {
                AppError::MalformedAiResponse("Gemini returned no candidates".to_string())
            })?;

        debug!("Gemini call succeeded ({} chars)", text.len());
        Ok(text)
    }
}
