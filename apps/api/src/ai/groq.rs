//! Groq client (OpenAI-compatible chat completions).

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::ai::AiClient;
use crate::errors::AppError;

const GROQ_API_BASE: &str = "https://api.groq.com/openai/v1";
/// The model used for all Groq calls. Intentionally hardcoded to prevent
/// accidental drift.
pub const MODEL: &str = "llama-3.3-70b-versatile";
const REQUEST_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Serialize)]
struct GroqRequest<'a> {
    model: &'static str,
    messages: Vec<Message<'a>>,
    temperature: f32,
    response_format: ResponseFormat,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format_type: &'static str,
}

#[derive(Debug, Deserialize)]
struct GroqResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: String,
}

#[derive(Clone)]
pub struct GroqClient {
    client: Client,
    api_key: String,
}

impl GroqClient {
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
impl AiClient for GroqClient {
    async fn generate(&self, prompt: &str, temperature: f32) -> Result<String, AppError> {
        let request_body = GroqRequest {
            model: MODEL,
            messages: vec![Message {
                role: "user",
                content: prompt,
            }],
            temperature,
            response_format: ResponseFormat {
                format_type: "json_object",
            },
        };

        let response = self
            .client
            .post(format!("{GROQ_API_BASE}/chat/completions"))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request_body)
            .send()
            .await
            .map_err(|e| AppError::UpstreamUnavailable(format!("Groq request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::UpstreamUnavailable(format!(
                "Groq API returned {status}: {body}"
            )));
        }

        let groq_response: GroqResponse = response
            .json()
            .await
            .map_err(|e| AppError::MalformedAiResponse(format!("Groq response envelope: {e}")))?;

        let text = groq_response
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| {
                AppError::MalformedAiResponse("Groq returned no choices".to_string())
            })?;

        debug!("Groq call succeeded ({} chars)", text.len());
        Ok(text)
    }
}
