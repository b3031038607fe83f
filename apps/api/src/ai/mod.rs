//! AI provider abstraction — the single point of entry for all LLM calls.
//!
//! ARCHITECTURAL RULE: no other module may call a provider API directly.
//! Supported providers: Google Gemini and Groq, selected per request.
//!
//! Provider and storage calls are the only suspension points in the core;
//! both carry explicit timeouts and propagate failure instead of hanging.
//! Failures are never retried here — retry is the caller's decision.

pub mod gemini;
pub mod groq;
pub mod parse;
pub mod prompts;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::ai::gemini::GeminiClient;
use crate::ai::groq::GroqClient;
use crate::errors::AppError;

/// Which provider handles a request. Defaults to Gemini.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AiProvider {
    #[default]
    Gemini,
    Groq,
}

impl AiProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            AiProvider::Gemini => "gemini",
            AiProvider::Groq => "groq",
        }
    }
}

/// Trait implemented by each provider client.
#[async_trait]
pub trait AiClient: Send + Sync {
    /// Sends a prompt expecting a JSON text response.
    async fn generate(&self, prompt: &str, temperature: f32) -> Result<String, AppError>;
}

/// AI service over the configured providers. A provider without an API key
/// is simply absent; invoking it reports the dependency as unavailable.
#[derive(Clone)]
pub struct AiService {
    gemini: Option<GeminiClient>,
    groq: Option<GroqClient>,
}

impl AiService {
    pub fn new(gemini_api_key: Option<String>, groq_api_key: Option<String>) -> Self {
        let gemini = gemini_api_key.map(GeminiClient::new);
        let groq = groq_api_key.map(GroqClient::new);

        if gemini.is_none() && groq.is_none() {
            warn!("No AI API keys configured. AI features will not be available.");
        }

        Self { gemini, groq }
    }

    pub fn gemini_enabled(&self) -> bool {
        self.gemini.is_some()
    }

    pub fn groq_enabled(&self) -> bool {
        self.groq.is_some()
    }

    /// Invokes the selected provider with the given prompt.
    pub async fn invoke(
        &self,
        provider: AiProvider,
        prompt: &str,
        temperature: f32,
    ) -> Result<String, AppError> {
        match provider {
            AiProvider::Gemini => {
                let client = self.gemini.as_ref().ok_or_else(|| {
                    AppError::UpstreamUnavailable("Gemini API key not configured".to_string())
                })?;
                client.generate(prompt, temperature).await
            }
            AiProvider::Groq => {
                let client = self.groq.as_ref().ok_or_else(|| {
                    AppError::UpstreamUnavailable("Groq API key not configured".to_string())
                })?;
                client.generate(prompt, temperature).await
            }
        }
    }
}
