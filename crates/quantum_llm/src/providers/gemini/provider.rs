//! Gemini provider implementation.

use async_trait::async_trait;
use reqwest::Client;

use super::types::{to_gemini_request, GeminiConfig, GeminiErrorEnvelope, GeminiResponse};
use crate::error::{Error, Result};
use crate::prompt::Prompt;
use crate::provider::Provider;

#[derive(Debug)]
pub struct GeminiProvider {
    config: GeminiConfig,
    client: Client,
}

impl GeminiProvider {
    /// Environment variable for the API key.
    pub const API_KEY_ENV: &'static str = "GEMINI_API_KEY";

    /// Create a new Gemini provider. An empty key fails fast, before any
    /// network attempt.
    pub fn new(config: GeminiConfig) -> Result<Self> {
        if config.api_key.is_empty() {
            return Err(Error::MissingApiKey("gemini".to_string()));
        }
        Ok(Self {
            config,
            client: Client::new(),
        })
    }

    /// Create provider from environment.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(Self::API_KEY_ENV)
            .map_err(|_| Error::MissingApiKey("gemini".to_string()))?;
        Self::new(GeminiConfig::new(api_key))
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.base_url, self.config.model
        )
    }
}

#[async_trait]
impl Provider for GeminiProvider {
    fn provider_id(&self) -> &str {
        "gemini"
    }

    async fn list_models(&self) -> Result<Vec<String>> {
        // Known generateContent-capable models; no models endpoint is hit.
        Ok(vec![
            "gemini-2.0-flash".to_string(),
            "gemini-2.0-flash-lite".to_string(),
            "gemini-1.5-pro".to_string(),
            "gemini-1.5-flash".to_string(),
        ])
    }

    async fn generate(&self, prompt: &Prompt) -> Result<String> {
        let url = self.endpoint();
        let request = to_gemini_request(prompt);

        tracing::debug!(model = %self.config.model, "sending generateContent request");
        let response = self
            .client
            .post(&url)
            .query(&[("key", self.config.api_key.as_str())])
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<GeminiErrorEnvelope>(&body)
                .ok()
                .and_then(|envelope| envelope.error)
                .map(|e| e.message)
                .unwrap_or_else(|| {
                    status
                        .canonical_reason()
                        .unwrap_or("unknown error")
                        .to_string()
                });
            tracing::warn!(%status, %message, "Gemini request failed");
            return Err(Error::provider_error(format!(
                "Gemini API error {status}: {message}"
            )));
        }

        let envelope: GeminiResponse = response.json().await?;
        let text = envelope
            .first_text()
            .ok_or_else(|| Error::invalid_response("no candidate text in Gemini response"))?;
        tracing::debug!(chars = text.len(), "received model reply");
        Ok(text.to_string())
    }
}
