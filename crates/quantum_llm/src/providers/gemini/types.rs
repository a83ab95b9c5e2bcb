//! Gemini-specific types.

use serde::{Deserialize, Serialize};

use crate::prompt::Prompt;

/// Configuration for the Gemini provider.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// API key for authentication.
    pub api_key: String,
    /// Base URL (default: https://generativelanguage.googleapis.com/v1beta).
    pub base_url: String,
    /// Model name used in the endpoint path.
    pub model: String,
}

impl GeminiConfig {
    pub const DEFAULT_MODEL: &'static str = "gemini-2.0-flash";

    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            model: Self::DEFAULT_MODEL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let mut url = base_url.into();
        while url.ends_with('/') {
            url.pop();
        }
        self.base_url = url;
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

/// `generateContent` request envelope.
#[derive(Debug, Serialize)]
pub struct GeminiRequest {
    pub system_instruction: GeminiContent,
    pub contents: Vec<GeminiContent>,
    #[serde(rename = "generationConfig")]
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GeminiContent {
    pub parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GeminiPart {
    pub text: String,
}

/// Sampling parameters. High temperature on purpose: the universes are
/// supposed to diverge.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f32,
    pub top_k: u32,
    pub top_p: f32,
    pub max_output_tokens: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: 0.9,
            top_k: 40,
            top_p: 0.95,
            max_output_tokens: 8192,
        }
    }
}

/// Build the wire request for one prompt.
pub fn to_gemini_request(prompt: &Prompt) -> GeminiRequest {
    GeminiRequest {
        system_instruction: GeminiContent {
            parts: vec![GeminiPart {
                text: prompt.system.clone(),
            }],
        },
        contents: vec![GeminiContent {
            parts: vec![GeminiPart {
                text: prompt.user.clone(),
            }],
        }],
        generation_config: GenerationConfig::default(),
    }
}

/// `generateContent` response envelope. Everything is optional so a
/// structurally odd reply surfaces as a typed error, not a deserialization
/// panic path.
#[derive(Debug, Deserialize)]
pub struct GeminiResponse {
    #[serde(default)]
    pub candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Deserialize)]
pub struct GeminiCandidate {
    pub content: Option<GeminiContent>,
}

impl GeminiResponse {
    /// First candidate's first text part, if the envelope is well-formed.
    pub fn first_text(&self) -> Option<&str> {
        self.candidates
            .first()?
            .content
            .as_ref()?
            .parts
            .first()
            .map(|p| p.text.as_str())
    }
}

/// Error envelope returned on non-2xx status.
#[derive(Debug, Deserialize)]
pub struct GeminiErrorEnvelope {
    pub error: Option<GeminiErrorBody>,
}

#[derive(Debug, Deserialize)]
pub struct GeminiErrorBody {
    pub message: String,
}
