//! Google Gemini provider (`generateContent` API).

mod provider;
mod types;

pub use provider::GeminiProvider;
pub use types::GeminiConfig;
