//! Provider trait and registry.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::{Error, Result};
use crate::prompt::Prompt;

/// A text-generation backend. One operation matters: feed it a prompt, get
/// the raw reply text back. Everything downstream of `generate` is pure.
#[async_trait]
pub trait Provider: Send + Sync + std::fmt::Debug {
    /// Stable identifier used as the registry key ("gemini").
    fn provider_id(&self) -> &str;

    /// Models this provider can serve.
    async fn list_models(&self) -> Result<Vec<String>>;

    /// Run one completion. Fails with a transport-family error on network
    /// trouble, non-success status or a malformed envelope; never on
    /// "unhelpful but well-formed" reply text.
    async fn generate(&self, prompt: &Prompt) -> Result<String>;
}

/// Registry of provider implementations, keyed by provider ID.
#[derive(Default, Clone)]
pub struct ProviderRegistry {
    providers: HashMap<String, Arc<dyn Provider>>,
}

impl ProviderRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a provider under the given ID, replacing any previous entry
    /// with the same ID. Returns `self` for chaining.
    pub fn register<P: Provider + 'static>(mut self, id: impl Into<String>, provider: P) -> Self {
        self.providers.insert(id.into(), Arc::new(provider));
        self
    }

    /// Look up a provider by ID. Fails with [`Error::ProviderNotFound`] for
    /// an unregistered ID.
    pub fn get_provider(&self, id: &str) -> Result<Arc<dyn Provider>> {
        self.providers
            .get(id)
            .cloned()
            .ok_or_else(|| Error::ProviderNotFound(id.to_string()))
    }

    /// IDs of all registered providers, in no particular order.
    pub fn list_providers(&self) -> Vec<String> {
        self.providers.keys().cloned().collect()
    }
}
