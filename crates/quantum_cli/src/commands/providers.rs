//! Provider introspection.

use anyhow::Result;
use quantum_llm::{Error, GeminiProvider, Provider, ProviderRegistry};

use crate::cli::ProvidersAction;
use crate::output;

pub async fn run(action: ProvidersAction) -> Result<()> {
    match action {
        ProvidersAction::List => list(),
        ProvidersAction::Models { provider } => models(&provider).await,
    }
}

fn list() -> Result<()> {
    match GeminiProvider::from_env() {
        Ok(provider) => output::kv(provider.provider_id(), "ready"),
        Err(Error::MissingApiKey(_)) => {
            output::kv("gemini", "not configured (set GEMINI_API_KEY)")
        }
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

async fn models(id: &str) -> Result<()> {
    let registry = ProviderRegistry::new().register("gemini", GeminiProvider::from_env()?);
    let provider = registry.get_provider(id)?;
    output::header(&format!("models for {id}"));
    for model in provider.list_models().await? {
        output::dim(&model);
    }
    Ok(())
}
