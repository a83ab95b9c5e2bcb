use crate::error::Error;
use crate::prompt::Prompt;
use crate::provider::{Provider, ProviderRegistry};
use async_trait::async_trait;

/// Mock provider for registry tests.
#[derive(Debug)]
struct MockProvider {
    id: &'static str,
}

#[async_trait]
impl Provider for MockProvider {
    fn provider_id(&self) -> &str {
        self.id
    }

    async fn list_models(&self) -> crate::error::Result<Vec<String>> {
        Ok(vec![format!("{}-model", self.id)])
    }

    async fn generate(&self, _prompt: &Prompt) -> crate::error::Result<String> {
        Err(Error::provider_error("mock"))
    }
}

#[test]
fn test_register_and_get_provider() {
    let registry = ProviderRegistry::new().register("mock", MockProvider { id: "mock" });

    let provider = registry.get_provider("mock");
    assert!(provider.is_ok());
    assert_eq!(provider.unwrap().provider_id(), "mock");
}

#[test]
fn test_provider_not_found() {
    let registry = ProviderRegistry::new();
    let err = registry.get_provider("nonexistent").unwrap_err();
    assert!(matches!(err, Error::ProviderNotFound(_)));
}

#[test]
fn test_list_providers() {
    let registry = ProviderRegistry::new()
        .register("alpha", MockProvider { id: "alpha" })
        .register("beta", MockProvider { id: "beta" });

    let mut ids = registry.list_providers();
    ids.sort();
    assert_eq!(ids, vec!["alpha", "beta"]);
}
