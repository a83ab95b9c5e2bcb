//! The engine: one debug request in, extracted solutions out.

use std::sync::Arc;

use quantum_core::{DebugRequest, QuantumReply, Solution};

use crate::error::Result;
use crate::prompt::build_prompt;
use crate::provider::Provider;

/// Composes the request builder, a provider and the extractor.
///
/// The provider round trip is the only suspension point and the only source
/// of failure; once raw text is back, extraction runs synchronously and
/// cannot fail. A reply from which nothing could be extracted is an `Ok`
/// with an empty solution list, which callers surface differently from a
/// transport error. No retries here; each call is independent.
pub struct QuantumDebugger {
    provider: Arc<dyn Provider>,
}

impl QuantumDebugger {
    pub fn new(provider: Arc<dyn Provider>) -> Self {
        Self { provider }
    }

    pub fn provider_id(&self) -> &str {
        self.provider.provider_id()
    }

    /// Full reply: solutions plus the model's merge recommendation.
    pub async fn request_reply(&self, request: &DebugRequest) -> Result<QuantumReply> {
        let prompt = build_prompt(request);
        let raw = self.provider.generate(&prompt).await?;
        let reply = QuantumReply::parse(&raw, &request.language);
        tracing::info!(
            provider = self.provider.provider_id(),
            solutions = reply.solutions.len(),
            "debug request complete"
        );
        Ok(reply)
    }

    /// Solutions only, in document order; possibly empty.
    pub async fn request_solutions(&self, request: &DebugRequest) -> Result<Vec<Solution>> {
        Ok(self.request_reply(request).await?.solutions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::prompt::Prompt;
    use async_trait::async_trait;

    /// Provider that replays a canned reply and records the prompt.
    #[derive(Debug)]
    struct CannedProvider {
        reply: &'static str,
    }

    #[async_trait]
    impl Provider for CannedProvider {
        fn provider_id(&self) -> &str {
            "canned"
        }

        async fn list_models(&self) -> Result<Vec<String>> {
            Ok(vec!["canned-1".to_string()])
        }

        async fn generate(&self, prompt: &Prompt) -> Result<String> {
            assert!(prompt.user.contains("QUANTUM DEBUG REQUEST"));
            Ok(self.reply.to_string())
        }
    }

    #[derive(Debug)]
    struct FailingProvider;

    #[async_trait]
    impl Provider for FailingProvider {
        fn provider_id(&self) -> &str {
            "failing"
        }

        async fn list_models(&self) -> Result<Vec<String>> {
            Ok(vec![])
        }

        async fn generate(&self, _prompt: &Prompt) -> Result<String> {
            Err(Error::provider_error("Gemini API error 503: overloaded"))
        }
    }

    const TWO_UNIVERSES: &str = "🌌 UNIVERSE 1: The Elegant Universe\n\
        Philosophy: Clean and minimal\n\
        Approach: Fix the boundary check\n\
        Code Solution:\n\
        ```python\n\
        print('fixed')\n\
        ```\n\
        Chaos Rating: 2 ⚡\n\
        Trade-offs: Slightly slower\n\
        \n\
        🌌 UNIVERSE 2: The Chaos Dimension\n\
        Philosophy: Weird but works\n\
        Approach: Reverse the list twice\n\
        Code Solution:\n\
        ```python\n\
        print('chaos')\n\
        ```\n\
        Chaos Rating: 9 ⚡\n\
        Trade-offs: Nobody understands it\n\
        \n\
        🎲 RECOMMENDATION: Merge with universe 1.";

    #[tokio::test]
    async fn test_request_solutions_extracts_and_stamps_language() {
        let debugger = QuantumDebugger::new(Arc::new(CannedProvider {
            reply: TWO_UNIVERSES,
        }));
        let request = DebugRequest::new("Python", "it is broken", "print(')");

        let solutions = debugger.request_solutions(&request).await.unwrap();
        assert_eq!(solutions.len(), 2);
        assert!(solutions.iter().all(|s| s.language == "python"));
        assert_eq!(solutions[0].chaos_rating, Some(2));
        assert_eq!(solutions[1].chaos_rating, Some(9));
    }

    #[tokio::test]
    async fn test_request_reply_includes_recommendation() {
        let debugger = QuantumDebugger::new(Arc::new(CannedProvider {
            reply: TWO_UNIVERSES,
        }));
        let request = DebugRequest::new("python", "b", "c");

        let reply = debugger.request_reply(&request).await.unwrap();
        assert_eq!(reply.recommendation.as_deref(), Some("Merge with universe 1."));
    }

    #[tokio::test]
    async fn test_unparseable_reply_is_ok_and_empty() {
        // An apology is a successful transport outcome with zero solutions,
        // not an error.
        let debugger = QuantumDebugger::new(Arc::new(CannedProvider {
            reply: "Sorry, I refuse to debug this.",
        }));
        let request = DebugRequest::new("rust", "b", "c");

        let solutions = debugger.request_solutions(&request).await.unwrap();
        assert!(solutions.is_empty());
    }

    #[tokio::test]
    async fn test_transport_error_propagates() {
        let debugger = QuantumDebugger::new(Arc::new(FailingProvider));
        let request = DebugRequest::new("rust", "b", "c");

        let err = debugger.request_solutions(&request).await.unwrap_err();
        assert!(err.is_transport());
        assert!(err.to_string().contains("503"));
    }
}
