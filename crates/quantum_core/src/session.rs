use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::extract::QuantumReply;
use crate::solution::{average_chaos, Solution};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionId(pub String);

impl SessionId {
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One bug report as submitted by the user. The five fields are embedded
/// verbatim into the outgoing prompt; only `language` is normalized
/// (trimmed, lowercased) so it can double as the stamp on every extracted
/// [`Solution`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebugRequest {
    pub language: String,
    pub bug_description: String,
    pub code: String,
    #[serde(default)]
    pub error_message: String,
    #[serde(default)]
    pub context: String,
}

impl DebugRequest {
    pub fn new(
        language: impl Into<String>,
        bug_description: impl Into<String>,
        code: impl Into<String>,
    ) -> Self {
        Self {
            language: language.into().trim().to_lowercase(),
            bug_description: bug_description.into(),
            code: code.into(),
            error_message: String::new(),
            context: String::new(),
        }
    }

    pub fn with_error_message(mut self, error_message: impl Into<String>) -> Self {
        self.error_message = error_message.into();
        self
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = context.into();
        self
    }
}

/// A completed debug run: the request, what was extracted from the reply
/// and the derived average chaos rating. Immutable once constructed;
/// stores persist it as a serialized snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebugSession {
    pub id: SessionId,
    pub created_at: DateTime<Utc>,
    pub request: DebugRequest,
    pub solutions: Vec<Solution>,
    pub recommendation: Option<String>,
    pub avg_chaos: Option<f64>,
}

impl DebugSession {
    pub fn new(request: DebugRequest, reply: QuantumReply) -> Self {
        let avg_chaos = average_chaos(&reply.solutions);
        Self {
            id: SessionId::new(),
            created_at: Utc::now(),
            request,
            solutions: reply.solutions,
            recommendation: reply.recommendation,
            avg_chaos,
        }
    }

    pub fn solution_count(&self) -> usize {
        self.solutions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solution(rating: Option<u8>) -> Solution {
        Solution {
            name: "U".to_string(),
            philosophy: "p".to_string(),
            approach: "a".to_string(),
            code: "c".to_string(),
            language: "rust".to_string(),
            chaos_rating: rating,
            tradeoffs: "t".to_string(),
        }
    }

    #[test]
    fn test_session_id_is_uuid() {
        let id = SessionId::new();
        assert_eq!(id.as_str().len(), 36);
        assert_eq!(format!("{}", id), id.as_str());
    }

    #[test]
    fn test_request_normalizes_language() {
        let req = DebugRequest::new("  Python ", "it crashes", "print(x)");
        assert_eq!(req.language, "python");
        assert_eq!(req.error_message, "");
    }

    #[test]
    fn test_request_builders() {
        let req = DebugRequest::new("rust", "panic", "fn main() {}")
            .with_error_message("index out of bounds")
            .with_context("only on empty input");
        assert_eq!(req.error_message, "index out of bounds");
        assert_eq!(req.context, "only on empty input");
    }

    #[test]
    fn test_session_derives_average_chaos() {
        let reply = QuantumReply {
            solutions: vec![solution(Some(2)), solution(Some(8))],
            recommendation: Some("merge with universe 1".to_string()),
        };
        let session = DebugSession::new(DebugRequest::new("rust", "b", "c"), reply);
        assert_eq!(session.avg_chaos, Some(5.0));
        assert_eq!(session.solution_count(), 2);
        assert!(!session.id.as_str().is_empty());
    }

    #[test]
    fn test_session_avg_chaos_none_when_unrated() {
        let reply = QuantumReply {
            solutions: vec![solution(None)],
            recommendation: None,
        };
        let session = DebugSession::new(DebugRequest::new("rust", "b", "c"), reply);
        assert_eq!(session.avg_chaos, None);
    }

    #[test]
    fn test_session_serde_round_trip() {
        let reply = QuantumReply {
            solutions: vec![solution(Some(4))],
            recommendation: None,
        };
        let session = DebugSession::new(DebugRequest::new("go", "b", "c"), reply);
        let json = serde_json::to_string(&session).unwrap();
        let decoded: DebugSession = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded.id, session.id);
        assert_eq!(decoded.solutions, session.solutions);
    }
}
