use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Required credential absent; raised before any network attempt.
    #[error("missing API key for provider '{0}'")]
    MissingApiKey(String),

    #[error("provider not found: {0}")]
    ProviderNotFound(String),

    /// Network-level failure (connect, timeout, body read).
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// Non-success status from the provider API.
    #[error("provider error: {0}")]
    Provider(String),

    /// 2xx reply whose envelope is missing the expected fields.
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

impl Error {
    pub fn provider_error(message: impl Into<String>) -> Self {
        Self::Provider(message.into())
    }

    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::InvalidResponse(message.into())
    }

    /// Whether this failure happened at the transport/envelope layer, as
    /// opposed to configuration. Callers render the two differently.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::Http(_) | Self::Provider(_) | Self::InvalidResponse(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_api_key_display() {
        let err = Error::MissingApiKey("gemini".to_string());
        assert_eq!(err.to_string(), "missing API key for provider 'gemini'");
        assert!(!err.is_transport());
    }

    #[test]
    fn test_provider_error_display() {
        let err = Error::provider_error("Gemini API error 403: forbidden");
        assert!(err.to_string().contains("403"));
        assert!(err.is_transport());
    }

    #[test]
    fn test_invalid_response_is_transport() {
        assert!(Error::invalid_response("no candidates").is_transport());
    }
}
