use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuantumError {
    #[error("config error: {0}")]
    Config(String),

    #[error("storage error: {0}")]
    Storage(String),

    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, QuantumError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error() {
        let err = QuantumError::Config("missing db path".to_string());
        assert_eq!(err.to_string(), "config error: missing db path");
    }

    #[test]
    fn test_storage_error() {
        let err = QuantumError::Storage("session not found".to_string());
        assert_eq!(err.to_string(), "storage error: session not found");
    }

    #[test]
    fn test_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = QuantumError::from(json_err);
        assert!(err.to_string().contains("expected"));
    }
}
