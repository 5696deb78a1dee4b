use kairos_core::error::CoreError;
use thiserror::Error;

/// Rule construction errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuleError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<CoreError> for RuleError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidConfiguration(msg) | CoreError::ConfigError(msg) => {
                Self::InvalidConfiguration(msg)
            }
            CoreError::InvalidDate(msg) => Self::InvalidDate(msg),
        }
    }
}

impl From<serde_json::Error> for RuleError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

pub type RuleResult<T> = std::result::Result<T, RuleError>;
