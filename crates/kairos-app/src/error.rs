use thiserror::Error;

/// Application-level errors
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    RuleError(#[from] kairos_rule::error::RuleError),

    #[error(transparent)]
    CoreError(#[from] kairos_core::error::CoreError),

    #[error("No valid schedule configured")]
    NoSchedules,
}

pub type AppResult<T> = std::result::Result<T, AppError>;
