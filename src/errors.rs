//! Error types for bonustrack
//!
//! The workflow core itself never fails; these errors come from the store,
//! configuration, strict parsing and the enrollment service around it.
//! Each error type has a corresponding error code for programmatic handling.

use thiserror::Error;

/// Result type alias for bonustrack operations
pub type Result<T> = std::result::Result<T, BonusTrackError>;

/// Main error type for all bonustrack operations
#[derive(Debug, Error)]
pub enum BonusTrackError {
    /// No .bonustrack directory found
    #[error("Store not found: {0}")]
    StoreNotFound(String),

    /// Invalid JSON format
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// A bonus or other record does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Identifier cannot be used as a record key
    #[error("Invalid identifier: {0}")]
    InvalidId(String),

    /// Unrecognised state token (strict parsing only)
    #[error("Unknown state: {0}")]
    UnknownState(String),

    /// Transition refused by the workflow rules
    #[error("State transition error: {0}")]
    StateTransition(String),

    /// IO error wrapper
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error with context
    #[error("{context}: {message}")]
    Wrapped { context: String, message: String },
}

impl BonusTrackError {
    /// Get the error code for this error type
    pub fn code(&self) -> &'static str {
        match self {
            BonusTrackError::StoreNotFound(_) => "STORE_NOT_FOUND",
            BonusTrackError::InvalidJson(_) => "INVALID_JSON",
            BonusTrackError::FileNotFound(_) => "FILE_NOT_FOUND",
            BonusTrackError::NotFound(_) => "NOT_FOUND",
            BonusTrackError::ConfigError(_) => "CONFIG_ERROR",
            BonusTrackError::InvalidId(_) => "INVALID_ID",
            BonusTrackError::UnknownState(_) => "UNKNOWN_STATE",
            BonusTrackError::StateTransition(_) => "STATE_TRANSITION",
            BonusTrackError::Io(_) => "IO_ERROR",
            BonusTrackError::Wrapped { .. } => "WRAPPED_ERROR",
        }
    }

    /// Wrap an error with additional context
    pub fn wrap<E: std::fmt::Display>(error: E, context: impl Into<String>) -> Self {
        BonusTrackError::Wrapped {
            context: context.into(),
            message: error.to_string(),
        }
    }
}

/// Convert an error to an appropriate exit code
pub fn to_exit_code(error: &BonusTrackError) -> i32 {
    match error {
        // Refused transitions are a validation outcome, not a failure of the tool
        BonusTrackError::StateTransition(_) => 2,
        _ => 1,
    }
}
