//! Core error types.

use thiserror::Error;

/// Core-related errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A computation reached a state its inputs should never produce.
    #[error("internal consistency error: {0}")]
    InternalConsistency(String),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] cadence_config::ConfigError),

    /// Version parsing error.
    #[error("version error: {0}")]
    Version(#[from] semver::Error),

    /// The version carries pre-release or build metadata.
    #[error("unsupported version `{0}`: pre-release and build metadata are not supported")]
    UnsupportedVersion(String),
}

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;
