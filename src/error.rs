//! Error types for the SOLID playground
//!
//! The five principle units are total and never fail. Only the shell around
//! them (configuration loading, principle selection) can.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for playground operations
pub type SolidResult<T> = Result<T, SolidError>;

/// Main error type for playground operations
#[derive(Error, Debug)]
pub enum SolidError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON rendering error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Config file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Principle key not recognised
    #[error("unknown principle '{name}' (expected one of: srp, ocp, lsp, isp, dip)")]
    UnknownPrinciple { name: String },
}
