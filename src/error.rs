//! Error types for the fallible ambient surfaces
//!
//! Recording an event never fails. These errors only come from loading
//! configuration and running the HTTP surface.

use thiserror::Error;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: String, value: String },
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Top-level crate error
#[derive(Debug, Error)]
pub enum Error {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("server error: {0}")]
    Server(String),
}

/// Result type for crate operations
pub type Result<T> = std::result::Result<T, Error>;
