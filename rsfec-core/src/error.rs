#![forbid(unsafe_code)]

//! Common error type for rsfec configuration and setup.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RsfecError {
    /// I/O related failures.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration parsing failures.
    #[error("Config parse error: {0}")]
    ConfigParse(toml::de::Error),

    /// Configuration parsed but describes an unusable codec.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

/// Convenient alias for results throughout rsfec crates.
pub type RsfecResult<T> = Result<T, RsfecError>;
