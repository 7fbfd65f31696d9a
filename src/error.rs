use thiserror::Error;

/// Custom error types for astro-archive
#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("Invalid config file {path}: {message}")]
    Config { path: String, message: String },

    #[error("Invalid endpoint {0:?}: expected an http:// or https:// URL")]
    InvalidEndpoint(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to initialise logging: {0}")]
    Log(String),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
