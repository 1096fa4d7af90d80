use thiserror::Error;

/// Custom error types for moodboard
#[derive(Debug, Error)]
pub enum MoodError {
    #[error("Invalid server URL '{url}': {reason}")]
    InvalidServerUrl { url: String, reason: String },

    #[error("Invalid config file {path}: {reason}")]
    InvalidConfig { path: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
