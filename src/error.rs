// src/error.rs

//! Unified error handling for the monitor application.

use thiserror::Error;

/// Result type alias for monitor operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Data validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// State file could not be written durably
    #[error("Persistence error for {path}: {message}")]
    Persistence { path: String, message: String },

    /// Notification dispatch failed
    #[error("Notification error: {0}")]
    Notify(String),
}

impl AppError {
    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a persistence error with the offending path.
    pub fn persistence(path: impl Into<String>, message: impl std::fmt::Display) -> Self {
        Self::Persistence {
            path: path.into(),
            message: message.to_string(),
        }
    }

    /// Create a notification error.
    pub fn notify(message: impl Into<String>) -> Self {
        Self::Notify(message.into())
    }
}
