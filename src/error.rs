//! Central error types for YaHomie.
//!
//! Everything that can fail outside the toolkit's own defaults (settings I/O,
//! login-item registration, tray/window lookups) reports through `AppError` so
//! the event-loop callers can decide whether to log, surface or ignore it.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for YaHomie operations.
#[derive(Error, Debug)]
pub enum AppError {
    /// Settings or log file I/O failed
    #[error("I/O error accessing {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Toolkit call failed (window, tray, menu, path resolver)
    #[error("Tauri error: {0}")]
    Tauri(#[from] tauri::Error),

    /// Login-item registration failed
    #[error("Autostart error: {0}")]
    Autostart(String),

    /// The dashboard URL did not parse
    #[error("Invalid URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Tray icon not found by id
    #[error("Tray icon not found with id {id}")]
    TrayMissing { id: String },

    /// Window not found by label
    #[error("Window not found with label {label}")]
    WindowMissing { label: String },

    /// Logger could not be installed
    #[error("Logging error: {0}")]
    Logging(String),
}

impl AppError {
    /// Wrap an `io::Error` together with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AppError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Type alias for Results using AppError.
pub type AppResult<T> = Result<T, AppError>;
