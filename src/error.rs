//! Error handling for the atelier stock core
//!
//! The stock-check entry points absorb failures into warnings; everything
//! else propagates through `AppResult`.

use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Validation errors
    #[error("Validation error: {message}")]
    Validation { field: String, message: String },

    #[error("Resource not found: {0}")]
    NotFound(String),

    // Business logic errors
    #[error("Invalid status transition: {0}")]
    InvalidStatusTransition(String),

    // Persistence errors surfaced through the store traits
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Configuration error: {0}")]
    Configuration(#[from] config::ConfigError),
}

/// Result type alias for services
pub type AppResult<T> = Result<T, AppError>;
