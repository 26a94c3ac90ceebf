//! Error handling for VoucherBot
//!
//! This module defines the main error types used throughout the application
//! and provides a unified error handling strategy.

use thiserror::Error;

/// Main error type for the VoucherBot application
#[derive(Error, Debug)]
pub enum VoucherBotError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Database migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Telegram API error: {0}")]
    Telegram(#[from] teloxide::RequestError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("No record found for user {user_id}")]
    RecordNotFound { user_id: i64 },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for VoucherBot operations
pub type Result<T> = std::result::Result<T, VoucherBotError>;

impl VoucherBotError {
    /// Whether the error stems from the request itself rather than from an
    /// external collaborator. Request-level failures get a specific denial
    /// reply; collaborator failures get logged and replaced by a generic one.
    pub fn is_request_fault(&self) -> bool {
        matches!(
            self,
            VoucherBotError::PermissionDenied(_)
                | VoucherBotError::RecordNotFound { .. }
                | VoucherBotError::InvalidInput(_)
        )
    }
}
