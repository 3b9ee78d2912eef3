use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Serialization error: {0}")]
    Serde(String),

    #[error("{field} must be between 0 and 100, got {value}")]
    PercentOutOfRange { field: &'static str, value: f64 },

    #[error("pricing percentages sum to {sum}, markup requires less than 100")]
    MarkupUndefined { sum: f64 },

    #[error("daily sales goal cannot be negative, got {0}")]
    NegativeGoal(f64),

    #[error("configuration backup `{0}` not found")]
    BackupNotFound(String),
}
