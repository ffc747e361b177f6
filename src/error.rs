use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to read course file: {0}")]
    Read(#[from] std::io::Error),

    #[error("invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("unexpected document shape: {0}")]
    Shape(String),

    #[error("course at index {index}: {reason}")]
    Validation { index: usize, reason: String },

    #[error("invalid filter value: {0}")]
    InvalidFilter(String),

    #[error("course not found")]
    NotFound,
}
