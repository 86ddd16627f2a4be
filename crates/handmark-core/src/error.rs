//! Error types for handmark

use thiserror::Error;

/// Main error type for handmark operations.
///
/// Rendering itself is total and never produces one of these; they come
/// from the layers around it (files, configuration, highlighting, limits).
#[derive(Error, Debug)]
pub enum HandmarkError {
    /// IO error during file operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Syntax highlighting error
    #[error("Highlight error: {0}")]
    Highlight(String),

    /// Input larger than the configured limit
    #[error("Input of {size} bytes exceeds the limit of {limit} bytes")]
    ResourceExhaustion { size: usize, limit: usize },
}

/// Result type alias for handmark operations
pub type Result<T> = std::result::Result<T, HandmarkError>;
