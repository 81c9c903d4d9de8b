//! Error types for the label compiler

use thiserror::Error;

/// Label compilation error types
#[derive(Debug, Error)]
pub enum ZplError {
    /// Template size is missing or out of range
    #[error("Invalid label size: {0}")]
    InvalidSize(String),
}

/// Result type for label compilation
pub type ZplResult<T> = Result<T, ZplError>;
