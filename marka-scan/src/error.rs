//! Error types for scan processing

use thiserror::Error;

/// Scan pipeline error types
#[derive(Debug, Error)]
pub enum ScanError {
    /// Scanned code too short for duplicate-label printing
    #[error("Scanned code too short: {0} characters")]
    TooShort(usize),

    /// Clipboard write rejected by the host
    #[error("Clipboard write failed: {0}")]
    Clipboard(String),

    /// Product catalog lookup failed
    #[error("Product lookup failed: {0}")]
    Lookup(String),

    /// Document generation failed
    #[error("Document generation failed: {0}")]
    Generation(String),

    /// Physical print side effect failed
    #[error("Print failed: {0}")]
    Print(String),
}

/// Result type for scan operations
pub type ScanResult<T> = Result<T, ScanError>;
