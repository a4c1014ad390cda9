//! Error types for optbench

use thiserror::Error;

/// Main error type for optbench operations
#[derive(Debug, Error)]
pub enum BenchError {
    /// Malformed problem definition (bounds/dimension mismatch,
    /// reference-point/objective-count mismatch). Raised at problem
    /// construction time, never at run time.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Malformed method definition (missing trial budget). Raised at
    /// method construction time.
    #[error("User input error: {0}")]
    UserInput(String),

    /// Replication results are not comparable (trace-length mismatch,
    /// empty result list).
    #[error("Aggregation error: {0}")]
    Aggregation(String),
}

/// Result type alias for optbench operations
pub type Result<T> = std::result::Result<T, BenchError>;
