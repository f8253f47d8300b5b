//! Error types for the API
//!
//! The chain search itself never fails. These errors come from reading
//! input, enforcing limits and running batches.

use thiserror::Error;

/// Error type for API operations
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Input larger than the configured limit
    #[error("Input too large: {size} bytes exceeds the limit of {limit} bytes")]
    InputTooLarge {
        /// Size of the rejected input in bytes
        size: usize,
        /// Configured limit in bytes
        limit: usize,
    },

    /// Infrastructure error (I/O, etc.)
    #[error("Infrastructure error: {0}")]
    Infrastructure(String),

    /// Thread pool could not be created
    #[error("Parallel execution failed: {0}")]
    Parallel(String),
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, Error>;
