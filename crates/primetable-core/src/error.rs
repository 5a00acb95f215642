//! Error types for prime generation

use thiserror::Error;

/// Prime generation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PrimeError {
    /// Negative count or zero sieve limit
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A bound or product does not fit the integer width
    #[error("Overflow: {0}")]
    Overflow(String),

    /// Bound rejected by a generator with a configured maximum
    #[error("Bound {bound} exceeds configured maximum {max}")]
    BoundTooLarge { bound: u64, max: u64 },
}

/// Result type for prime generation
pub type PrimeResult<T> = Result<T, PrimeError>;
