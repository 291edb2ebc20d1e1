//! Pooling errors

use thiserror::Error;

/// Errors from pool creation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PoolError {
    #[error("A pool requires at least one member")]
    EmptyPool,

    #[error("Pool total CB must be non-negative, got {total}")]
    NegativeTotal { total: f64 },
}

/// Result type for pooling operations
pub type PoolResult<T> = Result<T, PoolError>;
