//! Banking errors

use fueleu_catalog::CatalogError;
use thiserror::Error;

/// Errors from banking ledger operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BankingError {
    #[error(transparent)]
    RouteNotFound(#[from] CatalogError),

    #[error("Amount must be positive, got {0}")]
    NonPositiveAmount(f64),

    #[error("Cannot transfer from a ship to itself: {0}")]
    SelfTransfer(String),

    #[error("Amount {requested} exceeds the route's available surplus {available}")]
    InsufficientSurplus { requested: f64, available: f64 },

    #[error("Amount {requested} exceeds the banked balance {available}")]
    InsufficientBalance { requested: f64, available: f64 },
}

/// Result type for banking operations
pub type BankingResult<T> = Result<T, BankingError>;
