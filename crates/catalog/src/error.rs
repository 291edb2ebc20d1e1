//! Catalog errors

use thiserror::Error;

/// Errors from route catalog operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Route not found: {ship_id}")]
    RouteNotFound {
        ship_id: String,
        year: Option<i32>,
    },

    #[error("Catalog must contain at least one route")]
    EmptyCatalog,
}

impl CatalogError {
    /// Not-found error for a `(ship_id, year)` lookup
    pub fn not_found(ship_id: impl Into<String>, year: Option<i32>) -> Self {
        Self::RouteNotFound {
            ship_id: ship_id.into(),
            year,
        }
    }
}

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;
