//! API error mapping
//!
//! Core errors are translated 1:1 into HTTP responses: missing routes map
//! to 404, validation and insufficiency to 400. The body is always
//! `{"error": "..."}` so callers can branch on status and read one field.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use fueleu_banking::BankingError;
use fueleu_catalog::CatalogError;
use fueleu_pooling::PoolError;

/// Application error type with HTTP response mapping.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Referenced route/ship absent (404).
    #[error("{0}")]
    NotFound(String),

    /// Malformed or insufficient input (400).
    #[error("{0}")]
    BadRequest(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
        };
        let body = axum::Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::RouteNotFound { .. } => ApiError::NotFound(err.to_string()),
            CatalogError::EmptyCatalog => ApiError::BadRequest(err.to_string()),
        }
    }
}

impl From<BankingError> for ApiError {
    fn from(err: BankingError) -> Self {
        match err {
            BankingError::RouteNotFound(inner) => inner.into(),
            BankingError::NonPositiveAmount(_)
            | BankingError::SelfTransfer(_)
            | BankingError::InsufficientSurplus { .. }
            | BankingError::InsufficientBalance { .. } => ApiError::BadRequest(err.to_string()),
        }
    }
}

impl From<PoolError> for ApiError {
    fn from(err: PoolError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

/// Result type alias for handlers.
pub type ApiResult<T> = Result<T, ApiError>;
