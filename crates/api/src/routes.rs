//! Router assembly

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the application router over shared state.
pub fn create_router(state: AppState) -> Router {
    // Wide-open CORS: the reference frontend is served from another origin.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(handlers::health))
        // Routes & baseline
        .route("/routes", get(handlers::list_routes))
        .route("/routes/comparison", get(handlers::comparison))
        .route("/routes/:route_id/baseline", post(handlers::set_baseline))
        // Compliance balances
        .route("/compliance/cb", get(handlers::get_cb))
        .route("/compliance/adjusted-cb", get(handlers::adjusted_cb))
        // Banking
        .route("/banking/records", get(handlers::banking_records))
        .route("/banking/bank", post(handlers::bank_surplus))
        .route("/banking/apply", post(handlers::transfer_banked))
        // Pooling
        .route("/pools", post(handlers::create_pool))
        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
