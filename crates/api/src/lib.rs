//! FuelEU compliance HTTP API
//!
//! Thin axum façade over the catalog, banking, and pooling crates. All
//! business decisions happen in those crates; this layer only translates
//! requests and results to and from JSON.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::AppState;
