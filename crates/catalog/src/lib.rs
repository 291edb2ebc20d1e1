//! FuelEU Route Catalog
//!
//! Owns the static per-route fuel/intensity records and the baseline
//! designation. Routes are seeded at startup, mutated only by baseline
//! reassignment, and never deleted.

pub mod catalog;
pub mod error;
pub mod seed;

pub use catalog::RouteCatalog;
pub use error::{CatalogError, CatalogResult};
pub use seed::sample_fleet;
