//! FuelEU Core - Domain types
//!
//! This crate contains the fundamental types used across the compliance
//! engine:
//! - `Route`: per-route fuel/intensity record (the unit of compliance)
//! - `VesselType` / `FuelType`: type-safe vessel and fuel codes
//! - `regulation`: the fixed regulatory constants (target intensity,
//!   energy conversion factor)

pub mod regulation;
pub mod route;

pub use regulation::{ENERGY_PER_TONNE, TARGET_INTENSITY};
pub use route::{FuelType, Route, VesselType};
