//! FuelEU CB Calculator
//!
//! Pure compliance-balance arithmetic. Nothing here is stored or cached:
//! every balance is recomputed from the route it derives from, so results
//! are always consistent with current catalog state.

pub mod balance;
pub mod comparison;

pub use balance::{compute_cb, AdjustedBalance, ComplianceBalance};
pub use comparison::{compare_to_baseline, BaselineComparison};
