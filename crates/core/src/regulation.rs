//! Regulatory constants
//!
//! These are fixed process-wide and shared by every compliance balance
//! computation. They are not configurable per call.

/// GHG intensity target in g CO2eq/MJ.
///
/// 2025 target: 2% below the 91.16 g CO2eq/MJ fleet reference intensity.
pub const TARGET_INTENSITY: f64 = 89.3368;

/// Lower calorific energy content per tonne of fuel, in MJ.
pub const ENERGY_PER_TONNE: f64 = 41_000.0;
