//! Compliance balance computation

use fueleu_core::{Route, ENERGY_PER_TONNE, TARGET_INTENSITY};
use serde::{Deserialize, Serialize};

/// Derived compliance balance for one route.
///
/// Never persisted; recompute via [`compute_cb`] whenever needed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceBalance {
    /// Ship identifier (the route id)
    pub ship_id: String,
    /// Reporting year
    pub year: i32,
    /// Compliance balance in grams CO2eq; positive = surplus
    pub cb_gco2eq: f64,
    /// The route's actual GHG intensity, g CO2eq/MJ
    pub actual_intensity: f64,
    /// The regulatory target intensity, g CO2eq/MJ
    pub target_intensity: f64,
}

/// A compliance balance adjusted by the ship's net banked amount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdjustedBalance {
    #[serde(flatten)]
    pub balance: ComplianceBalance,
    /// Net banked grams CO2eq for the same `(shipId, year)`
    pub net_banked: f64,
    /// `cbGco2eq + netBanked`
    pub adjusted_cb: f64,
}

impl AdjustedBalance {
    /// Combine a freshly computed balance with the ledger's net position.
    pub fn new(balance: ComplianceBalance, net_banked: f64) -> Self {
        let adjusted_cb = balance.cb_gco2eq + net_banked;
        Self {
            balance,
            net_banked,
            adjusted_cb,
        }
    }
}

/// Compute the compliance balance for a route.
///
/// `energy = fuelConsumption * ENERGY_PER_TONNE` (MJ), then
/// `cb = (TARGET_INTENSITY - ghgIntensity) * energy` (g CO2eq).
/// A route below the target therefore has a positive balance (surplus),
/// one above it a negative balance (deficit).
pub fn compute_cb(route: &Route) -> ComplianceBalance {
    let energy = route.fuel_consumption * ENERGY_PER_TONNE;
    let cb_gco2eq = (TARGET_INTENSITY - route.ghg_intensity) * energy;
    ComplianceBalance {
        ship_id: route.route_id.clone(),
        year: route.year,
        cb_gco2eq,
        actual_intensity: route.ghg_intensity,
        target_intensity: TARGET_INTENSITY,
    }
}
