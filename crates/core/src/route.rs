//! Route - Per-route fuel and intensity record
//!
//! A `Route` is the unit the compliance engine works on: one vessel's
//! voyage profile for one reporting year. Routes are seeded at startup and
//! mutated only by baseline reassignment.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Vessel category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display)]
pub enum VesselType {
    /// Container ship
    Container,
    /// Dry bulk carrier
    BulkCarrier,
    /// Liquid cargo tanker
    Tanker,
    /// Roll-on/roll-off vessel
    RoRo,
}

/// Fuel burned on the route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display)]
#[strum(serialize_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum FuelType {
    /// Heavy fuel oil
    Hfo,
    /// Liquefied natural gas
    Lng,
    /// Marine gas oil
    Mgo,
}

/// One vessel route's fuel/emissions profile for a reporting year.
///
/// Identity is the `(route_id, year)` pair. The route id doubles as the
/// ship id in banking and pooling operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    /// Route identifier, e.g. "R001"
    pub route_id: String,
    /// Vessel category
    pub vessel_type: VesselType,
    /// Fuel burned
    pub fuel_type: FuelType,
    /// Reporting year
    pub year: i32,
    /// Well-to-wake GHG intensity in g CO2eq/MJ
    pub ghg_intensity: f64,
    /// Fuel consumed over the year, in tonnes
    pub fuel_consumption: f64,
    /// Distance sailed, in nautical miles
    pub distance: f64,
    /// Total emissions, in tonnes CO2eq
    pub total_emissions: f64,
    /// Whether this route is the comparison baseline
    pub is_baseline: bool,
}

impl Route {
    /// Create a route. Baseline designation defaults to off; use
    /// [`Route::as_baseline`] or the catalog's set-baseline operation.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        route_id: impl Into<String>,
        vessel_type: VesselType,
        fuel_type: FuelType,
        year: i32,
        ghg_intensity: f64,
        fuel_consumption: f64,
        distance: f64,
        total_emissions: f64,
    ) -> Self {
        Self {
            route_id: route_id.into(),
            vessel_type,
            fuel_type,
            year,
            ghg_intensity,
            fuel_consumption,
            distance,
            total_emissions,
            is_baseline: false,
        }
    }

    /// Mark this route as the comparison baseline
    pub fn as_baseline(mut self) -> Self {
        self.is_baseline = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Route {
        Route::new(
            "R001",
            VesselType::Container,
            FuelType::Hfo,
            2024,
            91.0,
            5000.0,
            12000.0,
            4500.0,
        )
    }

    #[test]
    fn test_route_defaults_to_non_baseline() {
        assert!(!sample().is_baseline);
        assert!(sample().as_baseline().is_baseline);
    }

    #[test]
    fn test_route_wire_field_names() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["routeId"], "R001");
        assert_eq!(json["vesselType"], "Container");
        assert_eq!(json["fuelType"], "HFO");
        assert_eq!(json["ghgIntensity"], 91.0);
        assert_eq!(json["fuelConsumption"], 5000.0);
        assert_eq!(json["isBaseline"], false);
    }

    #[test]
    fn test_fuel_type_parse() {
        let lng: FuelType = "LNG".parse().unwrap();
        assert_eq!(lng, FuelType::Lng);
        assert_eq!(lng.to_string(), "LNG");
    }

    #[test]
    fn test_vessel_type_parse() {
        let bulk: VesselType = "BulkCarrier".parse().unwrap();
        assert_eq!(bulk, VesselType::BulkCarrier);
        assert_eq!(bulk.to_string(), "BulkCarrier");
    }

    #[test]
    fn test_route_deserialize_roundtrip() {
        let route = sample().as_baseline();
        let json = serde_json::to_string(&route).unwrap();
        let parsed: Route = serde_json::from_str(&json).unwrap();
        assert_eq!(route, parsed);
    }
}
