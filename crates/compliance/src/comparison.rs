//! Baseline comparison
//!
//! Wire format note: comparison records use snake_case field names, unlike
//! the rest of the API surface. Consumers already depend on this shape.

use fueleu_core::Route;
use serde::{Deserialize, Serialize};

/// A route's GHG intensity relative to the current baseline route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaselineComparison {
    pub route_id: String,
    pub ghg_intensity: f64,
    pub baseline_intensity: f64,
    /// Percent difference vs baseline; 0 when the baseline intensity is 0
    pub percent_diff: f64,
    /// True when the route emits no more per MJ than the baseline
    pub compliant: bool,
}

/// Compare a route's intensity against the baseline route's.
pub fn compare_to_baseline(route: &Route, baseline: &Route) -> BaselineComparison {
    let base = baseline.ghg_intensity;
    let percent_diff = if base == 0.0 {
        0.0
    } else {
        (route.ghg_intensity - base) / base * 100.0
    };
    BaselineComparison {
        route_id: route.route_id.clone(),
        ghg_intensity: route.ghg_intensity,
        baseline_intensity: base,
        percent_diff,
        compliant: route.ghg_intensity <= base,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fueleu_core::{FuelType, VesselType};

    fn route(id: &str, intensity: f64) -> Route {
        Route::new(
            id,
            VesselType::Container,
            FuelType::Hfo,
            2024,
            intensity,
            5000.0,
            12000.0,
            4500.0,
        )
    }

    #[test]
    fn test_percent_diff_against_baseline() {
        let cmp = compare_to_baseline(&route("R001", 91.0), &route("R002", 88.0));
        assert!((cmp.percent_diff - (3.0 / 88.0 * 100.0)).abs() < 1e-9);
        assert!(!cmp.compliant);
    }

    #[test]
    fn test_route_at_baseline_is_compliant() {
        let cmp = compare_to_baseline(&route("R001", 88.0), &route("R002", 88.0));
        assert_eq!(cmp.percent_diff, 0.0);
        assert!(cmp.compliant);
    }

    #[test]
    fn test_zero_baseline_guards_division() {
        let cmp = compare_to_baseline(&route("R001", 91.0), &route("R002", 0.0));
        assert_eq!(cmp.percent_diff, 0.0);
        assert!(!cmp.compliant);
    }

    #[test]
    fn test_wire_fields_are_snake_case() {
        let cmp = compare_to_baseline(&route("R001", 91.0), &route("R002", 88.0));
        let json = serde_json::to_value(&cmp).unwrap();
        assert!(json.get("route_id").is_some());
        assert!(json.get("baseline_intensity").is_some());
    }
}
