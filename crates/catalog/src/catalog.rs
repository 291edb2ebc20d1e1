//! Route catalog - in-memory route store with baseline designation

use fueleu_core::Route;

use crate::error::{CatalogError, CatalogResult};

/// Owned store of all registered routes.
///
/// The catalog guarantees at least one route exists at all times: an empty
/// route list is rejected at construction and routes are never removed.
/// Mutations (`set_baseline`) take `&mut self`, so a single logical
/// operation is always exclusive; callers sharing a catalog across threads
/// wrap it in their own lock.
#[derive(Debug, Clone)]
pub struct RouteCatalog {
    routes: Vec<Route>,
}

impl RouteCatalog {
    /// Create a catalog from seeded routes.
    ///
    /// Fails with [`CatalogError::EmptyCatalog`] if `routes` is empty.
    pub fn new(routes: Vec<Route>) -> CatalogResult<Self> {
        if routes.is_empty() {
            return Err(CatalogError::EmptyCatalog);
        }
        Ok(Self { routes })
    }

    /// All registered routes, in registration order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Routes for a given reporting year, in registration order.
    pub fn routes_for_year(&self, year: i32) -> Vec<&Route> {
        self.routes.iter().filter(|r| r.year == year).collect()
    }

    /// Find a route by ship id, optionally narrowed to a year.
    ///
    /// Without a year this returns the first match in registration order;
    /// in fleets spanning multiple years callers must pass the year to
    /// disambiguate.
    pub fn lookup(&self, ship_id: &str, year: Option<i32>) -> CatalogResult<&Route> {
        self.routes
            .iter()
            .find(|r| r.route_id == ship_id && year.map_or(true, |y| r.year == y))
            .ok_or_else(|| CatalogError::not_found(ship_id, year))
    }

    /// The route currently designated as the comparison baseline.
    ///
    /// Falls back to the first-registered route when no flag is set, so
    /// this never fails.
    pub fn current_baseline(&self) -> &Route {
        self.routes
            .iter()
            .find(|r| r.is_baseline)
            .unwrap_or(&self.routes[0])
    }

    /// Designate every route of `ship_id` (across all years) as baseline.
    ///
    /// Clears the flag on all other routes in the same pass, so no reader
    /// can ever observe zero or two baseline families. Fails with
    /// [`CatalogError::RouteNotFound`] if no route matches, in which case
    /// the flags are left untouched.
    pub fn set_baseline(&mut self, ship_id: &str) -> CatalogResult<()> {
        if !self.routes.iter().any(|r| r.route_id == ship_id) {
            return Err(CatalogError::not_found(ship_id, None));
        }
        for route in &mut self.routes {
            route.is_baseline = route.route_id == ship_id;
        }
        tracing::info!(ship_id, "baseline reassigned");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::sample_fleet;

    #[test]
    fn test_empty_catalog_rejected() {
        assert_eq!(
            RouteCatalog::new(Vec::new()).unwrap_err(),
            CatalogError::EmptyCatalog
        );
    }

    #[test]
    fn test_lookup_with_year() {
        let catalog = RouteCatalog::new(sample_fleet()).unwrap();
        let route = catalog.lookup("R002", Some(2024)).unwrap();
        assert_eq!(route.ghg_intensity, 88.0);

        let missing = catalog.lookup("R002", Some(2030));
        assert!(matches!(
            missing,
            Err(CatalogError::RouteNotFound { year: Some(2030), .. })
        ));
    }

    #[test]
    fn test_lookup_without_year_takes_first_match() {
        let catalog = RouteCatalog::new(sample_fleet()).unwrap();
        let route = catalog.lookup("R004", None).unwrap();
        assert_eq!(route.year, 2025);
    }

    #[test]
    fn test_unknown_ship_not_found() {
        let catalog = RouteCatalog::new(sample_fleet()).unwrap();
        assert!(catalog.lookup("R999", None).is_err());
    }

    #[test]
    fn test_current_baseline_uses_flag() {
        let catalog = RouteCatalog::new(sample_fleet()).unwrap();
        assert_eq!(catalog.current_baseline().route_id, "R002");
    }

    #[test]
    fn test_current_baseline_falls_back_to_first_route() {
        let mut fleet = sample_fleet();
        for route in &mut fleet {
            route.is_baseline = false;
        }
        let catalog = RouteCatalog::new(fleet).unwrap();
        assert_eq!(catalog.current_baseline().route_id, "R001");
    }

    #[test]
    fn test_set_baseline_is_exclusive() {
        let mut catalog = RouteCatalog::new(sample_fleet()).unwrap();
        catalog.set_baseline("R003").unwrap();

        let flagged: Vec<_> = catalog
            .routes()
            .iter()
            .filter(|r| r.is_baseline)
            .map(|r| r.route_id.as_str())
            .collect();
        assert_eq!(flagged, vec!["R003"]);
    }

    #[test]
    fn test_set_baseline_unknown_ship_leaves_flags() {
        let mut catalog = RouteCatalog::new(sample_fleet()).unwrap();
        assert!(catalog.set_baseline("R999").is_err());
        assert_eq!(catalog.current_baseline().route_id, "R002");
    }
}
