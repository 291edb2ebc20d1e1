//! Shared application state
//!
//! One lock per store. Reads take the read guard and may overlap; every
//! mutating operation holds the write guard for the whole logical
//! operation, so a baseline clear+set or a transfer's entry pair is never
//! observed half-applied. Handlers that need two stores take the catalog
//! guard first.

use std::sync::{Arc, RwLock};

use fueleu_banking::BankingLedger;
use fueleu_catalog::RouteCatalog;
use fueleu_pooling::PoolRegistry;

/// Shared handles to the three owned stores.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<RwLock<RouteCatalog>>,
    pub banking: Arc<RwLock<BankingLedger>>,
    pub pools: Arc<RwLock<PoolRegistry>>,
}

impl AppState {
    /// Wrap a seeded catalog with fresh, empty ledgers.
    pub fn new(catalog: RouteCatalog) -> Self {
        Self {
            catalog: Arc::new(RwLock::new(catalog)),
            banking: Arc::new(RwLock::new(BankingLedger::new())),
            pools: Arc::new(RwLock::new(PoolRegistry::new())),
        }
    }
}
