//! Banking ledger - append-only store of signed entries

use fueleu_catalog::RouteCatalog;
use fueleu_compliance::compute_cb;

use crate::entry::{BankEntry, Transfer};
use crate::error::{BankingError, BankingResult};

/// Append-only banking ledger.
///
/// All validation happens before any entry is appended, so a failed
/// operation leaves the ledger exactly as it was. Mutations take
/// `&mut self`; a transfer's debit/credit pair is appended within one such
/// call and can never be observed half-done.
#[derive(Debug, Clone, Default)]
pub struct BankingLedger {
    entries: Vec<BankEntry>,
}

impl BankingLedger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// All entries, in append order
    pub fn entries(&self) -> &[BankEntry] {
        &self.entries
    }

    /// Net banked position for a `(shipId, year)` pair.
    ///
    /// Summed fresh over the full entry set on every call; 0 when the pair
    /// has no entries. May be negative after debit transfers.
    pub fn net_banked(&self, ship_id: &str, year: i32) -> f64 {
        self.entries
            .iter()
            .filter(|e| e.ship_id == ship_id && e.year == year)
            .map(|e| e.amount)
            .sum()
    }

    /// Bank a compliance surplus for a ship-year.
    ///
    /// The amount must be positive, the route must exist, and the amount
    /// may not exceed the route's compliance balance as recomputed at this
    /// instant. On success one positive entry is appended and returned.
    pub fn bank_surplus(
        &mut self,
        catalog: &RouteCatalog,
        ship_id: &str,
        year: i32,
        amount: f64,
    ) -> BankingResult<BankEntry> {
        if amount <= 0.0 {
            return Err(BankingError::NonPositiveAmount(amount));
        }
        let route = catalog.lookup(ship_id, Some(year))?;
        let available = compute_cb(route).cb_gco2eq;
        if amount > available {
            return Err(BankingError::InsufficientSurplus {
                requested: amount,
                available,
            });
        }

        let entry = BankEntry::new(ship_id, year, amount);
        self.entries.push(entry.clone());
        tracing::info!(ship_id, year, amount, "surplus banked");
        Ok(entry)
    }

    /// Transfer banked surplus from one ship to another for a year.
    ///
    /// Checked against the sender's *net* position, which already reflects
    /// prior transfers. On success the debit and credit entries are
    /// appended together and both are returned.
    pub fn transfer_banked(
        &mut self,
        catalog: &RouteCatalog,
        from_ship_id: &str,
        to_ship_id: &str,
        year: i32,
        amount: f64,
    ) -> BankingResult<Transfer> {
        if amount <= 0.0 {
            return Err(BankingError::NonPositiveAmount(amount));
        }
        if from_ship_id == to_ship_id {
            return Err(BankingError::SelfTransfer(from_ship_id.to_string()));
        }
        catalog.lookup(from_ship_id, Some(year))?;
        catalog.lookup(to_ship_id, Some(year))?;

        let available = self.net_banked(from_ship_id, year);
        if available < amount {
            return Err(BankingError::InsufficientBalance {
                requested: amount,
                available,
            });
        }

        let from_entry = BankEntry::new(from_ship_id, year, -amount);
        let to_entry = BankEntry::new(to_ship_id, year, amount);
        self.entries
            .extend([from_entry.clone(), to_entry.clone()]);
        tracing::info!(from_ship_id, to_ship_id, year, amount, "banked surplus transferred");
        Ok(Transfer {
            from_entry,
            to_entry,
        })
    }

    /// Entries for a `(shipId, year)` pair, newest first.
    pub fn records(&self, ship_id: &str, year: i32) -> Vec<BankEntry> {
        // Walk in reverse append order so the later of two entries with an
        // identical timestamp still sorts first.
        let mut records: Vec<BankEntry> = self
            .entries
            .iter()
            .rev()
            .filter(|e| e.ship_id == ship_id && e.year == year)
            .cloned()
            .collect();
        records.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        records
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fueleu_catalog::sample_fleet;

    const EPS: f64 = 1e-6;

    fn catalog() -> RouteCatalog {
        RouteCatalog::new(sample_fleet()).unwrap()
    }

    #[test]
    fn test_bank_within_surplus() {
        let catalog = catalog();
        let mut ledger = BankingLedger::new();

        let entry = ledger
            .bank_surplus(&catalog, "R002", 2024, 1_000_000.0)
            .unwrap();
        assert_eq!(entry.amount, 1_000_000.0);
        assert!((ledger.net_banked("R002", 2024) - 1_000_000.0).abs() < EPS);
    }

    #[test]
    fn test_bank_rejects_non_positive_amount() {
        let catalog = catalog();
        let mut ledger = BankingLedger::new();

        assert!(matches!(
            ledger.bank_surplus(&catalog, "R002", 2024, 0.0),
            Err(BankingError::NonPositiveAmount(_))
        ));
        assert!(matches!(
            ledger.bank_surplus(&catalog, "R002", 2024, -5.0),
            Err(BankingError::NonPositiveAmount(_))
        ));
        assert!(ledger.entries().is_empty());
    }

    #[test]
    fn test_bank_rejects_unknown_route() {
        let catalog = catalog();
        let mut ledger = BankingLedger::new();

        assert!(matches!(
            ledger.bank_surplus(&catalog, "R999", 2024, 1.0),
            Err(BankingError::RouteNotFound(_))
        ));
    }

    #[test]
    fn test_bank_beyond_surplus_leaves_ledger_untouched() {
        // R002/2024 has a CB of ~263M grams; 300M exceeds it.
        let catalog = catalog();
        let mut ledger = BankingLedger::new();

        let err = ledger
            .bank_surplus(&catalog, "R002", 2024, 300_000_000.0)
            .unwrap_err();
        assert!(matches!(err, BankingError::InsufficientSurplus { .. }));
        assert!(ledger.entries().is_empty());
        assert_eq!(ledger.net_banked("R002", 2024), 0.0);
    }

    #[test]
    fn test_deficit_route_has_nothing_to_bank() {
        // R001/2024 is above target, so its CB is negative.
        let catalog = catalog();
        let mut ledger = BankingLedger::new();

        assert!(matches!(
            ledger.bank_surplus(&catalog, "R001", 2024, 1.0),
            Err(BankingError::InsufficientSurplus { .. })
        ));
    }

    #[test]
    fn test_transfer_nets_both_sides() {
        let catalog = catalog();
        let mut ledger = BankingLedger::new();
        ledger
            .bank_surplus(&catalog, "R002", 2024, 1_000_000.0)
            .unwrap();

        let transfer = ledger
            .transfer_banked(&catalog, "R002", "R001", 2024, 500_000.0)
            .unwrap();
        assert_eq!(transfer.from_entry.amount, -500_000.0);
        assert_eq!(transfer.to_entry.amount, 500_000.0);
        assert_eq!(ledger.entries().len(), 3);
        assert!((ledger.net_banked("R002", 2024) - 500_000.0).abs() < EPS);
        assert!((ledger.net_banked("R001", 2024) - 500_000.0).abs() < EPS);
    }

    #[test]
    fn test_transfer_validation() {
        let catalog = catalog();
        let mut ledger = BankingLedger::new();
        ledger
            .bank_surplus(&catalog, "R002", 2024, 1_000_000.0)
            .unwrap();

        assert!(matches!(
            ledger.transfer_banked(&catalog, "R002", "R001", 2024, 0.0),
            Err(BankingError::NonPositiveAmount(_))
        ));
        assert!(matches!(
            ledger.transfer_banked(&catalog, "R002", "R002", 2024, 1.0),
            Err(BankingError::SelfTransfer(_))
        ));
        assert!(matches!(
            ledger.transfer_banked(&catalog, "R002", "R999", 2024, 1.0),
            Err(BankingError::RouteNotFound(_))
        ));
        // R004 only sails in 2025.
        assert!(matches!(
            ledger.transfer_banked(&catalog, "R002", "R004", 2024, 1.0),
            Err(BankingError::RouteNotFound(_))
        ));
        // Nothing was appended by the failures above.
        assert_eq!(ledger.entries().len(), 1);
    }

    #[test]
    fn test_transfer_checked_against_net_not_gross() {
        let catalog = catalog();
        let mut ledger = BankingLedger::new();
        ledger
            .bank_surplus(&catalog, "R002", 2024, 1_000_000.0)
            .unwrap();
        ledger
            .transfer_banked(&catalog, "R002", "R001", 2024, 800_000.0)
            .unwrap();

        // Net is now 200k, so a 300k transfer must fail even though 1M was
        // banked in total.
        let err = ledger
            .transfer_banked(&catalog, "R002", "R003", 2024, 300_000.0)
            .unwrap_err();
        assert!(
            matches!(err, BankingError::InsufficientBalance { available, .. } if (available - 200_000.0).abs() < EPS)
        );
    }

    #[test]
    fn test_transfers_conserve_total_banked_mass() {
        let catalog = catalog();
        let mut ledger = BankingLedger::new();
        ledger
            .bank_surplus(&catalog, "R002", 2024, 1_000_000.0)
            .unwrap();

        let total_before: f64 = ["R001", "R002", "R003"]
            .iter()
            .map(|s| ledger.net_banked(s, 2024))
            .sum();

        ledger
            .transfer_banked(&catalog, "R002", "R001", 2024, 500_000.0)
            .unwrap();
        ledger
            .transfer_banked(&catalog, "R001", "R003", 2024, 200_000.0)
            .unwrap();

        let total_after: f64 = ["R001", "R002", "R003"]
            .iter()
            .map(|s| ledger.net_banked(s, 2024))
            .sum();
        assert!((total_before - total_after).abs() < EPS);
    }

    #[test]
    fn test_records_newest_first() {
        let catalog = catalog();
        let mut ledger = BankingLedger::new();
        let first = ledger
            .bank_surplus(&catalog, "R002", 2024, 100.0)
            .unwrap();
        let second = ledger
            .bank_surplus(&catalog, "R002", 2024, 200.0)
            .unwrap();

        let records = ledger.records("R002", 2024);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, second.id);
        assert_eq!(records[1].id, first.id);
    }

    #[test]
    fn test_records_scoped_to_ship_and_year() {
        let catalog = catalog();
        let mut ledger = BankingLedger::new();
        ledger
            .bank_surplus(&catalog, "R002", 2024, 100.0)
            .unwrap();

        assert!(ledger.records("R001", 2024).is_empty());
        assert!(ledger.records("R002", 2025).is_empty());
    }
}
