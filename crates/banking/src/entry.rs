//! Bank entries - immutable ledger rows

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One immutable row in the banking ledger.
///
/// `amount` is signed: banking produces positive entries, the debit half of
/// a transfer a negative one. Entries are never updated or deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankEntry {
    pub id: Uuid,
    pub ship_id: String,
    pub year: i32,
    /// Signed grams CO2eq
    pub amount: f64,
    pub timestamp: DateTime<Utc>,
}

impl BankEntry {
    /// Stamp a new entry with a fresh id and the current instant.
    pub(crate) fn new(ship_id: impl Into<String>, year: i32, amount: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            ship_id: ship_id.into(),
            year,
            amount,
            timestamp: Utc::now(),
        }
    }
}

/// The two halves of a completed transfer, debit first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transfer {
    pub from_entry: BankEntry,
    pub to_entry: BankEntry,
}
