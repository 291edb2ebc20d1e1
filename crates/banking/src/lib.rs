//! FuelEU Banking Ledger
//!
//! Append-only log of signed banking entries per ship and year. Banking a
//! surplus appends one positive entry; transferring banked surplus appends
//! a debit/credit pair as an indivisible unit. Net positions are summed
//! fresh from the full entry set on every query.

pub mod entry;
pub mod error;
pub mod ledger;

pub use entry::{BankEntry, Transfer};
pub use error::{BankingError, BankingResult};
pub use ledger::BankingLedger;
