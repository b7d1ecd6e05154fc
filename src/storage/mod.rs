//! Storage layer for the expense ledger
//!
//! The ledger is persisted as a full snapshot: each save rewrites everything.
//! `LedgerStore` is the seam between the services and the file so the
//! services can be exercised against an in-memory store.

pub mod csv_store;
pub mod file_io;
#[cfg(test)]
pub mod memory;

pub use csv_store::{CsvLedgerStore, LEDGER_HEADER};
pub use file_io::{read_csv, write_csv_atomic};
#[cfg(test)]
pub use memory::MemoryStore;

use crate::error::LedgerResult;
use crate::models::Ledger;

/// Durable home of a ledger snapshot
pub trait LedgerStore {
    /// Load the last saved snapshot, or an empty ledger if none exists
    fn load(&self) -> LedgerResult<Ledger>;

    /// Replace the saved snapshot with `ledger`
    fn save(&self, ledger: &Ledger) -> LedgerResult<()>;
}
