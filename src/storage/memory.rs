//! In-memory ledger store for exercising services without a file

use std::cell::RefCell;

use super::LedgerStore;
use crate::error::LedgerResult;
use crate::models::Ledger;

/// Store that keeps the snapshot in memory only
#[derive(Debug, Default)]
pub struct MemoryStore {
    snapshot: RefCell<Ledger>,
    saves: RefCell<usize>,
}

impl MemoryStore {
    /// The currently saved snapshot
    pub fn snapshot(&self) -> Ledger {
        self.snapshot.borrow().clone()
    }

    /// Number of successful saves so far
    pub fn save_count(&self) -> usize {
        *self.saves.borrow()
    }
}

impl LedgerStore for MemoryStore {
    fn load(&self) -> LedgerResult<Ledger> {
        Ok(self.snapshot())
    }

    fn save(&self, ledger: &Ledger) -> LedgerResult<()> {
        *self.snapshot.borrow_mut() = ledger.clone();
        *self.saves.borrow_mut() += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Expense, Money};
    use chrono::NaiveDate;

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryStore::default();
        assert!(store.load().unwrap().is_empty());

        let ledger = Ledger::default().with_added(
            Expense::new(
                NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
                Money::from_cents(100),
                Category::Shopping,
                "",
            )
            .unwrap(),
        );
        store.save(&ledger).unwrap();

        assert_eq!(store.load().unwrap(), ledger);
        assert_eq!(store.save_count(), 1);
    }
}
