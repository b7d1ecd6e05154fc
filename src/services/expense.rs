//! Expense service
//!
//! Business logic for the mutating operations: add, edit, delete. Each
//! operation takes the current ledger snapshot and returns the next one. The
//! next snapshot is written to the store before it is returned, so a failed
//! write leaves the caller holding the previous, still-persisted snapshot.

use crate::audit::{AuditEntry, AuditLogger};
use crate::error::LedgerResult;
use crate::models::{Expense, ExpenseInput, ExpenseUpdate, Ledger};
use crate::storage::LedgerStore;

/// Operator answer to a delete confirmation prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Declined,
}

impl Confirmation {
    /// Only `y` or `yes` (any case) confirms; everything else declines
    pub fn from_response(response: &str) -> Self {
        match response.trim().to_ascii_lowercase().as_str() {
            "y" | "yes" => Self::Confirmed,
            _ => Self::Declined,
        }
    }
}

/// Result of a delete request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// Record removed; holds the new snapshot and the removed expense
    Deleted { ledger: Ledger, removed: Expense },
    /// Operator declined; nothing changed
    Cancelled,
}

/// Service for expense management
pub struct ExpenseService<'a> {
    store: &'a dyn LedgerStore,
    audit: Option<&'a AuditLogger>,
}

impl<'a> ExpenseService<'a> {
    pub fn new(store: &'a dyn LedgerStore) -> Self {
        Self { store, audit: None }
    }

    /// Record every successful mutation in `logger`
    pub fn with_audit(mut self, logger: &'a AuditLogger) -> Self {
        self.audit = Some(logger);
        self
    }

    /// Load the persisted ledger (empty if nothing was saved yet)
    pub fn load(&self) -> LedgerResult<Ledger> {
        self.store.load()
    }

    /// Validate `input` and append it as a new expense
    pub fn add(&self, ledger: &Ledger, input: &ExpenseInput) -> LedgerResult<Ledger> {
        let expense = input.parse()?;
        let next = ledger.with_added(expense.clone());

        self.store.save(&next)?;
        self.record(AuditEntry::create(next.len() - 1, &expense));

        Ok(next)
    }

    /// Apply a partial update to the expense at `index`
    pub fn edit(&self, ledger: &Ledger, index: usize, update: &ExpenseUpdate) -> LedgerResult<Ledger> {
        let index = ledger.check_index(index)?;
        let before = &ledger.expenses()[index];
        let after = update.apply(before);
        let next = ledger.with_replaced(index, after.clone())?;

        self.store.save(&next)?;
        if *before != after {
            self.record(AuditEntry::update(index, before, &after));
        }

        Ok(next)
    }

    /// Remove the expense at `index` if the operator confirmed
    pub fn delete(
        &self,
        ledger: &Ledger,
        index: usize,
        confirmation: Confirmation,
    ) -> LedgerResult<DeleteOutcome> {
        let index = ledger.check_index(index)?;
        if confirmation == Confirmation::Declined {
            return Ok(DeleteOutcome::Cancelled);
        }

        let (next, removed) = ledger.with_removed(index)?;

        self.store.save(&next)?;
        self.record(AuditEntry::delete(index, &removed));

        Ok(DeleteOutcome::Deleted {
            ledger: next,
            removed,
        })
    }

    // The ledger file is already written at this point, so an audit failure
    // must not turn the operation into an error.
    fn record(&self, entry: AuditEntry) {
        if let Some(logger) = self.audit {
            if let Err(e) = logger.log(&entry) {
                eprintln!("Warning: failed to write audit log: {}", e);
            }
        }
    }
}
