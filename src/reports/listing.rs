//! Expense listing
//!
//! A borrowed view over the ledger that renders the full table only when
//! displayed.

use std::fmt;

use crate::display::expense::format_expense_table;
use crate::models::Ledger;

/// Every expense with its index, rendered as a table on `Display`
#[derive(Debug, Clone, Copy)]
pub struct ExpenseListing<'a> {
    ledger: &'a Ledger,
    currency: &'a str,
}

impl<'a> ExpenseListing<'a> {
    /// Listing of `ledger`, or `None` when there is nothing to show
    pub fn new(ledger: &'a Ledger, currency: &'a str) -> Option<Self> {
        (!ledger.is_empty()).then_some(Self { ledger, currency })
    }

    pub fn len(&self) -> usize {
        self.ledger.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ledger.is_empty()
    }
}

impl fmt::Display for ExpenseListing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_expense_table(self.ledger.iter(), self.currency))
    }
}
