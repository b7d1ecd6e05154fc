//! Ledger model
//!
//! An ordered, immutable snapshot of expenses. Every mutation returns a new
//! snapshot so the caller decides when the new state replaces the old one.
//! Indices are positions in the sequence: removing a record shifts the ones
//! after it down by one.

use super::expense::Expense;
use super::month::Month;
use crate::error::{LedgerError, LedgerResult};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    expenses: Vec<Expense>,
}

impl Ledger {
    pub fn new(expenses: Vec<Expense>) -> Self {
        Self { expenses }
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Expense> {
        self.expenses.get(index)
    }

    /// Iterate over `(index, expense)` pairs in ledger order
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Expense)> {
        self.expenses.iter().enumerate()
    }

    /// Most recent month present in the ledger
    pub fn latest_month(&self) -> Option<Month> {
        self.expenses.iter().map(Expense::month).max()
    }

    /// Check that `index` addresses an existing record
    pub fn check_index(&self, index: usize) -> LedgerResult<usize> {
        if index < self.expenses.len() {
            Ok(index)
        } else {
            Err(LedgerError::invalid_index(index.to_string(), self.len()))
        }
    }

    /// Parse operator input as an index into this ledger
    pub fn resolve_index(&self, raw: &str) -> LedgerResult<usize> {
        let raw = raw.trim();
        raw.parse::<usize>()
            .map_err(|_| LedgerError::invalid_index(raw, self.len()))
            .and_then(|index| self.check_index(index))
    }

    /// New snapshot with `expense` appended
    pub fn with_added(&self, expense: Expense) -> Ledger {
        let mut expenses = self.expenses.clone();
        expenses.push(expense);
        Ledger { expenses }
    }

    /// New snapshot with the record at `index` replaced
    pub fn with_replaced(&self, index: usize, expense: Expense) -> LedgerResult<Ledger> {
        let index = self.check_index(index)?;
        let mut expenses = self.expenses.clone();
        expenses[index] = expense;
        Ok(Ledger { expenses })
    }

    /// New snapshot with the record at `index` removed, plus the removed record
    pub fn with_removed(&self, index: usize) -> LedgerResult<(Ledger, Expense)> {
        let index = self.check_index(index)?;
        let mut expenses = self.expenses.clone();
        let removed = expenses.remove(index);
        Ok((Ledger { expenses }, removed))
    }
}

impl From<Vec<Expense>> for Ledger {
    fn from(expenses: Vec<Expense>) -> Self {
        Self::new(expenses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money};
    use chrono::NaiveDate;

    fn expense(day: u32, cents: i64, description: &str) -> Expense {
        Expense::new(
            NaiveDate::from_ymd_opt(2024, 3, day).unwrap(),
            Money::from_cents(cents),
            Category::Food,
            description,
        )
        .unwrap()
    }

    fn three() -> Ledger {
        Ledger::new(vec![
            expense(1, 100, "a"),
            expense(2, 200, "b"),
            expense(3, 300, "c"),
        ])
    }

    #[test]
    fn test_with_added_preserves_original() {
        let ledger = three();
        let next = ledger.with_added(expense(4, 400, "d"));

        assert_eq!(ledger.len(), 3);
        assert_eq!(next.len(), 4);
        assert_eq!(next.get(3).unwrap().description, "d");
    }

    #[test]
    fn test_with_removed_reindexes() {
        let ledger = three();
        let (next, removed) = ledger.with_removed(1).unwrap();

        assert_eq!(removed.description, "b");
        assert_eq!(next.len(), 2);
        assert_eq!(next.get(1).unwrap().description, "c");
        let indices: Vec<_> = next.iter().map(|(i, _)| i).collect();
        assert_eq!(indices, vec![0, 1]);
    }

    #[test]
    fn test_with_replaced() {
        let ledger = three();
        let next = ledger.with_replaced(0, expense(9, 999, "z")).unwrap();
        assert_eq!(next.get(0).unwrap().description, "z");
        assert_eq!(ledger.get(0).unwrap().description, "a");
    }

    #[test]
    fn test_index_out_of_range() {
        let ledger = three();
        assert!(matches!(
            ledger.with_removed(3),
            Err(LedgerError::InvalidIndex { .. })
        ));
        assert!(matches!(
            ledger.with_replaced(10, expense(1, 1, "")),
            Err(LedgerError::InvalidIndex { .. })
        ));
    }

    #[test]
    fn test_resolve_index() {
        let ledger = three();
        assert_eq!(ledger.resolve_index(" 2 ").unwrap(), 2);
        assert!(ledger.resolve_index("3").is_err());
        assert!(ledger.resolve_index("-1").is_err());
        assert!(ledger.resolve_index("two").is_err());
        assert!(Ledger::default().resolve_index("0").is_err());
    }

    #[test]
    fn test_latest_month() {
        let mut ledger = three();
        assert_eq!(ledger.latest_month(), Month::new(2024, 3));

        ledger = ledger.with_added(
            Expense::new(
                NaiveDate::from_ymd_opt(2023, 12, 31).unwrap(),
                Money::from_cents(1),
                Category::Health,
                "",
            )
            .unwrap(),
        );
        assert_eq!(ledger.latest_month(), Month::new(2024, 3));
        assert_eq!(Ledger::default().latest_month(), None);
    }
}
