//! CSV ledger file
//!
//! Reads and rewrites `Date,Amount,Category,Description` files. Every save
//! replaces the whole file.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{LedgerError, LedgerResult};
use crate::models::{parse_amount, parse_date, Category, Expense, Ledger, DATE_FORMAT};

use super::file_io::{read_csv, write_csv_atomic};
use super::LedgerStore;

/// Column headers of the ledger file, in order
pub const LEDGER_HEADER: [&str; 4] = ["Date", "Amount", "Category", "Description"];

/// One row of the ledger file as text
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ExpenseRow {
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Amount")]
    amount: String,
    #[serde(rename = "Category")]
    category: String,
    #[serde(rename = "Description", default)]
    description: String,
}

impl ExpenseRow {
    fn from_expense(expense: &Expense) -> Self {
        Self {
            date: expense.date.format(DATE_FORMAT).to_string(),
            amount: expense.amount.to_decimal_string(),
            category: expense.category.name().to_string(),
            description: expense.description.clone(),
        }
    }

    fn into_expense(self, line: usize) -> LedgerResult<Expense> {
        let invalid = |e: LedgerError| LedgerError::Storage(format!("Line {}: {}", line, e));

        // Older files may carry a midnight timestamp after the date
        let date_part = self
            .date
            .split(|c: char| c == ' ' || c == 'T')
            .next()
            .unwrap_or_default();

        let date = parse_date(date_part).map_err(invalid)?;
        let amount = parse_amount(&self.amount).map_err(invalid)?;
        let category: Category = self.category.parse().map_err(invalid)?;
        Expense::new(date, amount, category, self.description).map_err(invalid)
    }
}

/// Ledger store backed by a CSV file
#[derive(Debug, Clone)]
pub struct CsvLedgerStore {
    path: PathBuf,
}

impl CsvLedgerStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LedgerStore for CsvLedgerStore {
    fn load(&self) -> LedgerResult<Ledger> {
        let expenses = read_csv(&self.path, ExpenseRow::into_expense)?;
        Ok(Ledger::new(expenses))
    }

    fn save(&self, ledger: &Ledger) -> LedgerResult<()> {
        let rows: Vec<ExpenseRow> = ledger
            .expenses()
            .iter()
            .map(ExpenseRow::from_expense)
            .collect();
        write_csv_atomic(&self.path, &LEDGER_HEADER, &rows)
    }
}
