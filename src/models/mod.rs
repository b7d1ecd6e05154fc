//! Core data models for the expense ledger
//!
//! This module contains the data structures that represent the ledger
//! domain: expenses, categories, money amounts, and the ledger snapshot.

pub mod category;
pub mod expense;
pub mod ledger;
pub mod money;
pub mod month;

pub use category::Category;
pub use expense::{
    parse_amount, parse_date, Expense, ExpenseInput, ExpenseUpdate, DATE_FORMAT, MAX_AMOUNT,
};
pub use ledger::Ledger;
pub use money::Money;
pub use month::Month;
