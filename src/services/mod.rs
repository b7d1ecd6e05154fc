//! Service layer for the expense ledger
//!
//! Business logic that sits between the text interface and storage.

pub mod expense;

pub use expense::{Confirmation, DeleteOutcome, ExpenseService};
