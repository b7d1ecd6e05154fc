//! Expense Ledger - terminal-based personal expense tracker
//!
//! This library provides the core functionality for a single-user expense
//! ledger persisted as one CSV file. Expenses are added, edited, and deleted
//! through an interactive menu, and summarized or searched on demand.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution and user settings
//! - `error`: Custom error types
//! - `models`: Core data models (expense, category, money, ledger)
//! - `storage`: CSV ledger file and the `LedgerStore` seam
//! - `services`: Add, edit, and delete over ledger snapshots
//! - `reports`: Listing, summary, search, and trend series
//! - `audit`: Audit logging of every mutation
//! - `display`: Tables and the terminal trend chart
//! - `cli`: Interactive menu and subcommands
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_ledger::services::ExpenseService;
//! use expense_ledger::storage::CsvLedgerStore;
//!
//! let store = CsvLedgerStore::new("expense_tracker.csv".into());
//! let service = ExpenseService::new(&store);
//! let ledger = service.add(&service.load()?, &input)?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{LedgerError, LedgerResult};
