//! Display formatting for terminal output
//!
//! Provides utilities for formatting ledger data for terminal display,
//! including tables and the trend chart.

pub mod chart;
pub mod expense;
pub mod report;

pub use chart::format_trend_chart;
pub use expense::{format_expense_line, format_expense_table};
