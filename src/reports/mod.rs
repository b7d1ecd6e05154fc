//! Reports module for the expense ledger
//!
//! Read-only views over a ledger snapshot: the full listing, totals by month
//! and category, search, and the trend series behind the chart.

pub mod listing;
pub mod search;
pub mod summary;
pub mod trend;

pub use listing::ExpenseListing;
pub use search::{search, SearchMode, SearchQuery};
pub use summary::{CategoryBreakdown, CategoryScope, CategoryTotal, MonthlyTotal, SummaryReport};
pub use trend::{trend_series, TrendPoint};
