//! Spending trend series
//!
//! Every expense as a (date, amount) point in chronological order, for the
//! trend chart.

use chrono::NaiveDate;

use crate::models::{Ledger, Money};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub amount: Money,
}

/// Points sorted by date; same-day expenses keep their ledger order
pub fn trend_series(ledger: &Ledger) -> Vec<TrendPoint> {
    let mut points: Vec<TrendPoint> = ledger
        .iter()
        .map(|(_, e)| TrendPoint {
            date: e.date,
            amount: e.amount,
        })
        .collect();
    points.sort_by_key(|p| p.date);
    points
}
