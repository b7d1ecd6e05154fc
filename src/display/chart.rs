//! Terminal trend chart
//!
//! A dot-plot with one row per expense: date on the left, a marker placed
//! along the axis in proportion to the amount, amount on the right.

use crate::models::DATE_FORMAT;
use crate::reports::TrendPoint;

use super::report::{format_header, separator};

const MARKER: char = '●';
const MIN_WIDTH: usize = 10;

/// Render `points` as a dot-plot `width` characters wide
///
/// Returns an empty string for an empty series.
pub fn format_trend_chart(points: &[TrendPoint], width: usize, currency: &str) -> String {
    if points.is_empty() {
        return String::new();
    }

    let width = width.max(MIN_WIDTH);
    let largest = points
        .iter()
        .map(|p| p.amount.cents())
        .max()
        .unwrap_or(0)
        .max(1);

    let mut output = String::new();
    output.push_str(&format_header("Expense Trend", 11 + width));
    output.push('\n');

    for point in points {
        let column = marker_column(point.amount.cents(), largest, width);
        output.push_str(&format!(
            "{} │{}{}{} {}\n",
            point.date.format(DATE_FORMAT),
            " ".repeat(column),
            MARKER,
            " ".repeat(width - 1 - column),
            point.amount.format_with_symbol(currency)
        ));
    }

    output.push_str(&format!("{:10} └{}\n", "", separator(width)));
    output
}

fn marker_column(cents: i64, largest: i64, width: usize) -> usize {
    let scaled = (cents.max(0) as f64 / largest as f64) * (width - 1) as f64;
    (scaled.round() as usize).min(width - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{parse_date, Money};

    fn point(date: &str, cents: i64) -> TrendPoint {
        TrendPoint {
            date: parse_date(date).unwrap(),
            amount: Money::from_cents(cents),
        }
    }

    #[test]
    fn test_empty_series_renders_nothing() {
        assert_eq!(format_trend_chart(&[], 40, "$"), "");
    }

    #[test]
    fn test_marker_positions() {
        assert_eq!(marker_column(1000, 1000, 20), 19);
        assert_eq!(marker_column(500, 1000, 21), 10);
        assert_eq!(marker_column(0, 1000, 20), 0);
    }

    #[test]
    fn test_one_row_per_point() {
        let chart = format_trend_chart(
            &[point("2024-03-01", 250), point("2024-03-02", 1000)],
            20,
            "$",
        );
        let rows: Vec<&str> = chart.lines().filter(|l| l.contains(MARKER)).collect();

        assert_eq!(rows.len(), 2);
        assert!(rows[0].starts_with("2024-03-01"));
        assert!(rows[0].ends_with("$2.50"));
        assert!(rows[1].ends_with("$10.00"));

        let first = rows[0].chars().position(|c| c == MARKER).unwrap();
        let second = rows[1].chars().position(|c| c == MARKER).unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_narrow_width_is_clamped() {
        let chart = format_trend_chart(&[point("2024-03-01", 100)], 0, "$");
        assert!(chart.contains(MARKER));
    }
}
