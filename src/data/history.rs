//! Synthetic daily price history.
//!
//! Stand-in for a market data source: one price per calendar day from `start`
//! to `end` inclusive, starting at 100 and rising by 1 per day.

use chrono::NaiveDate;

use crate::domain::PriceSeries;

const BASE_PRICE: f64 = 100.0;

/// Build the synthetic series. `start > end` yields an empty series.
pub fn synthetic_history(start: NaiveDate, end: NaiveDate) -> PriceSeries {
    let dates: Vec<NaiveDate> = start.iter_days().take_while(|d| *d <= end).collect();
    let prices = (0..dates.len()).map(|offset| BASE_PRICE + offset as f64).collect();
    PriceSeries { dates, prices }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn history_covers_inclusive_range() {
        let series = synthetic_history(date(2024, 1, 1), date(2024, 1, 5));
        assert_eq!(series.len(), 5);
        assert_eq!(series.dates.first(), Some(&date(2024, 1, 1)));
        assert_eq!(series.dates.last(), Some(&date(2024, 1, 5)));
        assert_eq!(series.prices, vec![100.0, 101.0, 102.0, 103.0, 104.0]);
    }

    #[test]
    fn history_crosses_month_and_leap_day() {
        let series = synthetic_history(date(2024, 2, 28), date(2024, 3, 1));
        assert_eq!(series.dates, vec![date(2024, 2, 28), date(2024, 2, 29), date(2024, 3, 1)]);
    }

    #[test]
    fn history_single_day_and_inverted_range() {
        let one = synthetic_history(date(2024, 6, 1), date(2024, 6, 1));
        assert_eq!(one.prices, vec![100.0]);

        let none = synthetic_history(date(2024, 6, 2), date(2024, 6, 1));
        assert!(none.is_empty());
        assert!(none.dates.is_empty());
    }
}
