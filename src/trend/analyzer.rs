//! Momentum analysis over cached price history.
//!
//! `MarketTrendAnalyzer` owns its series store and clock, so tests can pin the
//! timestamp and nothing leaks between analyzer instances.

use chrono::NaiveDate;

use crate::data::synthetic_history;
use crate::domain::{PriceSeries, TrendInfo};
use crate::error::TrendAnalysisError;
use crate::math::round_to;
use crate::trend::clock::{Clock, SystemClock};
use crate::trend::store::SeriesStore;

#[derive(Debug, Clone, Default)]
pub struct MarketTrendAnalyzer<C = SystemClock> {
    store: SeriesStore,
    clock: C,
}

impl MarketTrendAnalyzer<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl<C: Clock> MarketTrendAnalyzer<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            store: SeriesStore::new(),
            clock,
        }
    }

    /// Start from an existing cache.
    pub fn with_store(store: SeriesStore, clock: C) -> Self {
        Self { store, clock }
    }

    pub fn store(&self) -> &SeriesStore {
        &self.store
    }

    /// Generate daily history for `symbol` and cache it, replacing any prior entry.
    pub fn fetch_historical_data(&mut self, symbol: &str, start: NaiveDate, end: NaiveDate) -> PriceSeries {
        let series = synthetic_history(start, end);
        self.store.insert(symbol, series.clone());
        series
    }

    /// Percentage momentum over the trailing `window_size` cached prices.
    pub fn analyze_trends(&self, symbol: &str, window_size: usize) -> Result<TrendInfo, TrendAnalysisError> {
        let series = self
            .store
            .get(symbol)
            .ok_or_else(|| TrendAnalysisError::SymbolNotFound {
                symbol: symbol.to_string(),
            })?;

        let len = series.len();
        if window_size == 0 || window_size > len {
            return Err(TrendAnalysisError::InvalidWindow {
                symbol: symbol.to_string(),
                window: window_size,
                len,
            });
        }

        let window = &series.prices[len - window_size..];
        let first = window[0];
        let pct = momentum(window).ok_or_else(|| TrendAnalysisError::ZeroBasePrice {
            symbol: symbol.to_string(),
            first,
        })?;

        Ok(TrendInfo {
            symbol: symbol.to_string(),
            trend_momentum: round_to(pct, 2),
            timestamp: self.clock.now(),
        })
    }
}

/// `(last - first) / first * 100`, or `None` if that is not a finite number.
pub fn momentum(prices: &[f64]) -> Option<f64> {
    let (first, last) = (*prices.first()?, *prices.last()?);
    if first == 0.0 {
        return None;
    }
    let pct = (last - first) / first * 100.0;
    pct.is_finite().then_some(pct)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trend::clock::FixedClock;
    use chrono::{TimeZone, Utc};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn analyzer() -> MarketTrendAnalyzer<FixedClock> {
        let t = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        MarketTrendAnalyzer::with_clock(FixedClock(t))
    }

    #[test]
    fn five_day_window_momentum() {
        let mut a = analyzer();
        let series = a.fetch_historical_data("XYZ", date(2024, 1, 1), date(2024, 1, 5));
        assert_eq!(series.prices, vec![100.0, 101.0, 102.0, 103.0, 104.0]);
        assert_eq!(a.store().get("XYZ").unwrap().len(), 5);

        let info = a.analyze_trends("XYZ", 5).unwrap();
        assert_eq!(info.symbol, "XYZ");
        assert_eq!(info.trend_momentum, 4.0);
        assert_eq!(info.timestamp, Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap());
    }

    #[test]
    fn trailing_window_matches_closed_form() {
        let mut a = analyzer();
        // 2024 is a leap year: 366 prices, 100..=465.
        a.fetch_historical_data("LIN", date(2024, 1, 1), date(2024, 12, 31));

        for window in [1usize, 2, 7, 30, 366] {
            let n = 366;
            let first = 100.0 + (n - window) as f64;
            let last = 100.0 + (n - 1) as f64;
            let expected = round_to((last - first) / first * 100.0, 2);
            let info = a.analyze_trends("LIN", window).unwrap();
            assert_eq!(info.trend_momentum, expected, "window {window}");
        }
        assert_eq!(a.analyze_trends("LIN", 30).unwrap().trend_momentum, 6.65);
    }

    #[test]
    fn refetch_overwrites_cached_series() {
        let mut a = analyzer();
        a.fetch_historical_data("XYZ", date(2024, 1, 1), date(2024, 1, 10));
        a.fetch_historical_data("XYZ", date(2024, 1, 1), date(2024, 1, 3));
        assert_eq!(a.store().len(), 1);
        assert_eq!(a.store().get("XYZ").unwrap().prices, vec![100.0, 101.0, 102.0]);
    }

    #[test]
    fn zero_first_price_in_window_is_rejected() {
        let mut store = SeriesStore::new();
        let mut series = synthetic_history(date(2024, 1, 1), date(2024, 1, 4));
        series.prices = vec![5.0, 0.0, 2.0, 3.0];
        store.insert("ZRO", series);
        let t = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let a = MarketTrendAnalyzer::with_store(store, FixedClock(t));

        let err = a.analyze_trends("ZRO", 3).unwrap_err();
        assert_eq!(
            err,
            TrendAnalysisError::ZeroBasePrice {
                symbol: "ZRO".to_string(),
                first: 0.0,
            }
        );
        assert_eq!(a.analyze_trends("ZRO", 2).unwrap().trend_momentum, 50.0);
    }

    #[test]
    fn unknown_symbol_is_lookup_error() {
        let a = analyzer();
        let err = a.analyze_trends("NOPE", 5).unwrap_err();
        assert_eq!(
            err,
            TrendAnalysisError::SymbolNotFound {
                symbol: "NOPE".to_string()
            }
        );
    }

    #[test]
    fn analyzers_do_not_share_cache() {
        let mut a = analyzer();
        a.fetch_historical_data("XYZ", date(2024, 1, 1), date(2024, 1, 5));
        let b = analyzer();
        assert!(b.analyze_trends("XYZ", 5).is_err());
    }

    #[test]
    fn invalid_windows_are_rejected() {
        let mut a = analyzer();
        a.fetch_historical_data("XYZ", date(2024, 1, 1), date(2024, 1, 5));
        for window in [0, 6] {
            let err = a.analyze_trends("XYZ", window).unwrap_err();
            assert_eq!(
                err,
                TrendAnalysisError::InvalidWindow {
                    symbol: "XYZ".to_string(),
                    window,
                    len: 5,
                }
            );
        }

        a.fetch_historical_data("EMPTY", date(2024, 1, 5), date(2024, 1, 1));
        assert!(matches!(
            a.analyze_trends("EMPTY", 1),
            Err(TrendAnalysisError::InvalidWindow { len: 0, .. })
        ));
    }

    #[test]
    fn momentum_undefined_for_zero_base() {
        assert_eq!(momentum(&[0.0, 5.0]), None);
        assert_eq!(momentum(&[]), None);
        assert_eq!(momentum(&[50.0, 25.0]), Some(-50.0));
    }
}
