//! Shared domain types.
//!
//! These types are intentionally kept lightweight so they can be:
//!
//! - built in-memory by callers or loaded from CSV
//! - passed through the demand and trend pipelines unchanged
//! - exported to CSV/JSON

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Column holding the observed price.
pub const PRICE: &str = "price";
/// Column holding the traded volume.
pub const VOLUME: &str = "volume";
/// Column holding the observed demand.
pub const DEMAND: &str = "demand";

/// A single aligned row of observations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub price: f64,
    pub volume: f64,
    pub demand: f64,
}

/// Column-oriented observation table.
///
/// Row order is time order. Columns are keyed by lower-case name and may be
/// absent; the operations that need a column report its absence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObservationTable {
    columns: BTreeMap<String, Vec<f64>>,
}

impl ObservationTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table with `price`, `volume` and `demand` columns.
    pub fn from_observations(rows: &[Observation]) -> Self {
        Self::new()
            .with_column(PRICE, rows.iter().map(|r| r.price).collect())
            .with_column(VOLUME, rows.iter().map(|r| r.volume).collect())
            .with_column(DEMAND, rows.iter().map(|r| r.demand).collect())
    }

    pub fn with_column(mut self, name: impl Into<String>, values: Vec<f64>) -> Self {
        self.insert_column(name, values);
        self
    }

    /// Insert or replace a column.
    pub(crate) fn insert_column(&mut self, name: impl Into<String>, values: Vec<f64>) {
        self.columns.insert(name.into().to_ascii_lowercase(), values);
    }

    /// Look up a column by case-insensitive name.
    pub fn column(&self, name: &str) -> Option<&[f64]> {
        self.columns.get(&name.to_ascii_lowercase()).map(Vec::as_slice)
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    /// Number of rows (length of the longest column).
    pub fn len(&self) -> usize {
        self.columns.values().map(Vec::len).max().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Number of lagged predictors per sample.
pub const FEATURE_DIM: usize = 2;

/// Lag-one feature vector: `[price[i-1], volume[i-1]]`.
pub type FeatureVector = [f64; FEATURE_DIM];

/// Aligned lagged features and labels.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LaggedDataset {
    pub features: Vec<FeatureVector>,
    pub labels: Vec<f64>,
}

impl LaggedDataset {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Options for the train/test split.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrainOptions {
    /// Fraction of samples held out for scoring.
    pub test_fraction: f64,
}

impl Default for TrainOptions {
    fn default() -> Self {
        Self { test_fraction: 0.2 }
    }
}

/// Fit quality diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FitQuality {
    pub n_train: usize,
    pub n_test: usize,
    /// R² on the held-out subset; `None` with fewer than two held-out samples.
    pub holdout_r2: Option<f64>,
}

/// Fitted linear demand model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemandModel {
    pub intercept: f64,
    /// One coefficient per feature, in `[price_lag, volume_lag]` order.
    pub coefficients: Vec<f64>,
    pub quality: FitQuality,
}

impl DemandModel {
    /// Number of input features the model was trained on.
    pub fn dimension(&self) -> usize {
        self.coefficients.len()
    }
}

/// Trend regime assigned to a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendLabel {
    Uptrend,
    Downtrend,
    Sideways,
}

impl TrendLabel {
    pub const ALL: [TrendLabel; 3] = [TrendLabel::Uptrend, TrendLabel::Downtrend, TrendLabel::Sideways];

    pub fn as_str(self) -> &'static str {
        match self {
            TrendLabel::Uptrend => "uptrend",
            TrendLabel::Downtrend => "downtrend",
            TrendLabel::Sideways => "sideways",
        }
    }
}

impl fmt::Display for TrendLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Row index to trend label, in index order.
pub type TrendLabels = BTreeMap<usize, TrendLabel>;

/// Moving average windows used by the trend classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendWindows {
    pub short: usize,
    pub long: usize,
}

impl Default for TrendWindows {
    fn default() -> Self {
        Self { short: 20, long: 50 }
    }
}

/// Daily price history for one symbol.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceSeries {
    pub dates: Vec<NaiveDate>,
    pub prices: Vec<f64>,
}

impl PriceSeries {
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}

/// Momentum summary for one symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendInfo {
    pub symbol: String,
    /// Percentage change over the trailing window, rounded to 2 decimals.
    pub trend_momentum: f64,
    /// When the summary was produced (not the data time).
    pub timestamp: DateTime<Utc>,
}

/// Parameters for the synthetic observation sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleConfig {
    pub rows: usize,
    pub seed: u64,
    /// Standard deviation of the demand noise term.
    pub noise_sd: f64,
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            rows: 250,
            seed: 42,
            noise_sd: 1.0,
        }
    }
}

/// Configuration for a demand prediction run.
///
/// This is derived from CLI flags (plus defaults).
#[derive(Debug, Clone)]
pub struct DemandConfig {
    /// Observation CSV; a synthetic sample is used when absent.
    pub csv_path: Option<PathBuf>,
    pub sample: SampleConfig,
    /// Split seed; `None` draws one from OS entropy.
    pub split_seed: Option<u64>,
    pub train: TrainOptions,
    /// Extra `[price_lag, volume_lag]` rows to predict.
    pub inputs: Vec<Vec<f64>>,
    pub export: Option<PathBuf>,
}

/// Configuration for a trend classification run.
#[derive(Debug, Clone)]
pub struct TrendConfig {
    pub csv_path: Option<PathBuf>,
    pub sample: SampleConfig,
    pub windows: TrendWindows,
    /// How many of the most recent labels to print.
    pub tail: usize,
    pub export: Option<PathBuf>,
}

/// Configuration for a momentum run.
#[derive(Debug, Clone)]
pub struct MomentumConfig {
    pub symbol: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub window: usize,
    pub export: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_from_observations_keeps_row_order() {
        let rows = [
            Observation { price: 10.0, volume: 1.0, demand: 5.0 },
            Observation { price: 20.0, volume: 2.0, demand: 15.0 },
        ];
        let table = ObservationTable::from_observations(&rows);
        assert_eq!(table.len(), 2);
        assert_eq!(table.column(PRICE), Some(&[10.0, 20.0][..]));
        assert_eq!(table.column(DEMAND), Some(&[5.0, 15.0][..]));
        assert!(table.column("date").is_none());
    }

    #[test]
    fn column_names_are_lowercased() {
        let table = ObservationTable::new().with_column("Price", vec![1.0]);
        assert!(table.column(PRICE).is_some());
        assert_eq!(table.column("PRICE"), Some(&[1.0][..]));
        assert_eq!(table.column("Price"), Some(&[1.0][..]));
        assert_eq!(table.column_names().collect::<Vec<_>>(), vec!["price"]);
    }

    #[test]
    fn trend_label_serializes_lowercase() {
        let json = serde_json::to_string(&TrendLabel::Downtrend).unwrap();
        assert_eq!(json, "\"downtrend\"");
        assert_eq!(TrendLabel::Sideways.to_string(), "sideways");
    }
}
