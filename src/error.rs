//! Error types.
//!
//! Each core operation returns its own error kind so callers can match on the
//! exact failure. `AnalyticsError` unifies them for the orchestration layer and
//! `AppError` is what the binary turns into a message and exit code.

use thiserror::Error;

/// Failures while turning an observation table into lagged features.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DataPreparationError {
    #[error("missing required column: `{column}`")]
    MissingColumn { column: String },

    #[error("column `{column}` has {actual} rows, expected {expected}")]
    LengthMismatch {
        column: String,
        expected: usize,
        actual: usize,
    },
}

/// Failures while splitting data and fitting the linear model.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelTrainingError {
    #[error("feature/label length mismatch: {features} features vs {labels} labels")]
    LengthMismatch { features: usize, labels: usize },

    #[error("insufficient samples: need at least {required}, got {actual}")]
    InsufficientSamples { required: usize, actual: usize },

    #[error("test fraction must be in (0, 1), got {0}")]
    InvalidTestFraction(f64),

    #[error("non-finite input value in sample {row}")]
    NonFiniteInput { row: usize },

    #[error("least squares solve failed on {n_train} training samples")]
    SolveFailed { n_train: usize },
}

/// Failures while applying a fitted model.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PredictionError {
    #[error("input row {row} has {actual} features, model expects {expected}")]
    DimensionMismatch {
        row: usize,
        expected: usize,
        actual: usize,
    },
}

/// Failures while labelling trend regimes over a table.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TrendProcessingError {
    #[error("missing required column: `{column}`")]
    MissingColumn { column: String },

    #[error("invalid moving average windows: short={short}, long={long} (need 1 <= short < long)")]
    InvalidWindows { short: usize, long: usize },
}

/// Failures while computing momentum over a cached series.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TrendAnalysisError {
    #[error("symbol {symbol} not found in data cache")]
    SymbolNotFound { symbol: String },

    #[error("invalid window {window} for {symbol}: series has {len} prices")]
    InvalidWindow {
        symbol: String,
        window: usize,
        len: usize,
    },

    #[error("momentum undefined for {symbol}: window starts at price {first}")]
    ZeroBasePrice { symbol: String, first: f64 },
}

/// Any analytics failure.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalyticsError {
    #[error("error preparing data: {0}")]
    DataPreparation(#[from] DataPreparationError),

    #[error("error training model: {0}")]
    ModelTraining(#[from] ModelTrainingError),

    #[error("error making predictions: {0}")]
    Prediction(#[from] PredictionError),

    #[error("error processing market data: {0}")]
    TrendProcessing(#[from] TrendProcessingError),

    #[error("error analyzing trends: {0}")]
    TrendAnalysis(#[from] TrendAnalysisError),
}

impl AnalyticsError {
    /// Process exit code used by the `dtr` binary.
    pub fn exit_code(&self) -> u8 {
        match self {
            AnalyticsError::DataPreparation(_) | AnalyticsError::TrendProcessing(_) => 3,
            AnalyticsError::ModelTraining(_)
            | AnalyticsError::Prediction(_)
            | AnalyticsError::TrendAnalysis(_) => 4,
        }
    }
}

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl From<AnalyticsError> for AppError {
    fn from(err: AnalyticsError) -> Self {
        AppError::new(err.exit_code(), err.to_string())
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analytics_error_wraps_kind_message() {
        let err: AnalyticsError = TrendAnalysisError::SymbolNotFound {
            symbol: "XYZ".to_string(),
        }
        .into();
        let msg = err.to_string();
        assert!(msg.starts_with("error analyzing trends"));
        assert!(msg.contains("XYZ"));
    }

    #[test]
    fn app_error_carries_exit_code_from_kind() {
        let prep: AppError = AnalyticsError::from(DataPreparationError::MissingColumn {
            column: "demand".to_string(),
        })
        .into();
        assert_eq!(prep.exit_code(), 3);

        let fit: AppError = AnalyticsError::from(ModelTrainingError::InsufficientSamples {
            required: 2,
            actual: 1,
        })
        .into();
        assert_eq!(fit.exit_code(), 4);
        assert!(fit.to_string().contains("need at least 2"));
    }
}
