//! Shared run logic behind the `dtr` subcommands.
//!
//! Each run goes: load/generate table -> core operation(s) -> outputs.
//! The CLI handlers then focus on presentation (printing and exports).
//!
//! This is the only layer that logs. Core failures are logged here once and
//! converted to `AppError` with the exit code of their kind.

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, error, info};

use crate::data::generate_observations;
use crate::domain::{
    DemandConfig, DemandModel, LaggedDataset, MomentumConfig, ObservationTable, SampleConfig, TrendConfig, TrendInfo,
    TrendLabels,
};
use crate::error::{AnalyticsError, AppError};
use crate::features::prepare_data;
use crate::fit::train_model;
use crate::io::load_table;
use crate::models::predict_demand;
use crate::report::fitted_values;
use crate::trend::{Clock, MarketTrendAnalyzer, process_data};

/// All computed outputs of a `dtr predict` run.
#[derive(Debug, Clone)]
pub struct DemandRun {
    /// Human-readable description of where the table came from.
    pub source: String,
    pub table: ObservationTable,
    pub dataset: LaggedDataset,
    pub model: DemandModel,
    /// Model output for every lagged pair, aligned with `dataset`.
    pub fitted: Vec<f64>,
    /// Model output for `DemandConfig::inputs`.
    pub predictions: Vec<f64>,
}

/// All computed outputs of a `dtr trend` run.
#[derive(Debug, Clone)]
pub struct TrendRun {
    pub source: String,
    pub table: ObservationTable,
    pub labels: TrendLabels,
}

/// Prepare lagged features, train, and predict.
pub fn run_demand(config: &DemandConfig) -> Result<DemandRun, AppError> {
    let (source, table) = load_source(config.csv_path.as_deref(), &config.sample)?;

    let dataset = logged(prepare_data(&table))?;
    info!(pairs = dataset.len(), "prepared lagged features");

    let mut rng = match config.split_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let model = logged(train_model(&dataset.features, &dataset.labels, &config.train, &mut rng))?;
    info!(
        n_train = model.quality.n_train,
        n_test = model.quality.n_test,
        holdout_r2 = ?model.quality.holdout_r2,
        "model trained"
    );
    debug!(intercept = model.intercept, coefficients = ?model.coefficients, "fitted parameters");

    let fitted = logged(fitted_values(&model, &dataset))?;
    let predictions = logged(predict_demand(&model, &config.inputs))?;
    if !predictions.is_empty() {
        info!(count = predictions.len(), "predictions made");
    }

    Ok(DemandRun {
        source,
        table,
        dataset,
        model,
        fitted,
        predictions,
    })
}

/// Label trend regimes over the table.
pub fn run_trend(config: &TrendConfig) -> Result<TrendRun, AppError> {
    let (source, table) = load_source(config.csv_path.as_deref(), &config.sample)?;

    let labels = logged(process_data(&table, &config.windows))?;
    info!(
        labelled = labels.len(),
        short = config.windows.short,
        long = config.windows.long,
        "market data processed"
    );

    Ok(TrendRun { source, table, labels })
}

/// Fetch synthetic history and compute momentum with the system clock.
pub fn run_momentum(config: &MomentumConfig) -> Result<TrendInfo, AppError> {
    let mut analyzer = MarketTrendAnalyzer::new();
    run_momentum_with(&mut analyzer, config)
}

/// Fetch synthetic history into `analyzer` and compute momentum.
pub fn run_momentum_with<C: Clock>(
    analyzer: &mut MarketTrendAnalyzer<C>,
    config: &MomentumConfig,
) -> Result<TrendInfo, AppError> {
    if config.start > config.end {
        return Err(AppError::new(
            2,
            format!("Start date {} is after end date {}.", config.start, config.end),
        ));
    }

    let series = analyzer.fetch_historical_data(&config.symbol, config.start, config.end);
    info!(symbol = %config.symbol, days = series.len(), "historical data cached");

    let trend = logged(analyzer.analyze_trends(&config.symbol, config.window))?;
    info!(symbol = %trend.symbol, momentum = trend.trend_momentum, "trend analyzed");

    Ok(trend)
}

fn load_source(csv_path: Option<&std::path::Path>, sample: &SampleConfig) -> Result<(String, ObservationTable), AppError> {
    let (source, table) = match csv_path {
        Some(path) => (path.display().to_string(), load_table(path)?),
        None => (
            format!("synthetic sample (rows={}, seed={})", sample.rows, sample.seed),
            generate_observations(sample)?,
        ),
    };
    info!(source = %source, rows = table.len(), "observations loaded");
    Ok((source, table))
}

/// Log a core failure and convert it for the binary boundary.
fn logged<T, E: Into<AnalyticsError>>(result: Result<T, E>) -> Result<T, AppError> {
    result.map_err(|e| {
        let err: AnalyticsError = e.into();
        error!("{err}");
        AppError::from(err)
    })
}
