//! Command-line parsing for the demand/trend analytics tool.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the modeling/math code.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

use crate::domain::FeatureVector;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "dtr", version, about = "Demand prediction and market trend analytics")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fit the lagged linear demand model, report its fit, and predict on `--input` pairs.
    Predict(PredictArgs),
    /// Label each row uptrend/downtrend/sideways from short/long moving averages.
    Trend(TrendArgs),
    /// Compute trailing-window momentum over synthetic daily history.
    Momentum(MomentumArgs),
}

/// Where observations come from: a CSV file or a seeded synthetic sample.
#[derive(Debug, Args, Clone)]
pub struct SourceArgs {
    /// Observation CSV with `price`, `volume`, `demand` headers.
    #[arg(long, value_name = "PATH")]
    pub csv: Option<PathBuf>,

    /// Rows in the synthetic sample (ignored with --csv).
    #[arg(long, default_value_t = 250)]
    pub rows: usize,

    /// Seed for the synthetic sample (ignored with --csv).
    #[arg(long, default_value_t = 42)]
    pub sample_seed: u64,

    /// Standard deviation of the synthetic demand noise.
    #[arg(long, default_value_t = 1.0)]
    pub noise: f64,
}

#[derive(Debug, Args, Clone)]
pub struct PredictArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Seed for the train/test split (random when unset).
    #[arg(long, env = "DTR_SEED")]
    pub seed: Option<u64>,

    /// Fraction of lagged pairs held out for scoring.
    #[arg(long, default_value_t = 0.2)]
    pub test_fraction: f64,

    /// Lagged `price,volume` pair to predict; repeatable.
    #[arg(long = "input", value_name = "P,V", value_parser = parse_pair)]
    pub inputs: Vec<FeatureVector>,

    /// Export per-pair fitted values to CSV.
    #[arg(long, value_name = "PATH")]
    pub export: Option<PathBuf>,
}

#[derive(Debug, Args, Clone)]
pub struct TrendArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Short moving average window.
    #[arg(long, default_value_t = 20)]
    pub short: usize,

    /// Long moving average window.
    #[arg(long, default_value_t = 50)]
    pub long: usize,

    /// Print this many of the most recent labels.
    #[arg(long, default_value_t = 10)]
    pub tail: usize,

    /// Export labels to CSV.
    #[arg(long, value_name = "PATH")]
    pub export: Option<PathBuf>,
}

#[derive(Debug, Args, Clone)]
pub struct MomentumArgs {
    /// Symbol to cache and analyze.
    #[arg(long)]
    pub symbol: String,

    /// First day of history (YYYY-MM-DD).
    #[arg(long)]
    pub start: NaiveDate,

    /// Last day of history (YYYY-MM-DD), inclusive.
    #[arg(long)]
    pub end: NaiveDate,

    /// Trailing window in days.
    #[arg(long, default_value_t = 30)]
    pub window: usize,

    /// Export the momentum record to JSON.
    #[arg(long, value_name = "PATH")]
    pub export: Option<PathBuf>,
}

/// Parse `"P,V"` into a feature row.
fn parse_pair(raw: &str) -> Result<FeatureVector, String> {
    let Some((price, volume)) = raw.split_once(',') else {
        return Err(format!("expected `price,volume`, got '{raw}'"));
    };
    Ok([parse_number(price, raw)?, parse_number(volume, raw)?])
}

fn parse_number(part: &str, raw: &str) -> Result<f64, String> {
    match part.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(format!("invalid number '{}' in '{raw}'", part.trim())),
    }
}
