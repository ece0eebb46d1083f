//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - installs logging and loads `.env`
//! - parses CLI arguments
//! - runs the demand/trend/momentum pipelines
//! - prints reports
//! - writes optional exports

use clap::Parser;
use tracing::info;

use crate::cli::{Command, MomentumArgs, PredictArgs, SourceArgs, TrendArgs};
use crate::domain::{DemandConfig, MomentumConfig, SampleConfig, TrainOptions, TrendConfig, TrendWindows};
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `dtr` binary.
pub fn run() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = crate::cli::Cli::parse();

    match cli.command {
        Command::Predict(args) => handle_predict(&args),
        Command::Trend(args) => handle_trend(&args),
        Command::Momentum(args) => handle_momentum(&args),
    }
}

/// Log to stderr so stdout carries only reports. `RUST_LOG` overrides the `info` default.
fn init_tracing() {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}

fn handle_predict(args: &PredictArgs) -> Result<(), AppError> {
    let config = demand_config_from_args(args);
    let run = pipeline::run_demand(&config)?;

    println!(
        "{}",
        crate::report::format_training_summary(&run.source, run.table.len(), &run.dataset, &run.model)
    );
    if !config.inputs.is_empty() {
        println!("{}", crate::report::format_predictions(&config.inputs, &run.predictions));
    }

    if let Some(path) = &config.export {
        crate::io::write_predictions_csv(path, &run.dataset, &run.fitted)?;
        info!(path = %path.display(), "predictions exported");
    }

    Ok(())
}

fn handle_trend(args: &TrendArgs) -> Result<(), AppError> {
    let config = trend_config_from_args(args);
    let run = pipeline::run_trend(&config)?;

    println!(
        "{}",
        crate::report::format_trend_summary(&run.source, &run.table, &config.windows, &run.labels, config.tail)
    );

    if let Some(path) = &config.export {
        crate::io::write_trends_csv(path, &run.table, &run.labels)?;
        info!(path = %path.display(), "trend labels exported");
    }

    Ok(())
}

fn handle_momentum(args: &MomentumArgs) -> Result<(), AppError> {
    let config = momentum_config_from_args(args);
    let trend = pipeline::run_momentum(&config)?;

    println!("{}", crate::report::format_trend_info(&trend, config.window));

    if let Some(path) = &config.export {
        crate::io::write_trend_info_json(path, &trend)?;
        info!(path = %path.display(), "trend info exported");
    }

    Ok(())
}

fn sample_config_from_args(args: &SourceArgs) -> SampleConfig {
    SampleConfig {
        rows: args.rows,
        seed: args.sample_seed,
        noise_sd: args.noise,
    }
}

pub fn demand_config_from_args(args: &PredictArgs) -> DemandConfig {
    DemandConfig {
        csv_path: args.source.csv.clone(),
        sample: sample_config_from_args(&args.source),
        split_seed: args.seed,
        train: TrainOptions {
            test_fraction: args.test_fraction,
        },
        inputs: args.inputs.iter().map(|x| x.to_vec()).collect(),
        export: args.export.clone(),
    }
}

pub fn trend_config_from_args(args: &TrendArgs) -> TrendConfig {
    TrendConfig {
        csv_path: args.source.csv.clone(),
        sample: sample_config_from_args(&args.source),
        windows: TrendWindows {
            short: args.short,
            long: args.long,
        },
        tail: args.tail,
        export: args.export.clone(),
    }
}

pub fn momentum_config_from_args(args: &MomentumArgs) -> MomentumConfig {
    MomentumConfig {
        symbol: args.symbol.clone(),
        start: args.start,
        end: args.end,
        window: args.window,
        export: args.export.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;

    fn parse(argv: &[&str]) -> Command {
        Cli::try_parse_from(argv).unwrap().command
    }

    #[test]
    fn predict_args_become_demand_config() {
        let Command::Predict(args) = parse(&[
            "dtr", "predict", "--rows", "80", "--sample-seed", "9", "--seed", "1", "--test-fraction", "0.25",
            "--input", "10,20",
        ]) else {
            panic!("expected predict");
        };
        let config = demand_config_from_args(&args);
        assert_eq!(config.sample.rows, 80);
        assert_eq!(config.sample.seed, 9);
        assert_eq!(config.split_seed, Some(1));
        assert_eq!(config.train.test_fraction, 0.25);
        assert_eq!(config.inputs, vec![vec![10.0, 20.0]]);
        assert!(config.csv_path.is_none());
    }

    #[test]
    fn trend_args_become_trend_config() {
        let Command::Trend(args) = parse(&["dtr", "trend", "--short", "5", "--long", "10", "--tail", "3"]) else {
            panic!("expected trend");
        };
        let config = trend_config_from_args(&args);
        assert_eq!(config.windows, TrendWindows { short: 5, long: 10 });
        assert_eq!(config.tail, 3);
    }
}
