//! Formatted terminal output.
//!
//! We keep formatting code in one place so:
//! - the math/fitting code stays clean and testable
//! - output changes are localized

use crate::domain::{DemandModel, LaggedDataset, ObservationTable, PRICE, TrendInfo, TrendLabels, TrendWindows};
use crate::report::label_counts;

/// Format the training summary (dataset size + split + coefficients + score).
pub fn format_training_summary(source: &str, table_rows: usize, dataset: &LaggedDataset, model: &DemandModel) -> String {
    let mut out = String::new();

    out.push_str("=== dtr - Demand Model ===\n");
    out.push_str(&format!("Source: {source}\n"));
    out.push_str(&format!("Rows: {table_rows} | lagged pairs: {}\n", dataset.len()));
    out.push_str(&format!(
        "Split: train={} test={}\n",
        model.quality.n_train, model.quality.n_test
    ));

    out.push_str("\nModel:\n");
    out.push_str(&format!("- intercept : {:.6}\n", model.intercept));
    out.push_str(&format!("- coeffs    : {} (price_lag, volume_lag)\n", fmt_vec(&model.coefficients)));
    out.push_str(&format!("- holdout R²: {}\n", fmt_score(model.quality.holdout_r2)));

    out
}

/// Format ad-hoc predictions next to their inputs.
pub fn format_predictions(inputs: &[Vec<f64>], predictions: &[f64]) -> String {
    let mut out = String::new();
    out.push_str("Predictions:\n");
    out.push_str(format!("{:>12} {:>12} {:>14}", "price_lag", "volume_lag", "demand").trim_end());
    out.push('\n');
    out.push_str(format!("{:-<12} {:-<12} {:-<14}", "", "", "").trim_end());
    out.push('\n');

    for (x, y) in inputs.iter().zip(predictions) {
        let price = x.first().copied().unwrap_or(f64::NAN);
        let volume = x.get(1).copied().unwrap_or(f64::NAN);
        out.push_str(&format!("{price:>12.4} {volume:>12.4} {y:>14.4}\n"));
    }

    out
}

/// Format trend label counts and the most recent `tail` labels.
pub fn format_trend_summary(
    source: &str,
    table: &ObservationTable,
    windows: &TrendWindows,
    labels: &TrendLabels,
    tail: usize,
) -> String {
    let mut out = String::new();

    out.push_str("=== dtr - Market Trends ===\n");
    out.push_str(&format!("Source: {source}\n"));
    out.push_str(&format!(
        "Rows: {} | MA{}/MA{} | labelled: {}\n",
        table.len(),
        windows.short,
        windows.long,
        labels.len()
    ));

    out.push_str("\nRegimes:\n");
    for (label, count) in label_counts(labels) {
        let pct = if labels.is_empty() {
            0.0
        } else {
            count as f64 / labels.len() as f64 * 100.0
        };
        out.push_str(&format!("- {:<10} {count:>6} ({pct:>5.1}%)\n", label.as_str()));
    }

    if tail > 0 && !labels.is_empty() {
        let price = table.column(PRICE).unwrap_or(&[]);
        out.push_str(&format!("\nLast {} labels:\n", tail.min(labels.len())));
        let skip = labels.len().saturating_sub(tail);
        for (&i, label) in labels.iter().skip(skip) {
            let p = price.get(i).copied().unwrap_or(f64::NAN);
            out.push_str(&format!("{i:>8} {p:>12.4}  {label}\n"));
        }
    }

    out
}

/// Format a momentum record.
pub fn format_trend_info(info: &TrendInfo, window: usize) -> String {
    format!(
        "{}: momentum {:+.2}% over last {window} days (as of {})",
        info.symbol,
        info.trend_momentum,
        info.timestamp.to_rfc3339()
    )
}

fn fmt_vec(v: &[f64]) -> String {
    let parts: Vec<String> = v.iter().map(|x| format!("{x:.6}")).collect();
    format!("[{}]", parts.join(", "))
}

fn fmt_score(score: Option<f64>) -> String {
    match score {
        Some(r2) => format!("{r2:.4}"),
        None => "n/a (fewer than 2 held-out samples)".to_string(),
    }
}
