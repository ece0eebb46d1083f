//! Export run results to CSV/JSON.
//!
//! The exports are meant to be easy to consume in spreadsheets or downstream scripts.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::domain::{LaggedDataset, ObservationTable, PRICE, TrendInfo, TrendLabels};
use crate::error::AppError;

/// Write per-pair fitted values to a CSV file.
///
/// `predicted` must be aligned with `dataset`.
pub fn write_predictions_csv(path: &Path, dataset: &LaggedDataset, predicted: &[f64]) -> Result<(), AppError> {
    if predicted.len() != dataset.len() {
        return Err(AppError::new(
            4,
            format!(
                "Prediction count {} does not match dataset size {}.",
                predicted.len(),
                dataset.len()
            ),
        ));
    }

    let mut file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create export CSV '{}': {e}", path.display())))?;

    writeln!(file, "index,price_lag,volume_lag,demand,predicted,residual")
        .map_err(|e| AppError::new(2, format!("Failed to write export CSV header: {e}")))?;

    for (k, ((x, y), y_hat)) in dataset
        .features
        .iter()
        .zip(&dataset.labels)
        .zip(predicted)
        .enumerate()
    {
        // Pair k predicts row k + 1.
        writeln!(
            file,
            "{},{},{},{},{:.6},{:.6}",
            k + 1,
            x[0],
            x[1],
            y,
            y_hat,
            y - y_hat,
        )
        .map_err(|e| AppError::new(2, format!("Failed to write export CSV row: {e}")))?;
    }

    Ok(())
}

/// Write trend labels (with the price they were computed at) to a CSV file.
pub fn write_trends_csv(path: &Path, table: &ObservationTable, labels: &TrendLabels) -> Result<(), AppError> {
    let price = table
        .column(PRICE)
        .ok_or_else(|| AppError::new(3, "Missing required column: `price`"))?;

    let mut file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create export CSV '{}': {e}", path.display())))?;

    writeln!(file, "index,price,label")
        .map_err(|e| AppError::new(2, format!("Failed to write export CSV header: {e}")))?;

    for (&i, label) in labels {
        let p = price
            .get(i)
            .ok_or_else(|| AppError::new(4, format!("Trend label index {i} is outside the table.")))?;
        writeln!(file, "{i},{p},{label}")
            .map_err(|e| AppError::new(2, format!("Failed to write export CSV row: {e}")))?;
    }

    Ok(())
}

/// Write a momentum record as pretty JSON.
pub fn write_trend_info_json(path: &Path, info: &TrendInfo) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create JSON '{}': {e}", path.display())))?;

    serde_json::to_writer_pretty(file, info)
        .map_err(|e| AppError::new(2, format!("Failed to write trend JSON: {e}")))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TrendLabel;
    use chrono::{TimeZone, Utc};
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("dtr-export-{}-{name}", std::process::id()))
    }

    #[test]
    fn predictions_csv_has_one_row_per_pair() {
        let dataset = LaggedDataset {
            features: vec![[10.0, 1.0], [20.0, 2.0]],
            labels: vec![15.0, 25.0],
        };
        let path = temp_path("predictions.csv");
        write_predictions_csv(&path, &dataset, &[14.5, 25.0]).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).ok();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "1,10,1,15,14.500000,0.500000");
        assert_eq!(lines[2], "2,20,2,25,25.000000,0.000000");
    }

    #[test]
    fn predictions_csv_rejects_misaligned_input() {
        let dataset = LaggedDataset {
            features: vec![[10.0, 1.0]],
            labels: vec![15.0],
        };
        let err = write_predictions_csv(&temp_path("never.csv"), &dataset, &[]).unwrap_err();
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn trends_csv_lists_labels_in_index_order() {
        let table = ObservationTable::new().with_column(PRICE, vec![1.0, 2.0, 3.0]);
        let labels: TrendLabels = [(2, TrendLabel::Uptrend), (1, TrendLabel::Sideways)].into_iter().collect();
        let path = temp_path("trends.csv");
        write_trends_csv(&path, &table, &labels).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(text, "index,price,label\n1,2,sideways\n2,3,uptrend\n");
    }

    #[test]
    fn trend_info_json_round_trips() {
        let info = TrendInfo {
            symbol: "XYZ".to_string(),
            trend_momentum: 4.0,
            timestamp: Utc.with_ymd_and_hms(2024, 1, 5, 0, 0, 0).unwrap(),
        };
        let path = temp_path("info.json");
        write_trend_info_json(&path, &info).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).ok();
        let back: TrendInfo = serde_json::from_str(&text).unwrap();
        assert_eq!(back, info);
        assert!(text.contains("\"trend_momentum\": 4.0"));
    }
}
