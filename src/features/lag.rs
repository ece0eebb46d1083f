//! One-step lag features for demand prediction.
//!
//! Row `i - 1` supplies the predictors for row `i`:
//!
//! ```text
//! feature[i-1] = [price[i-1], volume[i-1]]
//! label[i-1]   = demand[i]
//! ```
//!
//! Row 0 has no predecessor and produces no pair.

use crate::domain::{DEMAND, LaggedDataset, ObservationTable, PRICE, VOLUME};
use crate::error::DataPreparationError;

/// Build lagged `(price, volume) -> demand` pairs from a table.
pub fn prepare_data(table: &ObservationTable) -> Result<LaggedDataset, DataPreparationError> {
    let price = required_column(table, PRICE)?;
    let volume = required_column(table, VOLUME)?;
    let demand = required_column(table, DEMAND)?;

    let n = price.len();
    for (name, column) in [(VOLUME, volume), (DEMAND, demand)] {
        if column.len() != n {
            return Err(DataPreparationError::LengthMismatch {
                column: name.to_string(),
                expected: n,
                actual: column.len(),
            });
        }
    }

    let pairs = n.saturating_sub(1);
    let mut features = Vec::with_capacity(pairs);
    let mut labels = Vec::with_capacity(pairs);
    for i in 1..n {
        features.push([price[i - 1], volume[i - 1]]);
        labels.push(demand[i]);
    }

    Ok(LaggedDataset { features, labels })
}

fn required_column<'a>(table: &'a ObservationTable, name: &str) -> Result<&'a [f64], DataPreparationError> {
    table.column(name).ok_or_else(|| DataPreparationError::MissingColumn {
        column: name.to_string(),
    })
}
