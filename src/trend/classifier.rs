//! Dual moving average trend classification.
//!
//! For every row `i >= short`:
//!
//! - `uptrend`   if `MA_short > MA_long` and `price > MA_short`
//! - `downtrend` if `MA_short < MA_long` and `price < MA_short`
//! - `sideways`  otherwise
//!
//! `MA_long` is undefined until `long - 1` prices are behind the current one.
//! Rows in that gap are labelled `sideways`: an undefined average can satisfy
//! neither directional condition, and every index from `short` onwards still
//! gets exactly one label.

use crate::domain::{ObservationTable, PRICE, TrendLabel, TrendLabels, TrendWindows};
use crate::error::TrendProcessingError;
use crate::math::rolling_mean;

/// Label each row from `windows.short` to the end of the table.
pub fn process_data(table: &ObservationTable, windows: &TrendWindows) -> Result<TrendLabels, TrendProcessingError> {
    if windows.short == 0 || windows.short >= windows.long {
        return Err(TrendProcessingError::InvalidWindows {
            short: windows.short,
            long: windows.long,
        });
    }
    let price = table.column(PRICE).ok_or_else(|| TrendProcessingError::MissingColumn {
        column: PRICE.to_string(),
    })?;

    let ma_short = rolling_mean(price, windows.short);
    let ma_long = rolling_mean(price, windows.long);

    let labels = (windows.short..price.len())
        .map(|i| (i, classify(price[i], ma_short[i], ma_long[i])))
        .collect();
    Ok(labels)
}

/// Classify one row from its price and the two averages.
pub fn classify(price: f64, ma_short: Option<f64>, ma_long: Option<f64>) -> TrendLabel {
    let (Some(fast), Some(slow)) = (ma_short, ma_long) else {
        return TrendLabel::Sideways;
    };

    if fast > slow && price > fast {
        TrendLabel::Uptrend
    } else if fast < slow && price < fast {
        TrendLabel::Downtrend
    } else {
        TrendLabel::Sideways
    }
}
