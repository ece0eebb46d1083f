//! Synthetic observation sample generation.
//!
//! Used when no CSV is supplied, so every command has something to run on.
//! Generation is fully determined by `SampleConfig::seed`.
//!
//! Shape of the data:
//! - price follows a Gaussian random walk with a small drift, floored at `MIN_PRICE`
//! - volume is uniform in `VOLUME_RANGE`
//! - demand is linear in the *previous* row's price and volume plus Gaussian noise,
//!   so the lag model has a known answer

use rand::prelude::*;
use rand::rngs::StdRng;
use rand_distr::Normal;

use crate::domain::{Observation, ObservationTable, SampleConfig};
use crate::error::AppError;

pub const START_PRICE: f64 = 100.0;
const MIN_PRICE: f64 = 1.0;
const PRICE_DRIFT: f64 = 0.05;
const PRICE_STEP_SD: f64 = 1.0;
const VOLUME_RANGE: std::ops::RangeInclusive<f64> = 500.0..=1_500.0;

/// True demand relationship: `intercept + price * price_lag + volume * volume_lag`.
pub const DEMAND_INTERCEPT: f64 = 50.0;
pub const DEMAND_PRICE_COEF: f64 = -0.8;
pub const DEMAND_VOLUME_COEF: f64 = 0.05;

pub fn generate_observations(config: &SampleConfig) -> Result<ObservationTable, AppError> {
    if config.rows == 0 {
        return Err(AppError::new(2, "Sample rows must be > 0."));
    }
    if !(config.noise_sd.is_finite() && config.noise_sd >= 0.0) {
        return Err(AppError::new(2, "Sample noise must be finite and >= 0."));
    }

    let mut rng = StdRng::seed_from_u64(config.seed);
    let step = Normal::new(PRICE_DRIFT, PRICE_STEP_SD)
        .map_err(|e| AppError::new(4, format!("Price distribution error: {e}")))?;
    let noise = Normal::new(0.0, config.noise_sd)
        .map_err(|e| AppError::new(4, format!("Noise distribution error: {e}")))?;

    let mut rows: Vec<Observation> = Vec::with_capacity(config.rows);
    let mut price = START_PRICE;
    for i in 0..config.rows {
        if i > 0 {
            price = (price + step.sample(&mut rng)).max(MIN_PRICE);
        }
        let volume = rng.gen_range(VOLUME_RANGE);

        // Row 0 has no predecessor; drive it from its own values.
        let (price_lag, volume_lag) = match rows.last() {
            Some(prev) => (prev.price, prev.volume),
            None => (price, volume),
        };
        let demand = DEMAND_INTERCEPT
            + DEMAND_PRICE_COEF * price_lag
            + DEMAND_VOLUME_COEF * volume_lag
            + noise.sample(&mut rng);

        rows.push(Observation {
            price,
            volume,
            demand,
        });
    }

    Ok(ObservationTable::from_observations(&rows))
}
