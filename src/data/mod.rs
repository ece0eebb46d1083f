//! Synthetic data sources.
//!
//! - `sample`: seeded observation tables (price/volume/demand)
//! - `history`: deterministic daily price history for the trend store

pub mod history;
pub mod sample;

pub use history::*;
pub use sample::*;
