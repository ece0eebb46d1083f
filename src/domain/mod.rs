//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - observation tables and lagged datasets (`ObservationTable`, `LaggedDataset`)
//! - fitted model outputs (`DemandModel`, `FitQuality`)
//! - trend outputs (`TrendLabel`, `TrendLabels`, `TrendInfo`, `PriceSeries`)
//! - run configuration (`DemandConfig`, `TrendConfig`, `MomentumConfig`)

pub mod types;

pub use types::*;
