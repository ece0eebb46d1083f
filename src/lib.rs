//! `demand-trend` library crate.
//!
//! Two independent analytics components:
//!
//! - a linear demand predictor (`features` -> `fit` -> `models`)
//! - a market trend classifier and momentum analyzer (`trend`)
//!
//! The binary (`dtr`) is a thin wrapper around this library so that
//! core logic is testable without spawning processes.

pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod features;
pub mod fit;
pub mod io;
pub mod math;
pub mod models;
pub mod report;
pub mod trend;
