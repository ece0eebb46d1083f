//! Linear demand model implementation.
//!
//! Evaluation is a small, pure function so the fitter and the predictor share it.

pub mod model;

pub use model::*;
