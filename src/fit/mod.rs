//! Demand model fitting.
//!
//! Responsibilities:
//!
//! - split samples into training and held-out subsets (seedable)
//! - solve OLS on the training subset
//! - score the held-out subset

pub mod fitter;
pub mod split;

pub use fitter::*;
pub use split::*;
