//! Market trend classification and momentum.
//!
//! - `classifier`: moving average regime labels over an observation table
//! - `analyzer`: cached synthetic history + trailing-window momentum
//! - `store` / `clock`: the analyzer's explicit state and time source

pub mod analyzer;
pub mod classifier;
pub mod clock;
pub mod store;

pub use analyzer::*;
pub use classifier::*;
pub use clock::*;
pub use store::*;
