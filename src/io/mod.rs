//! Input/output helpers.
//!
//! - CSV ingest of observation tables (`ingest`)
//! - result exports (CSV/JSON) (`export`)

pub mod export;
pub mod ingest;

pub use export::*;
pub use ingest::*;
