//! Feature construction for the demand model.

pub mod lag;

pub use lag::*;
