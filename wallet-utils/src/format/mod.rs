//! Human-readable formatting of amounts, ratios and sizes

pub mod units;
pub mod amount;

pub use units::*;
pub use amount::*;
