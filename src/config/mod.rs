//! Configuration module for the wellness-globe application.

mod calculator;
mod debug;
mod types;

// Re-export commonly used items
pub use calculator::{CALCULATOR, CalculatorConfig};
pub use debug::DF;
pub use types::{Money, RoiPct, SharePct};
