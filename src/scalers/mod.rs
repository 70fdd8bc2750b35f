//! Per-feature location and scale statistics.

pub mod median;
pub mod standard_scaler;

pub use median::{column_medians, median};
pub use standard_scaler::{standardize, StandardScaler};
