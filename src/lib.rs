//! Z-score outlier detection over numeric feature matrices.
//!
//! [`StdDetector`] computes a per-feature center (mean or median) and
//! population standard deviation, then labels each cell whose absolute
//! z-score exceeds `k` as an outlier (`-1`), every other cell `0`.
//!
//! ```text
//!   fit(X)                 decision_function(X)         predict(X)
//!   center, std per col -> (X - center) / std      ->  |z| > k ? -1 : 0
//! ```
//!
//! `predict` refits on its own argument before scoring it.

pub mod config;
pub mod csv_input;
pub mod detector;
pub mod error;
pub mod scalers;

pub use config::{CentralTendency, DetectorConfig};
pub use detector::{row_labels, Center, FittedParams, OutlierDetector, StdDetector, INLIER, OUTLIER};
pub use error::{DetectorError, Result};
