//! Detector configuration.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::{DetectorError, Result};

/// Location statistic that anchors the z-score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CentralTendency {
    #[default]
    Mean,
    Median,
}

impl CentralTendency {
    pub fn as_str(&self) -> &'static str {
        match self {
            CentralTendency::Mean => "mean",
            CentralTendency::Median => "median",
        }
    }
}

impl FromStr for CentralTendency {
    type Err = DetectorError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "mean" => Ok(CentralTendency::Mean),
            "median" => Ok(CentralTendency::Median),
            _ => Err(DetectorError::InvalidCentralTendency(s.to_string())),
        }
    }
}

impl fmt::Display for CentralTendency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Construction parameters for [`StdDetector`](crate::StdDetector).
///
/// Deserializes from `{"k": 2.5, "central_tendency": "median"}`; both
/// fields are optional.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct DetectorConfig {
    /// |z| above which a cell is flagged
    pub k: f64,
    pub central_tendency: CentralTendency,
}

impl DetectorConfig {
    pub const DEFAULT_K: f64 = 3.0;

    pub fn new(k: f64, central_tendency: CentralTendency) -> Self {
        Self { k, central_tendency }
    }

    /// Reject thresholds that can never classify anything sensibly.
    pub fn validate(&self) -> Result<()> {
        if !self.k.is_finite() || self.k <= 0.0 {
            return Err(DetectorError::InvalidThreshold(self.k));
        }
        Ok(())
    }
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            k: Self::DEFAULT_K,
            central_tendency: CentralTendency::default(),
        }
    }
}
