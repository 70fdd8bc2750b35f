//! Z-score outlier detection.
//!
//! [`StdDetector`] learns a per-feature center (mean or median) and a
//! per-feature population standard deviation, then flags every cell whose
//! absolute z-score is above `k`.
//!
//! Labels are produced per cell, not per sample: `predict` on an
//! `(n_samples, n_features)` matrix returns a matrix of the same shape.
//! Use [`row_labels`] to collapse it to one label per sample.

use log::{debug, trace, warn};
use ndarray::{Array1, Array2, ArrayView2, Axis};

use crate::config::{CentralTendency, DetectorConfig};
use crate::error::{DetectorError, Result};
use crate::scalers::{column_medians, standardize, StandardScaler};

/// Label for a cell whose |z| exceeds the threshold
pub const OUTLIER: i8 = -1;
/// Label for every other cell
pub const INLIER: i8 = 0;

/// Estimator capability shared by outlier detectors.
///
/// Object safe, so callers can hold any detector as `&mut dyn OutlierDetector`.
pub trait OutlierDetector {
    /// Learn the detector's statistics from `x`, replacing earlier ones.
    fn fit(&mut self, x: ArrayView2<f64>) -> Result<&mut dyn OutlierDetector>;

    /// Anomaly score of every cell of `x` under the fitted statistics.
    fn decision_function(&self, x: ArrayView2<f64>) -> Result<Array2<f64>>;

    /// Label every cell of `x` with [`OUTLIER`] or [`INLIER`].
    fn predict(&mut self, x: ArrayView2<f64>) -> Result<Array2<i8>>;

    fn fit_predict(&mut self, x: ArrayView2<f64>) -> Result<Array2<i8>> {
        self.predict(x)
    }

    /// Get the model name for logging/debugging
    fn name(&self) -> &str;
}

/// Location statistic learned by the last fit
#[derive(Debug, Clone, PartialEq)]
pub enum Center {
    Mean(Array1<f64>),
    Median(Array1<f64>),
}

impl Center {
    pub fn values(&self) -> &Array1<f64> {
        match self {
            Center::Mean(v) | Center::Median(v) => v,
        }
    }
}

/// Statistics learned by [`StdDetector::fit`]
#[derive(Debug, Clone, PartialEq)]
pub struct FittedParams {
    center: Center,
    std: Array1<f64>,
}

impl FittedParams {
    pub fn center(&self) -> &Center {
        &self.center
    }

    pub fn std(&self) -> &Array1<f64> {
        &self.std
    }

    pub fn n_features(&self) -> usize {
        self.std.len()
    }
}

/// Standard-deviation outlier detector.
///
/// ```
/// use ndarray::array;
/// use std_outlier_detector::{OutlierDetector, StdDetector, CentralTendency};
///
/// let x = array![[1.0], [2.0], [3.0], [4.0], [100.0]];
/// let mut detector = StdDetector::new(1.0, CentralTendency::Mean).unwrap();
/// let labels = detector.predict(x.view()).unwrap();
/// assert_eq!(labels, array![[0i8], [0], [0], [0], [-1]]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StdDetector {
    k: f64,
    central_tendency: CentralTendency,
    params: Option<FittedParams>,
}

impl StdDetector {
    pub fn new(k: f64, central_tendency: CentralTendency) -> Result<Self> {
        Self::from_config(&DetectorConfig::new(k, central_tendency))
    }

    /// Build from a central-tendency name, `"mean"` or `"median"`.
    pub fn with_params(k: f64, central_tendency: &str) -> Result<Self> {
        Self::new(k, central_tendency.parse()?)
    }

    pub fn from_config(config: &DetectorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            k: config.k,
            central_tendency: config.central_tendency,
            params: None,
        })
    }

    pub fn k(&self) -> f64 {
        self.k
    }

    pub fn central_tendency(&self) -> CentralTendency {
        self.central_tendency
    }

    pub fn params(&self) -> Option<&FittedParams> {
        self.params.as_ref()
    }

    pub fn is_fitted(&self) -> bool {
        self.params.is_some()
    }

    /// Fitted per-feature means; `None` unless fitted with [`CentralTendency::Mean`].
    pub fn mean(&self) -> Option<&Array1<f64>> {
        match self.params.as_ref()?.center() {
            Center::Mean(v) => Some(v),
            Center::Median(_) => None,
        }
    }

    /// Fitted per-feature medians; `None` unless fitted with [`CentralTendency::Median`].
    pub fn median(&self) -> Option<&Array1<f64>> {
        match self.params.as_ref()?.center() {
            Center::Median(v) => Some(v),
            Center::Mean(_) => None,
        }
    }

    pub fn std(&self) -> Option<&Array1<f64>> {
        self.params.as_ref().map(FittedParams::std)
    }

    fn compute_params(&self, x: ArrayView2<f64>) -> Result<FittedParams> {
        let (rows, cols) = x.dim();
        if rows == 0 {
            return Err(DetectorError::EmptyInput { rows, cols });
        }

        let scaler = StandardScaler::fit(x).ok_or(DetectorError::EmptyInput { rows, cols })?;
        let (mean, std) = scaler.into_parts();
        let center = match self.central_tendency {
            CentralTendency::Mean => Center::Mean(mean),
            CentralTendency::Median => Center::Median(column_medians(x)),
        };

        let constant: Vec<usize> = std
            .iter()
            .enumerate()
            .filter(|(_, s)| **s == 0.0)
            .map(|(i, _)| i)
            .collect();
        if !constant.is_empty() {
            warn!(
                "{}: zero standard deviation in feature(s) {:?}; their z-scores are NaN or infinite",
                self.name(),
                constant
            );
        }

        Ok(FittedParams { center, std })
    }
}

impl Default for StdDetector {
    fn default() -> Self {
        Self {
            k: DetectorConfig::DEFAULT_K,
            central_tendency: CentralTendency::default(),
            params: None,
        }
    }
}

impl OutlierDetector for StdDetector {
    fn fit(&mut self, x: ArrayView2<f64>) -> Result<&mut dyn OutlierDetector> {
        debug!(
            "{}: fitting {} central tendency on {}x{} matrix",
            self.name(),
            self.central_tendency,
            x.nrows(),
            x.ncols()
        );
        self.params = Some(self.compute_params(x)?);
        Ok(self)
    }

    fn decision_function(&self, x: ArrayView2<f64>) -> Result<Array2<f64>> {
        let params = self.params.as_ref().ok_or(DetectorError::NotFitted)?;
        if x.ncols() != params.n_features() {
            return Err(DetectorError::ShapeMismatch {
                expected: params.n_features(),
                found: x.ncols(),
            });
        }

        Ok(standardize(x, params.center().values(), params.std()))
    }

    /// Always refits on `x` before scoring it, so statistics from an earlier
    /// `fit` call on other data are discarded.
    fn predict(&mut self, x: ArrayView2<f64>) -> Result<Array2<i8>> {
        self.fit(x)?;
        let k = self.k;
        let labels = self
            .decision_function(x)?
            .mapv(|z| if z.abs() > k { OUTLIER } else { INLIER });

        trace!(
            "{}: {} of {} cells above k = {}",
            self.name(),
            labels.iter().filter(|&&l| l == OUTLIER).count(),
            labels.len(),
            k
        );
        Ok(labels)
    }

    fn name(&self) -> &str {
        "std"
    }
}

/// One label per sample: [`OUTLIER`] when any cell of the row is an outlier.
pub fn row_labels(cell_labels: &Array2<i8>) -> Array1<i8> {
    cell_labels.map_axis(Axis(1), |row| {
        if row.iter().any(|&l| l == OUTLIER) {
            OUTLIER
        } else {
            INLIER
        }
    })
}
