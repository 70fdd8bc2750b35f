use ndarray::{Array1, Array2, ArrayView2, Axis};

/// Per-feature mean and population standard deviation (ddof = 0).
#[derive(Debug, Clone, PartialEq)]
pub struct StandardScaler {
    mean: Array1<f64>,
    std_dev: Array1<f64>,
}

impl StandardScaler {
    /// Reduce `data` along the sample axis.
    ///
    /// Returns `None` when `data` has no rows.
    pub fn fit(data: ArrayView2<f64>) -> Option<Self> {
        let mean = data.mean_axis(Axis(0))?;
        let std_dev = data.std_axis(Axis(0), 0.0);

        Some(StandardScaler { mean, std_dev })
    }

    /// `(mean, std_dev)`
    pub fn into_parts(self) -> (Array1<f64>, Array1<f64>) {
        (self.mean, self.std_dev)
    }
}

/// `(data - center) / scale`, broadcasting both vectors over the rows.
///
/// Callers must ensure `center` and `scale` have `data.ncols()` elements;
/// ndarray panics on an incompatible broadcast.
pub fn standardize(data: ArrayView2<f64>, center: &Array1<f64>, scale: &Array1<f64>) -> Array2<f64> {
    (&data - center) / scale
}
