use std::cmp::Ordering;

use ndarray::{Array1, ArrayView1, ArrayView2, Axis};

/// Median of every column of `data`.
pub fn column_medians(data: ArrayView2<f64>) -> Array1<f64> {
    Array1::from_iter(data.axis_iter(Axis(1)).map(median))
}

/// Median of a single series. Even-length series average the two middle
/// values; any NaN makes the result NaN, an empty series gives NaN too.
pub fn median(values: ArrayView1<f64>) -> f64 {
    if values.is_empty() || values.iter().any(|v| v.is_nan()) {
        return f64::NAN;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

    let n = sorted.len();
    if n % 2 == 0 {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    } else {
        sorted[n / 2]
    }
}
