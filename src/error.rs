use thiserror::Error;

/// Errors raised while configuring, fitting or scoring a detector
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DetectorError {
    #[error("Invalid central_tendency_type: {0:?} (expected \"mean\" or \"median\")")]
    InvalidCentralTendency(String),

    #[error("Invalid threshold k = {0}: must be a positive finite number")]
    InvalidThreshold(f64),

    #[error("Cannot fit on an empty matrix ({rows} rows x {cols} columns)")]
    EmptyInput { rows: usize, cols: usize },

    #[error("Detector has not been fitted yet")]
    NotFitted,

    #[error("Feature count mismatch: fitted on {expected} features, got {found}")]
    ShapeMismatch { expected: usize, found: usize },
}

pub type Result<T> = std::result::Result<T, DetectorError>;
