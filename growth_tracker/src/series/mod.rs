//! Numeric transforms applied to a collected series before rendering.
//!
//! Both transforms are opt-in. [`augment`](augment::augment) densifies the
//! series so animated lines move less abruptly; [`smooth_gaussian`]
//! (smooth::smooth_gaussian) softens sharp corners with a Gaussian-weighted
//! moving average.

pub mod augment;
pub mod smooth;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SeriesError {
    #[error("Invalid parameter {name}: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error("Insufficient data: need at least {required} points, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    #[error("Input length mismatch: {xs} x values vs {ys} y values")]
    LengthMismatch { xs: usize, ys: usize },
}
