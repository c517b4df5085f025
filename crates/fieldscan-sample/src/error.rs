//! Error types for fieldscan-sample

use thiserror::Error;

/// Errors raised by coordinate lookups and sampler construction
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SampleError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] fieldscan_core::Error),

    /// Computed cell lies outside the raster
    #[error("cell (row {row}, col {col}) outside {rows}x{cols} raster")]
    OutOfBounds {
        row: i64,
        col: i64,
        rows: usize,
        cols: usize,
    },

    /// Pixel pitch is zero, negative or not finite
    #[error("invalid pixel pitch along {axis}: {value}")]
    InvalidPitch { axis: &'static str, value: f64 },

    /// Scale level below 1
    #[error("invalid scale level: {0} (must be >= 1)")]
    InvalidScaleLevel(i64),

    /// Negative coordinate under `NegativePolicy::Reject`
    #[error("negative coordinate ({x}, {y})")]
    NegativeCoordinate { x: f64, y: f64 },

    /// NaN or infinite coordinate
    #[error("non-finite coordinate ({x}, {y})")]
    NonFiniteCoordinate { x: f64, y: f64 },
}

/// Result type for sampling operations
pub type SampleResult<T> = Result<T, SampleError>;
