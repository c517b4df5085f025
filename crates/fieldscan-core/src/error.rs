//! Error types for fieldscan-core
//!
//! Raised while wrapping producer data into a raster.

use thiserror::Error;

/// fieldscan-core error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Grid with an empty side
    #[error("invalid grid dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for fieldscan-core operations
pub type Result<T> = std::result::Result<T, Error>;
