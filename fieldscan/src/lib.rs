//! fieldscan - Coordinate-to-sample lookup for physical measurement rasters
//!
//! Given a raster sampled on a uniform grid with known physical pixel pitch,
//! fieldscan returns the value stored in the cell containing a physical
//! point, either at full resolution or at a coarser virtual resolution that
//! strides through the same buffer.
//!
//! # Example
//!
//! ```
//! use fieldscan::{CoordinateSampler, FImage, PixelPitch};
//!
//! let img = FImage::from_fn(8, 8, |x, y| (10 * y + x) as f32).unwrap();
//! let sampler = CoordinateSampler::new(PixelPitch::uniform(1e-3).unwrap());
//!
//! assert_eq!(sampler.sample(&img, (2.5e-3, 1.5e-3)).unwrap(), 12.0);
//! assert_eq!(sampler.sample_at_scale(&img, (2.5e-3, 1.5e-3), 2).unwrap(), 24.0);
//! ```

// Re-export core types (grids used everywhere)
pub use fieldscan_core::*;

pub use fieldscan_sample::{
    CoordinateSampler, DEFAULT_PITCH_M, GridIndex, NegativePolicy,
    PhysicalCoordinate, PixelPitch, SampleError, SampleResult, SamplerOptions, ScaleLevel,
};

// Re-export the sampling crate as a module for its full surface
pub use fieldscan_sample as sample;
