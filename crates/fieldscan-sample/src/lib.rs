//! fieldscan-sample - Physical-coordinate lookup into measurement rasters
//!
//! This crate maps points in physical (metric) space onto the cells of a
//! uniformly sampled raster:
//!
//! - [`CoordinateSampler`] - Cell lookup at full or strided virtual resolution
//! - [`PixelPitch`] - Validated physical cell size
//! - [`ScaleLevel`] - Integer stride for multiscale addressing
//! - [`PhysicalCoordinate`] / [`GridIndex`] - Query points and cell addresses
//!
//! Every lookup is bounds-checked and reports failures as [`SampleError`].

mod coord;
mod error;
mod level;
mod pitch;
pub mod sampler;

pub use coord::{GridIndex, PhysicalCoordinate};
pub use error::{SampleError, SampleResult};
pub use level::ScaleLevel;
pub use pitch::{DEFAULT_PITCH_M, PixelPitch};
pub use sampler::{CoordinateSampler, NegativePolicy, SamplerOptions};
