//! fieldscan Core - Raster grids for physical measurement fields
//!
//! This crate provides the grid types sampled by `fieldscan-sample`:
//!
//! - [`Grid`] ([`FImage`] / [`DImage`]) - Owned `f32` / `f64` measurement grids
//! - [`RasterView`] - Borrowed view over a caller-owned row-major slice
//! - [`Raster`] - Read-only (row, column) access shared by all of the above

pub mod error;
pub mod grid;
pub mod raster;
pub mod view;

pub use error::{Error, Result};
pub use grid::{DImage, FImage, Grid};
pub use raster::Raster;
pub use view::RasterView;
