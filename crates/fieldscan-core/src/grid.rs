//! Grid - Owned measurement rasters
//!
//! A [`Grid`] holds one sample per cell of a uniformly sampled field,
//! row-major with no padding, plus the producer's resolution metadata.
//! [`FImage`] and [`DImage`] are the single and double precision grids
//! handed over by acquisition code.
//!
//! # Examples
//!
//! ```
//! use fieldscan_core::{FImage, Raster};
//!
//! // 3 columns, 2 rows
//! let img = FImage::from_fn(3, 2, |x, y| (10 * y + x) as f32).unwrap();
//! assert_eq!(img.extent(), (2, 3));
//! assert_eq!(img.sample(1, 2), Some(12.0));
//! ```

use crate::error::{Error, Result};

/// Row-major raster owning its samples
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<T> {
    rows: usize,
    cols: usize,
    samples: Vec<T>,
    /// (x, y) resolution in ppi, 0 when the producer did not record one
    ppi: (i32, i32),
}

/// Single-precision measurement grid
pub type FImage = Grid<f32>;

/// Double-precision measurement grid
pub type DImage = Grid<f64>;

impl<T> Grid<T> {
    /// Wrap `width * height` row-major samples
    ///
    /// # Errors
    ///
    /// - `Error::InvalidDimension` if either side is 0
    /// - `Error::InvalidParameter` if `data` has the wrong length
    pub fn from_data(width: u32, height: u32, data: Vec<T>) -> Result<Self> {
        let (rows, cols) = checked_extent(width, height)?;
        if data.len() != rows * cols {
            return Err(Error::InvalidParameter(format!(
                "{} samples for a {width}x{height} grid",
                data.len()
            )));
        }
        Ok(Self {
            rows,
            cols,
            samples: data,
            ppi: (0, 0),
        })
    }

    /// Build a grid whose cell at column `x`, row `y` holds `f(x, y)`
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimension` if either side is 0.
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Result<Self>
    where
        F: FnMut(u32, u32) -> T,
    {
        let (rows, cols) = checked_extent(width, height)?;
        let samples = (0..height)
            .flat_map(|y| (0..width).map(move |x| (x, y)))
            .map(|(x, y)| f(x, y))
            .collect();
        Ok(Self {
            rows,
            cols,
            samples,
            ppi: (0, 0),
        })
    }

    /// All samples, row after row
    #[inline]
    pub fn data(&self) -> &[T] {
        &self.samples
    }

    /// Resolution metadata as (xres, yres) in ppi
    #[inline]
    pub fn resolution(&self) -> (i32, i32) {
        self.ppi
    }

    #[inline]
    pub fn set_resolution(&mut self, xres: i32, yres: i32) {
        self.ppi = (xres, yres);
    }

    /// Convert every sample, keeping extent and resolution
    pub fn map<U, F>(&self, f: F) -> Grid<U>
    where
        T: Copy,
        F: FnMut(T) -> U,
    {
        Grid {
            rows: self.rows,
            cols: self.cols,
            samples: self.samples.iter().copied().map(f).collect(),
            ppi: self.ppi,
        }
    }

    #[inline]
    pub(crate) fn cell(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.rows && col < self.cols {
            self.samples.get(row * self.cols + col)
        } else {
            None
        }
    }

    #[inline]
    pub(crate) fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }
}

fn checked_extent(width: u32, height: u32) -> Result<(usize, usize)> {
    if width == 0 || height == 0 {
        return Err(Error::InvalidDimension { width, height });
    }
    Ok((height as usize, width as usize))
}
