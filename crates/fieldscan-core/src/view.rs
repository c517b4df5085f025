//! RasterView - Borrowed row-major grid
//!
//! Wraps a caller-owned slice so grids produced elsewhere (decoders,
//! acquisition drivers, other matrix types) can be sampled without copying.

use crate::error::{Error, Result};

/// Borrowed, read-only row-major grid over a slice
#[derive(Debug, Clone, Copy)]
pub struct RasterView<'a, T> {
    rows: usize,
    cols: usize,
    data: &'a [T],
}

impl<'a, T> RasterView<'a, T> {
    /// Create a view over `data` holding `rows * cols` elements in row-major order
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidParameter` if `rows * cols` overflows or does
    /// not equal `data.len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldscan_core::RasterView;
    ///
    /// let data = [1u16, 2, 3, 4, 5, 6];
    /// let view = RasterView::from_slice(2, 3, &data).unwrap();
    /// assert_eq!(view.get(1, 0), Some(&4));
    /// ```
    pub fn from_slice(rows: usize, cols: usize, data: &'a [T]) -> Result<Self> {
        let expected = rows.checked_mul(cols).ok_or_else(|| {
            Error::InvalidParameter(format!("grid size {rows}x{cols} overflows"))
        })?;
        if data.len() != expected {
            return Err(Error::InvalidParameter(format!(
                "data length {} doesn't match {}x{} = {}",
                data.len(),
                rows,
                cols,
                expected
            )));
        }
        Ok(Self { rows, cols, data })
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Element at (`row`, `col`), or `None` outside the grid
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<&'a T> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.data.get(row * self.cols + col)
    }

    /// Get a row of the view
    ///
    /// # Panics
    ///
    /// Panics if `row >= rows`.
    pub fn row(&self, row: usize) -> &'a [T] {
        assert!(row < self.rows, "row index out of bounds");
        let start = row * self.cols;
        &self.data[start..start + self.cols]
    }
}
