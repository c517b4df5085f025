//! Read-only raster access
//!
//! [`Raster`] is the seam between a grid producer and a consumer that only
//! needs random access by (row, column). Indexing is row-major: the first
//! index selects the row, the second the column.

use crate::grid::Grid;
use crate::view::RasterView;

/// Dense, row-major 2D grid with checked element retrieval
pub trait Raster {
    /// Element type stored in each cell
    type Sample: Copy;

    /// Number of rows
    fn rows(&self) -> usize;

    /// Number of columns
    fn cols(&self) -> usize;

    /// Sample at (`row`, `col`), or `None` outside the grid
    fn sample(&self, row: usize, col: usize) -> Option<Self::Sample>;

    /// Get the grid extent as (rows, cols)
    #[inline]
    fn extent(&self) -> (usize, usize) {
        (self.rows(), self.cols())
    }
}

impl<T: Copy> Raster for Grid<T> {
    type Sample = T;

    #[inline]
    fn rows(&self) -> usize {
        self.shape().0
    }

    #[inline]
    fn cols(&self) -> usize {
        self.shape().1
    }

    #[inline]
    fn sample(&self, row: usize, col: usize) -> Option<T> {
        self.cell(row, col).copied()
    }

    #[inline]
    fn extent(&self) -> (usize, usize) {
        self.shape()
    }
}

impl<T: Copy> Raster for RasterView<'_, T> {
    type Sample = T;

    #[inline]
    fn rows(&self) -> usize {
        RasterView::rows(self)
    }

    #[inline]
    fn cols(&self) -> usize {
        RasterView::cols(self)
    }

    #[inline]
    fn sample(&self, row: usize, col: usize) -> Option<T> {
        self.get(row, col).copied()
    }
}

impl<R: Raster + ?Sized> Raster for &R {
    type Sample = R::Sample;

    #[inline]
    fn rows(&self) -> usize {
        (**self).rows()
    }

    #[inline]
    fn cols(&self) -> usize {
        (**self).cols()
    }

    #[inline]
    fn sample(&self, row: usize, col: usize) -> Option<R::Sample> {
        (**self).sample(row, col)
    }
}
