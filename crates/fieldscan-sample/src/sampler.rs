//! Coordinate-to-sample lookup
//!
//! Maps a physical coordinate to the raster cell containing it:
//!
//! ```text
//! col = trunc(x / dx)
//! row = trunc(y / dy)
//! ```
//!
//! and reads that cell. The multiscale variant multiplies both indices by a
//! scale level `L` before reading, so the same fine buffer is addressed as a
//! coarser virtual grid with stride `L` (no downsampled copy is built).
//!
//! # Negative coordinates
//!
//! Index computation truncates toward zero, which differs from `floor` for
//! negative inputs: with `dx = 8.9e-3`, `x = -0.001` lands in column 0 while
//! `x = -0.01` yields column -1 and is reported as out of bounds. Use
//! [`NegativePolicy::Reject`] to refuse every negative coordinate instead.
//!
//! # Cell boundaries
//!
//! Cell `k` spans `[k * dx, (k + 1) * dx)` with both ends taken as the
//! rounded products `(k as f64) * dx`. A truncated quotient is corrected by
//! one cell against those products, so a coordinate computed as `k * dx`
//! lands in cell `k` and every coordinate below `dx` stays in cell 0.

use fieldscan_core::{Grid, Raster};
use log::{debug, trace};

use crate::coord::{GridIndex, PhysicalCoordinate};
use crate::error::{SampleError, SampleResult};
use crate::level::ScaleLevel;
use crate::pitch::PixelPitch;

/// How negative coordinates are handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NegativePolicy {
    /// Truncate toward zero; cells left of or above the origin are out of bounds
    #[default]
    Truncate,
    /// Fail with `SampleError::NegativeCoordinate`
    Reject,
}

/// Sampler configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplerOptions {
    /// Physical cell size
    pub pitch: PixelPitch,
    /// Negative coordinate handling
    pub negative: NegativePolicy,
}

impl Default for SamplerOptions {
    fn default() -> Self {
        Self {
            pitch: PixelPitch::default(),
            negative: NegativePolicy::Truncate,
        }
    }
}

impl SamplerOptions {
    /// Create options with a specific pitch
    pub fn with_pitch(pitch: PixelPitch) -> Self {
        Self {
            pitch,
            ..Default::default()
        }
    }

    /// Set the negative coordinate policy
    pub fn negative_policy(mut self, negative: NegativePolicy) -> Self {
        self.negative = negative;
        self
    }
}

/// Maps physical coordinates to raster samples
///
/// Holds only immutable configuration, so one sampler can serve any number
/// of rasters and threads.
///
/// # Examples
///
/// ```
/// use fieldscan_core::FImage;
/// use fieldscan_sample::{CoordinateSampler, PixelPitch};
///
/// let img = FImage::from_fn(4, 4, |x, y| (10 * y + x) as f32).unwrap();
/// let sampler = CoordinateSampler::new(PixelPitch::uniform(8.9e-3).unwrap());
///
/// assert_eq!(sampler.sample(&img, (0.0089, 0.0178)).unwrap(), 21.0);
/// assert_eq!(sampler.sample_at_scale(&img, (0.0089, 0.0089), 2).unwrap(), 22.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateSampler {
    options: SamplerOptions,
}

impl Default for CoordinateSampler {
    fn default() -> Self {
        Self::with_options(SamplerOptions::default())
    }
}

impl CoordinateSampler {
    /// Create a sampler with the given pitch and default options
    pub fn new(pitch: PixelPitch) -> Self {
        Self::with_options(SamplerOptions::with_pitch(pitch))
    }

    /// Create a sampler from raw per-axis cell sizes
    ///
    /// # Errors
    ///
    /// Returns `SampleError::InvalidPitch` for a zero, negative or
    /// non-finite pitch.
    pub fn from_pitch(dx: f64, dy: f64) -> SampleResult<Self> {
        Ok(Self::new(PixelPitch::new(dx, dy)?))
    }

    /// Create a sampler whose pitch comes from a grid's ppi metadata
    ///
    /// Works for any owned grid (`FImage`, `DImage`).
    ///
    /// # Errors
    ///
    /// Returns `SampleError::InvalidPitch` if the grid resolution is unknown.
    pub fn for_image<T>(image: &Grid<T>) -> SampleResult<Self> {
        let (xres, yres) = image.resolution();
        Ok(Self::new(PixelPitch::from_resolution(xres, yres)?))
    }

    pub fn with_options(options: SamplerOptions) -> Self {
        debug!(
            "CoordinateSampler: dx = {}, dy = {}, negative = {:?}",
            options.pitch.dx(),
            options.pitch.dy(),
            options.negative
        );
        Self { options }
    }

    #[inline]
    pub fn pitch(&self) -> PixelPitch {
        self.options.pitch
    }

    #[inline]
    pub fn options(&self) -> &SamplerOptions {
        &self.options
    }

    /// Unscaled cell address of `coord` as signed (row, col)
    ///
    /// No raster is consulted, so the result may lie outside any image.
    ///
    /// # Errors
    ///
    /// - `SampleError::NonFiniteCoordinate` for NaN or infinite input
    /// - `SampleError::NegativeCoordinate` for negative input under
    ///   `NegativePolicy::Reject`
    pub fn grid_index(&self, coord: impl Into<PhysicalCoordinate>) -> SampleResult<(i64, i64)> {
        let coord = coord.into();
        if !coord.is_finite() {
            trace!("non-finite coordinate ({}, {})", coord.x, coord.y);
            return Err(SampleError::NonFiniteCoordinate {
                x: coord.x,
                y: coord.y,
            });
        }
        if self.options.negative == NegativePolicy::Reject && (coord.x < 0.0 || coord.y < 0.0) {
            trace!("negative coordinate ({}, {}) rejected", coord.x, coord.y);
            return Err(SampleError::NegativeCoordinate {
                x: coord.x,
                y: coord.y,
            });
        }

        let col = axis_index(coord.x, self.options.pitch.dx());
        let row = axis_index(coord.y, self.options.pitch.dy());
        Ok((row, col))
    }

    /// Bounds-checked fine-raster cell read by a lookup at `level`
    ///
    /// # Errors
    ///
    /// As [`grid_index`](Self::grid_index), plus `SampleError::OutOfBounds`
    /// when the scaled cell is outside `image`.
    pub fn locate<R: Raster + ?Sized>(
        &self,
        image: &R,
        coord: impl Into<PhysicalCoordinate>,
        level: ScaleLevel,
    ) -> SampleResult<GridIndex> {
        let (row, col) = self.grid_index(coord)?;
        let (rows, cols) = image.extent();
        let l = i64::from(level.get());

        let row = row.saturating_mul(l);
        let col = col.saturating_mul(l);
        match (checked_axis(row, rows), checked_axis(col, cols)) {
            (Some(r), Some(c)) => Ok(GridIndex::new(r, c)),
            _ => {
                trace!("cell ({row}, {col}) outside {rows}x{cols} raster at level {l}");
                Err(SampleError::OutOfBounds {
                    row,
                    col,
                    rows,
                    cols,
                })
            }
        }
    }

    /// Sample stored in the cell containing `coord`
    ///
    /// # Errors
    ///
    /// Returns `SampleError::OutOfBounds` if the cell is outside `image`;
    /// see [`grid_index`](Self::grid_index) for coordinate errors.
    #[inline]
    pub fn sample<R: Raster + ?Sized>(
        &self,
        image: &R,
        coord: impl Into<PhysicalCoordinate>,
    ) -> SampleResult<R::Sample> {
        self.read(image, coord, ScaleLevel::ONE)
    }

    /// Sample at virtual resolution `level`: reads fine cell `(level*row, level*col)`
    ///
    /// `level == 1` is identical to [`sample`](Self::sample).
    ///
    /// # Errors
    ///
    /// Returns `SampleError::InvalidScaleLevel` for level 0 before any index
    /// is computed; otherwise as [`sample`](Self::sample).
    #[inline]
    pub fn sample_at_scale<R: Raster + ?Sized>(
        &self,
        image: &R,
        coord: impl Into<PhysicalCoordinate>,
        level: u32,
    ) -> SampleResult<R::Sample> {
        let level = ScaleLevel::new(level)?;
        self.read(image, coord, level)
    }

    /// Sample every coordinate at `level`, failing on the first bad one
    pub fn sample_many<R: Raster + ?Sized>(
        &self,
        image: &R,
        coords: &[PhysicalCoordinate],
        level: u32,
    ) -> SampleResult<Vec<R::Sample>> {
        let level = ScaleLevel::new(level)?;
        let values = coords
            .iter()
            .map(|&c| self.read(image, c, level))
            .collect::<SampleResult<Vec<_>>>()?;
        debug!("sample_many: {} points at level {}", values.len(), level.get());
        Ok(values)
    }

    /// Extent (rows, cols) of the virtual grid addressable at `level`
    ///
    /// Virtual cell `(j, i)` is valid exactly when `j < rows` and `i < cols`.
    pub fn virtual_extent<R: Raster + ?Sized>(
        &self,
        image: &R,
        level: u32,
    ) -> SampleResult<(usize, usize)> {
        let level = ScaleLevel::new(level)?;
        Ok((level.virtual_len(image.rows()), level.virtual_len(image.cols())))
    }

    /// Physical cell size of the virtual grid at `level`
    pub fn pitch_at_scale(&self, level: u32) -> SampleResult<PixelPitch> {
        let level = ScaleLevel::new(level)?;
        Ok(self.options.pitch.scaled(level.get()))
    }

    fn read<R: Raster + ?Sized>(
        &self,
        image: &R,
        coord: impl Into<PhysicalCoordinate>,
        level: ScaleLevel,
    ) -> SampleResult<R::Sample> {
        let idx = self.locate(image, coord, level)?;
        image
            .sample(idx.row, idx.col)
            .ok_or(SampleError::OutOfBounds {
                row: idx.row as i64,
                col: idx.col as i64,
                rows: image.rows(),
                cols: image.cols(),
            })
    }
}

/// Cell index of `v` along an axis of pitch `pitch`, truncated toward zero
///
/// The magnitude's quotient is moved by at most one cell so that
/// `fl(k * pitch) <= |v| < fl((k + 1) * pitch)` holds for the result `k`.
fn axis_index(v: f64, pitch: f64) -> i64 {
    let magnitude = v.abs();
    // `as` saturates, so huge quotients become out-of-bounds indices
    let mut k = (magnitude / pitch) as i64;
    if k < i64::MAX && (k + 1) as f64 * pitch <= magnitude {
        k += 1;
    } else if k > 0 && k as f64 * pitch > magnitude {
        k -= 1;
    }
    if v < 0.0 { -k } else { k }
}

fn checked_axis(index: i64, len: usize) -> Option<usize> {
    usize::try_from(index).ok().filter(|&i| i < len)
}
