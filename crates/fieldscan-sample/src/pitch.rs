//! Physical pixel pitch

use crate::error::{SampleError, SampleResult};

/// Pitch of the reference scanner calibration, in meters
pub const DEFAULT_PITCH_M: f64 = 8.9e-3;

/// Meters per inch, for converting ppi resolution metadata
const METERS_PER_INCH: f64 = 0.0254;

/// Physical size of one grid cell along each axis
///
/// `dx` spans one column, `dy` one row. Both are finite and strictly
/// positive for every constructed value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelPitch {
    dx: f64,
    dy: f64,
}

impl PixelPitch {
    /// Create a pitch from per-axis cell sizes
    ///
    /// # Errors
    ///
    /// Returns `SampleError::InvalidPitch` if either value is zero,
    /// negative, NaN or infinite.
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldscan_sample::PixelPitch;
    ///
    /// let pitch = PixelPitch::new(1e-3, 2e-3).unwrap();
    /// assert_eq!(pitch.dy(), 2e-3);
    /// assert!(PixelPitch::new(0.0, 1e-3).is_err());
    /// ```
    pub fn new(dx: f64, dy: f64) -> SampleResult<Self> {
        check_axis("x", dx)?;
        check_axis("y", dy)?;
        Ok(Self { dx, dy })
    }

    /// Create a square pitch
    pub fn uniform(d: f64) -> SampleResult<Self> {
        Self::new(d, d)
    }

    /// Derive the pitch from resolution metadata in pixels per inch
    ///
    /// # Errors
    ///
    /// Returns `SampleError::InvalidPitch` when a resolution is unknown (0)
    /// or negative.
    pub fn from_resolution(xres: i32, yres: i32) -> SampleResult<Self> {
        if xres <= 0 {
            return Err(SampleError::InvalidPitch {
                axis: "x",
                value: xres as f64,
            });
        }
        if yres <= 0 {
            return Err(SampleError::InvalidPitch {
                axis: "y",
                value: yres as f64,
            });
        }
        Self::new(METERS_PER_INCH / xres as f64, METERS_PER_INCH / yres as f64)
    }

    #[inline]
    pub fn dx(&self) -> f64 {
        self.dx
    }

    #[inline]
    pub fn dy(&self) -> f64 {
        self.dy
    }

    /// Pitch of the virtual grid seen at `level`
    pub fn scaled(&self, level: u32) -> Self {
        Self {
            dx: self.dx * level as f64,
            dy: self.dy * level as f64,
        }
    }
}

impl Default for PixelPitch {
    fn default() -> Self {
        Self {
            dx: DEFAULT_PITCH_M,
            dy: DEFAULT_PITCH_M,
        }
    }
}

fn check_axis(axis: &'static str, value: f64) -> SampleResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SampleError::InvalidPitch { axis, value })
    }
}
