//! Physical coordinates and grid addresses

/// Query point in physical units (meters)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PhysicalCoordinate {
    pub x: f64,
    pub y: f64,
}

impl PhysicalCoordinate {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for PhysicalCoordinate {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Cell address in the stored raster (row-major: row first)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GridIndex {
    pub row: usize,
    pub col: usize,
}

impl GridIndex {
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}
