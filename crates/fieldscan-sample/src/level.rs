//! Scale levels for strided virtual resolution

use std::num::NonZeroU32;

use crate::error::{SampleError, SampleResult};

/// Integer factor applied to grid indices, always >= 1
///
/// Level `L` addresses the fine raster at stride `L`, so cell `(j, i)` of
/// the virtual grid reads fine cell `(L*j, L*i)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScaleLevel(NonZeroU32);

impl ScaleLevel {
    /// Full resolution
    pub const ONE: Self = Self(NonZeroU32::MIN);

    /// # Errors
    ///
    /// Returns `SampleError::InvalidScaleLevel` for 0.
    pub fn new(level: u32) -> SampleResult<Self> {
        NonZeroU32::new(level)
            .map(Self)
            .ok_or(SampleError::InvalidScaleLevel(level as i64))
    }

    #[inline]
    pub fn get(self) -> u32 {
        self.0.get()
    }

    /// Number of virtual cells along an axis of `len` fine cells
    #[inline]
    pub fn virtual_len(self, len: usize) -> usize {
        len.div_ceil(self.get() as usize)
    }
}

impl Default for ScaleLevel {
    fn default() -> Self {
        Self::ONE
    }
}

impl TryFrom<i64> for ScaleLevel {
    type Error = SampleError;

    fn try_from(level: i64) -> SampleResult<Self> {
        u32::try_from(level)
            .ok()
            .and_then(NonZeroU32::new)
            .map(Self)
            .ok_or(SampleError::InvalidScaleLevel(level))
    }
}
