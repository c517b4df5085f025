//! fieldscan-test - Regression test framework for fieldscan
//!
//! Provides indexed regression comparisons in two modes:
//!
//! - **Compare**: Record and report mismatches (default)
//! - **Display**: Additionally print every comparison for inspection
//!
//! # Usage
//!
//! ```ignore
//! use fieldscan_test::{RegParams, ramp_image};
//!
//! let mut rp = RegParams::new("sampler");
//! let img = ramp_image(8, 8).unwrap();
//! rp.compare_values(203.0, value as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "compare" or "display"
//! - `RUST_LOG`: Log filter applied by [`init_logging`]

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

use fieldscan_core::FImage;

/// Install a test logger once; later calls are no-ops.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Largest integer below which every `f32` integer value is exact
const F32_EXACT_LIMIT: u64 = 1 << 24;

/// Build a `width` x `height` grid whose sample at column `x`, row `y` is
/// `1000 * y + x`, so every cell value names its own address.
///
/// Widths above 1000 would let columns spill into the row digit, and
/// heights with `1000 * height > 2^24` would leave the exact `f32` range.
pub fn ramp_image(width: u32, height: u32) -> TestResult<FImage> {
    if width > 1000 {
        return Err(TestError::Fixture(format!(
            "ramp width {width} would make cell values ambiguous"
        )));
    }
    if 1000 * u64::from(height) > F32_EXACT_LIMIT {
        return Err(TestError::Fixture(format!(
            "ramp height {height} exceeds exact f32 integers"
        )));
    }
    Ok(FImage::from_fn(width, height, |x, y| {
        (1000 * y + x) as f32
    })?)
}

/// Decode a [`ramp_image`] value back to its (row, col) address
pub fn ramp_address(value: f32) -> (usize, usize) {
    let v = value as usize;
    (v / 1000, v % 1000)
}
