//! Coordinate sampler regression test
//!
//! Tests full-resolution lookup: cell interiors, exact cell boundaries and
//! the coordinates just below them, the negative-coordinate policies,
//! out-of-bounds reporting and concurrent use of one sampler.

use fieldscan_core::{DImage, Raster};
use fieldscan_sample::{
    CoordinateSampler, NegativePolicy, PhysicalCoordinate, PixelPitch, SampleError,
    SamplerOptions,
};
use fieldscan_test::{RegParams, ramp_address, ramp_image};

const D: f64 = 8.9e-3;

// ==========================================================================
// Test 1: Points inside the first cell
// ==========================================================================

#[test]
fn sampler_reg_first_cell() {
    let mut rp = RegParams::new("sampler_first_cell");

    let img = ramp_image(6, 6).unwrap();
    let sampler = CoordinateSampler::default();

    for a in 0..10 {
        for b in 0..10 {
            let x = D * a as f64 / 10.0;
            let y = D * b as f64 / 10.0;
            let v = sampler.sample(&img, (x, y)).unwrap();
            rp.compare_values(0.0, v as f64, 0.0);
        }
    }

    // just inside the far corner
    let v = sampler.sample(&img, (D * 0.999, D * 0.999)).unwrap();
    rp.compare_values(0.0, v as f64, 0.0);

    assert!(rp.cleanup(), "sampler_reg first cell tests failed");
}

// ==========================================================================
// Test 2: Exact cell boundaries map to the cell they open
// ==========================================================================

#[test]
fn sampler_reg_boundaries() {
    let mut rp = RegParams::new("sampler_boundaries");

    let img = ramp_image(40, 30).unwrap();
    let sampler = CoordinateSampler::default();

    for m in 0..30usize {
        for k in 0..40usize {
            let v = sampler.sample(&img, (k as f64 * D, m as f64 * D)).unwrap();
            rp.check(ramp_address(v) == (m, k), &format!("boundary cell ({m}, {k})"));
        }
    }

    assert!(rp.cleanup(), "sampler_reg boundary tests failed");
}

// ==========================================================================
// Test 3: Reference scenario with the default calibration
// ==========================================================================

#[test]
fn sampler_reg_reference_scenario() {
    let mut rp = RegParams::new("sampler_reference");

    let img = ramp_image(4, 4).unwrap();
    let sampler = CoordinateSampler::new(PixelPitch::uniform(8.9e-3).unwrap());

    let (row, col) = sampler.grid_index((0.0089, 0.0178)).unwrap();
    rp.compare_values(2.0, row as f64, 0.0);
    rp.compare_values(1.0, col as f64, 0.0);

    // row 2, column 1
    let v = sampler.sample(&img, (0.0089, 0.0178)).unwrap();
    rp.compare_values(2001.0, v as f64, 0.0);

    assert!(rp.cleanup(), "sampler_reg reference scenario failed");
}

// ==========================================================================
// Test 4: Negative coordinates
// ==========================================================================

#[test]
fn sampler_reg_negative_coordinates() {
    let mut rp = RegParams::new("sampler_negative");

    let img = ramp_image(4, 4).unwrap();

    // Truncate (default): -0.001 / 8.9e-3 truncates to column 0
    let truncate = CoordinateSampler::default();
    let v = truncate.sample(&img, (-0.001, 0.0089)).unwrap();
    rp.compare_values(1000.0, v as f64, 0.0);

    // one full cell left of the origin is out of bounds, not clamped
    let r = truncate.sample(&img, (-0.01, 0.0));
    rp.check(
        r == Err(SampleError::OutOfBounds {
            row: 0,
            col: -1,
            rows: 4,
            cols: 4,
        }),
        "x = -0.01 reports column -1",
    );

    // Reject: any negative coordinate fails
    let reject = CoordinateSampler::with_options(
        SamplerOptions::default().negative_policy(NegativePolicy::Reject),
    );
    let r = reject.sample(&img, (-0.001, 0.0089));
    rp.check(
        matches!(r, Err(SampleError::NegativeCoordinate { .. })),
        "reject policy refuses x = -0.001",
    );
    let v = reject.sample(&img, (0.0, 0.0089)).unwrap();
    rp.compare_values(1000.0, v as f64, 0.0);

    assert!(rp.cleanup(), "sampler_reg negative coordinate tests failed");
}

// ==========================================================================
// Test 5: Out-of-bounds lookups
// ==========================================================================

#[test]
fn sampler_reg_out_of_bounds() {
    let mut rp = RegParams::new("sampler_oob");

    // 5 columns, 3 rows
    let img = ramp_image(5, 3).unwrap();
    let sampler = CoordinateSampler::from_pitch(1.0, 1.0).unwrap();

    let cases = [
        ((5.0, 0.0), 0, 5),
        ((0.0, 3.0), 3, 0),
        ((9.5, 9.5), 9, 9),
    ];
    for ((x, y), row, col) in cases {
        let r = sampler.sample(&img, (x, y));
        rp.check(
            r == Err(SampleError::OutOfBounds {
                row,
                col,
                rows: 3,
                cols: 5,
            }),
            &format!("({x}, {y}) out of bounds"),
        );
    }

    // last valid cell
    let v = sampler.sample(&img, (4.99, 2.99)).unwrap();
    rp.compare_values(2004.0, v as f64, 0.0);

    assert!(rp.cleanup(), "sampler_reg out-of-bounds tests failed");
}

// ==========================================================================
// Test 6: Invalid pitch is refused at construction
// ==========================================================================

#[test]
fn sampler_reg_invalid_pitch() {
    let mut rp = RegParams::new("sampler_pitch");

    for (dx, dy) in [(0.0, 1.0), (1.0, 0.0), (-1.0, 1.0), (1.0, f64::NAN)] {
        let r = CoordinateSampler::from_pitch(dx, dy);
        rp.check(
            matches!(r, Err(SampleError::InvalidPitch { .. })),
            &format!("pitch ({dx}, {dy}) rejected"),
        );
    }

    assert!(rp.cleanup(), "sampler_reg invalid pitch tests failed");
}

// ==========================================================================
// Test 7: Double-precision grids and shared concurrent use
// ==========================================================================

#[test]
fn sampler_reg_dimage_concurrent() {
    let mut rp = RegParams::new("sampler_concurrent");

    let fimg = ramp_image(16, 16).unwrap();
    let dimg: DImage = fimg.map(f64::from);
    let sampler = CoordinateSampler::from_pitch(0.5, 0.25).unwrap();

    let results: Vec<Vec<f64>> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|t| {
                let dimg = &dimg;
                let sampler = &sampler;
                s.spawn(move || {
                    (0..16)
                        .map(|i| {
                            let p = PhysicalCoordinate::new(i as f64 * 0.5, t as f64 * 0.25);
                            sampler.sample(dimg, p).unwrap()
                        })
                        .collect::<Vec<f64>>()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for (t, row) in results.iter().enumerate() {
        for (i, &v) in row.iter().enumerate() {
            rp.compare_values((1000 * t + i) as f64, v, 0.0);
        }
    }
    rp.compare_values(16.0, dimg.rows() as f64, 0.0);

    assert!(rp.cleanup(), "sampler_reg concurrent tests failed");
}

// ==========================================================================
// Test 8: Coordinates just below a boundary stay in the previous cell
// ==========================================================================

#[test]
fn sampler_reg_below_boundaries() {
    let mut rp = RegParams::new("sampler_below_boundaries");

    let img = ramp_image(64, 2).unwrap();
    let sampler = CoordinateSampler::default();

    // below the first boundary every coordinate is in column 0
    let mut x = D;
    for step in 1..=64 {
        x = f64::from_bits(x.to_bits() - 1);
        let v = sampler.sample(&img, (x, 0.0)).unwrap();
        rp.check(ramp_address(v) == (0, 0), &format!("{step} ulps below dx"));
    }

    for k in 1..64usize {
        let boundary = k as f64 * D;
        let v = sampler.sample(&img, (boundary, 0.0)).unwrap();
        rp.check(ramp_address(v) == (0, k), &format!("boundary {k}"));

        let mut x = boundary;
        for step in 1..=8 {
            x = f64::from_bits(x.to_bits() - 1);
            let v = sampler.sample(&img, (x, 0.0)).unwrap();
            rp.check(
                ramp_address(v) == (0, k - 1),
                &format!("{step} ulps below boundary {k}"),
            );
        }
    }

    assert!(rp.cleanup(), "sampler_reg below-boundary tests failed");
}
