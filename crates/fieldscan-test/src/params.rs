//! Indexed regression comparisons
//!
//! Every comparison bumps an index, so a failure message names the exact
//! step of a test that went wrong. Failures are collected rather than
//! panicking; the test asserts on [`RegParams::cleanup`] at the end.

use fieldscan_core::Raster;

/// How much a regression run prints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegTestMode {
    /// Report failures only
    #[default]
    Compare,
    /// Also echo every comparison
    Display,
}

impl RegTestMode {
    /// Read `REGTEST_MODE`; anything but "display" means compare
    pub fn from_env() -> Self {
        std::env::var("REGTEST_MODE")
            .map(|v| Self::parse(&v))
            .unwrap_or_default()
    }

    fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("display") {
            Self::Display
        } else {
            Self::Compare
        }
    }
}

/// State of one named regression run
pub struct RegParams {
    pub test_name: String,
    pub mode: RegTestMode,
    index: usize,
    failures: Vec<String>,
}

impl RegParams {
    /// Start a run; installs the test logger and reads the mode
    pub fn new(test_name: &str) -> Self {
        crate::init_logging();
        let mode = RegTestMode::from_env();
        log::debug!("{test_name}_reg: mode {mode:?}");

        Self {
            test_name: test_name.to_string(),
            mode,
            index: 0,
            failures: Vec::new(),
        }
    }

    /// Index of the last comparison made
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn display(&self) -> bool {
        self.mode == RegTestMode::Display
    }

    /// Pass when `|expected - actual| <= delta`; NaN never passes
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        let step = self.step();
        if self.display() {
            eprintln!("{}_reg [{step}]: expected {expected}, got {actual}", self.test_name);
        }

        let diff = (expected - actual).abs();
        let ok = diff <= delta;
        if !ok {
            self.record(format!(
                "step {step}: expected {expected}, got {actual} (diff {diff} > delta {delta})"
            ));
        }
        ok
    }

    /// Pass when `condition` holds; `what` describes the expectation
    pub fn check(&mut self, condition: bool, what: &str) -> bool {
        let step = self.step();
        if !condition {
            self.record(format!("step {step}: {what}"));
        }
        condition
    }

    /// Pass when both rasters have the same extent and equal samples
    pub fn compare_images<R>(&mut self, a: &R, b: &R) -> bool
    where
        R: Raster,
        R::Sample: PartialEq,
    {
        let step = self.step();
        let (rows, cols) = a.extent();
        if b.extent() != (rows, cols) {
            self.record(format!(
                "step {step}: extent {:?} vs {:?}",
                a.extent(),
                b.extent()
            ));
            return false;
        }

        let first_diff = (0..rows)
            .flat_map(|r| (0..cols).map(move |c| (r, c)))
            .find(|&(r, c)| a.sample(r, c) != b.sample(r, c));
        match first_diff {
            Some((r, c)) => {
                self.record(format!("step {step}: samples differ at row {r}, col {c}"));
                false
            }
            None => true,
        }
    }

    /// Print the summary and return whether every comparison passed
    pub fn cleanup(self) -> bool {
        let ok = self.failures.is_empty();
        eprintln!(
            "{}: {}_reg ({} comparisons)",
            if ok { "SUCCESS" } else { "FAILURE" },
            self.test_name,
            self.index
        );
        for failure in &self.failures {
            eprintln!("  {failure}");
        }
        ok
    }

    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn failures(&self) -> &[String] {
        &self.failures
    }

    fn step(&mut self) -> usize {
        self.index += 1;
        self.index
    }

    fn record(&mut self, detail: String) {
        let msg = format!("{}_reg {detail}", self.test_name);
        eprintln!("{msg}");
        self.failures.push(msg);
    }
}
