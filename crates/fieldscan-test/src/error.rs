//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur while preparing regression tests
#[derive(Debug, Error)]
pub enum TestError {
    /// Grid construction failed
    #[error("core error: {0}")]
    Core(#[from] fieldscan_core::Error),

    /// Fixture parameters are unusable
    #[error("invalid fixture: {0}")]
    Fixture(String),
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
