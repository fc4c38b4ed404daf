//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur while building test data
#[derive(Debug, Error)]
pub enum TestError {
    /// A token could not be parsed as a sample value
    #[error("slice {slice}, row {row}: cannot parse '{token}'")]
    Parse {
        slice: usize,
        row: usize,
        token: String,
    },

    /// Rows or slices of a text volume disagree in size
    #[error("slice {slice}: expected {expected} {what}, found {found}")]
    Ragged {
        slice: usize,
        what: &'static str,
        expected: usize,
        found: usize,
    },

    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] voxseg_core::Error),
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
