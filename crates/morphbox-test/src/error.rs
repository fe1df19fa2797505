//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur while building regression fixtures
#[derive(Debug, Error)]
pub enum TestError {
    /// A fixture row contained a token that is not an integer
    #[error("bad fixture token '{token}' in row {row}")]
    Parse { row: usize, token: String },

    /// The parsed fixture is not a valid image
    #[error("invalid fixture image: {0}")]
    Image(#[from] morphbox_core::Error),
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
