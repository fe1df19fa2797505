//! Error types for morphbox-core
//!
//! Provides a unified error type for the image model and the pixelwise
//! operators built on it. Every violation is detected when an operator is
//! entered and is returned to the caller; nothing is coerced silently.

use crate::image::PixelType;
use thiserror::Error;

/// morphbox-core error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid image dimensions
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: usize, height: usize },

    /// Input of rank other than 1 or 2
    #[error("operator is 2-D only: got an input of rank {rank}")]
    Non2D { rank: usize },

    /// Image dimension mismatch
    #[error("dimension mismatch: expected {}x{}, got {}x{}", .expected.0, .expected.1, .actual.0, .actual.1)]
    DimensionMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },

    /// Operands have pixel types with no promotion path between them
    #[error("pixel type mismatch: {left} vs {right}")]
    TypeMismatch { left: PixelType, right: PixelType },

    /// A binary image was required
    #[error("binary image required: {0}")]
    NotBinary(&'static str),

    /// Index out of bounds
    #[error("index out of bounds: {index} >= {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Pixel value outside the range of its type
    #[error("value {value} is outside the range of {pixel_type}")]
    ValueOutOfRange { value: i64, pixel_type: PixelType },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for morphbox-core operations
pub type Result<T> = std::result::Result<T, Error>;
