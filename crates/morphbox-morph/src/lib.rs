//! morphbox-morph - Structuring elements and elementary morphology
//!
//! This crate provides:
//!
//! - [`Sel`]: flat and non-flat structuring elements with constructors
//!   (cross, box, disk, sphere, line, matrix) and combinators (union,
//!   Minkowski sum, rotation, reflection, translation)
//! - Dilation and erosion of binary and gray-scale images, with opening,
//!   closing and the morphological gradient built on them
//! - Conditional dilation and erosion, the building blocks of
//!   morphological reconstruction

pub mod conditional;
pub mod elementary;
mod error;
pub mod sel;

pub use conditional::{
    PropagationStats, cdilate, cdilate_with_stats, cerode, cerode_with_stats,
};
pub use elementary::{close, dilate, erode, gradient, open};
pub use error::{MorphError, MorphResult};
pub use sel::{DiskMetric, Offset, RotationDirection, Sel};
