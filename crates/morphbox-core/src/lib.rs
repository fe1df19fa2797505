//! morphbox-core - Image model for mathematical morphology
//!
//! This crate provides the data structures every morphbox operator
//! works on:
//!
//! - [`Image`] / [`ImageMut`] - Typed 2-D pixel grid (immutable / mutable)
//! - [`PixelType`] - `binary`, `uint8`, `uint16`, `int32` with their value
//!   limits and promotion table
//! - Pixelwise operators: negation, union/intersection, saturating
//!   arithmetic, thresholding, type conversion, borders and frames
//!
//! All operators are pure: they return a new image and never modify
//! their inputs.

pub mod error;
pub mod image;

pub use error::{Error, Result};
pub use image::arith::{intersection_all, union_all};
pub use image::{INT32_MAX, INT32_MIN, Image, ImageMut, PixelType};
