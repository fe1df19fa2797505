//! Pixelwise arithmetic
//!
//! This module provides the lattice and arithmetic operators every
//! morphological operator is composed from:
//!
//! - Negation (`neg`)
//! - Union / intersection: pixelwise max / min (`union`, `intersection`,
//!   and the sequence forms `union_all`, `intersection_all`)
//! - Saturating addition and subtraction (`add_saturate`,
//!   `subtract_saturate` and constant variants)
//!
//! Two-image operators require equal shapes and follow the promotion
//! table of [`PixelType::promote`]. Results saturate at the limits of the
//! result type instead of wrapping.

use super::{Image, PixelType};
use crate::error::{Error, Result};

impl Image {
    /// Negate an image: `min + max - f` for the image's type.
    ///
    /// For a binary image this is the complement.
    ///
    /// # Example
    ///
    /// ```
    /// use morphbox_core::{Image, PixelType};
    ///
    /// let f = Image::from_rows(PixelType::Uint8, &[[0, 10, 255]]).unwrap();
    /// assert_eq!(f.neg().data(), &[255, 245, 0]);
    /// ```
    pub fn neg(&self) -> Image {
        let pt = self.pixel_type();
        let k = pt.min_value() as i64 + pt.max_value() as i64;
        let data = self.data().iter().map(|&v| (k - v as i64) as i32).collect();
        self.with_data(pt, data)
    }

    /// Pixelwise maximum of two images.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] for different shapes and
    /// [`Error::TypeMismatch`] when the types cannot be promoted.
    pub fn union(&self, other: &Image) -> Result<Image> {
        self.combine(other, |a, b| a.max(b))
    }

    /// Pixelwise minimum of two images.
    ///
    /// # Errors
    ///
    /// Same as [`Image::union`].
    pub fn intersection(&self, other: &Image) -> Result<Image> {
        self.combine(other, |a, b| a.min(b))
    }

    /// Saturating pixelwise sum.
    pub fn add_saturate(&self, other: &Image) -> Result<Image> {
        self.combine(other, |a, b| a + b)
    }

    /// Saturating pixelwise difference `self - other`.
    ///
    /// On binary images this is the set difference.
    pub fn subtract_saturate(&self, other: &Image) -> Result<Image> {
        self.combine(other, |a, b| a - b)
    }

    /// Pixelwise maximum with a constant (clamped to the type range).
    pub fn union_constant(&self, k: i64) -> Image {
        let pt = self.pixel_type();
        let k = pt.saturate(k);
        let data = self.data().iter().map(|&v| v.max(k)).collect();
        self.with_data(pt, data)
    }

    /// Pixelwise minimum with a constant (clamped to the type range).
    pub fn intersection_constant(&self, k: i64) -> Image {
        let pt = self.pixel_type();
        let k = pt.saturate(k);
        let data = self.data().iter().map(|&v| v.min(k)).collect();
        self.with_data(pt, data)
    }

    /// Add a constant to every pixel, saturating at the type limits.
    pub fn add_constant(&self, k: i64) -> Image {
        let pt = self.pixel_type();
        let data = self
            .data()
            .iter()
            .map(|&v| pt.saturate(v as i64 + k))
            .collect();
        self.with_data(pt, data)
    }

    /// Subtract a constant from every pixel, saturating at the type limits.
    pub fn subtract_constant(&self, k: i64) -> Image {
        self.add_constant(k.saturating_neg())
    }

    fn combine(&self, other: &Image, op: impl Fn(i64, i64) -> i64) -> Result<Image> {
        self.check_same_size(other)?;
        let pt = self.pixel_type().promote_or_err(other.pixel_type())?;
        let data = self
            .data()
            .iter()
            .zip(other.data())
            .map(|(&a, &b)| pt.saturate(op(a as i64, b as i64)))
            .collect();
        Ok(self.with_data(pt, data))
    }
}

/// Union of a sequence of images, reduced pairwise from the left.
///
/// # Errors
///
/// Returns [`Error::InvalidParameter`] if fewer than two images are given,
/// plus the errors of [`Image::union`].
pub fn union_all(images: &[&Image]) -> Result<Image> {
    reduce_pairwise(images, "union_all", Image::union)
}

/// Intersection of a sequence of images, reduced pairwise from the left.
///
/// # Errors
///
/// Same as [`union_all`].
pub fn intersection_all(images: &[&Image]) -> Result<Image> {
    reduce_pairwise(images, "intersection_all", Image::intersection)
}

fn reduce_pairwise(
    images: &[&Image],
    name: &str,
    op: fn(&Image, &Image) -> Result<Image>,
) -> Result<Image> {
    let [first, second, rest @ ..] = images else {
        return Err(Error::InvalidParameter(format!(
            "{name} needs at least 2 images, got {}",
            images.len()
        )));
    };
    let mut acc = op(first, second)?;
    for img in rest {
        acc = op(&acc, img)?;
    }
    Ok(acc)
}

/// Check that `pixel_type` can hold `value`, reporting the violation.
pub fn check_value(pixel_type: PixelType, value: i64) -> Result<i32> {
    if pixel_type.contains(value) {
        Ok(value as i32)
    } else {
        Err(Error::ValueOutOfRange { value, pixel_type })
    }
}
