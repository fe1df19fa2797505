//! Morphological reconstruction
//!
//! Reconstruction propagates a marker inside (or above) a conditioning
//! image until nothing changes. It keeps exactly the connected
//! components of the conditioner that the marker touches, and is the
//! building block for the filters in this module:
//!
//! - Opening / closing by reconstruction
//! - Hole closing and removal of objects touching the image edge
//! - h-minima / h-maxima suppression

use crate::error::RegionResult;
use morphbox_core::Image;
use morphbox_morph::{Sel, cdilate, cerode, dilate, erode};

/// Inf-reconstruction of `g` from the marker `f`
///
/// Conditional dilation of `f` under `g` by `bc` until a fixed point is
/// reached. Components of `g` (under `bc`) not touched by `f` are
/// driven to the background.
///
/// # Errors
///
/// Returns an error if the images differ in shape or their pixel types
/// do not promote.
pub fn infrec(f: &Image, g: &Image, bc: &Sel) -> RegionResult<Image> {
    Ok(cdilate(f, g, bc, g.pixel_count())?)
}

/// Sup-reconstruction of `g` from the marker `f`
///
/// Conditional erosion of `f` above `g` by `bc` until a fixed point is
/// reached.
///
/// # Errors
///
/// Returns an error if the images differ in shape or their pixel types
/// do not promote.
pub fn suprec(f: &Image, g: &Image, bc: &Sel) -> RegionResult<Image> {
    Ok(cerode(f, g, bc, g.pixel_count())?)
}

/// Opening by reconstruction: `infrec(erode(f, bero), f, bc)`
///
/// Objects that survive the erosion are restored to their full shape;
/// the others vanish.
pub fn open_by_reconstruction(f: &Image, bero: &Sel, bc: &Sel) -> RegionResult<Image> {
    infrec(&erode(f, bero), f, bc)
}

/// Closing by reconstruction: `suprec(dilate(f, bdil), f, bc)`
pub fn close_by_reconstruction(f: &Image, bdil: &Sel, bc: &Sel) -> RegionResult<Image> {
    suprec(&dilate(f, bdil), f, bc)
}

/// Close holes
///
/// A hole is a background region (or, for gray images, a basin) that
/// cannot be reached from the image edge under `bc`.
pub fn close_holes(f: &Image, bc: &Sel) -> RegionResult<Image> {
    let marker = f.frame(1, 1, None, None)?;
    Ok(infrec(&marker, &f.neg(), bc)?.neg())
}

/// Remove the objects connected to the image edge under `bc`
pub fn edge_off(f: &Image, bc: &Sel) -> RegionResult<Image> {
    let marker = f.frame(1, 1, None, None)?;
    Ok(f.subtract_saturate(&infrec(&marker, f, bc)?)?)
}

/// Suppress regional minima shallower than `h`
///
/// Computed as `suprec(f + h, f, bc)` with saturating addition.
pub fn hmin(f: &Image, h: u32, bc: &Sel) -> RegionResult<Image> {
    suprec(&f.add_constant(i64::from(h)), f, bc)
}

/// Suppress regional maxima lower than `h`
///
/// Computed as `infrec(f - h, f, bc)` with saturating subtraction.
pub fn hmax(f: &Image, h: u32, bc: &Sel) -> RegionResult<Image> {
    infrec(&f.subtract_constant(i64::from(h)), f, bc)
}
