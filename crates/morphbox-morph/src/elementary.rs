//! Elementary gray-scale morphology
//!
//! Dilation by a (flat or non-flat) structuring element and the
//! operators derived from it. Binary images are the special case where
//! every value is 0 or 1.
//!
//! Boundary convention: pixels outside the image read as the minimum of
//! the pixel type for dilation. Erosion is defined through the duality
//! `erode(f, b) = neg(dilate(neg(f), reflect(b)))`, so outside pixels
//! read as the maximum there.

use crate::{MorphResult, Sel};
use morphbox_core::{Image, PixelType};

/// Dilate an image
///
/// For every pixel `p` and every entry `(off, w)` of `b`,
/// `out[p + off] = max(out[p + off], f[p] + w)`. Pixels at the type
/// minimum are not raised by the weight and sums saturate to the type
/// range. An empty `b` yields the uniformly minimal image.
///
/// The result has the shape and type of `f`.
pub fn dilate(f: &Image, b: &Sel) -> Image {
    let pt = f.pixel_type();
    let (w, h) = f.dims();
    let mut out = f.create_minimal().into_mut();

    for ((dy, dx), weight) in b.iter() {
        let (ys, ye) = source_range(h, dy);
        let (xs, xe) = source_range(w, dx);
        if xs >= xe {
            continue;
        }
        let tx = (i64::from(xs) + i64::from(dx)) as usize;
        for y in ys..ye {
            let src = &f.row_data(y)[xs as usize..xe as usize];
            let ty = (i64::from(y) + i64::from(dy)) as u32;
            let dst = &mut out.row_data_mut(ty)[tx..tx + src.len()];
            for (d, &s) in dst.iter_mut().zip(src) {
                *d = (*d).max(add_weight(pt, s, weight));
            }
        }
    }
    out.into()
}

/// Erode an image
///
/// Computed as `neg(dilate(neg(f), reflect(b)))`.
pub fn erode(f: &Image, b: &Sel) -> Image {
    dilate(&f.neg(), &b.reflect()).neg()
}

/// Opening: erosion followed by dilation
pub fn open(f: &Image, b: &Sel) -> Image {
    dilate(&erode(f, b), b)
}

/// Closing: dilation followed by erosion
pub fn close(f: &Image, b: &Sel) -> Image {
    erode(&dilate(f, b), b)
}

/// Morphological gradient `dilate(f, bdil) - erode(f, bero)`
///
/// # Errors
///
/// Propagates core errors from the subtraction; none occur for
/// well-formed inputs since both terms share the shape and type of `f`.
pub fn gradient(f: &Image, bdil: &Sel, bero: &Sel) -> MorphResult<Image> {
    Ok(dilate(f, bdil).subtract_saturate(&erode(f, bero))?)
}

/// Range of source indices `i` with `0 <= i + d < len`
fn source_range(len: u32, d: i32) -> (u32, u32) {
    let len = i64::from(len);
    let d = i64::from(d);
    let start = (-d).clamp(0, len);
    let end = (len - d).clamp(start, len);
    (start as u32, end as u32)
}

#[inline]
fn add_weight(pt: PixelType, v: i32, w: i32) -> i32 {
    if w == 0 || v == pt.min_value() {
        v
    } else {
        pt.saturate(i64::from(v) + i64::from(w))
    }
}
