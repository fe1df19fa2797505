//! Border operations for images
//!
//! This module provides functions for adding and removing borders
//! (padding) around images, and for drawing a frame inside an image:
//!
//! - General borders (separate vertical / horizontal sizes)
//! - Frame images (`frame`), used as markers touching the image edge

use super::Image;
use crate::error::{Error, Result};
use crate::image::arith::check_value;

impl Image {
    /// Add a border of `pad_y` rows above and below and `pad_x` columns
    /// left and right, filled with `val`.
    ///
    /// # Returns
    ///
    /// New image with dimensions `(width + 2*pad_x, height + 2*pad_y)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ValueOutOfRange`] if `val` does not fit the pixel
    /// type and [`Error::InvalidDimension`] if the size would overflow.
    pub fn add_border(&self, pad_y: u32, pad_x: u32, val: i32) -> Result<Image> {
        let pt = self.pixel_type();
        check_value(pt, i64::from(val))?;
        let (w, h) = self.dims();
        let (Some(nw), Some(nh)) = (
            pad_x.checked_mul(2).and_then(|p| p.checked_add(w)),
            pad_y.checked_mul(2).and_then(|p| p.checked_add(h)),
        ) else {
            return Err(Error::InvalidDimension {
                width: w as usize + 2 * pad_x as usize,
                height: h as usize + 2 * pad_y as usize,
            });
        };

        let mut out = Image::new_filled(nw, nh, pt, val)?.into_mut();
        for y in 0..h {
            let dst = &mut out.row_data_mut(y + pad_y)[pad_x as usize..(pad_x + w) as usize];
            dst.copy_from_slice(self.row_data(y));
        }
        Ok(out.into())
    }

    /// Remove `pad_y` rows from top and bottom and `pad_x` columns from
    /// left and right.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if nothing would remain.
    pub fn remove_border(&self, pad_y: u32, pad_x: u32) -> Result<Image> {
        let (w, h) = self.dims();
        let nw = w.saturating_sub(pad_x.saturating_mul(2));
        let nh = h.saturating_sub(pad_y.saturating_mul(2));
        if nw == 0 || nh == 0 {
            return Err(Error::InvalidDimension {
                width: nw as usize,
                height: nh as usize,
            });
        }

        let mut data = Vec::with_capacity(nw as usize * nh as usize);
        for y in pad_y..pad_y + nh {
            data.extend_from_slice(&self.row_data(y)[pad_x as usize..(pad_x + nw) as usize]);
        }
        Image::from_vec(nw, nh, self.pixel_type(), data)
    }

    /// Create a frame image of the same shape and type.
    ///
    /// Pixels within `wt` columns of the left/right edges or `ht` rows of
    /// the top/bottom edges are set to `k1`; the interior is set to `k2`.
    /// `None` selects the type maximum for `k1` and the type minimum for
    /// `k2`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ValueOutOfRange`] if `k1` or `k2` does not fit.
    pub fn frame(&self, wt: u32, ht: u32, k1: Option<i64>, k2: Option<i64>) -> Result<Image> {
        let pt = self.pixel_type();
        let k1 = match k1 {
            Some(k) => check_value(pt, k)?,
            None => pt.max_value(),
        };
        let k2 = match k2 {
            Some(k) => check_value(pt, k)?,
            None => pt.min_value(),
        };
        let (w, h) = self.dims();
        let mut out = Image::new_filled(w, h, pt, k2)?.into_mut();
        for y in 0..h {
            let edge_row = y < ht || y + ht >= h;
            let row = out.row_data_mut(y);
            for (x, v) in row.iter_mut().enumerate() {
                let x = x as u32;
                if edge_row || x < wt || x + wt >= w {
                    *v = k1;
                }
            }
        }
        Ok(out.into())
    }
}
