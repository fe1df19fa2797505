//! Pixel access functions
//!
//! Low-level functions for getting and setting individual pixels and for
//! converting between `(x, y)` coordinates and row-major indices.

use super::{Image, ImageMut};
use crate::error::{Error, Result};

impl Image {
    /// Get a pixel value at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<i32> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(self.get_pixel_unchecked(x, y))
    }

    /// Get a pixel value without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if the index falls outside the pixel buffer.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> i32 {
        self.data()[self.index_of(x, y)]
    }

    /// Row-major index of (x, y).
    #[inline]
    pub fn index_of(&self, x: u32, y: u32) -> usize {
        y as usize * self.width() as usize + x as usize
    }

    /// `(x, y)` coordinates of a row-major index.
    #[inline]
    pub fn coords_of(&self, index: usize) -> (u32, u32) {
        let w = self.width() as usize;
        ((index % w) as u32, (index / w) as u32)
    }
}

impl ImageMut {
    /// Get a pixel value at (x, y).
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<i32> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(self.get_pixel_unchecked(x, y))
    }

    /// Get a pixel value without bounds checking.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> i32 {
        self.data()[y as usize * self.width() as usize + x as usize]
    }

    /// Set a pixel value at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if coordinates are out of bounds
    /// and [`Error::ValueOutOfRange`] if `val` does not fit the pixel type.
    pub fn set_pixel(&mut self, x: u32, y: u32, val: i32) -> Result<()> {
        if x >= self.width() || y >= self.height() {
            let len = self.data().len();
            return Err(Error::IndexOutOfBounds {
                index: y as usize * self.width() as usize + x as usize,
                len,
            });
        }
        let pixel_type = self.pixel_type();
        if !pixel_type.contains(i64::from(val)) {
            return Err(Error::ValueOutOfRange {
                value: i64::from(val),
                pixel_type,
            });
        }
        self.set_pixel_unchecked(x, y, val);
        Ok(())
    }

    /// Set a pixel value without bounds or range checking.
    ///
    /// The caller must keep `val` inside the pixel type's range.
    ///
    /// # Panics
    ///
    /// Panics if the index falls outside the pixel buffer.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, val: i32) {
        let idx = y as usize * self.width() as usize + x as usize;
        self.data_mut()[idx] = val;
    }
}
