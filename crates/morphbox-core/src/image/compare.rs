//! Image comparison and scanning
//!
//! - Pixel equality checks
//! - Foreground counting
//! - Raster-order search for the first non-zero pixel
//! - Extreme values

use super::Image;

impl Image {
    /// Check whether two images have the same shape and pixel values.
    ///
    /// The pixel type tag is not compared; a binary image equals a uint8
    /// image holding the same 0/1 values.
    pub fn equals(&self, other: &Image) -> bool {
        self.sizes_equal(other) && self.data() == other.data()
    }

    /// Check whether two images have the same shape, type and values.
    pub fn equals_typed(&self, other: &Image) -> bool {
        self.pixel_type() == other.pixel_type() && self.equals(other)
    }

    /// Number of non-zero pixels.
    pub fn count_nonzero(&self) -> usize {
        self.data().iter().filter(|&&v| v != 0).count()
    }

    /// Row-major index of the first non-zero pixel, if any.
    pub fn first_nonzero(&self) -> Option<usize> {
        self.data().iter().position(|&v| v != 0)
    }

    /// Check whether every pixel equals `value`.
    pub fn is_all(&self, value: i32) -> bool {
        self.data().iter().all(|&v| v == value)
    }

    /// Smallest and largest pixel value.
    pub fn min_max(&self) -> (i32, i32) {
        self.data()
            .iter()
            .fold((i32::MAX, i32::MIN), |(lo, hi), &v| (lo.min(v), hi.max(v)))
    }
}

#[cfg(test)]
mod tests {
    use crate::{Image, PixelType};

    #[test]
    fn test_equals() {
        let a = Image::from_rows(PixelType::Uint8, &[[0, 1], [1, 0]]).unwrap();
        let b = Image::from_rows(PixelType::Binary, &[[0, 1], [1, 0]]).unwrap();
        assert!(a.equals(&b));
        assert!(!a.equals_typed(&b));
        assert!(a.equals_typed(&a.deep_clone()));

        let c = Image::from_rows(PixelType::Uint8, &[[0, 1, 1, 0]]).unwrap();
        assert!(!a.equals(&c));
    }

    #[test]
    fn test_scanning() {
        let a = Image::from_rows(PixelType::Uint8, &[[0, 0, 0], [0, 7, 3]]).unwrap();
        assert_eq!(a.count_nonzero(), 2);
        assert_eq!(a.first_nonzero(), Some(4));
        assert_eq!(a.min_max(), (0, 7));
        assert!(!a.is_all(0));
        assert!(a.create_template().is_all(0));
        assert_eq!(a.create_template().first_nonzero(), None);
    }
}
