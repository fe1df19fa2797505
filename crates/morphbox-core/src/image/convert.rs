//! Pixel type conversion
//!
//! - [`Image::threshold`]: gray scale to binary (`f >= k`)
//! - [`Image::to_gray`]: binary to gray scale with a foreground level
//! - [`Image::convert`]: clamp-convert between any two types

use super::{Image, PixelType};
use crate::error::Result;
use crate::image::arith::check_value;

impl Image {
    /// Binary image of the pixels with `f >= k`.
    pub fn threshold(&self, k: i64) -> Image {
        let data = self
            .data()
            .iter()
            .map(|&v| i32::from(v as i64 >= k))
            .collect();
        self.with_data(PixelType::Binary, data)
    }

    /// Binary image of the non-zero pixels.
    pub fn to_binary(&self) -> Image {
        let data = self.data().iter().map(|&v| i32::from(v != 0)).collect();
        self.with_data(PixelType::Binary, data)
    }

    /// Convert a binary image to gray scale.
    ///
    /// Foreground pixels become `k`, background pixels the minimum of
    /// `pixel_type`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NotBinary`] for non-binary input and
    /// [`crate::Error::ValueOutOfRange`] if `k` does not fit `pixel_type`.
    pub fn to_gray(&self, pixel_type: PixelType, k: i64) -> Result<Image> {
        self.check_binary("to_gray")?;
        let k = check_value(pixel_type, k)?;
        let bg = pixel_type.min_value();
        let data = self
            .data()
            .iter()
            .map(|&v| if v != 0 { k } else { bg })
            .collect();
        Ok(self.with_data(pixel_type, data))
    }

    /// Convert to `pixel_type`, saturating values that do not fit.
    ///
    /// Converting to binary keeps the non-zero pixels.
    pub fn convert(&self, pixel_type: PixelType) -> Image {
        if pixel_type == self.pixel_type() {
            return self.clone();
        }
        if pixel_type.is_binary() {
            return self.to_binary();
        }
        let data = self
            .data()
            .iter()
            .map(|&v| pixel_type.saturate(v as i64))
            .collect();
        self.with_data(pixel_type, data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_threshold() {
        let f = Image::from_rows(PixelType::Uint8, &[[0, 5, 10, 200]]).unwrap();
        let b = f.threshold(10);
        assert!(b.is_binary());
        assert_eq!(b.data(), &[0, 0, 1, 1]);
    }

    #[test]
    fn test_to_gray() {
        let b = Image::from_rows(PixelType::Binary, &[[1, 0]]).unwrap();
        let g = b.to_gray(PixelType::Uint16, 300).unwrap();
        assert_eq!(g.pixel_type(), PixelType::Uint16);
        assert_eq!(g.data(), &[300, 0]);

        let g = b.to_gray(PixelType::Int32, 0).unwrap();
        assert_eq!(g.data(), &[0, -2147483647]);

        assert!(matches!(
            b.to_gray(PixelType::Uint8, 256),
            Err(Error::ValueOutOfRange { .. })
        ));
        assert!(matches!(
            g.to_gray(PixelType::Uint8, 1),
            Err(Error::NotBinary(_))
        ));
    }

    #[test]
    fn test_convert_saturates() {
        let f = Image::from_rows(PixelType::Int32, &[[-5, 100, 70_000]]).unwrap();
        assert_eq!(f.convert(PixelType::Uint8).data(), &[0, 100, 255]);
        assert_eq!(f.convert(PixelType::Uint16).data(), &[0, 100, 65535]);
        assert_eq!(f.convert(PixelType::Binary).data(), &[1, 1, 1]);
    }
}
