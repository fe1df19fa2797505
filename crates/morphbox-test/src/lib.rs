//! morphbox-test - Regression test framework for morphbox
//!
//! Provides [`RegParams`], which records every failed check of a
//! regression test instead of stopping at the first one, and fixture
//! builders that turn literal rows of text into images.
//!
//! # Usage
//!
//! ```
//! use morphbox_test::{RegParams, binary_from_rows};
//!
//! let f = binary_from_rows(&["0 1 0", "1 1 1"]).unwrap();
//! let mut rp = RegParams::new("fixture");
//! rp.compare_values(4.0, f.count_nonzero() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::RegParams;

use morphbox_core::{Image, PixelType};

/// Build an image from whitespace-separated rows of integers.
///
/// # Errors
///
/// Returns [`TestError::Parse`] for a non-integer token and
/// [`TestError::Image`] for ragged rows or out-of-range values.
pub fn image_from_rows(pixel_type: PixelType, rows: &[&str]) -> TestResult<Image> {
    let mut parsed = Vec::with_capacity(rows.len());
    for (row, line) in rows.iter().enumerate() {
        let values = line
            .split_whitespace()
            .map(|tok| {
                tok.parse::<i32>().map_err(|_| TestError::Parse {
                    row,
                    token: tok.to_string(),
                })
            })
            .collect::<TestResult<Vec<i32>>>()?;
        parsed.push(values);
    }
    Ok(Image::from_rows(pixel_type, &parsed)?)
}

/// Build a binary image from rows of `0`/`1` tokens.
pub fn binary_from_rows(rows: &[&str]) -> TestResult<Image> {
    image_from_rows(PixelType::Binary, rows)
}

/// Render an image as rows of space-separated values, for failure output.
pub fn image_to_rows(image: &Image) -> Vec<String> {
    (0..image.height())
        .map(|y| {
            image
                .row_data(y)
                .iter()
                .map(|v| v.to_string())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_from_rows() {
        let img = image_from_rows(PixelType::Uint8, &["1 2 3", "4 5 6"]).unwrap();
        assert_eq!(img.dims(), (3, 2));
        assert_eq!(img.row_data(1), &[4, 5, 6]);
        assert_eq!(image_to_rows(&img), vec!["1 2 3", "4 5 6"]);
    }

    #[test]
    fn test_bad_fixture() {
        assert!(matches!(
            image_from_rows(PixelType::Uint8, &["1 x"]),
            Err(TestError::Parse { row: 0, .. })
        ));
        assert!(matches!(
            binary_from_rows(&["0 2"]),
            Err(TestError::Image(_))
        ));
        assert!(binary_from_rows(&["0 1", "1"]).is_err());
    }
}
