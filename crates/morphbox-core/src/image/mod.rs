//! Image - The typed 2-D pixel container
//!
//! An [`Image`] is a row-major grid of pixels of exactly one
//! [`PixelType`]. The type decides the value limits used by negation,
//! saturating arithmetic and padding; every stored value lies within
//! `[min_value, max_value]` of its type.
//!
//! # Storage
//!
//! Pixels of every type are stored as `i32`. All four types fit: `binary`
//! uses `{0, 1}`, the unsigned types their natural range, and `int32`
//! the symmetric range `[-2147483647, 2147483647]` (so negation never
//! overflows).
//!
//! # Ownership model
//!
//! `Image` uses `Arc` for cheap cloning (shared ownership).
//! To modify pixel data, convert to [`ImageMut`] via [`Image::try_into_mut`]
//! or [`Image::to_mut`], then convert back with `Into<Image>`.

mod access;
pub mod arith;
mod border;
mod compare;
pub mod convert;

use crate::error::{Error, Result};
use std::fmt;
use std::sync::Arc;

/// Smallest value of the `int32` pixel type.
///
/// One above `i32::MIN` so that `min + max == 0` and negation is exact.
/// Non-flat structuring elements use it as the minus-infinity weight.
pub const INT32_MIN: i32 = -2_147_483_647;

/// Largest value of the `int32` pixel type.
pub const INT32_MAX: i32 = 2_147_483_647;

/// Pixel type of an image
///
/// Determines the identity values (`min`, `max`) used by negation,
/// saturation and padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelType {
    /// Binary image, values {0, 1}
    Binary,
    /// Unsigned 8-bit gray scale, [0, 255]
    Uint8,
    /// Unsigned 16-bit gray scale, [0, 65535]
    Uint16,
    /// Signed 32-bit gray scale, [-2147483647, 2147483647]
    Int32,
}

impl PixelType {
    /// Smallest representable value.
    pub const fn min_value(self) -> i32 {
        match self {
            PixelType::Binary | PixelType::Uint8 | PixelType::Uint16 => 0,
            PixelType::Int32 => INT32_MIN,
        }
    }

    /// Largest representable value.
    pub const fn max_value(self) -> i32 {
        match self {
            PixelType::Binary => 1,
            PixelType::Uint8 => 255,
            PixelType::Uint16 => 65_535,
            PixelType::Int32 => INT32_MAX,
        }
    }

    /// Type name as used in messages.
    pub const fn name(self) -> &'static str {
        match self {
            PixelType::Binary => "binary",
            PixelType::Uint8 => "uint8",
            PixelType::Uint16 => "uint16",
            PixelType::Int32 => "int32",
        }
    }

    #[inline]
    pub fn is_binary(self) -> bool {
        self == PixelType::Binary
    }

    /// Check whether `value` lies in `[min_value, max_value]`.
    #[inline]
    pub fn contains(self, value: i64) -> bool {
        value >= i64::from(self.min_value()) && value <= i64::from(self.max_value())
    }

    /// Saturate `value` into the range of this type.
    #[inline]
    pub fn saturate(self, value: i64) -> i32 {
        value.clamp(i64::from(self.min_value()), i64::from(self.max_value())) as i32
    }

    /// Result type of a pixelwise operator applied to `self` and `other`.
    ///
    /// Promotion table:
    ///
    /// | left \ right | binary | uint8  | uint16 | int32 |
    /// |--------------|--------|--------|--------|-------|
    /// | binary       | binary | -      | -      | -     |
    /// | uint8        | -      | uint8  | uint16 | int32 |
    /// | uint16       | -      | uint16 | uint16 | int32 |
    /// | int32        | -      | int32  | int32  | int32 |
    ///
    /// `None` means there is no implicit promotion path.
    pub fn promote(self, other: PixelType) -> Option<PixelType> {
        use PixelType::*;
        match (self, other) {
            (a, b) if a == b => Some(a),
            (Binary, _) | (_, Binary) => None,
            (Int32, _) | (_, Int32) => Some(Int32),
            _ => Some(Uint16),
        }
    }

    /// Like [`PixelType::promote`] but reports a [`Error::TypeMismatch`].
    pub fn promote_or_err(self, other: PixelType) -> Result<PixelType> {
        self.promote(other).ok_or(Error::TypeMismatch {
            left: self,
            right: other,
        })
    }

    /// Smallest label type that can hold `count` labels.
    ///
    /// `uint16` unless the count exceeds 65535, then `int32`.
    pub fn for_label_count(count: usize) -> PixelType {
        if count <= PixelType::Uint16.max_value() as usize {
            PixelType::Uint16
        } else {
            PixelType::Int32
        }
    }
}

impl fmt::Display for PixelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Internal image data
#[derive(Debug, Clone)]
struct ImageData {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Pixel type tag
    pixel_type: PixelType,
    /// Row-major pixel values
    data: Vec<i32>,
}

impl ImageData {
    fn filled(width: u32, height: u32, pixel_type: PixelType, value: i32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension {
                width: width as usize,
                height: height as usize,
            });
        }
        if !pixel_type.contains(i64::from(value)) {
            return Err(Error::ValueOutOfRange {
                value: i64::from(value),
                pixel_type,
            });
        }
        Ok(ImageData {
            width,
            height,
            pixel_type,
            data: vec![value; width as usize * height as usize],
        })
    }
}

/// Image - Main pixel container
///
/// `Image` uses reference counting via `Arc` for efficient cloning.
///
/// # Examples
///
/// ```
/// use morphbox_core::{Image, PixelType};
///
/// let img = Image::new(64, 48, PixelType::Uint8).unwrap();
/// assert_eq!(img.width(), 64);
/// assert_eq!(img.height(), 48);
/// assert_eq!(img.pixel_count(), 64 * 48);
/// ```
#[derive(Debug, Clone)]
pub struct Image {
    inner: Arc<ImageData>,
}

impl Image {
    /// Create a new image with every pixel set to zero.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32, pixel_type: PixelType) -> Result<Self> {
        Self::new_filled(width, height, pixel_type, 0)
    }

    /// Create a new image with every pixel set to `value`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] for an empty shape and
    /// [`Error::ValueOutOfRange`] if `value` does not fit `pixel_type`.
    pub fn new_filled(width: u32, height: u32, pixel_type: PixelType, value: i32) -> Result<Self> {
        let inner = ImageData::filled(width, height, pixel_type, value)?;
        Ok(Image {
            inner: Arc::new(inner),
        })
    }

    /// Create an image from row-major pixel values.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if `data.len() != width * height`
    /// or the shape is empty, and [`Error::ValueOutOfRange`] for the first
    /// value that does not fit `pixel_type`.
    pub fn from_vec(width: u32, height: u32, pixel_type: PixelType, data: Vec<i32>) -> Result<Self> {
        if width == 0 || height == 0 || data.len() != width as usize * height as usize {
            return Err(Error::InvalidDimension {
                width: width as usize,
                height: height as usize,
            });
        }
        if let Some(&bad) = data.iter().find(|&&v| !pixel_type.contains(i64::from(v))) {
            return Err(Error::ValueOutOfRange {
                value: i64::from(bad),
                pixel_type,
            });
        }
        Ok(Image {
            inner: Arc::new(ImageData {
                width,
                height,
                pixel_type,
                data,
            }),
        })
    }

    /// Create an image from an n-dimensional shape.
    ///
    /// A rank-1 shape `[n]` is normalised to a single row `1 x n`; a rank-2
    /// shape is `[height, width]`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Non2D`] for any other rank, plus the errors of
    /// [`Image::from_vec`].
    pub fn from_shape(shape: &[usize], pixel_type: PixelType, data: Vec<i32>) -> Result<Self> {
        let (height, width) = match *shape {
            [w] => (1, w),
            [h, w] => (h, w),
            _ => return Err(Error::Non2D { rank: shape.len() }),
        };
        let (Ok(w), Ok(h)) = (u32::try_from(width), u32::try_from(height)) else {
            return Err(Error::InvalidDimension { width, height });
        };
        Self::from_vec(w, h, pixel_type, data)
    }

    /// Create an image from a slice of rows.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if there are no rows, a row is
    /// empty, or rows have different lengths.
    pub fn from_rows<R: AsRef<[i32]>>(pixel_type: PixelType, rows: &[R]) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        if rows.iter().any(|r| r.as_ref().len() != width) {
            return Err(Error::InvalidDimension { width, height });
        }
        let data: Vec<i32> = rows.iter().flat_map(|r| r.as_ref().iter().copied()).collect();
        Self::from_shape(&[height, width], pixel_type, data)
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get `(width, height)`.
    #[inline]
    pub fn dims(&self) -> (u32, u32) {
        (self.inner.width, self.inner.height)
    }

    /// Get the pixel type.
    #[inline]
    pub fn pixel_type(&self) -> PixelType {
        self.inner.pixel_type
    }

    #[inline]
    pub fn is_binary(&self) -> bool {
        self.inner.pixel_type.is_binary()
    }

    /// Number of pixels (`width * height`).
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.inner.data.len()
    }

    /// Get raw access to the row-major pixel data.
    #[inline]
    pub fn data(&self) -> &[i32] {
        &self.inner.data
    }

    /// Get the number of strong references to this image.
    #[inline]
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// Get the pixels of row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_data(&self, y: u32) -> &[i32] {
        let w = self.inner.width as usize;
        let start = y as usize * w;
        &self.inner.data[start..start + w]
    }

    /// Create a new image with the same shape and type, filled with zero.
    pub fn create_template(&self) -> Self {
        self.create_filled_unchecked(0)
    }

    /// Create a new image with the same shape and type, filled with the
    /// type minimum.
    pub fn create_minimal(&self) -> Self {
        self.create_filled_unchecked(self.pixel_type().min_value())
    }

    /// Create a new image with the same shape and type, filled with the
    /// type maximum.
    pub fn create_maximal(&self) -> Self {
        self.create_filled_unchecked(self.pixel_type().max_value())
    }

    fn create_filled_unchecked(&self, value: i32) -> Self {
        Image {
            inner: Arc::new(ImageData {
                width: self.inner.width,
                height: self.inner.height,
                pixel_type: self.inner.pixel_type,
                data: vec![value; self.inner.data.len()],
            }),
        }
    }

    /// Check if two images have the same width and height.
    pub fn sizes_equal(&self, other: &Image) -> bool {
        self.inner.width == other.inner.width && self.inner.height == other.inner.height
    }

    /// Return [`Error::DimensionMismatch`] unless `other` has the same shape.
    pub fn check_same_size(&self, other: &Image) -> Result<()> {
        if self.sizes_equal(other) {
            Ok(())
        } else {
            Err(Error::DimensionMismatch {
                expected: self.dims(),
                actual: other.dims(),
            })
        }
    }

    /// Return [`Error::NotBinary`] unless this is a binary image.
    pub fn check_binary(&self, context: &'static str) -> Result<()> {
        if self.is_binary() {
            Ok(())
        } else {
            Err(Error::NotBinary(context))
        }
    }

    /// Create a deep copy of this image.
    ///
    /// Unlike `clone()` which shares data via Arc, this creates
    /// a completely independent copy.
    pub fn deep_clone(&self) -> Self {
        Image {
            inner: Arc::new((*self.inner).clone()),
        }
    }

    /// Try to get mutable access to the image data.
    ///
    /// Succeeds only if there is exactly one reference to the data.
    pub fn try_into_mut(self) -> std::result::Result<ImageMut, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(data) => Ok(ImageMut { inner: data }),
            Err(arc) => Err(Image { inner: arc }),
        }
    }

    /// Get a mutable image, copying only if the data is shared.
    pub fn into_mut(self) -> ImageMut {
        ImageMut {
            inner: Arc::unwrap_or_clone(self.inner),
        }
    }

    /// Create a mutable copy of this image.
    pub fn to_mut(&self) -> ImageMut {
        ImageMut {
            inner: (*self.inner).clone(),
        }
    }

    /// Build an image of the same shape from values already known to fit
    /// `pixel_type`.
    pub(crate) fn with_data(&self, pixel_type: PixelType, data: Vec<i32>) -> Image {
        debug_assert_eq!(data.len(), self.inner.data.len());
        Image {
            inner: Arc::new(ImageData {
                width: self.inner.width,
                height: self.inner.height,
                pixel_type,
                data,
            }),
        }
    }
}

/// Mutable image
///
/// Allows modification of pixel data. Convert back to an immutable
/// [`Image`] using `Into<Image>`. Writes through [`ImageMut::set_pixel`]
/// are range-checked; writes through [`ImageMut::data_mut`] must keep
/// every value inside the pixel type's range.
#[derive(Debug)]
pub struct ImageMut {
    inner: ImageData,
}

impl ImageMut {
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    #[inline]
    pub fn pixel_type(&self) -> PixelType {
        self.inner.pixel_type
    }

    #[inline]
    pub fn data(&self) -> &[i32] {
        &self.inner.data
    }

    /// Get mutable access to the row-major pixel data.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [i32] {
        &mut self.inner.data
    }

    /// Get the mutable pixels of row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_data_mut(&mut self, y: u32) -> &mut [i32] {
        let w = self.inner.width as usize;
        let start = y as usize * w;
        &mut self.inner.data[start..start + w]
    }

    /// Set every pixel to `value`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ValueOutOfRange`] if `value` does not fit the type.
    pub fn fill(&mut self, value: i32) -> Result<()> {
        let pixel_type = self.inner.pixel_type;
        if !pixel_type.contains(i64::from(value)) {
            return Err(Error::ValueOutOfRange {
                value: i64::from(value),
                pixel_type,
            });
        }
        self.inner.data.fill(value);
        Ok(())
    }
}

impl From<ImageMut> for Image {
    fn from(image_mut: ImageMut) -> Self {
        Image {
            inner: Arc::new(image_mut.inner),
        }
    }
}
