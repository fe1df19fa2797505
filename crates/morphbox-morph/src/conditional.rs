//! Conditional dilation and erosion
//!
//! Geodesic propagation of a marker `f` under (or above) a mask `g`.
//! Each step dilates (erodes) by the structuring element and clips
//! against the mask; propagation stops after `n` steps or as soon as a
//! step leaves the image unchanged.

use crate::elementary::{dilate, erode};
use crate::{MorphResult, Sel};
use morphbox_core::Image;
use tracing::debug;

/// Outcome of a propagation run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropagationStats {
    /// Number of steps that changed the image
    pub iterations: usize,
    /// Whether a fixed point was reached before the step limit
    pub converged: bool,
}

/// Dilate `f` conditionally to `g`, at most `n` times
///
/// Starts from `min(f, g)` and repeats `y = min(dilate(y, b), g)`.
///
/// # Errors
///
/// Returns a core error if `f` and `g` differ in shape or their pixel
/// types do not promote.
pub fn cdilate(f: &Image, g: &Image, b: &Sel, n: usize) -> MorphResult<Image> {
    cdilate_with_stats(f, g, b, n).map(|(y, _)| y)
}

/// [`cdilate`] that also reports how many steps were taken
pub fn cdilate_with_stats(
    f: &Image,
    g: &Image,
    b: &Sel,
    n: usize,
) -> MorphResult<(Image, PropagationStats)> {
    let mut y = f.intersection(g)?;
    let mut stats = PropagationStats {
        iterations: 0,
        converged: false,
    };
    for _ in 0..n {
        let next = dilate(&y, b).intersection(g)?;
        if next.equals(&y) {
            stats.converged = true;
            break;
        }
        y = next;
        stats.iterations += 1;
    }
    debug!(
        iterations = stats.iterations,
        converged = stats.converged,
        "cdilate finished"
    );
    Ok((y, stats))
}

/// Erode `f` conditionally to `g`, at most `n` times
///
/// Starts from `max(f, g)` and repeats `y = max(erode(y, b), g)`.
///
/// # Errors
///
/// Returns a core error if `f` and `g` differ in shape or their pixel
/// types do not promote.
pub fn cerode(f: &Image, g: &Image, b: &Sel, n: usize) -> MorphResult<Image> {
    cerode_with_stats(f, g, b, n).map(|(y, _)| y)
}

/// [`cerode`] that also reports how many steps were taken
pub fn cerode_with_stats(
    f: &Image,
    g: &Image,
    b: &Sel,
    n: usize,
) -> MorphResult<(Image, PropagationStats)> {
    let mut y = f.union(g)?;
    let mut stats = PropagationStats {
        iterations: 0,
        converged: false,
    };
    for _ in 0..n {
        let next = erode(&y, b).union(g)?;
        if next.equals(&y) {
            stats.converged = true;
            break;
        }
        y = next;
        stats.iterations += 1;
    }
    debug!(
        iterations = stats.iterations,
        converged = stats.converged,
        "cerode finished"
    );
    Ok((y, stats))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MorphError;
    use morphbox_core::{Error, PixelType};

    fn row(pt: PixelType, v: &[i32]) -> Image {
        Image::from_rows(pt, &[v]).unwrap()
    }

    #[test]
    fn test_cdilate_limited_steps() {
        let g = row(PixelType::Binary, &[1, 1, 1, 1, 0, 1]);
        let f = row(PixelType::Binary, &[1, 0, 0, 0, 0, 0]);
        let b = Sel::create_cross(1);

        assert_eq!(cdilate(&f, &g, &b, 1).unwrap().data(), &[1, 1, 0, 0, 0, 0]);
        assert_eq!(cdilate(&f, &g, &b, 0).unwrap().data(), &[1, 0, 0, 0, 0, 0]);

        let (y, stats) = cdilate_with_stats(&f, &g, &b, 100).unwrap();
        assert_eq!(y.data(), &[1, 1, 1, 1, 0, 0]);
        assert_eq!(stats.iterations, 3);
        assert!(stats.converged);
    }

    #[test]
    fn test_cdilate_clips_marker() {
        let g = row(PixelType::Uint8, &[5, 5, 5]);
        let f = row(PixelType::Uint8, &[9, 0, 0]);
        let y = cdilate(&f, &g, &Sel::create_cross(1), 10).unwrap();
        assert_eq!(y.data(), &[5, 5, 5]);
    }

    #[test]
    fn test_cerode_fills_from_marker() {
        let g = row(PixelType::Uint8, &[1, 3, 2, 0, 1]);
        let f = row(PixelType::Uint8, &[9, 9, 9, 9, 2]);
        let (y, stats) = cerode_with_stats(&f, &g, &Sel::create_cross(1), 100).unwrap();
        assert_eq!(y.data(), &[3, 3, 2, 2, 2]);
        assert_eq!(stats.iterations, 4);

        let y = cerode(&f, &g, &Sel::create_cross(1), 1).unwrap();
        assert_eq!(y.data(), &[9, 9, 9, 2, 2]);
    }

    #[test]
    fn test_promotion_and_errors() {
        let g = row(PixelType::Uint16, &[300, 300]);
        let f = row(PixelType::Uint8, &[7, 0]);
        let y = cdilate(&f, &g, &Sel::create_cross(1), 5).unwrap();
        assert_eq!(y.pixel_type(), PixelType::Uint16);
        assert_eq!(y.data(), &[7, 7]);

        let bin = row(PixelType::Binary, &[1, 0]);
        assert!(matches!(
            cdilate(&bin, &g, &Sel::create_cross(1), 1),
            Err(MorphError::Core(Error::TypeMismatch { .. }))
        ));
    }
}
