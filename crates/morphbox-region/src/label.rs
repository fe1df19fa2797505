//! Connected component labeling
//!
//! Components are extracted one at a time by reconstruction: the first
//! unlabeled foreground pixel in raster order seeds an inf-reconstruction
//! inside the still-unlabeled foreground, which recovers exactly its
//! component under the connectivity structuring element.

use crate::error::{RegionError, RegionResult};
use crate::seedfill::infrec;
use morphbox_core::{Image, PixelType};
use morphbox_morph::Sel;
use tracing::debug;

/// Label the connected components of a binary image
///
/// # Arguments
///
/// * `f` - Binary image
/// * `bc` - Connectivity structuring element (e.g. `Sel::create_cross(1)`)
///
/// # Returns
///
/// Background pixels are 0 and the components are numbered `1..=k` in
/// the raster order of their first pixel. The output is `uint16`, or
/// `int32` when there are more than 65535 components.
///
/// # Errors
///
/// Returns [`morphbox_core::Error::NotBinary`] for a non-binary input.
pub fn label(f: &Image, bc: &Sel) -> RegionResult<Image> {
    f.check_binary("label")?;
    let (w, h) = f.dims();
    let mut labels = vec![0i32; f.pixel_count()];
    let mut remaining = f.clone();
    let mut count = 0i32;

    while let Some(idx) = remaining.first_nonzero() {
        let (x, y) = remaining.coords_of(idx);
        let mut seed = remaining.create_template().into_mut();
        seed.set_pixel_unchecked(x, y, 1);
        let seed: Image = seed.into();

        // the seed itself always belongs to its component, even when `bc`
        // leaves out the origin
        let component = infrec(&seed, &remaining, bc)?.union(&seed)?;

        count = count
            .checked_add(1)
            .ok_or_else(|| RegionError::InvalidParameters("too many components".into()))?;
        for (l, &c) in labels.iter_mut().zip(component.data()) {
            if c != 0 {
                *l = count;
            }
        }
        remaining = remaining.subtract_saturate(&component)?;
    }

    let pixel_type = PixelType::for_label_count(count as usize);
    debug!(components = count, %pixel_type, "label finished");
    Ok(Image::from_vec(w, h, pixel_type, labels)?)
}

/// Number of connected components of a binary image
pub fn count_components(f: &Image, bc: &Sel) -> RegionResult<u32> {
    let labels = label(f, bc)?;
    Ok(labels.min_max().1.max(0) as u32)
}
