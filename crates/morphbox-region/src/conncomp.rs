//! Connected component analysis
//!
//! Component statistics and area filtering on top of [`label`].

use crate::error::{RegionError, RegionResult};
use crate::label::label;
use morphbox_core::{Image, PixelType};
use morphbox_morph::Sel;
use std::collections::BTreeMap;

/// Connectivity type for component analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectivityType {
    /// 4-way connectivity (up, down, left, right)
    #[default]
    FourWay,
    /// 8-way connectivity (includes diagonals)
    EightWay,
}

impl ConnectivityType {
    /// Structuring element of this connectivity: the elementary cross or
    /// the 3x3 box
    pub fn sel(self) -> Sel {
        match self {
            ConnectivityType::FourWay => Sel::create_cross(1),
            ConnectivityType::EightWay => Sel::create_box(1),
        }
    }
}

/// Axis-aligned bounding box of a component
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    /// Left column
    pub x: u32,
    /// Top row
    pub y: u32,
    /// Width in pixels
    pub w: u32,
    /// Height in pixels
    pub h: u32,
}

/// A connected component in an image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectedComponent {
    /// Label of this component in the output of [`label`]
    pub label: u32,
    /// Number of pixels in this component
    pub pixel_count: u32,
    /// Bounding box of this component
    pub bounds: Bounds,
}

/// Find all connected components in a binary image
///
/// Components are returned in label order.
pub fn find_connected_components(
    f: &Image,
    connectivity: ConnectivityType,
) -> RegionResult<Vec<ConnectedComponent>> {
    let labels = label(f, &connectivity.sel())?;
    Ok(component_stats(&labels))
}

/// Per-label area and bounding box of a label image
///
/// Components are returned in increasing label order; labels that do
/// not occur are skipped.
pub fn component_stats(labels: &Image) -> Vec<ConnectedComponent> {
    // label -> (count, min_x, min_y, max_x, max_y)
    let mut acc: BTreeMap<i32, (u32, u32, u32, u32, u32)> = BTreeMap::new();
    for (i, &l) in labels.data().iter().enumerate() {
        if l <= 0 {
            continue;
        }
        let (x, y) = labels.coords_of(i);
        let e = acc.entry(l).or_insert((0, x, y, x, y));
        e.0 += 1;
        e.1 = e.1.min(x);
        e.2 = e.2.min(y);
        e.3 = e.3.max(x);
        e.4 = e.4.max(y);
    }
    acc.into_iter()
        .map(|(l, (n, x0, y0, x1, y1))| ConnectedComponent {
            label: l as u32,
            pixel_count: n,
            bounds: Bounds {
                x: x0,
                y: y0,
                w: x1 - x0 + 1,
                h: y1 - y0 + 1,
            },
        })
        .collect()
}

/// Extract a single component from a label image as a binary image
pub fn extract_component(labels: &Image, label: u32) -> RegionResult<Image> {
    let target = i32::try_from(label)
        .map_err(|_| RegionError::InvalidParameters(format!("label {label} out of range")))?;
    let data = labels.data().iter().map(|&l| i32::from(l == target)).collect();
    Ok(Image::from_vec(
        labels.width(),
        labels.height(),
        PixelType::Binary,
        data,
    )?)
}

/// Area opening of a binary image
///
/// Keeps the components (under `bc`) with at least `area` pixels.
///
/// # Errors
///
/// Returns [`morphbox_core::Error::NotBinary`] for a non-binary input.
pub fn area_open(f: &Image, area: u32, bc: &Sel) -> RegionResult<Image> {
    let labels = label(f, bc)?;
    let keep: Vec<bool> = std::iter::once(false)
        .chain(component_stats(&labels).iter().map(|c| c.pixel_count >= area))
        .collect();
    let data = labels
        .data()
        .iter()
        .map(|&l| i32::from(keep.get(l as usize).copied().unwrap_or(false)))
        .collect();
    Ok(Image::from_vec(f.width(), f.height(), PixelType::Binary, data)?)
}
