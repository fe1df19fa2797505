//! Watershed segmentation
//!
//! Watershed by immersion from markers. The relief is flooded from the
//! marker basins through a hierarchical queue: pixels leave the queue in
//! increasing flooding level, and pixels queued at the same level leave
//! in insertion order (FIFO). Ties between basins reaching a pixel at
//! the same level are therefore decided by which basin queued it first.

use crate::conncomp::ConnectivityType;
use crate::error::{RegionError, RegionResult};
use crate::label::label;
use crate::seedfill::{infrec, suprec};
use morphbox_core::{INT32_MAX, Image, PixelType};
use morphbox_morph::{Sel, dilate};
use std::collections::{BTreeMap, VecDeque};
use tracing::debug;

/// Output of a watershed transform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WatershedOutput {
    /// Binary image of the watershed lines
    #[default]
    Lines,
    /// Label image of the catchment basins
    Regions,
}

/// Options for the marker-free watershed
#[derive(Debug, Clone)]
pub struct WatershedOptions {
    /// Connectivity type for finding neighbors
    pub connectivity: ConnectivityType,
    /// Requested output
    pub output: WatershedOutput,
}

impl Default for WatershedOptions {
    fn default() -> Self {
        Self {
            connectivity: ConnectivityType::FourWay,
            output: WatershedOutput::Lines,
        }
    }
}

impl WatershedOptions {
    /// Create new options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set connectivity type
    pub fn with_connectivity(mut self, connectivity: ConnectivityType) -> Self {
        self.connectivity = connectivity;
        self
    }

    /// Set the requested output
    pub fn with_output(mut self, output: WatershedOutput) -> Self {
        self.output = output;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Status {
    Unprocessed,
    Queued,
    Permanent,
    Border,
}

/// Priority queue of pixel indices, FIFO within a level
#[derive(Debug, Default)]
struct HierarchicalQueue {
    levels: BTreeMap<i32, VecDeque<usize>>,
    pushes: usize,
}

impl HierarchicalQueue {
    fn push(&mut self, level: i32, idx: usize) {
        self.levels.entry(level).or_default().push_back(idx);
        self.pushes += 1;
    }

    fn pop(&mut self) -> Option<usize> {
        let mut entry = self.levels.first_entry()?;
        let idx = entry.get_mut().pop_front();
        if entry.get().is_empty() {
            entry.remove();
        }
        idx
    }
}

/// Watershed of a relief image from markers
///
/// # Arguments
///
/// * `f` - Relief image
/// * `markers` - Binary marker image (each connected component under
///   `bc` seeds one basin) or a label image (each positive value is a
///   basin)
/// * `bc` - Connectivity structuring element
/// * `output` - Watershed lines or basin labels
///
/// # Returns
///
/// For [`WatershedOutput::Lines`], a binary image with 1 on the
/// watershed lines. For [`WatershedOutput::Regions`], a label image of
/// the marker label type in which every pixel reached from a marker
/// carries its basin label. Without marker pixels the output is all 0.
///
/// # Errors
///
/// Returns an error if `f` and `markers` differ in shape.
pub fn cwatershed(
    f: &Image,
    markers: &Image,
    bc: &Sel,
    output: WatershedOutput,
) -> RegionResult<Image> {
    f.check_same_size(markers)?;
    let labels = if markers.is_binary() {
        label(markers, bc)?
    } else {
        markers.clone()
    };

    let (w, h) = f.dims();
    let (ey, ex) = bc.extent();
    let pw = w as usize + 2 * ex as usize;
    let ph = h as usize + 2 * ey as usize;

    let relief = f.add_border(ey, ex, f.pixel_type().min_value())?;
    let mut lab = labels.add_border(ey, ex, 0)?.data().to_vec();
    let mut status = vec![Status::Border; pw * ph];
    let mut cost = vec![f.pixel_type().max_value(); pw * ph];
    let mut line = vec![0i32; pw * ph];

    let deltas: Vec<isize> = bc
        .neighbors()
        .map(|(dy, dx)| dy as isize * pw as isize + dx as isize)
        .collect();
    let at = |y: u32, x: u32| (y + ey) as usize * pw + (x + ex) as usize;

    for y in 0..h {
        for x in 0..w {
            status[at(y, x)] = Status::Unprocessed;
        }
    }

    let mut queue = HierarchicalQueue::default();
    let mut marker_pixels = 0usize;
    for y in 0..h {
        for x in 0..w {
            let p = at(y, x);
            if lab[p] <= 0 {
                continue;
            }
            marker_pixels += 1;
            cost[p] = 0;
            let contour = deltas.iter().any(|&d| {
                let q = p.wrapping_add_signed(d);
                status[q] != Status::Border && lab[q] != lab[p]
            });
            if contour {
                status[p] = Status::Queued;
                queue.push(0, p);
            } else {
                status[p] = Status::Permanent;
            }
        }
    }

    let relief = relief.data();
    let mut pops = 0usize;
    while let Some(p) = queue.pop() {
        if status[p] == Status::Permanent {
            continue;
        }
        status[p] = Status::Permanent;
        pops += 1;

        for &d in &deltas {
            let q = p.wrapping_add_signed(d);
            match status[q] {
                Status::Border => {}
                Status::Permanent => {
                    if output == WatershedOutput::Lines
                        && lab[q] != lab[p]
                        && line[p] == 0
                        && line[q] == 0
                    {
                        line[p] = 1;
                    }
                }
                Status::Unprocessed | Status::Queued => {
                    let candidate = cost[p].max(relief[q]);
                    if status[q] == Status::Unprocessed || candidate < cost[q] {
                        cost[q] = candidate;
                        lab[q] = lab[p];
                        status[q] = Status::Queued;
                        queue.push(candidate, q);
                    }
                }
            }
        }
    }

    debug!(
        marker_pixels,
        pushes = queue.pushes,
        pops,
        "cwatershed finished"
    );

    let (pixel_type, data) = match output {
        WatershedOutput::Lines => (PixelType::Binary, line),
        WatershedOutput::Regions => (labels.pixel_type(), lab),
    };
    let padded = Image::from_vec(pw as u32, ph as u32, pixel_type, data)?;
    Ok(padded.remove_border(ey, ex)?)
}

/// Watershed seeded by the regional minima of `f`
pub fn watershed(f: &Image, options: &WatershedOptions) -> RegionResult<Image> {
    let bc = options.connectivity.sel();
    let markers = regional_minima(f, &bc)?;
    cwatershed(f, &markers, &bc, options.output)
}

/// Regional minima of an image, as a binary image
///
/// A regional minimum is a connected plateau (under `bc`) from which
/// every path to a pixel outside the plateau climbs. Found as the pixels
/// where `suprec(f + 1, f, bc)` stays above `f`. `binary`, `uint8` and
/// `uint16` images are widened to `int32` first so the increment never
/// saturates; `int32` pixels at the type maximum are settled separately
/// as the parts of the maximal plateau that touch no lower pixel.
pub fn regional_minima(f: &Image, bc: &Sel) -> RegionResult<Image> {
    if bc.is_empty() {
        return Err(RegionError::InvalidParameters(
            "connectivity element is empty".into(),
        ));
    }
    let wide = f.convert(PixelType::Int32);
    let raised = suprec(&wide.add_constant(1), &wide, bc)?;
    let minima = raised.subtract_saturate(&wide)?.threshold(1);

    let top = wide.threshold(i64::from(INT32_MAX));
    if top.is_all(0) {
        return Ok(minima);
    }
    // Plateau pixels reached from a lower neighbor are not minima
    let touched = dilate(&top.neg(), &bc.reflect()).intersection(&top)?;
    let reached = infrec(&touched, &top, bc)?;
    Ok(minima.union(&top.subtract_saturate(&reached)?)?)
}

/// Regional maxima of an image, as a binary image
pub fn regional_maxima(f: &Image, bc: &Sel) -> RegionResult<Image> {
    regional_minima(&f.neg(), bc)
}
