//! Structuring elements
//!
//! A structuring element (SEL) is a finite set of offsets `(dy, dx)`
//! relative to the origin. A flat SEL carries no weights; a non-flat SEL
//! carries one `i32` weight per offset which dilation adds to the pixel
//! value.
//!
//! Offsets are kept unique and sorted in raster order (by `dy`, then
//! `dx`). When two entries land on the same offset the larger weight
//! is kept. A weight of [`INT32_MIN`] marks a position outside the domain
//! and is dropped on construction.

use crate::{MorphError, MorphResult};
use morphbox_core::{INT32_MAX, INT32_MIN};
use std::collections::BTreeMap;
use std::fmt;

/// Offset `(dy, dx)` of a structuring element entry
pub type Offset = (i32, i32);

/// Metric used to build disks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DiskMetric {
    /// Pixels within Euclidean distance `r + 0.5`
    #[default]
    Euclidean,
    /// Diamond: `|dy| + |dx| <= r`
    CityBlock,
    /// Square: `max(|dy|, |dx|) <= r`
    Chessboard,
    /// Alternating box and cross steps
    Octagon,
}

/// Direction of a structuring element rotation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RotationDirection {
    /// Clockwise on screen (rows grow downwards)
    #[default]
    Clockwise,
    /// Anti-clockwise on screen
    AntiClockwise,
}

/// Structuring element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sel {
    offsets: Vec<Offset>,
    weights: Option<Vec<i32>>,
}

impl Sel {
    fn from_entries(entries: impl IntoIterator<Item = (Offset, i32)>, flat: bool) -> Self {
        let mut map: BTreeMap<Offset, i32> = BTreeMap::new();
        for (off, w) in entries {
            if !flat && w <= INT32_MIN {
                continue;
            }
            map.entry(off)
                .and_modify(|v| *v = (*v).max(w))
                .or_insert(w);
        }
        let (offsets, weights): (Vec<Offset>, Vec<i32>) = map.into_iter().unzip();
        Self {
            offsets,
            weights: (!flat).then_some(weights),
        }
    }

    /// Create an empty flat structuring element
    ///
    /// Dilating by it gives the uniformly minimal image.
    pub fn empty() -> Self {
        Self::from_entries([], true)
    }

    /// Create the flat structuring element holding only the origin
    pub fn origin() -> Self {
        Self::flat([(0, 0)])
    }

    /// Create a flat structuring element from offsets
    pub fn flat(offsets: impl IntoIterator<Item = Offset>) -> Self {
        Self::from_entries(offsets.into_iter().map(|o| (o, 0)), true)
    }

    /// Create a non-flat structuring element from offsets and weights
    ///
    /// # Errors
    ///
    /// Returns [`MorphError::MalformedSe`] if the lengths differ.
    pub fn non_flat(offsets: &[Offset], weights: &[i32]) -> MorphResult<Self> {
        if offsets.len() != weights.len() {
            return Err(MorphError::MalformedSe(format!(
                "{} offsets but {} weights",
                offsets.len(),
                weights.len()
            )));
        }
        Ok(Self::from_entries(
            offsets.iter().copied().zip(weights.iter().copied()),
            false,
        ))
    }

    /// Create a flat structuring element from a 0/1 matrix
    ///
    /// The origin is the centre of the matrix, so both dimensions must
    /// be odd. Non-zero cells are in the domain.
    ///
    /// # Errors
    ///
    /// Returns [`MorphError::MalformedSe`] for ragged rows, an empty
    /// matrix or an even dimension.
    pub fn from_matrix<R: AsRef<[u8]>>(rows: &[R]) -> MorphResult<Self> {
        let (cy, cx) = matrix_center::<u8, R>(rows)?;
        let mut entries = Vec::new();
        for (y, row) in rows.iter().enumerate() {
            for (x, &v) in row.as_ref().iter().enumerate() {
                if v != 0 {
                    entries.push(((y as i32 - cy, x as i32 - cx), 0));
                }
            }
        }
        Ok(Self::from_entries(entries, true))
    }

    /// Create a non-flat structuring element from a weight matrix
    ///
    /// Cells holding [`INT32_MIN`] (or anything below it) lie outside the
    /// domain. The origin is the centre of the matrix.
    ///
    /// # Errors
    ///
    /// Returns [`MorphError::MalformedSe`] for ragged rows, an empty
    /// matrix or an even dimension.
    pub fn from_matrix_non_flat<R: AsRef<[i32]>>(rows: &[R]) -> MorphResult<Self> {
        let (cy, cx) = matrix_center::<i32, R>(rows)?;
        let mut entries = Vec::new();
        for (y, row) in rows.iter().enumerate() {
            for (x, &v) in row.as_ref().iter().enumerate() {
                entries.push(((y as i32 - cy, x as i32 - cx), v));
            }
        }
        Ok(Self::from_entries(entries, false))
    }

    /// Create a flat cross of radius `r`
    ///
    /// This is the elementary 4-connected cross summed `r` times with
    /// itself: a diamond. `r = 0` gives the origin.
    pub fn create_cross(r: u32) -> Self {
        Self::flat([(-1, 0), (0, -1), (0, 0), (0, 1), (1, 0)]).sum_n(r)
    }

    /// Create a flat box of radius `r`, a `(2r+1) x (2r+1)` square
    pub fn create_box(r: u32) -> Self {
        Self::flat((-1..=1).flat_map(|dy| (-1..=1).map(move |dx| (dy, dx)))).sum_n(r)
    }

    /// Create a flat disk of radius `r` under `metric`
    pub fn create_disk(r: u32, metric: DiskMetric) -> Self {
        match metric {
            DiskMetric::Euclidean => {
                let limit = euclidean_limit(r);
                let r = r as i32;
                Self::flat(
                    (-r..=r)
                        .flat_map(|dy| (-r..=r).map(move |dx| (dy, dx)))
                        .filter(|&(dy, dx)| squared_norm(dy, dx) <= limit),
                )
            }
            DiskMetric::CityBlock => Self::create_cross(r),
            DiskMetric::Chessboard => Self::create_box(r),
            DiskMetric::Octagon => {
                if r == 1 {
                    Self::create_box(1)
                } else {
                    Self::create_box(r / 2).minkowski_sum(&Self::create_cross(r.div_ceil(2)))
                }
            }
        }
    }

    /// Create a non-flat semi-sphere of radius `r` under `metric`
    ///
    /// The weight at the origin is `h`. For the Euclidean metric the
    /// weight at `(dy, dx)` is `h + floor(sqrt((r + 0.5)^2 - dy^2 - dx^2))`;
    /// the other metrics add one per box or cross step towards the centre.
    pub fn create_sphere(r: u32, metric: DiskMetric, h: i32) -> Self {
        let top = Self::from_entries([((0, 0), h)], false);
        if r == 0 {
            return top;
        }
        // 3x3 steps: every cell 1 for the box, centre 1 and arms 0 for the cross
        let step_box = Self::from_entries(
            (-1..=1).flat_map(|dy| (-1..=1).map(move |dx| ((dy, dx), 1))),
            false,
        );
        let step_cross = Self::from_entries(
            [((-1, 0), 0), ((0, -1), 0), ((0, 0), 1), ((0, 1), 0), ((1, 0), 0)],
            false,
        );
        match metric {
            DiskMetric::Euclidean => {
                let limit = euclidean_limit(r);
                let r = r as i32;
                let entries = (-r..=r)
                    .flat_map(|dy| (-r..=r).map(move |dx| (dy, dx)))
                    .filter(|&(dy, dx)| squared_norm(dy, dx) <= limit)
                    .map(|(dy, dx)| {
                        let rise = (limit - squared_norm(dy, dx)).max(0.0).sqrt();
                        ((dy, dx), saturate_weight(i64::from(h) + rise as i64))
                    });
                Self::from_entries(entries, false)
            }
            DiskMetric::CityBlock => top.minkowski_sum(&step_cross.sum_n(r)),
            DiskMetric::Chessboard => top.minkowski_sum(&step_box.sum_n(r)),
            DiskMetric::Octagon if r == 1 => top.minkowski_sum(&step_box),
            DiskMetric::Octagon => top
                .minkowski_sum(&step_box.sum_n(r / 2))
                .minkowski_sum(&step_cross.sum_n(r.div_ceil(2))),
        }
    }

    /// Create a flat digital line segment
    ///
    /// The segment starts at the origin and has `length` pixels measured
    /// along its dominant axis projection, at `angle` degrees clockwise
    /// from the positive x axis. `length = 0` gives the origin.
    pub fn create_line(length: u32, angle: f64) -> Self {
        if length == 0 {
            return Self::origin();
        }
        let theta = angle.to_radians();
        let l = f64::from(length);
        let (sin, cos) = theta.sin_cos();
        let tan = theta.tan();

        let mut offsets = Vec::new();
        if tan.abs() <= 1.0 {
            let s = cos.signum();
            for x in arange(l * cos - s * 0.5, s) {
                let y = (x * tan + 0.5).floor();
                offsets.push((y as i32, x as i32));
            }
        } else {
            let s = sin.signum();
            for y in arange(l * sin - s * 0.5, s) {
                let x = (y / tan + 0.5).floor();
                offsets.push((y as i32, x as i32));
            }
        }
        if offsets.is_empty() {
            return Self::origin();
        }
        Self::flat(offsets)
    }

    /// Set union of two structuring elements
    ///
    /// If either operand is non-flat the result is non-flat and the flat
    /// operand contributes weight 0.
    pub fn union(&self, other: &Sel) -> Sel {
        let flat = self.is_flat() && other.is_flat();
        Self::from_entries(self.iter().chain(other.iter()), flat)
    }

    /// Minkowski sum (dilation of one structuring element by another)
    ///
    /// Offsets add and weights add; a flat operand contributes weight 0.
    /// The result is flat only if both operands are flat.
    pub fn minkowski_sum(&self, other: &Sel) -> Sel {
        let flat = self.is_flat() && other.is_flat();
        let entries = other.iter().flat_map(|((oy, ox), ov)| {
            self.iter().map(move |((sy, sx), sv)| {
                (
                    (sy + oy, sx + ox),
                    saturate_weight(i64::from(sv) + i64::from(ov)),
                )
            })
        });
        Self::from_entries(entries, flat)
    }

    /// Minkowski sum of `n` copies of `self`
    ///
    /// `n = 0` gives the origin (with weight 0 if `self` is non-flat).
    pub fn sum_n(&self, n: u32) -> Sel {
        if n == 0 {
            return Self::from_entries([((0, 0), 0)], self.is_flat());
        }
        let mut acc = self.clone();
        for _ in 1..n {
            acc = acc.minkowski_sum(self);
        }
        acc
    }

    /// Rotate about the origin by `angle` degrees
    ///
    /// Intended for multiples of 45 degrees. Rotated coordinates are
    /// rounded half away from zero; entries landing on the same offset
    /// keep the larger weight.
    pub fn rotate(&self, angle: f64, direction: RotationDirection) -> Sel {
        let angle = match direction {
            RotationDirection::Clockwise => angle,
            RotationDirection::AntiClockwise => -angle,
        };
        let (sin, cos) = angle.to_radians().sin_cos();
        let entries = self.iter().map(|((dy, dx), w)| {
            let (dy, dx) = (f64::from(dy), f64::from(dx));
            let nx = dx * cos - dy * sin;
            let ny = dx * sin + dy * cos;
            ((ny.round() as i32, nx.round() as i32), w)
        });
        Self::from_entries(entries, self.is_flat())
    }

    /// Reflect through the origin (rotation by 180 degrees)
    pub fn reflect(&self) -> Sel {
        Self::from_entries(self.iter().map(|((dy, dx), w)| ((-dy, -dx), w)), self.is_flat())
    }

    /// Translate every offset by `(dy, dx)`
    pub fn translate(&self, dy: i32, dx: i32) -> Sel {
        Self::from_entries(
            self.iter().map(|((y, x), w)| ((y + dy, x + dx), w)),
            self.is_flat(),
        )
    }

    /// Check whether the structuring element is flat
    #[inline]
    pub fn is_flat(&self) -> bool {
        self.weights.is_none()
    }

    /// Number of offsets
    #[inline]
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    /// Check whether there are no offsets
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Offsets in raster order
    pub fn offsets(&self) -> &[Offset] {
        &self.offsets
    }

    /// Weights aligned with [`Sel::offsets`], `None` when flat
    pub fn weights(&self) -> Option<&[i32]> {
        self.weights.as_deref()
    }

    /// Iterate over `(offset, weight)` pairs; flat entries have weight 0
    pub fn iter(&self) -> impl Iterator<Item = (Offset, i32)> + '_ {
        self.offsets.iter().enumerate().map(|(i, &off)| {
            let w = self.weights.as_ref().map_or(0, |ws| ws[i]);
            (off, w)
        })
    }

    /// Check whether `(dy, dx)` is in the domain
    pub fn contains(&self, dy: i32, dx: i32) -> bool {
        self.offsets.binary_search(&(dy, dx)).is_ok()
    }

    /// Weight at `(dy, dx)`; `Some(0)` for a flat entry, `None` outside
    pub fn weight_at(&self, dy: i32, dx: i32) -> Option<i32> {
        let i = self.offsets.binary_search(&(dy, dx)).ok()?;
        Some(self.weights.as_ref().map_or(0, |ws| ws[i]))
    }

    /// Offsets other than the origin, in raster order
    pub fn neighbors(&self) -> impl Iterator<Item = Offset> + '_ {
        self.offsets.iter().copied().filter(|&o| o != (0, 0))
    }

    /// Largest `|dy|` and `|dx|` over all offsets
    pub fn extent(&self) -> (u32, u32) {
        self.offsets.iter().fold((0, 0), |(ey, ex), &(dy, dx)| {
            (ey.max(dy.unsigned_abs()), ex.max(dx.unsigned_abs()))
        })
    }

    /// Centred `(2*ey+1) x (2*ex+1)` matrix of the domain
    ///
    /// Cells in the domain hold their weight (0 when flat); other cells
    /// hold `None`.
    pub fn to_matrix(&self) -> Vec<Vec<Option<i32>>> {
        let (ey, ex) = self.extent();
        let (ey, ex) = (ey as i32, ex as i32);
        (-ey..=ey)
            .map(|dy| (-ex..=ex).map(|dx| self.weight_at(dy, dx)).collect())
            .collect()
    }
}

impl fmt::Display for Sel {
    /// One line per row: `x` in the domain, `.` outside, the origin
    /// uppercase (`X`) or `o` when outside the domain.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (ey, ex) = self.extent();
        let (ey, ex) = (ey as i32, ex as i32);
        for dy in -ey..=ey {
            for dx in -ex..=ex {
                let c = match (self.contains(dy, dx), (dy, dx) == (0, 0)) {
                    (true, true) => 'X',
                    (true, false) => 'x',
                    (false, true) => 'o',
                    (false, false) => '.',
                };
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

fn matrix_center<T, R: AsRef<[T]>>(rows: &[R]) -> MorphResult<(i32, i32)> {
    let h = rows.len();
    let w = rows.first().map_or(0, |r| r.as_ref().len());
    if h == 0 || w == 0 {
        return Err(MorphError::MalformedSe("empty matrix".into()));
    }
    if rows.iter().any(|r| r.as_ref().len() != w) {
        return Err(MorphError::MalformedSe("ragged matrix rows".into()));
    }
    if h % 2 == 0 || w % 2 == 0 {
        return Err(MorphError::MalformedSe(format!(
            "matrix must have odd dimensions, got {h}x{w}"
        )));
    }
    Ok(((h / 2) as i32, (w / 2) as i32))
}

fn euclidean_limit(r: u32) -> f64 {
    let r = f64::from(r) + 0.5;
    r * r
}

fn squared_norm(dy: i32, dx: i32) -> f64 {
    let (dy, dx) = (i64::from(dy), i64::from(dx));
    (dy * dy + dx * dx) as f64
}

fn saturate_weight(v: i64) -> i32 {
    v.clamp(i64::from(INT32_MIN), i64::from(INT32_MAX)) as i32
}

/// `0, step, 2*step, ...` strictly before `stop`
fn arange(stop: f64, step: f64) -> impl Iterator<Item = f64> {
    (0i32..)
        .map(move |k| f64::from(k) * step)
        .take_while(move |&t| if step > 0.0 { t < stop } else { t > stop })
}
