//! Point3i, PointRange - Integer voxel coordinates
//!
//! [`Point3i`] is a plain integer triple. [`PointRange`] accumulates the
//! minimal and maximal corner of every point added to it, and is the
//! building block for bounding boxes computed while scanning a volume.

use crate::box_::BoundingBox;
use crate::extent::Extent;
use std::ops::{Add, Neg, Sub};

/// An integer voxel coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Point3i {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Point3i {
    /// Create a new point
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Componentwise minimum
    #[inline]
    pub fn min(self, other: Point3i) -> Point3i {
        Point3i::new(
            self.x.min(other.x),
            self.y.min(other.y),
            self.z.min(other.z),
        )
    }

    /// Componentwise maximum
    #[inline]
    pub fn max(self, other: Point3i) -> Point3i {
        Point3i::new(
            self.x.max(other.x),
            self.y.max(other.y),
            self.z.max(other.z),
        )
    }

    /// Key ordering points the way a raster scan visits them (z, then y, then x)
    #[inline]
    pub fn raster_key(&self) -> (i32, i32, i32) {
        (self.z, self.y, self.x)
    }
}

impl Add for Point3i {
    type Output = Point3i;

    fn add(self, rhs: Point3i) -> Point3i {
        Point3i::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Point3i {
    type Output = Point3i;

    fn sub(self, rhs: Point3i) -> Point3i {
        Point3i::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Neg for Point3i {
    type Output = Point3i;

    fn neg(self) -> Point3i {
        Point3i::new(-self.x, -self.y, -self.z)
    }
}

impl From<(i32, i32, i32)> for Point3i {
    fn from((x, y, z): (i32, i32, i32)) -> Self {
        Point3i::new(x, y, z)
    }
}

/// Running min/max accumulator over a set of points
///
/// Starts empty; becomes non-empty on the first [`PointRange::add`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointRange {
    bounds: Option<(Point3i, Point3i)>,
}

impl PointRange {
    /// Create an empty range
    pub fn new() -> Self {
        Self { bounds: None }
    }

    /// Extend the range to cover `point`
    pub fn add(&mut self, point: Point3i) {
        self.bounds = Some(match self.bounds {
            None => (point, point),
            Some((min, max)) => (min.min(point), max.max(point)),
        });
    }

    /// Check if no point has been added yet
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bounds.is_none()
    }

    /// Minimal corner, if any point was added
    pub fn min(&self) -> Option<Point3i> {
        self.bounds.map(|(min, _)| min)
    }

    /// Maximal corner (inclusive), if any point was added
    pub fn max(&self) -> Option<Point3i> {
        self.bounds.map(|(_, max)| max)
    }

    /// Smallest box covering every added point
    ///
    /// Returns `None` for an empty range.
    pub fn to_bounding_box(&self) -> Option<BoundingBox> {
        let (min, max) = self.bounds?;
        let extent = Extent::from_corners(min, max);
        Some(BoundingBox::new_unchecked(min, extent))
    }
}

impl FromIterator<Point3i> for PointRange {
    fn from_iter<I: IntoIterator<Item = Point3i>>(iter: I) -> Self {
        let mut range = PointRange::new();
        for point in iter {
            range.add(point);
        }
        range
    }
}
