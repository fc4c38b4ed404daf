//! BoundingBox - Axis-aligned box regions in a volume
//!
//! A box is described by its minimal corner and its extent. Boxes are
//! small `Copy` values and are passed around by value.

use crate::error::{Error, Result};
use crate::extent::Extent;
use crate::point::Point3i;

/// An axis-aligned box in voxel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BoundingBox {
    corner: Point3i,
    extent: Extent,
}

impl BoundingBox {
    /// Create a new box
    ///
    /// # Errors
    ///
    /// Returns an error if the extent has a negative size.
    pub fn new(corner: Point3i, extent: Extent) -> Result<Self> {
        if extent.x < 0 || extent.y < 0 || extent.z < 0 {
            return Err(Error::InvalidParameter(format!(
                "box extent must be non-negative: {}",
                extent
            )));
        }
        Ok(Self { corner, extent })
    }

    /// Create a box without validation
    pub const fn new_unchecked(corner: Point3i, extent: Extent) -> Self {
        Self { corner, extent }
    }

    /// Box covering a whole volume of the given extent
    pub fn from_extent(extent: Extent) -> Self {
        Self {
            corner: Point3i::default(),
            extent,
        }
    }

    /// Create a box from two inclusive corner points
    pub fn from_corners(a: Point3i, b: Point3i) -> Self {
        let min = a.min(b);
        let max = a.max(b);
        Self {
            corner: min,
            extent: Extent::from_corners(min, max),
        }
    }

    /// Minimal corner
    #[inline]
    pub fn corner(&self) -> Point3i {
        self.corner
    }

    /// Size of the box
    #[inline]
    pub fn extent(&self) -> Extent {
        self.extent
    }

    /// Maximal corner (inclusive)
    ///
    /// Meaningless for an empty box.
    #[inline]
    pub fn max_corner(&self) -> Point3i {
        Point3i::new(
            self.corner.x + self.extent.x - 1,
            self.corner.y + self.extent.y - 1,
            self.corner.z + self.extent.z - 1,
        )
    }

    /// Number of voxels covered
    #[inline]
    pub fn volume(&self) -> usize {
        self.extent.calculate_volume()
    }

    /// Check if the box covers no voxel
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.extent.is_empty()
    }

    /// Check if a point is inside the box
    #[inline]
    pub fn contains_point(&self, point: Point3i) -> bool {
        let rel = point - self.corner;
        self.extent.contains_point(rel)
    }

    /// Check if this box contains another box
    pub fn contains_box(&self, other: &BoundingBox) -> bool {
        other.is_empty()
            || (self.contains_point(other.corner) && self.contains_point(other.max_corner()))
    }

    /// Compute the intersection of two boxes
    pub fn intersect(&self, other: &BoundingBox) -> Option<BoundingBox> {
        if self.is_empty() || other.is_empty() {
            return None;
        }
        let min = self.corner.max(other.corner);
        let max = self.max_corner().min(other.max_corner());
        if min.x <= max.x && min.y <= max.y && min.z <= max.z {
            Some(BoundingBox::from_corners(min, max))
        } else {
            None
        }
    }

    /// Compute the union (bounding box) of two boxes
    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        if self.is_empty() {
            return *other;
        }
        if other.is_empty() {
            return *self;
        }
        BoundingBox::from_corners(
            self.corner.min(other.corner),
            self.max_corner().max(other.max_corner()),
        )
    }

    /// Clip the box to fit within a volume of the given extent
    pub fn clip_to(&self, extent: Extent) -> Option<BoundingBox> {
        self.intersect(&BoundingBox::from_extent(extent))
    }

    /// Iterate over every covered point in raster order
    pub fn iter_points(&self) -> impl Iterator<Item = Point3i> + '_ {
        self.extent.iter_points().map(move |p| p + self.corner)
    }
}
