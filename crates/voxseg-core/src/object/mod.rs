//! ObjectMask, ObjectCollection - Segmented regions of a volume
//!
//! An [`ObjectMask`] is a bounding box in global coordinates plus a dense
//! binary mask sized to that box. The mask itself is addressed relative
//! to the box corner, while [`ObjectMask::contains`], [`ObjectMask::set_on`]
//! and [`ObjectMask::iter_points`] work in global coordinates.

use crate::box_::BoundingBox;
use crate::error::{Error, Result};
use crate::point::{Point3i, PointRange};
use crate::voxels::BinaryVoxels;

/// A region of a volume: a bounding box plus a binary mask
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectMask {
    bounding_box: BoundingBox,
    voxels: BinaryVoxels,
}

impl ObjectMask {
    /// Create an object with every voxel of the box OFF
    pub fn new(bounding_box: BoundingBox) -> Self {
        Self {
            bounding_box,
            voxels: BinaryVoxels::new(bounding_box.extent()),
        }
    }

    /// Create an object from a box and a mask sized to that box.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ExtentMismatch`] if the mask extent differs from
    /// the box extent.
    pub fn from_voxels(bounding_box: BoundingBox, voxels: BinaryVoxels) -> Result<Self> {
        if voxels.extent() != bounding_box.extent() {
            return Err(Error::ExtentMismatch {
                expected: bounding_box.extent(),
                actual: voxels.extent(),
            });
        }
        Ok(Self {
            bounding_box,
            voxels,
        })
    }

    /// Create the smallest object covering a list of points.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if `points` is empty.
    pub fn from_points(points: &[Point3i]) -> Result<Self> {
        let range: PointRange = points.iter().copied().collect();
        let bounding_box = range
            .to_bounding_box()
            .ok_or_else(|| Error::InvalidParameter("object needs at least one point".into()))?;
        let mut object = ObjectMask::new(bounding_box);
        for &point in points {
            object.set_on(point)?;
        }
        Ok(object)
    }

    /// Bounding box in global coordinates
    #[inline]
    pub fn bounding_box(&self) -> BoundingBox {
        self.bounding_box
    }

    /// Mask relative to the bounding box corner
    #[inline]
    pub fn voxels(&self) -> &BinaryVoxels {
        &self.voxels
    }

    /// Mutable mask relative to the bounding box corner
    #[inline]
    pub fn voxels_mut(&mut self) -> &mut BinaryVoxels {
        &mut self.voxels
    }

    /// Check if a global point is ON in the mask
    pub fn contains(&self, point: Point3i) -> bool {
        self.voxels
            .get_point(point - self.bounding_box.corner())
            .unwrap_or(false)
    }

    /// Turn ON the voxel at a global point.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PointOutsideExtent`] if the point lies outside the
    /// bounding box.
    pub fn set_on(&mut self, point: Point3i) -> Result<()> {
        self.voxels
            .set_point(point - self.bounding_box.corner(), true)
    }

    /// Number of ON voxels
    pub fn num_voxels(&self) -> usize {
        self.voxels.count_on()
    }

    /// Iterate over ON voxels in global coordinates, in raster order
    pub fn iter_points(&self) -> impl Iterator<Item = Point3i> + '_ {
        let corner = self.bounding_box.corner();
        let extent = self.voxels.extent();
        self.voxels
            .data()
            .iter()
            .enumerate()
            .filter(|&(_, &on)| on)
            .map(move |(offset, _)| extent.point_from_offset(offset) + corner)
    }

    /// Check if two objects share at least one ON voxel
    pub fn intersects(&self, other: &ObjectMask) -> bool {
        match self.bounding_box.intersect(&other.bounding_box) {
            Some(overlap) => overlap
                .iter_points()
                .any(|p| self.contains(p) && other.contains(p)),
            None => false,
        }
    }
}

/// An ordered collection of objects
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectCollection {
    objects: Vec<ObjectMask>,
}

impl ObjectCollection {
    /// Create a new empty collection
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
        }
    }

    /// Create a collection with pre-allocated capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            objects: Vec::with_capacity(capacity),
        }
    }

    /// Get the number of objects
    #[inline]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Check if empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Get an object by index
    pub fn get(&self, index: usize) -> Option<&ObjectMask> {
        self.objects.get(index)
    }

    /// Add an object
    pub fn push(&mut self, object: ObjectMask) {
        self.objects.push(object);
    }

    /// Get the objects as a slice
    pub fn objects(&self) -> &[ObjectMask] {
        &self.objects
    }

    /// Total number of ON voxels across all objects
    pub fn total_voxels(&self) -> usize {
        self.objects.iter().map(ObjectMask::num_voxels).sum()
    }

    /// Get an iterator over the objects
    pub fn iter(&self) -> impl Iterator<Item = &ObjectMask> {
        self.objects.iter()
    }
}

impl FromIterator<ObjectMask> for ObjectCollection {
    fn from_iter<I: IntoIterator<Item = ObjectMask>>(iter: I) -> Self {
        Self {
            objects: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for ObjectCollection {
    type Item = ObjectMask;
    type IntoIter = std::vec::IntoIter<ObjectMask>;

    fn into_iter(self) -> Self::IntoIter {
        self.objects.into_iter()
    }
}

impl<'a> IntoIterator for &'a ObjectCollection {
    type Item = &'a ObjectMask;
    type IntoIter = std::slice::Iter<'a, ObjectMask>;

    fn into_iter(self) -> Self::IntoIter {
        self.objects.iter()
    }
}
