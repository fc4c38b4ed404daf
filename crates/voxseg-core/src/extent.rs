//! Extent - the size of a voxel volume
//!
//! Volumes are laid out row-major: x varies fastest, then y, then z.
//! Every buffer in the workspace uses [`Extent::offset`] to translate a
//! coordinate into a linear index, so the raster order of a sweep over
//! `0..calculate_volume()` is z-major, then y, then x.

use crate::error::{Error, Result};
use crate::point::Point3i;
use std::fmt;

/// Size of a volume in voxels along each axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Extent {
    /// Width (x)
    pub x: i32,
    /// Height (y)
    pub y: i32,
    /// Depth (z)
    pub z: i32,
}

impl Extent {
    /// Create a new extent
    ///
    /// Zero-sized axes are allowed and describe an empty volume.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidExtent`] if any size is negative.
    pub fn new(x: i32, y: i32, z: i32) -> Result<Self> {
        if x < 0 || y < 0 || z < 0 {
            return Err(Error::InvalidExtent { x, y, z });
        }
        Ok(Self { x, y, z })
    }

    /// Create an extent without validation
    pub const fn new_unchecked(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Number of voxels in a single z-slice
    #[inline]
    pub fn volume_xy(&self) -> usize {
        self.x as usize * self.y as usize
    }

    /// Total number of voxels
    #[inline]
    pub fn calculate_volume(&self) -> usize {
        self.volume_xy() * self.z as usize
    }

    /// Check if the extent holds no voxels
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.x == 0 || self.y == 0 || self.z == 0
    }

    /// Check if a coordinate lies inside the extent
    #[inline]
    pub fn contains(&self, x: i32, y: i32, z: i32) -> bool {
        x >= 0 && y >= 0 && z >= 0 && x < self.x && y < self.y && z < self.z
    }

    /// Check if a point lies inside the extent
    #[inline]
    pub fn contains_point(&self, point: Point3i) -> bool {
        self.contains(point.x, point.y, point.z)
    }

    /// Linear offset of a coordinate
    ///
    /// The coordinate must lie inside the extent.
    #[inline]
    pub fn offset(&self, x: i32, y: i32, z: i32) -> usize {
        debug_assert!(self.contains(x, y, z), "({x}, {y}, {z}) outside {self}");
        z as usize * self.volume_xy() + y as usize * self.x as usize + x as usize
    }

    /// Linear offset of a point
    #[inline]
    pub fn offset_of(&self, point: Point3i) -> usize {
        self.offset(point.x, point.y, point.z)
    }

    /// Inverse of [`Extent::offset`]
    #[inline]
    pub fn point_from_offset(&self, offset: usize) -> Point3i {
        let xy = self.volume_xy();
        let z = offset / xy;
        let rem = offset % xy;
        let y = rem / self.x as usize;
        let x = rem % self.x as usize;
        Point3i::new(x as i32, y as i32, z as i32)
    }

    /// Iterate over every coordinate in raster order (z, then y, then x)
    pub fn iter_points(&self) -> impl Iterator<Item = Point3i> + '_ {
        (0..self.z).flat_map(move |z| {
            (0..self.y).flat_map(move |y| (0..self.x).map(move |x| Point3i::new(x, y, z)))
        })
    }

    /// Extent of a box spanning the inclusive corners `min..=max`
    pub fn from_corners(min: Point3i, max: Point3i) -> Self {
        Self {
            x: max.x - min.x + 1,
            y: max.y - min.y + 1,
            z: max.z - min.z + 1,
        }
    }
}

impl fmt::Display for Extent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}x{}", self.x, self.y, self.z)
    }
}
