//! Connected component analysis
//!
//! This module defines the voxel neighborhoods used by every region
//! operation in the crate, and provides functions for counting the
//! connected components of binary volumes and objects.

use crate::seedfill::floodfill;
use std::ops::RangeInclusive;
use voxseg_core::{BinaryVoxels, Extent, ObjectMask, Point3i};

/// Connectivity type for component analysis
///
/// In 3D the three variants select 6, 18 or 26 neighbors. In 2D (see
/// [`Neighborhood::new`]) only the in-slice part is kept, giving 4, 8 or 8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectivityType {
    /// Neighbors sharing a face (6 in 3D, 4 in 2D)
    Face,
    /// Neighbors sharing a face or an edge (18 in 3D, 8 in 2D)
    Edge,
    /// Neighbors sharing a face, an edge or a vertex (26 in 3D, 8 in 2D)
    #[default]
    Vertex,
}

impl ConnectivityType {
    /// Largest number of non-zero components a neighbor offset may have
    fn max_nonzero(self) -> i32 {
        match self {
            ConnectivityType::Face => 1,
            ConnectivityType::Edge => 2,
            ConnectivityType::Vertex => 3,
        }
    }
}

/// An ordered list of neighbor offsets
///
/// Offsets are listed z-major, then y, then x, each axis running from -1
/// to +1. Every scan that picks "the first" of several equal candidates
/// relies on this order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Neighborhood {
    offsets: Vec<Point3i>,
}

impl Neighborhood {
    /// Build the neighborhood for a connectivity.
    ///
    /// When `do_3d` is false, offsets leaving the current z-slice are
    /// dropped.
    pub fn new(connectivity: ConnectivityType, do_3d: bool) -> Self {
        let z_range: RangeInclusive<i32> = if do_3d { -1..=1 } else { 0..=0 };
        let mut offsets = Vec::with_capacity(26);
        for dz in z_range {
            for dy in -1..=1i32 {
                for dx in -1..=1i32 {
                    let nonzero = dx.abs() + dy.abs() + dz.abs();
                    if nonzero > 0 && nonzero <= connectivity.max_nonzero() {
                        offsets.push(Point3i::new(dx, dy, dz));
                    }
                }
            }
        }
        Self { offsets }
    }

    /// Offsets in iteration order
    #[inline]
    pub fn offsets(&self) -> &[Point3i] {
        &self.offsets
    }

    /// Number of neighbors
    #[inline]
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    /// Check if the neighborhood has no offsets
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Iterate over the in-bounds neighbors of `point`
    ///
    /// Yields `(offset, neighbor)` pairs in iteration order.
    pub fn neighbors_of(
        &self,
        point: Point3i,
        extent: Extent,
    ) -> impl Iterator<Item = (Point3i, Point3i)> + '_ {
        self.offsets.iter().filter_map(move |&offset| {
            let neighbor = point + offset;
            let inside = extent.contains_point(neighbor);
            inside.then_some((offset, neighbor))
        })
    }
}

/// Count the connected components of ON voxels in a binary volume
pub fn count_components(mask: &BinaryVoxels, connectivity: ConnectivityType, do_3d: bool) -> usize {
    let neighborhood = Neighborhood::new(connectivity, do_3d);
    let mut remaining = mask.clone();
    let mut count = 0;
    for offset in 0..remaining.len() {
        if remaining.get_offset(offset) {
            let seed = remaining.extent().point_from_offset(offset);
            // The seed is inside the volume, so the fill cannot fail
            if floodfill(&mut remaining, seed, false, &neighborhood).is_ok() {
                count += 1;
            }
        }
    }
    count
}

/// Count the connected components of an object's ON voxels
pub fn count_object_components(
    object: &ObjectMask,
    connectivity: ConnectivityType,
    do_3d: bool,
) -> usize {
    count_components(object.voxels(), connectivity, do_3d)
}

/// Check if an object's ON voxels form exactly one connected component
pub fn is_single_component(
    object: &ObjectMask,
    connectivity: ConnectivityType,
    do_3d: bool,
) -> bool {
    count_object_components(object, connectivity, do_3d) == 1
}
