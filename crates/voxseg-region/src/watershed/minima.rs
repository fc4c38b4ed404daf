//! Minima found while classifying a volume

use crate::error::RegionResult;
use voxseg_core::{ObjectCollection, ObjectMask, Point3i};

/// Ordered list of minima, each a list of voxel coordinates
///
/// A single-voxel minimum holds one point. A flat basin or a seed holds
/// all of its points.
#[derive(Debug, Clone, Default)]
pub struct MinimaStore {
    minima: Vec<Vec<Point3i>>,
}

impl MinimaStore {
    pub fn new() -> Self {
        Self { minima: Vec::new() }
    }

    /// Register a minimum made of one or more points
    pub fn add(&mut self, points: Vec<Point3i>) {
        debug_assert!(!points.is_empty(), "a minimum needs at least one point");
        self.minima.push(points);
    }

    /// Register a single-voxel minimum
    pub fn add_point(&mut self, point: Point3i) {
        self.minima.push(vec![point]);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.minima.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.minima.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &[Point3i]> {
        self.minima.iter().map(Vec::as_slice)
    }

    /// One object per minimum, in registration order
    pub fn create_objects(&self) -> RegionResult<ObjectCollection> {
        let mut objects = ObjectCollection::with_capacity(self.minima.len());
        for points in &self.minima {
            objects.push(ObjectMask::from_points(points)?);
        }
        Ok(objects)
    }
}
