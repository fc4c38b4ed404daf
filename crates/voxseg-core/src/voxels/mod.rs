//! Voxels - The dense volume container
//!
//! `Voxels<T>` stores one sample per voxel in a single contiguous buffer.
//! It is used for intensity channels (`Voxels<u8>`, `Voxels<f32>`, ...),
//! binary masks ([`BinaryVoxels`]) and integer label volumes.
//!
//! # Voxel layout
//!
//! - Samples are stored row-major: x fastest, then y, then z
//! - The linear index of a coordinate is [`Extent::offset`]
//! - There is no padding between rows or slices

use crate::error::{Error, Result};
use crate::extent::Extent;
use crate::point::Point3i;

/// A binary mask volume
pub type BinaryVoxels = Voxels<bool>;

/// A dense 3D buffer of samples
#[derive(Debug, Clone, PartialEq)]
pub struct Voxels<T> {
    extent: Extent,
    data: Vec<T>,
}

impl<T: Copy + Default> Voxels<T> {
    /// Create a new volume with every sample set to `T::default()`.
    ///
    /// A zero-sized extent creates an empty volume.
    pub fn new(extent: Extent) -> Self {
        Self::filled(extent, T::default())
    }
}

impl<T: Copy> Voxels<T> {
    /// Create a new volume with every sample set to `value`
    pub fn filled(extent: Extent, value: T) -> Self {
        Self {
            extent,
            data: vec![value; extent.calculate_volume()],
        }
    }

    /// Wrap an existing buffer laid out in raster order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if the buffer length does not
    /// match the number of voxels in `extent`.
    pub fn from_vec(extent: Extent, data: Vec<T>) -> Result<Self> {
        let expected = extent.calculate_volume();
        if data.len() != expected {
            return Err(Error::IndexOutOfBounds {
                index: data.len(),
                len: expected,
            });
        }
        Ok(Self { extent, data })
    }

    /// Size of the volume
    #[inline]
    pub fn extent(&self) -> Extent {
        self.extent
    }

    /// Number of voxels
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the volume holds no voxels
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get the sample at (x, y, z).
    ///
    /// Returns `None` if coordinates are out of bounds.
    pub fn get(&self, x: i32, y: i32, z: i32) -> Option<T> {
        if !self.extent.contains(x, y, z) {
            return None;
        }
        Some(self.data[self.extent.offset(x, y, z)])
    }

    /// Get the sample at a point.
    ///
    /// Returns `None` if the point is out of bounds.
    #[inline]
    pub fn get_point(&self, point: Point3i) -> Option<T> {
        self.get(point.x, point.y, point.z)
    }

    /// Get the sample at a linear offset.
    ///
    /// # Panics
    ///
    /// Panics if `offset >= len()`.
    #[inline]
    pub fn get_offset(&self, offset: usize) -> T {
        self.data[offset]
    }

    /// Set the sample at (x, y, z).
    ///
    /// # Errors
    ///
    /// Returns [`Error::PointOutsideExtent`] if coordinates are out of bounds.
    pub fn set(&mut self, x: i32, y: i32, z: i32, value: T) -> Result<()> {
        if !self.extent.contains(x, y, z) {
            return Err(Error::PointOutsideExtent {
                x,
                y,
                z,
                extent: self.extent,
            });
        }
        let offset = self.extent.offset(x, y, z);
        self.data[offset] = value;
        Ok(())
    }

    /// Set the sample at a point.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PointOutsideExtent`] if the point is out of bounds.
    #[inline]
    pub fn set_point(&mut self, point: Point3i, value: T) -> Result<()> {
        self.set(point.x, point.y, point.z, value)
    }

    /// Set the sample at a linear offset.
    ///
    /// # Panics
    ///
    /// Panics if `offset >= len()`.
    #[inline]
    pub fn set_offset(&mut self, offset: usize, value: T) {
        self.data[offset] = value;
    }

    /// Raw samples in raster order
    #[inline]
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Mutable raw samples in raster order
    #[inline]
    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consume the volume, returning its raw samples
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Count samples satisfying a predicate
    pub fn count_where(&self, mut pred: impl FnMut(T) -> bool) -> usize {
        self.data.iter().filter(|&&v| pred(v)).count()
    }

    /// Check that another volume shares this volume's extent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ExtentMismatch`] if the extents differ.
    pub fn check_same_extent<U>(&self, other: &Voxels<U>) -> Result<()> {
        if self.extent != other.extent {
            return Err(Error::ExtentMismatch {
                expected: self.extent,
                actual: other.extent,
            });
        }
        Ok(())
    }

    /// Apply a function to every sample, producing a new volume
    pub fn map<U: Copy>(&self, f: impl FnMut(T) -> U) -> Voxels<U> {
        Voxels {
            extent: self.extent,
            data: self.data.iter().copied().map(f).collect(),
        }
    }
}

impl BinaryVoxels {
    /// Number of ON voxels
    pub fn count_on(&self) -> usize {
        self.count_where(|v| v)
    }
}
