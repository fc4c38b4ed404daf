//! voxseg Core - Basic data structures for volume segmentation
//!
//! This crate provides the fundamental data structures used throughout
//! the voxseg workspace:
//!
//! - [`Extent`] - The size of a volume
//! - [`Point3i`] / [`PointRange`] - Voxel coordinates and running bounds
//! - [`BoundingBox`] - Axis-aligned box regions
//! - [`Voxels`] / [`BinaryVoxels`] - Dense sample volumes and masks
//! - [`ObjectMask`] / [`ObjectCollection`] - Segmented regions
//!
//! # Example
//!
//! ```
//! use voxseg_core::{Extent, Point3i, Voxels};
//!
//! let extent = Extent::new(16, 16, 4).unwrap();
//! let mut channel: Voxels<u8> = Voxels::new(extent);
//! channel.set(3, 4, 1, 200).unwrap();
//! assert_eq!(channel.get_point(Point3i::new(3, 4, 1)), Some(200));
//! ```

pub mod box_;
pub mod error;
pub mod extent;
pub mod object;
pub mod point;
pub mod voxels;

pub use box_::BoundingBox;
pub use error::{Error, Result};
pub use extent::Extent;
pub use object::{ObjectCollection, ObjectMask};
pub use point::{Point3i, PointRange};
pub use voxels::{BinaryVoxels, Voxels};
