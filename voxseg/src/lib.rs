//! voxseg - Watershed segmentation of voxel volumes
//!
//! Splits a scalar intensity volume into catchment basins by simulated
//! rainfall: every voxel drains to its steepest-descent neighbor, flat
//! plateaus drain through their nearest lower boundary, and each basin
//! becomes one object. Basins can be pre-seeded and the volume masked.
//!
//! # Example
//!
//! ```
//! use voxseg::region::{WatershedOptions, segment_watershed};
//! use voxseg::{Extent, Voxels};
//!
//! // A 3x3 bowl drains into its centre
//! let extent = Extent::new(3, 3, 1).unwrap();
//! let channel = Voxels::from_vec(extent, vec![9u8, 8, 9, 8, 1, 8, 9, 8, 9]).unwrap();
//!
//! let basins = segment_watershed(&channel, None, None, &WatershedOptions::default()).unwrap();
//! assert_eq!(basins.len(), 1);
//! assert_eq!(basins.total_voxels(), 9);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use voxseg_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use voxseg_region as region;
