//! voxseg-region - Region processing for voxseg
//!
//! This crate provides region processing functionality including:
//!
//! - **Connectivity** - Voxel neighborhoods and connected component counts
//! - **Seed fill operations** - Flood fill on binary volumes
//! - **Watershed segmentation** - Rainfall-simulation watershed with
//!   plateau resolution, seeds and masks
//!
//! # Examples
//!
//! ## Counting connected components
//!
//! ```
//! use voxseg_core::{BinaryVoxels, Extent};
//! use voxseg_region::{ConnectivityType, count_components};
//!
//! let mut mask = BinaryVoxels::new(Extent::new(10, 10, 1).unwrap());
//! mask.set(1, 1, 0, true).unwrap();
//! mask.set(2, 2, 0, true).unwrap();
//! mask.set(8, 8, 0, true).unwrap();
//!
//! assert_eq!(count_components(&mask, ConnectivityType::Vertex, false), 2);
//! assert_eq!(count_components(&mask, ConnectivityType::Face, false), 3);
//! ```
//!
//! ## Watershed segmentation
//!
//! ```
//! use voxseg_core::{Extent, Voxels};
//! use voxseg_region::{WatershedOptions, segment_watershed};
//!
//! // Two valleys separated by a ridge
//! let extent = Extent::new(6, 1, 1).unwrap();
//! let channel = Voxels::from_vec(extent, vec![1u16, 4, 9, 4, 2, 6]).unwrap();
//!
//! let options = WatershedOptions::new().with_do_3d(false);
//! let basins = segment_watershed(&channel, None, None, &options).unwrap();
//! assert_eq!(basins.len(), 2);
//! ```

pub mod conncomp;
pub mod error;
pub mod seedfill;
pub mod watershed;

// Re-export core types
pub use voxseg_core;

// Re-export error types
pub use error::{RegionError, RegionResult};

// Re-export conncomp types and functions
pub use conncomp::{
    ConnectivityType, Neighborhood, count_components, count_object_components, is_single_component,
};

// Re-export seedfill functions
pub use seedfill::floodfill;

// Re-export watershed types and functions
pub use watershed::{
    EncodedVoxels, MinimaStore, WatershedOptions, find_local_minima, segment_watershed,
    segment_watershed_labels,
};
