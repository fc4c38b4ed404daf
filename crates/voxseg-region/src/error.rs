//! Error types for voxseg-region

use thiserror::Error;
use voxseg_core::{Extent, Point3i};

/// Errors that can occur during region processing operations
#[derive(Debug, Error)]
pub enum RegionError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] voxseg_core::Error),

    /// Mask and volume do not share an extent
    #[error("mask extent {actual} does not match volume extent {expected}")]
    ExtentMismatch { expected: Extent, actual: Extent },

    /// Invalid seed position
    #[error("invalid seed position: ({}, {}, {})", .0.x, .0.y, .0.z)]
    InvalidSeed(Point3i),

    /// A seed is not a single connected component
    #[error("seed {index} is not a single connected component ({components} components)")]
    SeedNotConnected { index: usize, components: usize },

    /// A seed reaches outside the volume
    #[error("seed {index} extends outside the volume extent {extent}")]
    SeedOutsideVolume { index: usize, extent: Extent },

    /// Two seeds share a voxel
    #[error("seed {index} overlaps an earlier seed at ({}, {}, {})", .point.x, .point.y, .point.z)]
    SeedsOverlap { index: usize, point: Point3i },

    /// Internal consistency failure during segmentation
    #[error("segmentation error: {0}")]
    SegmentationError(String),
}

/// Result type for region operations
pub type RegionResult<T> = Result<T, RegionError>;
