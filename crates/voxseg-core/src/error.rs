//! Error types for voxseg-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Each variant captures enough context for diagnostics without exposing
//! internal implementation details.

use crate::extent::Extent;
use thiserror::Error;

/// voxseg core error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid volume extent
    #[error("invalid extent: {x}x{y}x{z}")]
    InvalidExtent { x: i32, y: i32, z: i32 },

    /// Index out of bounds
    #[error("index out of bounds: {index} >= {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Coordinate outside of a volume
    #[error("point ({x}, {y}, {z}) lies outside extent {extent}")]
    PointOutsideExtent {
        x: i32,
        y: i32,
        z: i32,
        extent: Extent,
    },

    /// Two volumes that must share an extent do not
    #[error("extent mismatch: expected {expected}, got {actual}")]
    ExtentMismatch { expected: Extent, actual: Extent },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for voxseg core operations
pub type Result<T> = std::result::Result<T, Error>;
