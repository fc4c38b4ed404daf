//! EncodedVoxels - the watershed label volume
//!
//! Wraps a `Voxels<u32>` of [`encoding`](super::encoding) codes. All
//! writes go through methods that check, in debug builds, that the cell
//! moves along the legal state sequence:
//!
//! ```text
//! Unvisited -> Direction | Minimum | Plateau
//! Plateau | Direction | Unvisited -> Temporary      (plateau flood-fill)
//! Temporary -> Direction | Minimum                  (plateau resolution)
//! Unvisited | Direction | Minimum -> Component      (seeding, labeling)
//! ```

use super::encoding::{self, Cell};
use voxseg_core::{Extent, Point3i, Voxels};

/// Label volume holding one watershed code per voxel
#[derive(Debug, Clone)]
pub struct EncodedVoxels {
    voxels: Voxels<u32>,
}

impl EncodedVoxels {
    /// Create a volume with every cell unvisited
    pub fn new(extent: Extent) -> Self {
        Self {
            voxels: Voxels::filled(extent, encoding::UNVISITED),
        }
    }

    #[inline]
    pub fn extent(&self) -> Extent {
        self.voxels.extent()
    }

    /// Raw code at a linear offset
    #[inline]
    pub fn code(&self, offset: usize) -> u32 {
        self.voxels.get_offset(offset)
    }

    /// Decoded cell at a linear offset
    #[inline]
    pub fn cell(&self, offset: usize) -> Cell {
        encoding::decode(self.code(offset))
    }

    #[inline]
    pub fn is_unvisited(&self, offset: usize) -> bool {
        self.code(offset) == encoding::UNVISITED
    }

    #[inline]
    pub fn is_temporary(&self, offset: usize) -> bool {
        self.code(offset) == encoding::TEMPORARY
    }

    #[inline]
    pub fn is_component(&self, offset: usize) -> bool {
        encoding::decode_component(self.code(offset)).is_some()
    }

    /// Component id at a linear offset, if the cell has been labeled
    #[inline]
    pub fn component_id(&self, offset: usize) -> Option<u32> {
        encoding::decode_component(self.code(offset))
    }

    pub fn mark_plateau(&mut self, offset: usize) {
        debug_assert!(
            self.is_unvisited(offset),
            "plateau from {:?}",
            self.cell(offset)
        );
        self.voxels.set_offset(offset, encoding::PLATEAU);
    }

    pub fn mark_temporary(&mut self, offset: usize) {
        debug_assert!(
            matches!(
                self.cell(offset),
                Cell::Unvisited | Cell::Plateau | Cell::Direction(_)
            ),
            "temporary from {:?}",
            self.cell(offset)
        );
        self.voxels.set_offset(offset, encoding::TEMPORARY);
    }

    pub fn mark_minimum(&mut self, offset: usize) {
        debug_assert!(
            matches!(self.cell(offset), Cell::Unvisited | Cell::Temporary),
            "minimum from {:?}",
            self.cell(offset)
        );
        self.voxels.set_offset(offset, encoding::MINIMUM);
    }

    /// Point the cell at the neighbor `point + direction`
    pub fn set_direction(&mut self, offset: usize, direction: Point3i) {
        debug_assert!(
            matches!(self.cell(offset), Cell::Unvisited | Cell::Temporary),
            "direction from {:?}",
            self.cell(offset)
        );
        self.voxels
            .set_offset(offset, encoding::encode_direction(direction));
    }

    /// Assign a final connected-component id (>= 1)
    pub fn set_component(&mut self, offset: usize, id: u32) {
        debug_assert!(
            matches!(
                self.cell(offset),
                Cell::Unvisited | Cell::Direction(_) | Cell::Minimum
            ),
            "component from {:?}",
            self.cell(offset)
        );
        self.voxels
            .set_offset(offset, encoding::encode_component(id));
    }

    /// Raw codes, for inspection
    pub fn codes(&self) -> &Voxels<u32> {
        &self.voxels
    }

    /// Convert into a plain label volume: component ids, 0 elsewhere
    pub fn into_labels(self) -> Voxels<u32> {
        self.voxels
            .map(|code| encoding::decode_component(code).unwrap_or(0))
    }
}
