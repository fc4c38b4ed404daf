//! The read-only side of a segmentation: intensities, mask and topology

use crate::conncomp::{ConnectivityType, Neighborhood};
use crate::error::{RegionError, RegionResult};
use voxseg_core::{BinaryVoxels, Extent, Point3i, Voxels};

/// Intensity volume, optional mask and neighborhood of one segmentation
pub(crate) struct Landscape<'a, T> {
    channel: &'a Voxels<T>,
    mask: Option<&'a BinaryVoxels>,
    neighborhood: Neighborhood,
}

impl<'a, T: Copy + PartialOrd> Landscape<'a, T> {
    /// # Errors
    ///
    /// Returns [`RegionError::ExtentMismatch`] if the mask and the channel
    /// differ in extent.
    pub fn new(
        channel: &'a Voxels<T>,
        mask: Option<&'a BinaryVoxels>,
        connectivity: ConnectivityType,
        do_3d: bool,
    ) -> RegionResult<Self> {
        if let Some(mask) = mask {
            check_mask_extent(channel.extent(), mask)?;
        }
        Ok(Self {
            channel,
            mask,
            neighborhood: Neighborhood::new(connectivity, do_3d),
        })
    }

    #[inline]
    pub fn extent(&self) -> Extent {
        self.channel.extent()
    }

    #[inline]
    pub fn mask(&self) -> Option<&'a BinaryVoxels> {
        self.mask
    }

    /// Whether the voxel at `offset` takes part in the segmentation
    #[inline]
    pub fn participates(&self, offset: usize) -> bool {
        self.mask.is_none_or(|mask| mask.get_offset(offset))
    }

    #[inline]
    pub fn intensity(&self, offset: usize) -> T {
        self.channel.get_offset(offset)
    }

    /// Participating neighbors of `point`, in neighborhood order
    ///
    /// Yields `(direction, neighbor, neighbor_offset)`.
    pub fn neighbors(
        &self,
        point: Point3i,
    ) -> impl Iterator<Item = (Point3i, Point3i, usize)> + '_ {
        let extent = self.extent();
        self.neighborhood
            .neighbors_of(point, extent)
            .map(move |(direction, neighbor)| {
                (direction, neighbor, extent.offset_of(neighbor))
            })
            .filter(move |&(_, _, offset)| self.participates(offset))
    }
}

/// Check that a mask shares the extent of the volume it restricts
pub(crate) fn check_mask_extent(extent: Extent, mask: &BinaryVoxels) -> RegionResult<()> {
    if mask.extent() != extent {
        return Err(RegionError::ExtentMismatch {
            expected: extent,
            actual: mask.extent(),
        });
    }
    Ok(())
}
