//! Seed fill operations
//!
//! Flood fill on binary volumes. The fill uses an explicit work-list
//! rather than recursion, so large regions cannot overflow the stack.

use crate::conncomp::Neighborhood;
use crate::error::{RegionError, RegionResult};
use voxseg_core::{BinaryVoxels, Point3i};

/// Flood fill in a binary volume starting from a seed point
///
/// Fills the connected region of voxels sharing the seed's value,
/// replacing that value with `new_value`. This modifies the volume in
/// place and returns the number of voxels filled.
///
/// # Arguments
///
/// * `mask` - Mutable binary volume
/// * `seed` - Starting point
/// * `new_value` - Value to fill with
/// * `neighborhood` - Which neighbors are connected
///
/// # Errors
///
/// Returns [`RegionError::InvalidSeed`] if the seed is out of bounds.
pub fn floodfill(
    mask: &mut BinaryVoxels,
    seed: Point3i,
    new_value: bool,
    neighborhood: &Neighborhood,
) -> RegionResult<usize> {
    let extent = mask.extent();
    if !extent.contains_point(seed) {
        return Err(RegionError::InvalidSeed(seed));
    }

    let old_value = !new_value;
    let seed_offset = extent.offset_of(seed);
    if mask.get_offset(seed_offset) != old_value {
        return Ok(0);
    }

    mask.set_offset(seed_offset, new_value);
    let mut filled = 1;
    let mut stack = vec![seed];

    while let Some(point) = stack.pop() {
        for (_, neighbor) in neighborhood.neighbors_of(point, extent) {
            let offset = extent.offset_of(neighbor);
            if mask.get_offset(offset) == old_value {
                mask.set_offset(offset, new_value);
                filled += 1;
                stack.push(neighbor);
            }
        }
    }

    Ok(filled)
}
