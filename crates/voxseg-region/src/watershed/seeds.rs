//! Seed marking
//!
//! Seeds are caller-supplied regions that become basins of their own.
//! Each seed gets a component id (1, 2, ... in input order) written
//! straight into the label volume, so the classifier points neighboring
//! voxels at the seed instead of forming new minima.

use super::encoded::EncodedVoxels;
use super::landscape::check_mask_extent;
use super::minima::MinimaStore;
use crate::conncomp::{ConnectivityType, count_object_components};
use crate::error::{RegionError, RegionResult};
use voxseg_core::{BinaryVoxels, BoundingBox, Extent, ObjectCollection};

/// Check seeds before any of them is written
///
/// # Errors
///
/// - [`RegionError::SeedOutsideVolume`] if a seed's box leaves the volume
/// - [`RegionError::SeedNotConnected`] if a seed is empty or falls apart
///   into several components under `connectivity`
/// - [`RegionError::SeedsOverlap`] if two seeds share a voxel
pub fn validate_seeds(
    seeds: &ObjectCollection,
    extent: Extent,
    connectivity: ConnectivityType,
    do_3d: bool,
) -> RegionResult<()> {
    let volume_box = BoundingBox::from_extent(extent);
    let mut occupied = BinaryVoxels::new(extent);

    for (index, seed) in seeds.iter().enumerate() {
        if extent.is_empty() || !volume_box.contains_box(&seed.bounding_box()) {
            return Err(RegionError::SeedOutsideVolume { index, extent });
        }

        let components = count_object_components(seed, connectivity, do_3d);
        if components != 1 {
            return Err(RegionError::SeedNotConnected { index, components });
        }

        for point in seed.iter_points() {
            let offset = extent.offset_of(point);
            if occupied.get_offset(offset) {
                return Err(RegionError::SeedsOverlap { index, point });
            }
            occupied.set_offset(offset, true);
        }
    }

    Ok(())
}

/// Write a component id into every voxel of every seed
///
/// Seed voxels outside `mask` are left alone. Returns the first id not
/// used by a seed. Seeds must already have passed [`validate_seeds`].
///
/// # Errors
///
/// Returns [`RegionError::ExtentMismatch`] if the mask and the label
/// volume differ in extent; nothing is written in that case.
pub fn mark_seeds(
    seeds: &ObjectCollection,
    encoded: &mut EncodedVoxels,
    mask: Option<&BinaryVoxels>,
    mut minima: Option<&mut MinimaStore>,
) -> RegionResult<u32> {
    let extent = encoded.extent();
    if let Some(mask) = mask {
        check_mask_extent(extent, mask)?;
    }

    let mut next_id = 1u32;
    for seed in seeds {
        let id = next_id;
        next_id += 1;

        let mut points = Vec::with_capacity(seed.num_voxels());
        for point in seed.iter_points() {
            let offset = extent.offset_of(point);
            if mask.is_none_or(|m| m.get_offset(offset)) {
                encoded.set_component(offset, id);
                points.push(point);
            }
        }

        if let Some(store) = minima.as_deref_mut() {
            if !points.is_empty() {
                store.add(points);
            }
        }
    }

    Ok(next_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use voxseg_core::{ObjectMask, Point3i};

    fn seeds(groups: &[&[(i32, i32, i32)]]) -> ObjectCollection {
        groups
            .iter()
            .map(|points| {
                let points: Vec<Point3i> = points.iter().map(|&p| p.into()).collect();
                ObjectMask::from_points(&points).unwrap()
            })
            .collect()
    }

    #[test]
    fn test_validate_accepts_disjoint_connected_seeds() {
        let extent = Extent::new(10, 10, 1).unwrap();
        let s = seeds(&[&[(1, 1, 0), (2, 1, 0)], &[(8, 8, 0)]]);
        let result = validate_seeds(&s, extent, ConnectivityType::Vertex, false);
        assert!(result.is_ok());
    }

    #[test]
    fn test_validate_rejects_disconnected_seed() {
        let extent = Extent::new(10, 10, 1).unwrap();
        let s = seeds(&[&[(1, 1, 0), (5, 1, 0)]]);
        let err = validate_seeds(&s, extent, ConnectivityType::Vertex, false).unwrap_err();
        assert!(matches!(
            err,
            RegionError::SeedNotConnected {
                index: 0,
                components: 2
            }
        ));
    }

    #[test]
    fn test_validate_connectivity_matters() {
        let extent = Extent::new(10, 10, 1).unwrap();
        let s = seeds(&[&[(1, 1, 0), (2, 2, 0)]]);
        let vertex = validate_seeds(&s, extent, ConnectivityType::Vertex, false);
        assert!(vertex.is_ok());
        let face = validate_seeds(&s, extent, ConnectivityType::Face, false);
        assert!(face.is_err());
    }

    #[test]
    fn test_validate_rejects_outside_and_overlap() {
        let extent = Extent::new(5, 5, 1).unwrap();
        let outside = seeds(&[&[(4, 4, 0), (5, 4, 0)]]);
        assert!(matches!(
            validate_seeds(&outside, extent, ConnectivityType::Vertex, false),
            Err(RegionError::SeedOutsideVolume { index: 0, .. })
        ));

        let overlap = seeds(&[&[(1, 1, 0), (2, 1, 0)], &[(2, 1, 0), (3, 1, 0)]]);
        assert!(matches!(
            validate_seeds(&overlap, extent, ConnectivityType::Vertex, false),
            Err(RegionError::SeedsOverlap { index: 1, .. })
        ));
    }

    #[test]
    fn test_mark_seeds_assigns_ids() {
        let extent = Extent::new(5, 1, 1).unwrap();
        let mut encoded = EncodedVoxels::new(extent);
        let mut store = MinimaStore::new();
        let s = seeds(&[&[(0, 0, 0), (1, 0, 0)], &[(4, 0, 0)]]);

        let next = mark_seeds(&s, &mut encoded, None, Some(&mut store)).unwrap();
        assert_eq!(next, 3);
        assert_eq!(encoded.component_id(0), Some(1));
        assert_eq!(encoded.component_id(1), Some(1));
        assert_eq!(encoded.component_id(2), None);
        assert_eq!(encoded.component_id(4), Some(2));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_mark_seeds_respects_mask() {
        let extent = Extent::new(3, 1, 1).unwrap();
        let mut encoded = EncodedVoxels::new(extent);
        let mut mask = BinaryVoxels::filled(extent, true);
        mask.set(1, 0, 0, false).unwrap();
        let s = seeds(&[&[(0, 0, 0), (1, 0, 0), (2, 0, 0)]]);

        mark_seeds(&s, &mut encoded, Some(&mask), None).unwrap();
        assert_eq!(encoded.component_id(0), Some(1));
        assert!(encoded.is_unvisited(1));
        assert_eq!(encoded.component_id(2), Some(1));
    }

    #[test]
    fn test_mark_seeds_mask_extent_mismatch() {
        let mut encoded = EncodedVoxels::new(Extent::new(3, 1, 1).unwrap());
        let mask = BinaryVoxels::new(Extent::new(4, 1, 1).unwrap());
        let s = seeds(&[&[(0, 0, 0)]]);

        let result = mark_seeds(&s, &mut encoded, Some(&mask), None);
        assert!(matches!(result, Err(RegionError::ExtentMismatch { .. })));
        assert!(encoded.is_unvisited(0));
    }
}
