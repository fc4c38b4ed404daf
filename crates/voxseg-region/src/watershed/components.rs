//! Connected-component labeling by chain following
//!
//! After classification every participating voxel either holds a
//! component id (seeds) or starts a chain of direction codes ending at a
//! minimum or at a labeled voxel. Following each chain once and writing
//! the terminal id along the whole path leaves every voxel labeled, and
//! later chains stop as soon as they reach an already labeled voxel.

use super::encoded::EncodedVoxels;
use super::encoding::Cell;
use super::landscape::Landscape;
use crate::error::{RegionError, RegionResult};
use std::collections::HashMap;
use voxseg_core::{BoundingBox, Point3i, PointRange};

/// Bounding box accumulator per component id
///
/// Ranges live in an arena indexed by first-observation order; the map
/// only translates a component id to its arena slot.
#[derive(Debug, Clone, Default)]
pub struct BoundingBoxMap {
    index_by_id: HashMap<u32, usize>,
    ids: Vec<u32>,
    ranges: Vec<PointRange>,
}

impl BoundingBoxMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Extend the box of `id` to cover `point`
    pub fn add(&mut self, id: u32, point: Point3i) {
        let index = match self.index_by_id.get(&id) {
            Some(&index) => index,
            None => {
                let index = self.ranges.len();
                self.index_by_id.insert(id, index);
                self.ids.push(id);
                self.ranges.push(PointRange::new());
                index
            }
        };
        self.ranges[index].add(point);
    }

    /// Number of distinct ids observed
    #[inline]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Box of one id, if it has been observed
    pub fn get(&self, id: u32) -> Option<BoundingBox> {
        self.index_by_id
            .get(&id)
            .and_then(|&index| self.ranges[index].to_bounding_box())
    }

    /// `(id, box)` pairs in ascending id order
    pub fn iter(&self) -> impl Iterator<Item = (u32, BoundingBox)> + '_ {
        let mut order: Vec<usize> = (0..self.ids.len()).collect();
        order.sort_unstable_by_key(|&index| self.ids[index]);
        order.into_iter().filter_map(move |index| {
            self.ranges[index]
                .to_bounding_box()
                .map(|bbox| (self.ids[index], bbox))
        })
    }
}

/// Label every participating voxel with the id of the basin it drains to
///
/// Minima are given ids starting at `first_free_id`, in the order their
/// chains are first followed. Returns the box of every id seen.
///
/// # Errors
///
/// Returns [`RegionError::SegmentationError`] if a chain is longer than
/// the volume, leaves the volume, or reaches a voxel that was never
/// classified.
pub(crate) fn label_components<T: Copy + PartialOrd>(
    landscape: &Landscape<'_, T>,
    encoded: &mut EncodedVoxels,
    first_free_id: u32,
) -> RegionResult<BoundingBoxMap> {
    let extent = landscape.extent();
    let volume = extent.calculate_volume();
    let mut boxes = BoundingBoxMap::new();
    let mut next_id = first_free_id;
    let mut path = Vec::new();

    for offset in 0..volume {
        if !landscape.participates(offset) {
            continue;
        }
        if let Some(id) = encoded.component_id(offset) {
            boxes.add(id, extent.point_from_offset(offset));
            continue;
        }

        path.clear();
        let mut current = offset;
        let id = loop {
            match encoded.cell(current) {
                Cell::Component(id) => break id,
                Cell::Minimum => {
                    path.push(current);
                    let id = next_id;
                    next_id += 1;
                    break id;
                }
                Cell::Direction(direction) => {
                    path.push(current);
                    if path.len() > volume {
                        return Err(chain_error("cycle", extent.point_from_offset(offset)));
                    }
                    let next = extent.point_from_offset(current) + direction;
                    if !extent.contains_point(next) {
                        return Err(chain_error("direction leaves the volume", next));
                    }
                    current = extent.offset_of(next);
                }
                Cell::Unvisited | Cell::Temporary | Cell::Plateau => {
                    return Err(chain_error(
                        "chain reaches an unclassified voxel",
                        extent.point_from_offset(current),
                    ));
                }
            }
        };

        for &visited in &path {
            encoded.set_component(visited, id);
            boxes.add(id, extent.point_from_offset(visited));
        }
    }

    Ok(boxes)
}

fn chain_error(reason: &str, at: Point3i) -> RegionError {
    RegionError::SegmentationError(format!("{reason} at ({}, {}, {})", at.x, at.y, at.z))
}
