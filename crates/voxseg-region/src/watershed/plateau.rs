//! Plateau resolution
//!
//! A plateau is a maximal connected set of equal-intensity voxels. Its
//! voxels are split into *edge* points, which have a lower or seeded
//! neighbor and drain through it, and *inner* points, which do not.
//! Resolution gives every plateau voxel a direction code:
//!
//! - edge points keep their steepest-descent direction;
//! - inner points are reached by a breadth-first flood from the edge,
//!   each pointing back at the voxel that reached it, so every path
//!   leaves the plateau in at most its diameter;
//! - a plateau with no edge at all is a flat basin: its first point in
//!   raster order becomes the single minimum and the flood starts there.

use super::encoded::EncodedVoxels;
use super::encoding::Cell;
use super::landscape::Landscape;
use super::minima::MinimaStore;
use super::steepest::find_steepest;
use crate::error::{RegionError, RegionResult};
use std::collections::VecDeque;
use tracing::trace;
use voxseg_core::Point3i;

/// How a plateau was resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PlateauOutcome {
    /// At least one edge point; every voxel drains out of the plateau
    Drained,
    /// No edge point; the plateau is one minimum
    Minimum,
}

/// The voxels of one plateau, split by whether they can drain directly
#[derive(Debug, Default)]
pub(crate) struct EqualVoxelsPlateau {
    /// Points with a lower or seeded neighbor, and the direction to it
    edge: Vec<(Point3i, Point3i)>,
    /// Points with neither
    inner: Vec<Point3i>,
}

impl EqualVoxelsPlateau {
    pub fn len(&self) -> usize {
        self.edge.len() + self.inner.len()
    }

    pub fn has_edge(&self) -> bool {
        !self.edge.is_empty()
    }

    pub fn has_inner(&self) -> bool {
        !self.inner.is_empty()
    }
}

/// Gather the plateau containing `start`, marking its voxels temporary
///
/// Traverses equal-intensity neighbors that are not yet final (unvisited,
/// plateau or direction-coded). Seeded voxels and minima stop the fill.
pub(crate) fn collect_plateau<T: Copy + PartialOrd>(
    landscape: &Landscape<'_, T>,
    encoded: &mut EncodedVoxels,
    start: Point3i,
) -> EqualVoxelsPlateau {
    let extent = landscape.extent();
    let start_offset = extent.offset_of(start);
    let value = landscape.intensity(start_offset);

    let mut plateau = EqualVoxelsPlateau::default();
    encoded.mark_temporary(start_offset);
    let mut stack = vec![start];

    while let Some(point) = stack.pop() {
        let offset = extent.offset_of(point);
        match find_steepest(landscape, encoded, point, offset).direction() {
            Some(direction) => plateau.edge.push((point, direction)),
            None => plateau.inner.push(point),
        }

        for (_, neighbor, neighbor_offset) in landscape.neighbors(point) {
            if landscape.intensity(neighbor_offset) != value {
                continue;
            }
            if matches!(
                encoded.cell(neighbor_offset),
                Cell::Unvisited | Cell::Plateau | Cell::Direction(_)
            ) {
                encoded.mark_temporary(neighbor_offset);
                stack.push(neighbor);
            }
        }
    }

    plateau
}

/// Resolve the plateau containing `start`
///
/// `start` must be marked as plateau. A flat basin is registered in
/// `minima` as one minimum holding all of its points.
///
/// # Errors
///
/// Returns [`RegionError::SegmentationError`] if a plateau voxel is left
/// without a direction.
pub(crate) fn resolve_plateau<T: Copy + PartialOrd>(
    landscape: &Landscape<'_, T>,
    encoded: &mut EncodedVoxels,
    start: Point3i,
    minima: Option<&mut MinimaStore>,
) -> RegionResult<PlateauOutcome> {
    let extent = landscape.extent();
    let plateau = collect_plateau(landscape, encoded, start);

    for &(point, direction) in &plateau.edge {
        encoded.set_direction(extent.offset_of(point), direction);
    }

    if !plateau.has_inner() {
        trace!(size = plateau.len(), "plateau drained by edges only");
        return Ok(PlateauOutcome::Drained);
    }

    let (sources, outcome) = if plateau.has_edge() {
        let sources: Vec<Point3i> = plateau.edge.iter().map(|&(point, _)| point).collect();
        (sources, PlateauOutcome::Drained)
    } else {
        let representative = plateau
            .inner
            .iter()
            .copied()
            .min_by_key(Point3i::raster_key)
            .unwrap_or(start);
        encoded.mark_minimum(extent.offset_of(representative));
        if let Some(store) = minima {
            let mut points = plateau.inner.clone();
            points.sort_by_key(Point3i::raster_key);
            store.add(points);
        }
        (vec![representative], PlateauOutcome::Minimum)
    };

    let expected = plateau.len() - sources.len();
    let resolved = flood_from(landscape, encoded, sources);
    if resolved != expected {
        return Err(RegionError::SegmentationError(format!(
            "plateau at ({}, {}, {}) left {} of {} points unresolved",
            start.x,
            start.y,
            start.z,
            expected.saturating_sub(resolved),
            plateau.len()
        )));
    }

    trace!(
        size = plateau.len(),
        edge = plateau.edge.len(),
        ?outcome,
        "plateau resolved"
    );
    Ok(outcome)
}

/// Breadth-first flood over temporary voxels from already-resolved points
///
/// Each temporary neighbor reached is pointed at the voxel it was reached
/// from. Returns the number of voxels resolved.
fn flood_from<T: Copy + PartialOrd>(
    landscape: &Landscape<'_, T>,
    encoded: &mut EncodedVoxels,
    sources: Vec<Point3i>,
) -> usize {
    let mut queue: VecDeque<Point3i> = sources.into();
    let mut resolved = 0;

    while let Some(point) = queue.pop_front() {
        for (direction, neighbor, neighbor_offset) in landscape.neighbors(point) {
            if encoded.is_temporary(neighbor_offset) {
                encoded.set_direction(neighbor_offset, -direction);
                resolved += 1;
                queue.push_back(neighbor);
            }
        }
    }

    resolved
}
