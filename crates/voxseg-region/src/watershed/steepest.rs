//! Steepest-descent classification
//!
//! Sweeps the volume in raster order and gives every unvisited voxel a
//! code: a pointer to its steepest-descent neighbor, the minimum
//! sentinel, or (for voxels with an equal neighbor but none lower) the
//! plateau sentinel, after which the plateau is resolved on the spot.

use super::encoded::EncodedVoxels;
use super::landscape::Landscape;
use super::minima::MinimaStore;
use super::plateau::{PlateauOutcome, resolve_plateau};
use crate::error::RegionResult;
use voxseg_core::Point3i;

/// Where a voxel drains to, judged from its neighborhood alone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Steepest {
    /// A neighbor already holds a component id
    Seeded(Point3i),
    /// The lowest strictly-lower neighbor
    Lower(Point3i),
    /// No lower neighbor, at least one equal neighbor
    Plateau,
    /// No lower and no equal neighbor
    Minimum,
}

impl Steepest {
    /// Direction to follow, if the voxel can drain through a neighbor
    pub fn direction(self) -> Option<Point3i> {
        match self {
            Steepest::Seeded(d) | Steepest::Lower(d) => Some(d),
            Steepest::Plateau | Steepest::Minimum => None,
        }
    }
}

/// Find the steepest-descent neighbor of `point`
///
/// A seeded neighbor beats any intensity-based candidate. Among several
/// seeded neighbors, or several equally low ones, the first in
/// neighborhood order wins.
pub(crate) fn find_steepest<T: Copy + PartialOrd>(
    landscape: &Landscape<'_, T>,
    encoded: &EncodedVoxels,
    point: Point3i,
    offset: usize,
) -> Steepest {
    let value = landscape.intensity(offset);
    let mut lowest: Option<(Point3i, T)> = None;
    let mut has_equal = false;

    for (direction, _, neighbor_offset) in landscape.neighbors(point) {
        if encoded.is_component(neighbor_offset) {
            return Steepest::Seeded(direction);
        }
        let neighbor_value = landscape.intensity(neighbor_offset);
        if neighbor_value < value {
            let is_lower = match lowest {
                Some((_, lowest_value)) => neighbor_value < lowest_value,
                None => true,
            };
            if is_lower {
                lowest = Some((direction, neighbor_value));
            }
        } else if neighbor_value == value {
            has_equal = true;
        }
    }

    match lowest {
        Some((direction, _)) => Steepest::Lower(direction),
        None if has_equal => Steepest::Plateau,
        None => Steepest::Minimum,
    }
}

/// Counts gathered by [`point_voxels_or_mark_minima`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct SweepStats {
    /// Single-voxel minima
    pub minima: usize,
    /// Plateaus that drained through an edge
    pub drained_plateaus: usize,
    /// Plateaus without any edge, each now one minimum
    pub flat_basins: usize,
}

/// Classify every unvisited participating voxel
///
/// Voxels that already hold a component id (seeds), or that were
/// resolved as part of an earlier plateau, are skipped.
pub(crate) fn point_voxels_or_mark_minima<T: Copy + PartialOrd>(
    landscape: &Landscape<'_, T>,
    encoded: &mut EncodedVoxels,
    mut minima: Option<&mut MinimaStore>,
) -> RegionResult<SweepStats> {
    let extent = landscape.extent();
    let mut stats = SweepStats::default();

    for offset in 0..extent.calculate_volume() {
        if !landscape.participates(offset) || !encoded.is_unvisited(offset) {
            continue;
        }
        let point = extent.point_from_offset(offset);

        match find_steepest(landscape, encoded, point, offset) {
            Steepest::Seeded(direction) | Steepest::Lower(direction) => {
                encoded.set_direction(offset, direction);
            }
            Steepest::Minimum => {
                encoded.mark_minimum(offset);
                if let Some(store) = minima.as_deref_mut() {
                    store.add_point(point);
                }
                stats.minima += 1;
            }
            Steepest::Plateau => {
                encoded.mark_plateau(offset);
                match resolve_plateau(landscape, encoded, point, minima.as_deref_mut())? {
                    PlateauOutcome::Drained => stats.drained_plateaus += 1,
                    PlateauOutcome::Minimum => stats.flat_basins += 1,
                }
            }
        }
    }

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conncomp::ConnectivityType;
    use crate::watershed::encoding::Cell;
    use crate::watershed::seeds::mark_seeds;
    use voxseg_core::{BinaryVoxels, Extent, ObjectCollection, ObjectMask, Voxels};
    use voxseg_test::LcgRng;

    fn row(values: &[u8]) -> Voxels<u8> {
        let extent = Extent::new(values.len() as i32, 1, 1).unwrap();
        Voxels::from_vec(extent, values.to_vec()).unwrap()
    }

    #[test]
    fn test_find_steepest_picks_lowest() {
        let channel = row(&[1, 5, 3]);
        let landscape = Landscape::new(&channel, None, ConnectivityType::Vertex, false).unwrap();
        let encoded = EncodedVoxels::new(channel.extent());
        assert_eq!(
            find_steepest(&landscape, &encoded, Point3i::new(1, 0, 0), 1),
            Steepest::Lower(Point3i::new(-1, 0, 0))
        );
        assert_eq!(
            find_steepest(&landscape, &encoded, Point3i::new(0, 0, 0), 0),
            Steepest::Minimum
        );
    }

    #[test]
    fn test_find_steepest_tie_uses_neighbor_order() {
        let channel = row(&[2, 5, 2]);
        let landscape = Landscape::new(&channel, None, ConnectivityType::Vertex, false).unwrap();
        let encoded = EncodedVoxels::new(channel.extent());
        // (-1, 0, 0) comes before (1, 0, 0)
        assert_eq!(
            find_steepest(&landscape, &encoded, Point3i::new(1, 0, 0), 1),
            Steepest::Lower(Point3i::new(-1, 0, 0))
        );
    }

    #[test]
    fn test_find_steepest_plateau() {
        let channel = row(&[4, 4, 6]);
        let landscape = Landscape::new(&channel, None, ConnectivityType::Vertex, false).unwrap();
        let encoded = EncodedVoxels::new(channel.extent());
        assert_eq!(
            find_steepest(&landscape, &encoded, Point3i::new(0, 0, 0), 0),
            Steepest::Plateau
        );
    }

    #[test]
    fn test_find_steepest_seed_wins() {
        let channel = row(&[0, 5, 9]);
        let landscape = Landscape::new(&channel, None, ConnectivityType::Vertex, false).unwrap();
        let mut encoded = EncodedVoxels::new(channel.extent());
        encoded.set_component(2, 1);
        assert_eq!(
            find_steepest(&landscape, &encoded, Point3i::new(1, 0, 0), 1),
            Steepest::Seeded(Point3i::new(1, 0, 0))
        );
    }

    #[test]
    fn test_find_steepest_ignores_masked_neighbors() {
        let channel = row(&[0, 5, 9]);
        let mask = channel.map(|v| v > 0);
        let vertex = ConnectivityType::Vertex;
        let landscape = Landscape::new(&channel, Some(&mask), vertex, false).unwrap();
        let encoded = EncodedVoxels::new(channel.extent());
        assert_eq!(
            find_steepest(&landscape, &encoded, Point3i::new(1, 0, 0), 1),
            Steepest::Minimum
        );
    }

    #[test]
    fn test_sweep_codes() {
        let channel = row(&[5, 3, 3, 1, 4]);
        let landscape = Landscape::new(&channel, None, ConnectivityType::Vertex, false).unwrap();
        let mut encoded = EncodedVoxels::new(channel.extent());
        let mut store = MinimaStore::new();

        let stats = point_voxels_or_mark_minima(&landscape, &mut encoded, Some(&mut store));
        let stats = stats.unwrap();
        assert_eq!(stats.minima, 1);
        assert_eq!(stats.flat_basins, 0);
        assert_eq!(store.len(), 1);
        assert_eq!(store.iter().next().unwrap(), &[Point3i::new(3, 0, 0)]);

        let right = Cell::Direction(Point3i::new(1, 0, 0));
        let left = Cell::Direction(Point3i::new(-1, 0, 0));
        assert_eq!(encoded.cell(0), right);
        assert_eq!(encoded.cell(1), right);
        assert_eq!(encoded.cell(2), right);
        assert_eq!(encoded.cell(3), Cell::Minimum);
        assert_eq!(encoded.cell(4), left);
    }

    #[test]
    fn test_sweep_bowl_points_inward() {
        let centre = Point3i::new(3, 3, 3);
        let squared = |p: Point3i| {
            let d = p - centre;
            d.x * d.x + d.y * d.y + d.z * d.z
        };
        let extent = Extent::new(7, 7, 7).unwrap();
        let mut bowl: Voxels<u16> = Voxels::new(extent);
        for point in extent.iter_points() {
            bowl.set_point(point, squared(point) as u16).unwrap();
        }

        for connectivity in [
            ConnectivityType::Face,
            ConnectivityType::Edge,
            ConnectivityType::Vertex,
        ] {
            let landscape = Landscape::new(&bowl, None, connectivity, true).unwrap();
            let mut encoded = EncodedVoxels::new(extent);
            let stats = point_voxels_or_mark_minima(&landscape, &mut encoded, None).unwrap();
            assert_eq!(stats.minima, 1);
            assert_eq!(stats.drained_plateaus + stats.flat_basins, 0);

            for point in extent.iter_points() {
                match encoded.cell(extent.offset_of(point)) {
                    Cell::Minimum => assert_eq!(point, centre),
                    Cell::Direction(d) => {
                        assert!(squared(point + d) < squared(point), "{point:?} -> {d:?}");
                    }
                    other => panic!("{point:?} left as {other:?}"),
                }
            }
        }
    }

    #[test]
    fn test_sweep_never_climbs() {
        let mut rng = LcgRng::new(20_091_231);
        let extent = Extent::new(6, 5, 4).unwrap();

        for round in 0..24 {
            let channel = rng.volume(extent, 4);
            let mask: BinaryVoxels = rng.volume(extent, 5).map(|v| v > 0);
            let connectivity = match round % 3 {
                0 => ConnectivityType::Face,
                1 => ConnectivityType::Edge,
                _ => ConnectivityType::Vertex,
            };
            let do_3d = round % 2 == 0;
            let landscape = Landscape::new(&channel, Some(&mask), connectivity, do_3d).unwrap();
            let mut encoded = EncodedVoxels::new(extent);

            if round % 4 < 2 {
                let first = Point3i::new(1, 1, 1);
                let second = Point3i::new(4, 3, 2);
                let seeds: ObjectCollection = [first, second]
                    .iter()
                    .map(|&p| ObjectMask::from_points(&[p]).unwrap())
                    .collect();
                mark_seeds(&seeds, &mut encoded, Some(&mask), None).unwrap();
            }

            point_voxels_or_mark_minima(&landscape, &mut encoded, None).unwrap();

            for offset in 0..extent.calculate_volume() {
                if !landscape.participates(offset) {
                    assert!(encoded.is_unvisited(offset));
                    continue;
                }
                let point = extent.point_from_offset(offset);
                match encoded.cell(offset) {
                    Cell::Minimum | Cell::Component(_) => {}
                    Cell::Direction(d) => {
                        let target = point + d;
                        assert!(extent.contains_point(target));
                        let target_offset = extent.offset_of(target);
                        assert!(landscape.participates(target_offset));
                        if !do_3d {
                            assert_eq!(d.z, 0);
                        }
                        let there = channel.get_offset(target_offset);
                        let downhill = there <= channel.get_offset(offset);
                        let seeded = encoded.is_component(target_offset);
                        assert!(downhill || seeded, "round {round}: {point:?} climbs");
                    }
                    other => panic!("round {round}: {point:?} left as {other:?}"),
                }
            }
        }
    }
}
