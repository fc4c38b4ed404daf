//! Watershed segmentation by rainfall simulation
//!
//! Implements the steepest-descent watershed of Yeong et al. (2009).
//! Every voxel drains to its lowest neighbor, plateaus are resolved so
//! that they drain through their lowest boundary, and each voxel is
//! labeled with the basin its drainage path ends in.
//!
//! The pipeline runs in stages over one label volume:
//!
//! 1. seeds, if given, are written as fixed component ids;
//! 2. a raster sweep gives every voxel a direction, a minimum marker, or
//!    resolves the plateau it belongs to;
//! 3. drainage chains are followed and compressed into component ids;
//! 4. one object is built per component.
//!
//! In minima mode the pipeline stops after stage 2 and returns the minima.
//!
//! # Examples
//!
//! ```
//! use voxseg_core::{Extent, Voxels};
//! use voxseg_region::watershed::{WatershedOptions, segment_watershed};
//!
//! let extent = Extent::new(5, 1, 1).unwrap();
//! let channel = Voxels::from_vec(extent, vec![5u8, 3, 3, 1, 4]).unwrap();
//! let objects = segment_watershed(&channel, None, None, &WatershedOptions::default()).unwrap();
//! assert_eq!(objects.len(), 1);
//! assert_eq!(objects.total_voxels(), 5);
//! ```

mod components;
mod encoded;
mod encoding;
mod landscape;
mod minima;
mod objects;
mod plateau;
mod seeds;
mod steepest;

pub use components::BoundingBoxMap;
pub use encoded::EncodedVoxels;
pub use encoding::{
    Cell, FIRST_COMPONENT, FIRST_DIRECTION, LAST_DIRECTION, MINIMUM, PLATEAU, TEMPORARY,
    UNVISITED, decode_direction, encode_direction,
};
pub use minima::MinimaStore;
pub use objects::objects_from_components;
pub use seeds::{mark_seeds, validate_seeds};

use crate::conncomp::ConnectivityType;
use crate::error::RegionResult;
use landscape::{Landscape, check_mask_extent};
use tracing::debug;
use voxseg_core::{BinaryVoxels, ObjectCollection, Voxels};

/// Options for watershed segmentation
#[derive(Debug, Clone)]
pub struct WatershedOptions {
    /// Which neighbors a voxel may drain to
    pub connectivity: ConnectivityType,
    /// Whether neighbors in adjacent z-slices are considered
    pub do_3d: bool,
    /// Stop after classification and return the minima instead of basins
    pub exit_with_minima: bool,
}

impl Default for WatershedOptions {
    fn default() -> Self {
        Self {
            connectivity: ConnectivityType::Vertex,
            do_3d: true,
            exit_with_minima: false,
        }
    }
}

impl WatershedOptions {
    /// Create new options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set connectivity type
    pub fn with_connectivity(mut self, connectivity: ConnectivityType) -> Self {
        self.connectivity = connectivity;
        self
    }

    /// Enable or disable neighbors across z-slices
    pub fn with_do_3d(mut self, do_3d: bool) -> Self {
        self.do_3d = do_3d;
        self
    }

    /// Return minima instead of basins
    pub fn with_exit_with_minima(mut self, exit_with_minima: bool) -> Self {
        self.exit_with_minima = exit_with_minima;
        self
    }
}

/// What a run of the pipeline produced
enum Segmentation {
    Minima(MinimaStore),
    Labeled {
        encoded: EncodedVoxels,
        boxes: BoundingBoxMap,
    },
}

/// Segment an intensity volume into watershed basins
///
/// Returns one object per basin. With `seeds`, every seed becomes a basin
/// (objects `0..seeds.len()` in seed order, unless a seed lies entirely
/// outside `mask`) and voxels draining into a seed join it. Voxels outside
/// `mask` belong to no object. With
/// [`exit_with_minima`](WatershedOptions::exit_with_minima) set, returns
/// one object per minimum instead.
///
/// # Errors
///
/// - [`RegionError::ExtentMismatch`](crate::RegionError::ExtentMismatch)
///   if `mask` and `channel` differ in extent
/// - seed errors from [`validate_seeds`]
/// - [`RegionError::SegmentationError`](crate::RegionError::SegmentationError)
///   if the drainage graph turns out inconsistent
pub fn segment_watershed<T: Copy + PartialOrd>(
    channel: &Voxels<T>,
    mask: Option<&BinaryVoxels>,
    seeds: Option<&ObjectCollection>,
    options: &WatershedOptions,
) -> RegionResult<ObjectCollection> {
    match run(channel, mask, seeds, options, options.exit_with_minima)? {
        Segmentation::Minima(store) => store.create_objects(),
        Segmentation::Labeled { encoded, boxes } => {
            let objects = objects_from_components(&encoded, &boxes);
            debug!(objects = objects.len(), "watershed objects built");
            Ok(objects)
        }
    }
}

/// Segment an intensity volume and return the label volume
///
/// Each voxel holds the id of its basin; voxels outside `mask` hold 0.
/// Seeds keep ids `1..=seeds.len()`. `exit_with_minima` is ignored.
///
/// # Errors
///
/// Same as [`segment_watershed`].
pub fn segment_watershed_labels<T: Copy + PartialOrd>(
    channel: &Voxels<T>,
    mask: Option<&BinaryVoxels>,
    seeds: Option<&ObjectCollection>,
    options: &WatershedOptions,
) -> RegionResult<Voxels<u32>> {
    match run(channel, mask, seeds, options, false)? {
        Segmentation::Labeled { encoded, .. } => Ok(encoded.into_labels()),
        Segmentation::Minima(_) => Ok(Voxels::new(channel.extent())),
    }
}

/// Find the local minima of an intensity volume
///
/// A minimum is either a single voxel with no lower or equal neighbor, or
/// a plateau with no lower neighbor; plateaus are returned whole.
///
/// # Errors
///
/// Same as [`segment_watershed`].
pub fn find_local_minima<T: Copy + PartialOrd>(
    channel: &Voxels<T>,
    mask: Option<&BinaryVoxels>,
    options: &WatershedOptions,
) -> RegionResult<ObjectCollection> {
    match run(channel, mask, None, options, true)? {
        Segmentation::Minima(store) => store.create_objects(),
        Segmentation::Labeled { .. } => Ok(ObjectCollection::new()),
    }
}

fn run<T: Copy + PartialOrd>(
    channel: &Voxels<T>,
    mask: Option<&BinaryVoxels>,
    seeds: Option<&ObjectCollection>,
    options: &WatershedOptions,
    exit_with_minima: bool,
) -> RegionResult<Segmentation> {
    let extent = channel.extent();
    if let Some(mask) = mask {
        check_mask_extent(extent, mask)?;
    }
    if let Some(seeds) = seeds {
        validate_seeds(seeds, extent, options.connectivity, options.do_3d)?;
    }

    let mut minima = exit_with_minima.then(MinimaStore::new);
    let mut encoded = EncodedVoxels::new(extent);

    if extent.is_empty() {
        debug!(%extent, "empty volume");
        return Ok(match minima {
            Some(store) => Segmentation::Minima(store),
            None => Segmentation::Labeled {
                encoded,
                boxes: BoundingBoxMap::new(),
            },
        });
    }

    let landscape = Landscape::new(channel, mask, options.connectivity, options.do_3d)?;

    let first_free_id = match seeds {
        Some(seeds) => {
            let next = mark_seeds(seeds, &mut encoded, landscape.mask(), minima.as_mut())?;
            debug!(seeds = seeds.len(), "seeds marked");
            next
        }
        None => 1,
    };

    let stats = steepest::point_voxels_or_mark_minima(&landscape, &mut encoded, minima.as_mut())?;
    debug!(
        %extent,
        minima = stats.minima,
        drained_plateaus = stats.drained_plateaus,
        flat_basins = stats.flat_basins,
        "voxels classified"
    );

    if let Some(store) = minima {
        return Ok(Segmentation::Minima(store));
    }

    let boxes = components::label_components(&landscape, &mut encoded, first_free_id)?;
    debug!(components = boxes.len(), "components labeled");
    Ok(Segmentation::Labeled { encoded, boxes })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RegionError;
    use voxseg_core::{Extent, ObjectMask, Point3i};

    fn row(values: &[u8]) -> Voxels<u8> {
        let extent = Extent::new(values.len() as i32, 1, 1).unwrap();
        Voxels::from_vec(extent, values.to_vec()).unwrap()
    }

    #[test]
    fn test_options_builder() {
        let options = WatershedOptions::new()
            .with_connectivity(ConnectivityType::Face)
            .with_do_3d(false)
            .with_exit_with_minima(true);
        assert_eq!(options.connectivity, ConnectivityType::Face);
        assert!(!options.do_3d);
        assert!(options.exit_with_minima);

        let default = WatershedOptions::default();
        assert_eq!(default.connectivity, ConnectivityType::Vertex);
        assert!(default.do_3d);
        assert!(!default.exit_with_minima);
    }

    #[test]
    fn test_single_basin_row() {
        let channel = row(&[5, 3, 3, 1, 4]);
        let objects =
            segment_watershed(&channel, None, None, &WatershedOptions::default()).unwrap();
        assert_eq!(objects.len(), 1);
        assert_eq!(objects.get(0).unwrap().num_voxels(), 5);
    }

    #[test]
    fn test_two_basins_row() {
        let channel = row(&[1, 4, 9, 4, 2, 6]);
        let options = WatershedOptions::new().with_do_3d(false);
        let labels = segment_watershed_labels(&channel, None, None, &options).unwrap();
        // The ridge at 9 drains left because 4 comes first in neighbor order
        assert_eq!(labels.data(), &[1, 1, 1, 2, 2, 2]);
    }

    #[test]
    fn test_minima_mode() {
        let channel = row(&[5, 3, 3, 1, 4]);
        let options = WatershedOptions::new().with_exit_with_minima(true);
        let minima = segment_watershed(&channel, None, None, &options).unwrap();
        assert_eq!(minima.len(), 1);
        let minimum = minima.get(0).unwrap();
        assert_eq!(minimum.num_voxels(), 1);
        assert!(minimum.contains(Point3i::new(3, 0, 0)));

        let same = find_local_minima(&channel, None, &WatershedOptions::default()).unwrap();
        assert_eq!(same, minima);
    }

    #[test]
    fn test_empty_volume() {
        let channel: Voxels<u8> = Voxels::new(Extent::new(0, 4, 1).unwrap());
        let objects =
            segment_watershed(&channel, None, None, &WatershedOptions::default()).unwrap();
        assert!(objects.is_empty());
        let minima = find_local_minima(&channel, None, &WatershedOptions::default()).unwrap();
        assert!(minima.is_empty());
    }

    #[test]
    fn test_mask_extent_mismatch() {
        let channel = row(&[1, 2, 3]);
        let mask = BinaryVoxels::filled(Extent::new(4, 1, 1).unwrap(), true);
        let result = segment_watershed(&channel, Some(&mask), None, &WatershedOptions::default());
        assert!(matches!(result, Err(RegionError::ExtentMismatch { .. })));
    }

    #[test]
    fn test_seed_becomes_basin() {
        let channel = row(&[3, 2, 1, 2, 3]);
        let seed = ObjectMask::from_points(&[Point3i::new(4, 0, 0)]).unwrap();
        let seeds: ObjectCollection = std::iter::once(seed).collect();
        let options = WatershedOptions::new().with_do_3d(false);

        let labels = segment_watershed_labels(&channel, None, Some(&seeds), &options).unwrap();
        // Voxel 3 touches the seed and drains into it regardless of intensity
        assert_eq!(labels.data(), &[2, 2, 2, 1, 1]);
    }
}
