//! Turn a labeled volume into one object per component

use super::components::BoundingBoxMap;
use super::encoded::EncodedVoxels;
use voxseg_core::{ObjectCollection, ObjectMask};

/// Build one object per id in `boxes`, in ascending id order
///
/// Each mask is sized to its id's box and set wherever the label volume
/// holds that id.
pub fn objects_from_components(
    encoded: &EncodedVoxels,
    boxes: &BoundingBoxMap,
) -> ObjectCollection {
    let extent = encoded.extent();
    let mut objects = ObjectCollection::with_capacity(boxes.len());

    for (id, bbox) in boxes.iter() {
        let mut object = ObjectMask::new(bbox);
        let mask = object.voxels_mut();
        for (local, point) in bbox.iter_points().enumerate() {
            if encoded.component_id(extent.offset_of(point)) == Some(id) {
                mask.set_offset(local, true);
            }
        }
        objects.push(object);
    }

    objects
}

#[cfg(test)]
mod tests {
    use super::*;
    use voxseg_core::{Extent, Point3i};

    #[test]
    fn test_objects_from_components() {
        // 4x2 labels:
        //   1 1 2 2
        //   1 2 2 2
        let extent = Extent::new(4, 2, 1).unwrap();
        let mut encoded = EncodedVoxels::new(extent);
        let mut boxes = BoundingBoxMap::new();
        for (offset, id) in [1, 1, 2, 2, 1, 2, 2, 2].into_iter().enumerate() {
            encoded.set_component(offset, id);
            boxes.add(id, extent.point_from_offset(offset));
        }

        let objects = objects_from_components(&encoded, &boxes);
        assert_eq!(objects.len(), 2);

        let first = objects.get(0).unwrap();
        assert_eq!(first.num_voxels(), 3);
        assert_eq!(first.bounding_box().extent(), Extent::new(2, 2, 1).unwrap());
        assert!(!first.contains(Point3i::new(1, 1, 0)));

        let second = objects.get(1).unwrap();
        assert_eq!(second.num_voxels(), 5);
        assert_eq!(second.bounding_box().corner(), Point3i::new(1, 0, 0));
        assert_eq!(objects.total_voxels(), 8);
    }
}
