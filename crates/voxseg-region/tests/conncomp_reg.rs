//! Connectivity regression test
//!
//! Counts components and flood-fills binary volumes under every
//! neighborhood, in 2D and 3D.
//!
//! Run with:
//! ```text
//! cargo test -p voxseg-region --test conncomp_reg
//! ```

use voxseg_core::{BinaryVoxels, Extent, ObjectMask, Point3i};
use voxseg_region::{
    ConnectivityType, Neighborhood, count_components, floodfill, is_single_component,
};
use voxseg_test::RegParams;

/// Three voxels touching pairwise by a face, an edge and a vertex
fn chain_volume() -> BinaryVoxels {
    let mut mask = BinaryVoxels::new(Extent::new(4, 4, 4).unwrap());
    mask.set(0, 0, 0, true).unwrap();
    mask.set(1, 0, 0, true).unwrap(); // face with (0,0,0)
    mask.set(2, 1, 0, true).unwrap(); // edge with (1,0,0)
    mask.set(3, 2, 1, true).unwrap(); // vertex with (2,1,0)
    mask
}

#[test]
fn conncomp_reg() {
    let mut rp = RegParams::new("conncomp");
    let mask = chain_volume();

    for (connectivity, expected) in [
        (ConnectivityType::Face, 3.0),
        (ConnectivityType::Edge, 2.0),
        (ConnectivityType::Vertex, 1.0),
    ] {
        let count = count_components(&mask, connectivity, true);
        rp.compare_values(expected, count as f64, 0.0);
    }

    // In 2D the voxel in slice 1 is always on its own
    let count = count_components(&mask, ConnectivityType::Vertex, false);
    rp.compare_values(2.0, count as f64, 0.0);

    // Counting leaves the input untouched
    rp.compare_values(4.0, mask.count_on() as f64, 0.0);

    let points: Vec<Point3i> = mask
        .extent()
        .iter_points()
        .filter(|&p| mask.get_point(p).unwrap_or(false))
        .collect();
    let object = ObjectMask::from_points(&points).unwrap();
    rp.compare_values(
        1.0,
        is_single_component(&object, ConnectivityType::Vertex, true) as u8 as f64,
        0.0,
    );
    rp.compare_values(
        0.0,
        is_single_component(&object, ConnectivityType::Edge, true) as u8 as f64,
        0.0,
    );

    assert!(rp.cleanup());
}

#[test]
fn floodfill_reg() {
    let mut rp = RegParams::new("floodfill");

    // A hollow 5x5x5 shell with a 3x3x3 cavity
    let extent = Extent::new(5, 5, 5).unwrap();
    let mut shell = BinaryVoxels::new(extent);
    for p in extent.iter_points() {
        let inside = (1..4).contains(&p.x) && (1..4).contains(&p.y) && (1..4).contains(&p.z);
        shell.set_point(p, !inside).unwrap();
    }

    // Filling the cavity reaches exactly its 27 voxels
    let mut filled = shell.clone();
    let n = Neighborhood::new(ConnectivityType::Vertex, true);
    let count = floodfill(&mut filled, Point3i::new(2, 2, 2), true, &n).unwrap();
    rp.compare_values(27.0, count as f64, 0.0);
    rp.compare_values(125.0, filled.count_on() as f64, 0.0);

    // Filling an already-set voxel is a no-op
    let count = floodfill(&mut filled, Point3i::new(0, 0, 0), true, &n).unwrap();
    rp.compare_values(0.0, count as f64, 0.0);

    // Clearing the shell in 2D only clears one slice
    let mut cleared = shell.clone();
    let flat = Neighborhood::new(ConnectivityType::Face, false);
    let count = floodfill(&mut cleared, Point3i::new(0, 0, 2), false, &flat).unwrap();
    rp.compare_values(16.0, count as f64, 0.0);

    // Seeds outside the volume are rejected
    let result = floodfill(&mut cleared, Point3i::new(5, 0, 0), true, &n);
    rp.compare_values(1.0, result.is_err() as u8 as f64, 0.0);

    assert!(rp.cleanup());
}
