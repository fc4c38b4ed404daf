//! Per-voxel watershed codes
//!
//! Every cell of the label volume holds one `u32` code:
//!
//! | Code                         | Meaning                                   |
//! |------------------------------|-------------------------------------------|
//! | [`UNVISITED`]                | not yet classified                        |
//! | [`TEMPORARY`]                | visited by the current plateau flood-fill |
//! | [`PLATEAU`]                  | classified as plateau, not yet resolved   |
//! | [`MINIMUM`]                  | terminal of a drainage chain              |
//! | [`FIRST_DIRECTION`]`..=`[`LAST_DIRECTION`] | pointer to one of 26 neighbors |
//! | [`FIRST_COMPONENT`]`..`      | connected-component id, starting at 1     |
//!
//! Direction codes follow the neighbor order of
//! [`Neighborhood`](crate::conncomp::Neighborhood): z-major, then y, then
//! x, each from -1 to +1. Comparing codes therefore compares positions in
//! that order.

use voxseg_core::Point3i;

/// Cell not yet classified
pub const UNVISITED: u32 = 0;
/// Cell visited by the plateau flood-fill in progress
pub const TEMPORARY: u32 = 1;
/// Cell waiting for plateau resolution
pub const PLATEAU: u32 = 2;
/// Cell where a drainage chain ends
pub const MINIMUM: u32 = 3;
/// Smallest direction code, the offset (-1, -1, -1)
pub const FIRST_DIRECTION: u32 = 4;
/// Largest direction code, the offset (1, 1, 1)
pub const LAST_DIRECTION: u32 = FIRST_DIRECTION + 25;
/// Code of connected-component id 1
pub const FIRST_COMPONENT: u32 = LAST_DIRECTION + 1;

/// Index of the (0, 0, 0) offset in the 3x3x3 cube
const CENTRE_INDEX: u32 = 13;

/// Decoded view of a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Unvisited,
    Temporary,
    Plateau,
    Minimum,
    /// Points at the neighbor `point + offset`
    Direction(Point3i),
    /// Final basin id (>= 1)
    Component(u32),
}

/// Encode a unit neighbor offset as a direction code
///
/// Each component of `offset` must be -1, 0 or 1, and not all zero;
/// this is checked in debug builds only.
pub fn encode_direction(offset: Point3i) -> u32 {
    debug_assert!(
        (-1..=1).contains(&offset.x)
            && (-1..=1).contains(&offset.y)
            && (-1..=1).contains(&offset.z)
            && offset != Point3i::default(),
        "not a neighbor offset: {offset:?}"
    );
    let index = ((offset.z + 1) * 9 + (offset.y + 1) * 3 + (offset.x + 1)) as u32;
    let index = if index > CENTRE_INDEX {
        index - 1
    } else {
        index
    };
    FIRST_DIRECTION + index
}

/// Decode a direction code back into its neighbor offset
///
/// Returns `None` for sentinels and component ids.
pub fn decode_direction(code: u32) -> Option<Point3i> {
    if !is_direction(code) {
        return None;
    }
    let mut index = code - FIRST_DIRECTION;
    if index >= CENTRE_INDEX {
        index += 1;
    }
    let index = index as i32;
    let offset = Point3i::new(index % 3 - 1, (index / 3) % 3 - 1, index / 9 - 1);
    Some(offset)
}

/// Check if a code is a direction code
#[inline]
pub fn is_direction(code: u32) -> bool {
    (FIRST_DIRECTION..=LAST_DIRECTION).contains(&code)
}

/// Encode a connected-component id (>= 1)
#[inline]
pub fn encode_component(id: u32) -> u32 {
    debug_assert!(id >= 1, "component ids start at 1");
    FIRST_COMPONENT + (id - 1)
}

/// Decode a connected-component id
///
/// Returns `None` if the code is not a component code.
#[inline]
pub fn decode_component(code: u32) -> Option<u32> {
    (code >= FIRST_COMPONENT).then(|| code - FIRST_COMPONENT + 1)
}

/// Decode any code into its [`Cell`] view
pub fn decode(code: u32) -> Cell {
    match code {
        UNVISITED => Cell::Unvisited,
        TEMPORARY => Cell::Temporary,
        PLATEAU => Cell::Plateau,
        MINIMUM => Cell::Minimum,
        c if is_direction(c) => Cell::Direction(decode_direction(c).unwrap_or_default()),
        c => Cell::Component(c - FIRST_COMPONENT + 1),
    }
}
