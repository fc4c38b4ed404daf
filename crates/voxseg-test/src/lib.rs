//! voxseg-test - Regression test framework for voxseg
//!
//! This crate provides the harness used by the `*_reg.rs` integration
//! tests of the workspace:
//!
//! - [`RegParams`] counts checks and collects failures without panicking
//!   mid-test, then reports them all in [`RegParams::cleanup`]
//! - [`volume_from_slices`] builds small intensity volumes from text
//! - [`LcgRng`] generates reproducible pseudo-random volumes
//!
//! # Usage
//!
//! ```
//! use voxseg_test::{RegParams, volume_from_slices};
//!
//! let channel = volume_from_slices(&["5 3 3 1 4"]).unwrap();
//!
//! let mut rp = RegParams::new("example");
//! rp.compare_values(5.0, channel.len() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::RegParams;

use voxseg_core::{Extent, Voxels};

/// Build a volume from text slices
///
/// Each slice is one z-plane: rows separated by newlines, values by
/// whitespace. Blank lines are ignored. Every slice must have the same
/// number of rows and every row the same number of values.
///
/// # Errors
///
/// Returns [`TestError::Parse`] for a token that is not a `u8` and
/// [`TestError::Ragged`] for rows or slices of different sizes.
pub fn volume_from_slices(slices: &[&str]) -> TestResult<Voxels<u8>> {
    let mut data = Vec::new();
    let mut width = None;
    let mut height = None;

    for (z, slice) in slices.iter().enumerate() {
        let mut rows = 0;
        for (y, line) in slice.lines().filter(|l| !l.trim().is_empty()).enumerate() {
            let mut count = 0;
            for token in line.split_whitespace() {
                let value = token.parse::<u8>().map_err(|_| TestError::Parse {
                    slice: z,
                    row: y,
                    token: token.to_string(),
                })?;
                data.push(value);
                count += 1;
            }
            check_size(&mut width, count, z, "values per row")?;
            rows += 1;
        }
        check_size(&mut height, rows, z, "rows")?;
    }

    let extent = Extent::new(
        width.unwrap_or(0) as i32,
        height.unwrap_or(0) as i32,
        slices.len() as i32,
    )?;
    Ok(Voxels::from_vec(extent, data)?)
}

fn check_size(
    expected: &mut Option<usize>,
    found: usize,
    slice: usize,
    what: &'static str,
) -> TestResult<()> {
    match *expected {
        Some(expected) if expected != found => Err(TestError::Ragged {
            slice,
            what,
            expected,
            found,
        }),
        Some(_) => Ok(()),
        None => {
            *expected = Some(found);
            Ok(())
        }
    }
}

/// Linear congruential generator for reproducible test data
#[derive(Debug, Clone)]
pub struct LcgRng {
    state: u64,
}

impl LcgRng {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    pub fn next_u64(&mut self) -> u64 {
        // Knuth's MMIX constants
        self.state = self
            .state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        self.state
    }

    /// Value in `0..bound`; `bound` must be non-zero
    pub fn next_below(&mut self, bound: u32) -> u32 {
        ((self.next_u64() >> 33) % u64::from(bound)) as u32
    }

    /// Volume of values in `0..levels`
    pub fn volume(&mut self, extent: Extent, levels: u8) -> Voxels<u8> {
        let mut voxels = Voxels::new(extent);
        for value in voxels.data_mut() {
            *value = self.next_below(u32::from(levels.max(1))) as u8;
        }
        voxels
    }
}
