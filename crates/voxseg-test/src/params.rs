//! Regression test parameters and operations

use std::fmt::Debug;
use voxseg_core::Voxels;

/// Regression test parameters
///
/// This structure tracks the state of a regression test: the test name,
/// the index of the current check, and every failure recorded so far.
/// Checks never panic; call [`RegParams::cleanup`] at the end and assert
/// on its result.
pub struct RegParams {
    /// Name of the test (e.g., "watershed")
    pub test_name: String,
    /// Current check index (incremented before each check)
    index: usize,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters
    pub fn new(test_name: &str) -> Self {
        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");

        Self {
            test_name: test_name.to_string(),
            index: 0,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Get the current check index
    pub fn index(&self) -> usize {
        self.index
    }

    fn fail(&mut self, msg: String) -> bool {
        eprintln!("{}", msg);
        self.failures.push(msg);
        self.success = false;
        false
    }

    /// Compare two floating-point values
    ///
    /// Returns `true` if they differ by at most `delta`.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        if diff > delta {
            let msg = format!(
                "Failure in {}_reg: value comparison for index {}\n\
                 difference = {} but allowed delta = {}\n\
                 expected = {}, actual = {}",
                self.test_name, self.index, diff, delta, expected, actual
            );
            self.fail(msg)
        } else {
            true
        }
    }

    /// Compare two volumes voxel by voxel
    ///
    /// Reports the extent on a size mismatch, and the first differing
    /// voxel otherwise.
    pub fn compare_voxels<T: Copy + PartialEq + Debug>(
        &mut self,
        expected: &Voxels<T>,
        actual: &Voxels<T>,
    ) -> bool {
        self.index += 1;

        if expected.extent() != actual.extent() {
            let msg = format!(
                "Failure in {}_reg: voxel comparison for index {} - extent {} vs {}",
                self.test_name,
                self.index,
                expected.extent(),
                actual.extent()
            );
            return self.fail(msg);
        }

        let mismatch = expected
            .data()
            .iter()
            .zip(actual.data())
            .position(|(a, b)| a != b);
        match mismatch {
            Some(offset) => {
                let p = expected.extent().point_from_offset(offset);
                let msg = format!(
                    "Failure in {}_reg: voxel comparison for index {} - mismatch at ({}, {}, {}): \
                     expected {:?}, actual {:?}",
                    self.test_name,
                    self.index,
                    p.x,
                    p.y,
                    p.z,
                    expected.get_offset(offset),
                    actual.get_offset(offset)
                );
                self.fail(msg)
            }
            None => true,
        }
    }

    /// Compare two byte strings
    pub fn compare_strings(&mut self, data1: &[u8], data2: &[u8]) -> bool {
        self.index += 1;

        if data1 != data2 {
            let msg = format!(
                "Failure in {}_reg: string comparison for index {}\n\
                 sizes: {} vs {}",
                self.test_name,
                self.index,
                data1.len(),
                data2.len()
            );
            self.fail(msg)
        } else {
            true
        }
    }

    /// Clean up and report results
    ///
    /// Returns `true` if every check passed.
    pub fn cleanup(self) -> bool {
        if self.success {
            eprintln!("SUCCESS: {}_reg", self.test_name);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        eprintln!();

        self.success
    }

    /// Check if all checks have passed so far
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get list of failures
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}
