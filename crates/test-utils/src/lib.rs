//! Fixtures and helpers shared by the heat map test suites.
//!
//! - [`fixtures`]: the two-month 1900 scenario, broken documents, palette
//! - [`generators`]: deterministic multi-year datasets and temp JSON files
//! - [`paths`]: lookup of files under `testdata/`

pub mod fixtures;
pub mod generators;
pub mod paths;

pub use fixtures::*;
pub use generators::*;
pub use paths::*;

/// Resolve a file under `testdata/`, or return early from the calling test
/// with a skip message when it is missing.
///
/// ```ignore
/// let path = require_test_file!(test_utils::SAMPLE_DATASET_FILE);
/// ```
#[macro_export]
macro_rules! require_test_file {
    ($name:expr) => {{
        match $crate::find_test_file($name) {
            Some(path) => path,
            None => {
                eprintln!(
                    "SKIPPED: {} not found under testdata/ or TEST_DATA_DIR",
                    $name
                );
                return;
            }
        }
    }};
}

/// Assert two numbers differ by at most `epsilon`, e.g. band widths and
/// quantize thresholds that are not exactly representable.
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr, $epsilon:expr) => {{
        let left: f64 = $left as f64;
        let right: f64 = $right as f64;
        let epsilon: f64 = $epsilon as f64;
        let diff = (left - right).abs();
        if diff > epsilon {
            panic!(
                "assertion failed: `(left ≈ right)`\n  left: `{:?}`,\n right: `{:?}`,\n  diff: `{:?}` > epsilon `{:?}`",
                left, right, diff, epsilon
            );
        }
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assert_approx_eq_tolerates_rounding() {
        // Thresholds of the (-0.5, 1.2) scenario carry float noise.
        assert_approx_eq!(-0.07500000000000001, -0.075, 1e-12);
        assert_approx_eq!(0.425, 0.425, 0.0);
    }

    #[test]
    #[should_panic(expected = "assertion failed")]
    fn test_assert_approx_eq_rejects_bucket_sized_gap() {
        assert_approx_eq!(0.775, 0.35, 0.001);
    }
}
