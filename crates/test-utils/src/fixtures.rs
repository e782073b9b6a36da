//! Common test fixtures for heat map tests.

use heatmap_common::VarianceRecord;

/// Expected palette, coldest first.
pub const PALETTE_HEX: [&str; 4] = ["#4575b4", "#74add1", "#abd9e9", "#e0f3f8"];

/// Two records in 1900: January at -0.5 and February at 1.2.
///
/// The variance extent is [-0.5, 1.2], so each color bucket is 0.425 wide.
/// January lands in the coldest bucket, February in the warmest.
pub fn two_month_records() -> Vec<VarianceRecord> {
    vec![
        VarianceRecord::new(1900, 1, -0.5),
        VarianceRecord::new(1900, 2, 1.2),
    ]
}

/// The same two records as a dataset JSON document.
pub const TWO_MONTH_JSON: &str = r#"{
    "baseTemperature": 8.66,
    "monthlyVariance": [
        {"year": 1900, "month": 1, "variance": -0.5},
        {"year": 1900, "month": 2, "variance": 1.2}
    ]
}"#;

/// A document missing the `monthlyVariance` field.
pub const MALFORMED_JSON: &str = r#"{"baseTemperature": 8.66, "records": []}"#;

/// A well-formed document with no records.
pub const EMPTY_JSON: &str = r#"{"baseTemperature": 8.66, "monthlyVariance": []}"#;

/// Name of the three-year sample in `testdata/`.
pub const SAMPLE_DATASET_FILE: &str = "global-temperature-sample.json";

/// Full English month names, January first.
pub const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];
