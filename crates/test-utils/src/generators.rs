//! Synthetic variance datasets.
//!
//! Values are deterministic so tests can assert on them.

use std::io::Write;

use heatmap_common::{TemperatureDataset, VarianceRecord};

/// Creates one record per month for `years` consecutive years.
///
/// Variance follows a slow warming trend with a seasonal wobble:
/// `-1.0 + 0.01 * year_offset + 0.5 * sin(month)`, rounded to 3 decimals.
///
/// # Example
///
/// ```
/// use test_utils::create_monthly_records;
///
/// let records = create_monthly_records(1900, 2);
/// assert_eq!(records.len(), 24);
/// assert_eq!(records[0].year, 1900);
/// assert_eq!(records[23].month, 12);
/// ```
pub fn create_monthly_records(first_year: i32, years: usize) -> Vec<VarianceRecord> {
    let mut records = Vec::with_capacity(years * 12);
    for offset in 0..years {
        for month in 1..=12u32 {
            let variance = -1.0 + 0.01 * offset as f64 + 0.5 * (month as f64).sin();
            records.push(VarianceRecord::new(
                first_year + offset as i32,
                month,
                (variance * 1000.0).round() / 1000.0,
            ));
        }
    }
    records
}

/// Creates a dataset document around [`create_monthly_records`].
pub fn create_dataset(first_year: i32, years: usize) -> TemperatureDataset {
    TemperatureDataset {
        base_temperature: Some(8.66),
        monthly_variance: create_monthly_records(first_year, years),
    }
}

/// Writes `contents` to a temporary `.json` file that lives as long as the
/// returned handle.
pub fn write_json_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".json")
        .tempfile()
        .expect("Failed to create temporary dataset file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write temporary dataset file");
    file
}

/// Serializes `dataset` into a temporary `.json` file.
pub fn write_dataset_file(dataset: &TemperatureDataset) -> tempfile::NamedTempFile {
    let json = serde_json::to_string(dataset).expect("Failed to serialize dataset");
    write_json_file(&json)
}
