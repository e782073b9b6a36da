//! Monthly variance records and the dataset document that carries them.

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Temperature deviation for one (year, month) pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VarianceRecord {
    pub year: i32,
    /// Calendar month, 1 = January.
    pub month: u32,
    /// Degrees Celsius relative to the dataset baseline.
    pub variance: f64,
}

impl VarianceRecord {
    pub fn new(year: i32, month: u32, variance: f64) -> Self {
        Self {
            year,
            month,
            variance,
        }
    }

    /// Zero-indexed month as exposed on rendered cells (0 = January).
    pub fn month_index(&self) -> u32 {
        self.month.saturating_sub(1)
    }
}

/// Root of the global temperature JSON document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemperatureDataset {
    /// Baseline temperature the variances are measured against.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_temperature: Option<f64>,

    pub monthly_variance: Vec<VarianceRecord>,
}

impl TemperatureDataset {
    pub fn new(monthly_variance: Vec<VarianceRecord>) -> Self {
        Self {
            base_temperature: None,
            monthly_variance,
        }
    }

    /// Parse a dataset from a JSON string.
    pub fn from_json(json: &str) -> ChartResult<Self> {
        serde_json::from_str(json).map_err(|e| ChartError::Parse(e.to_string()))
    }

    /// Parse a dataset from raw JSON bytes (e.g. an HTTP response body).
    pub fn from_slice(bytes: &[u8]) -> ChartResult<Self> {
        serde_json::from_slice(bytes).map_err(|e| ChartError::Parse(e.to_string()))
    }

    pub fn records(&self) -> &[VarianceRecord] {
        &self.monthly_variance
    }

    pub fn len(&self) -> usize {
        self.monthly_variance.len()
    }

    pub fn is_empty(&self) -> bool {
        self.monthly_variance.is_empty()
    }

    /// First and last year present, if any.
    pub fn year_range(&self) -> Option<(i32, i32)> {
        year_range(&self.monthly_variance)
    }

    /// Minimum and maximum finite variance, if any.
    pub fn variance_extent(&self) -> Option<(f64, f64)> {
        variance_extent(&self.monthly_variance)
    }
}

/// First and last year across `records`.
pub fn year_range(records: &[VarianceRecord]) -> Option<(i32, i32)> {
    let min = records.iter().map(|r| r.year).min()?;
    let max = records.iter().map(|r| r.year).max()?;
    Some((min, max))
}

/// Minimum and maximum variance across `records`, ignoring non-finite values.
pub fn variance_extent(records: &[VarianceRecord]) -> Option<(f64, f64)> {
    records
        .iter()
        .map(|r| r.variance)
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

/// Format a number the way a browser stringifies it: shortest round-trip
/// form, no trailing `.0`, and no negative zero.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{}", value)
}
