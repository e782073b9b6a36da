//! Band and quantize scales.
//!
//! - [`BandScale`] maps a discrete, ordered domain onto equal-width slots of a
//!   pixel range (years across, months down).
//! - [`QuantizeScale`] splits a continuous domain into equal-width buckets and
//!   maps each bucket to one output value (variance to palette color).

use std::collections::BTreeMap;

use heatmap_common::{ChartError, ChartResult};

/// Discrete domain to contiguous, equal-width bands.
///
/// No inner or outer padding: `step == bandwidth == (end - start) / n`.
#[derive(Debug, Clone)]
pub struct BandScale<T> {
    domain: Vec<T>,
    index: BTreeMap<T, usize>,
    range: (f64, f64),
    step: f64,
}

impl<T: Ord + Copy> BandScale<T> {
    /// Build a scale from any collection of domain values.
    ///
    /// Values are sorted ascending and deduplicated.
    pub fn new(values: impl IntoIterator<Item = T>, range: (f64, f64)) -> Self {
        let mut domain: Vec<T> = values.into_iter().collect();
        domain.sort();
        domain.dedup();

        let index = domain.iter().enumerate().map(|(i, v)| (*v, i)).collect();
        let step = (range.1 - range.0) / domain.len().max(1) as f64;

        Self {
            domain,
            index,
            range,
            step,
        }
    }

    /// Start of the band for `value`, or `None` if it is not in the domain.
    pub fn scale(&self, value: T) -> Option<f64> {
        self.index
            .get(&value)
            .map(|i| self.range.0 + *i as f64 * self.step)
    }

    /// Middle of the band for `value`.
    pub fn center(&self, value: T) -> Option<f64> {
        self.scale(value).map(|start| start + self.bandwidth() / 2.0)
    }

    /// Domain value whose band contains `position`.
    pub fn invert(&self, position: f64) -> Option<T> {
        if self.step == 0.0 || position < self.range.0 {
            return None;
        }
        let slot = ((position - self.range.0) / self.step).floor() as usize;
        self.domain.get(slot).copied()
    }

    pub fn bandwidth(&self) -> f64 {
        self.step
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn domain(&self) -> &[T] {
        &self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }
}

/// Continuous domain to a discrete range via equal-width buckets.
///
/// With `n` outputs over `[x0, x1]` there are `n - 1` thresholds at
/// `x0 + (i + 1) * (x1 - x0) / n`. A value equal to a threshold belongs to
/// the upper bucket; values outside the domain clamp to the first or last
/// output.
#[derive(Debug, Clone)]
pub struct QuantizeScale<R> {
    domain: (f64, f64),
    thresholds: Vec<f64>,
    range: Vec<R>,
}

impl<R> QuantizeScale<R> {
    pub fn new(domain: (f64, f64), range: Vec<R>) -> ChartResult<Self> {
        if range.is_empty() {
            return Err(ChartError::EmptyPalette);
        }

        let (x0, x1) = domain;
        let n = range.len();
        let thresholds = (0..n - 1)
            .map(|i| ((i + 1) as f64 * x1 + (n - 1 - i) as f64 * x0) / n as f64)
            .collect();

        Ok(Self {
            domain,
            thresholds,
            range,
        })
    }

    /// Output for `value`; `None` only for NaN.
    pub fn scale(&self, value: f64) -> Option<&R> {
        if value.is_nan() {
            return None;
        }
        let bucket = self.thresholds.partition_point(|t| *t <= value);
        self.range.get(bucket)
    }

    /// Index of the bucket `value` falls into.
    pub fn bucket(&self, value: f64) -> Option<usize> {
        if value.is_nan() {
            return None;
        }
        Some(self.thresholds.partition_point(|t| *t <= value))
    }

    /// Width of every bucket.
    pub fn bucket_width(&self) -> f64 {
        (self.domain.1 - self.domain.0) / self.range.len() as f64
    }

    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn range(&self) -> &[R] {
        &self.range
    }

    /// Domain extent `[lo, hi)` of the bucket at `index`.
    pub fn bucket_extent(&self, index: usize) -> Option<(f64, f64)> {
        if index >= self.range.len() {
            return None;
        }
        let lo = if index == 0 {
            self.domain.0
        } else {
            self.thresholds[index - 1]
        };
        let hi = self
            .thresholds
            .get(index)
            .copied()
            .unwrap_or(self.domain.1);
        Some((lo, hi))
    }
}
