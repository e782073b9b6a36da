//! Common types shared across the heat map crates.

pub mod calendar;
pub mod color;
pub mod error;
pub mod record;

pub use calendar::{month_name, MONTH_NAMES};
pub use color::{Color, VARIANCE_PALETTE};
pub use error::{ChartError, ChartResult};
pub use record::{format_number, TemperatureDataset, VarianceRecord};
