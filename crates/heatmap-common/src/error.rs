//! Error types for heat map rendering.

use thiserror::Error;

/// Result type alias using ChartError.
pub type ChartResult<T> = Result<T, ChartError>;

/// Primary error type for dataset loading and chart rendering.
#[derive(Debug, Error)]
pub enum ChartError {
    // === Data Errors ===
    #[error("Failed to fetch dataset: {0}")]
    Fetch(String),

    #[error("Invalid dataset JSON: {0}")]
    Parse(String),

    #[error("Dataset contains no records")]
    EmptyDataset,

    // === Configuration Errors ===
    #[error("Invalid color '{0}': expected #rrggbb")]
    InvalidColor(String),

    #[error("Color palette is empty")]
    EmptyPalette,

    #[error("Invalid layout: {0}")]
    InvalidLayout(String),

    // === Rendering Errors ===
    #[error("Rendering failed: {0}")]
    Render(String),
}

impl ChartError {
    /// Get the HTTP status code for this error.
    ///
    /// Anything caused by the upstream dataset is reported as a bad gateway.
    pub fn http_status_code(&self) -> u16 {
        match self {
            ChartError::Fetch(_) | ChartError::Parse(_) | ChartError::EmptyDataset => 502,
            _ => 500,
        }
    }
}

impl From<serde_json::Error> for ChartError {
    fn from(err: serde_json::Error) -> Self {
        ChartError::Parse(err.to_string())
    }
}
