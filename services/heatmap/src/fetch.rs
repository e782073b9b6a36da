//! Dataset loading from a URL or a local JSON file.
//!
//! One request per load: no retries, no caching. A failed request or a
//! malformed body is returned to the caller, which decides how to surface it.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use reqwest::Client;
use tracing::{info, instrument};

use heatmap_common::{ChartError, ChartResult, TemperatureDataset};

/// Where to read the dataset from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetSource {
    Url(String),
    File(PathBuf),
}

impl fmt::Display for DatasetSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetSource::Url(url) => write!(f, "{}", url),
            DatasetSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Loads [`TemperatureDataset`]s from a fixed source.
#[derive(Debug, Clone)]
pub struct DatasetClient {
    client: Client,
    source: DatasetSource,
}

impl DatasetClient {
    pub fn new(source: DatasetSource, timeout: Duration) -> ChartResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| ChartError::Fetch(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self { client, source })
    }

    pub fn source(&self) -> &DatasetSource {
        &self.source
    }

    /// Fetch and parse the dataset.
    #[instrument(skip(self), fields(source = %self.source))]
    pub async fn load(&self) -> ChartResult<TemperatureDataset> {
        let dataset = match &self.source {
            DatasetSource::Url(url) => self.fetch_url(url).await?,
            DatasetSource::File(path) => {
                let bytes = tokio::fs::read(path).await.map_err(|e| {
                    ChartError::Fetch(format!("cannot read {}: {}", path.display(), e))
                })?;
                TemperatureDataset::from_slice(&bytes)?
            }
        };

        info!(
            records = dataset.len(),
            base_temperature = ?dataset.base_temperature,
            "Loaded temperature dataset"
        );

        Ok(dataset)
    }

    async fn fetch_url(&self, url: &str) -> ChartResult<TemperatureDataset> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| ChartError::Fetch(e.to_string()))?;

        let body = response
            .bytes()
            .await
            .map_err(|e| ChartError::Fetch(e.to_string()))?;

        TemperatureDataset::from_slice(&body)
    }
}
