//! Configuration loading and types.
//!
//! Everything has a default, so a missing config file is not an error
//! unless it was asked for explicitly.

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use heatmap_common::{ChartResult, Color};
use renderer::{ChartLayout, ChartOptions, ChartRenderer, LegendLayout, Margin};

/// Public copy of the global temperature dataset.
pub const DEFAULT_DATA_URL: &str =
    "https://raw.githubusercontent.com/freeCodeCamp/ProjectReferenceData/master/global-temperature.json";

/// Config file looked up when no path is given.
pub const DEFAULT_CONFIG_PATH: &str = "config/heatmap.yaml";

/// Root configuration loaded from YAML.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeatmapConfig {
    pub source: SourceConfig,
    pub chart: ChartConfig,
    pub server: ServerConfig,
}

/// Where the dataset comes from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    pub url: String,
    pub timeout_secs: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_DATA_URL.to_string(),
            timeout_secs: 30,
        }
    }
}

impl SourceConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Chart geometry, text and colors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub title: String,
    pub description: String,
    pub width: f64,
    pub height: f64,
    pub margin: Margin,
    pub palette: Vec<Color>,
    pub legend: LegendLayout,
}

impl Default for ChartConfig {
    fn default() -> Self {
        let layout = ChartLayout::default();
        let options = ChartOptions::default();
        Self {
            title: options.title,
            description: options.description,
            width: layout.width,
            height: layout.height,
            margin: layout.margin,
            palette: options.palette,
            legend: options.legend,
        }
    }
}

impl ChartConfig {
    pub fn layout(&self) -> ChartLayout {
        ChartLayout {
            width: self.width,
            height: self.height,
            margin: self.margin,
        }
    }

    pub fn options(&self) -> ChartOptions {
        ChartOptions {
            title: self.title.clone(),
            description: self.description.clone(),
            palette: self.palette.clone(),
            legend: self.legend,
        }
    }

    /// Build a renderer, validating layout and palette.
    pub fn renderer(&self) -> ChartResult<ChartRenderer> {
        ChartRenderer::new(self.layout(), self.options())
    }
}

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub listen: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: "0.0.0.0:8080".to_string(),
        }
    }
}

impl HeatmapConfig {
    /// Parse configuration from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).context("Failed to parse heat map config")
    }

    /// Load configuration from a YAML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        Self::from_yaml(&content).with_context(|| format!("Invalid config: {}", path.display()))
    }

    /// Load from `path` if given, otherwise from [`DEFAULT_CONFIG_PATH`] when
    /// it exists, otherwise fall back to defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let config = Self::from_file(path)?;
                tracing::info!(path = %path.display(), "Loaded heat map config");
                Ok(config)
            }
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_PATH);
                if default_path.exists() {
                    Self::from_file(default_path)
                } else {
                    tracing::debug!(
                        "Config file {} does not exist, using defaults",
                        DEFAULT_CONFIG_PATH
                    );
                    Ok(Self::default())
                }
            }
        }
    }
}
