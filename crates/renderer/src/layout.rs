//! Canvas geometry and presentation options.

use serde::{Deserialize, Serialize};

use heatmap_common::{ChartError, ChartResult, Color};

/// Space reserved around the plot area for axes, title and legend.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margin {
    fn default() -> Self {
        Self {
            top: 50.0,
            right: 50.0,
            bottom: 100.0,
            left: 100.0,
        }
    }
}

/// Outer canvas size plus margins.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartLayout {
    pub width: f64,
    pub height: f64,
    pub margin: Margin,
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 600.0,
            margin: Margin::default(),
        }
    }
}

impl ChartLayout {
    /// Width of the plot area inside the margins.
    pub fn inner_width(&self) -> f64 {
        self.width - self.margin.left - self.margin.right
    }

    /// Height of the plot area inside the margins.
    pub fn inner_height(&self) -> f64 {
        self.height - self.margin.top - self.margin.bottom
    }

    pub fn validate(&self) -> ChartResult<()> {
        let margins = [
            self.margin.top,
            self.margin.right,
            self.margin.bottom,
            self.margin.left,
        ];
        if margins.iter().any(|m| !m.is_finite() || *m < 0.0) {
            return Err(ChartError::InvalidLayout(
                "margins must be finite and non-negative".to_string(),
            ));
        }
        if !(self.inner_width() > 0.0 && self.inner_height() > 0.0) {
            return Err(ChartError::InvalidLayout(format!(
                "plot area {}x{} is empty",
                self.inner_width(),
                self.inner_height()
            )));
        }
        Ok(())
    }
}

/// Legend swatch size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegendLayout {
    pub swatch_width: f64,
    pub swatch_height: f64,
}

impl Default for LegendLayout {
    fn default() -> Self {
        Self {
            swatch_width: 40.0,
            swatch_height: 20.0,
        }
    }
}

/// Text and colors drawn on the chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartOptions {
    pub title: String,
    pub description: String,
    pub palette: Vec<Color>,
    pub legend: LegendLayout,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            title: "Heat Map".to_string(),
            description: "This is a heat map showing the global temperature variance.".to_string(),
            palette: Color::variance_palette(),
            legend: LegendLayout::default(),
        }
    }
}

impl ChartOptions {
    pub fn validate(&self) -> ChartResult<()> {
        if self.palette.is_empty() {
            return Err(ChartError::EmptyPalette);
        }
        if !(self.legend.swatch_width > 0.0 && self.legend.swatch_height > 0.0) {
            return Err(ChartError::InvalidLayout(
                "legend swatches must have a positive size".to_string(),
            ));
        }
        Ok(())
    }

    /// Caption text, mentioning the baseline when the dataset provides one.
    pub fn caption(&self, base_temperature: Option<f64>) -> String {
        match base_temperature {
            Some(base) => format!("{} Base temperature: {}℃.", self.description, base),
            None => self.description.clone(),
        }
    }
}
