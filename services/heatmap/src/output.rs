//! Rendering a dataset into one of the supported output formats.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use heatmap_common::{ChartResult, TemperatureDataset};
use renderer::page::render_page;
use renderer::raster::render_png;
use renderer::{ChartRenderer, RenderSummary, RenderTarget};

/// Output document type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Self-contained page with hover tooltips
    Html,
    /// Standalone SVG document
    Svg,
    /// PNG raster of the SVG
    Png,
}

impl OutputFormat {
    pub fn content_type(&self) -> &'static str {
        match self {
            OutputFormat::Html => "text/html; charset=utf-8",
            OutputFormat::Svg => "image/svg+xml",
            OutputFormat::Png => "image/png",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Html => "html",
            OutputFormat::Svg => "svg",
            OutputFormat::Png => "png",
        }
    }
}

/// Encoded chart plus what went into it.
#[derive(Debug, Clone)]
pub struct RenderedChart {
    pub format: OutputFormat,
    pub bytes: Vec<u8>,
    pub summary: RenderSummary,
}

/// Render `dataset` and encode it as `format`.
pub fn render_chart(
    renderer: &ChartRenderer,
    dataset: &TemperatureDataset,
    format: OutputFormat,
) -> ChartResult<RenderedChart> {
    let (bytes, summary) = match format {
        OutputFormat::Html => {
            let mut target = RenderTarget::new();
            let summary = renderer.render_dataset(dataset, &mut target)?;
            let page = render_page(&renderer.options().title, &target);
            (page.into_bytes(), summary)
        }
        OutputFormat::Svg => {
            let (svg, summary) = renderer.render_dataset_svg(dataset)?;
            let document = format!(
                "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n{}\n",
                svg.to_markup()
            );
            (document.into_bytes(), summary)
        }
        OutputFormat::Png => {
            let (svg, summary) = renderer.render_dataset_svg(dataset)?;
            (render_png(&svg)?, summary)
        }
    };

    Ok(RenderedChart {
        format,
        bytes,
        summary,
    })
}
