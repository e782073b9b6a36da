//! Color legend: one swatch per palette entry, laid out left to right.

use heatmap_common::{format_number, Color};

use crate::document::Element;
use crate::layout::{ChartLayout, LegendLayout};
use crate::scale::QuantizeScale;

pub const LEGEND_ID: &str = "legend";

/// Distance of the legend's left edge from the plot's right edge.
const LEGEND_INSET: f64 = 200.0;

/// Gap between the bottom of the plot and the legend.
const LEGEND_OFFSET: f64 = 50.0;

/// Render the legend group below the plot area.
///
/// Each swatch has a `<title>` giving the variance range its color covers.
pub fn render_legend(
    scale: &QuantizeScale<Color>,
    layout: &ChartLayout,
    legend: &LegendLayout,
) -> Element {
    let mut group = Element::new("g").attr("id", LEGEND_ID).attr(
        "transform",
        format!(
            "translate({}, {})",
            format_number(layout.inner_width() - LEGEND_INSET),
            format_number(layout.inner_height() + LEGEND_OFFSET)
        ),
    );

    for (i, color) in scale.range().iter().enumerate() {
        let mut swatch = Element::new("rect")
            .attr("class", "legend-rect")
            .attr("x", format_number(i as f64 * legend.swatch_width))
            .attr("y", 0)
            .attr("width", format_number(legend.swatch_width))
            .attr("height", format_number(legend.swatch_height))
            .attr("fill", color.to_hex());

        if let Some((lo, hi)) = scale.bucket_extent(i) {
            swatch.push(Element::new("title").text(format!(
                "{} to {}",
                format_variance_bound(lo),
                format_variance_bound(hi)
            )));
        }

        group.push(swatch);
    }

    group
}

fn format_variance_bound(value: f64) -> String {
    format!("{:.2}℃", value)
}
