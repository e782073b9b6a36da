//! Heat map construction: scales, axes, cells, legend and tooltip.

use tracing::{debug, info, warn};

use heatmap_common::record::{variance_extent, year_range};
use heatmap_common::{
    format_number, ChartError, ChartResult, Color, TemperatureDataset, VarianceRecord,
};

use crate::axis::{month_label, year_label, Axis, AxisOrient};
use crate::document::{Element, RenderTarget};
use crate::layout::{ChartLayout, ChartOptions};
use crate::legend::render_legend;
use crate::scale::{BandScale, QuantizeScale};
use crate::tooltip::tooltip_element;

pub const CHART_ID: &str = "chart";
pub const X_AXIS_ID: &str = "x-axis";
pub const Y_AXIS_ID: &str = "y-axis";
pub const CELL_CLASS: &str = "cell";

const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// The three scales a heat map is drawn with.
#[derive(Debug, Clone)]
pub struct ChartScales {
    pub year: BandScale<i32>,
    pub month: BandScale<u32>,
    pub color: QuantizeScale<Color>,
}

impl ChartScales {
    /// Build scales over the full dataset.
    ///
    /// The color domain is the min/max variance across every record.
    pub fn build(
        records: &[VarianceRecord],
        layout: &ChartLayout,
        palette: &[Color],
    ) -> ChartResult<Self> {
        let extent = variance_extent(records).ok_or(ChartError::EmptyDataset)?;

        let year = BandScale::new(records.iter().map(|r| r.year), (0.0, layout.inner_width()));
        let month = BandScale::new(1..=12u32, (0.0, layout.inner_height()));
        let color = QuantizeScale::new(extent, palette.to_vec())?;

        debug!(
            years = year.domain().len(),
            year_band = year.bandwidth(),
            month_band = month.bandwidth(),
            min_variance = extent.0,
            max_variance = extent.1,
            "Built chart scales"
        );

        Ok(Self { year, month, color })
    }
}

/// What a render pass produced.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderSummary {
    pub cells: usize,
    pub skipped: usize,
    pub years: (i32, i32),
    pub variance: (f64, f64),
}

/// Draws the variance heat map into a [`RenderTarget`].
#[derive(Debug, Clone, Default)]
pub struct ChartRenderer {
    layout: ChartLayout,
    options: ChartOptions,
}

impl ChartRenderer {
    pub fn new(layout: ChartLayout, options: ChartOptions) -> ChartResult<Self> {
        layout.validate()?;
        options.validate()?;
        Ok(Self { layout, options })
    }

    pub fn layout(&self) -> &ChartLayout {
        &self.layout
    }

    pub fn options(&self) -> &ChartOptions {
        &self.options
    }

    /// Render a full dataset, adding the baseline to the caption.
    pub fn render_dataset(
        &self,
        dataset: &TemperatureDataset,
        target: &mut RenderTarget,
    ) -> ChartResult<RenderSummary> {
        let caption = self.options.caption(dataset.base_temperature);
        self.render_into(dataset.records(), &caption, target)
    }

    /// Render records into `target`: the chart `<svg>` followed by the
    /// hidden tooltip element.
    pub fn render(
        &self,
        records: &[VarianceRecord],
        target: &mut RenderTarget,
    ) -> ChartResult<RenderSummary> {
        self.render_into(records, &self.options.description, target)
    }

    fn render_into(
        &self,
        records: &[VarianceRecord],
        caption: &str,
        target: &mut RenderTarget,
    ) -> ChartResult<RenderSummary> {
        let (svg, summary) = self.build_svg(records, caption)?;
        target.append(svg);
        target.append(tooltip_element());
        Ok(summary)
    }

    /// Build only the `<svg>` element, for standalone SVG or raster output.
    pub fn render_svg(&self, records: &[VarianceRecord]) -> ChartResult<(Element, RenderSummary)> {
        self.build_svg(records, &self.options.description)
    }

    /// Standalone `<svg>` for a full dataset, with the baseline caption.
    pub fn render_dataset_svg(
        &self,
        dataset: &TemperatureDataset,
    ) -> ChartResult<(Element, RenderSummary)> {
        let caption = self.options.caption(dataset.base_temperature);
        self.build_svg(dataset.records(), &caption)
    }

    fn build_svg(
        &self,
        records: &[VarianceRecord],
        caption: &str,
    ) -> ChartResult<(Element, RenderSummary)> {
        let scales = ChartScales::build(records, &self.layout, &self.options.palette)?;
        let inner_width = self.layout.inner_width();
        let inner_height = self.layout.inner_height();

        let mut svg = Element::new("svg")
            .attr("xmlns", SVG_NAMESPACE)
            .attr("id", CHART_ID)
            .attr("width", format_number(self.layout.width))
            .attr("height", format_number(self.layout.height));

        let plot = svg.push(Element::new("g").attr(
            "transform",
            format!(
                "translate({}, {})",
                format_number(self.layout.margin.left),
                format_number(self.layout.margin.top)
            ),
        ));

        plot.push(
            Element::new("text")
                .attr("id", "title")
                .attr("x", format_number(inner_width / 2.0))
                .attr("y", -20)
                .attr("text-anchor", "middle")
                .text(self.options.title.clone()),
        );
        plot.push(
            Element::new("text")
                .attr("id", "description")
                .attr("x", format_number(inner_width / 2.0))
                .attr("y", -40)
                .attr("text-anchor", "middle")
                .text(caption.to_string()),
        );

        let x_axis = Axis::from_band(AxisOrient::Bottom, &scales.year, year_label);
        plot.push(
            x_axis
                .render(X_AXIS_ID)
                .attr("transform", format!("translate(0, {})", format_number(inner_height))),
        );

        let y_axis = Axis::from_band(AxisOrient::Left, &scales.month, month_label);
        plot.push(y_axis.render(Y_AXIS_ID));

        let mut cells = 0;
        let mut skipped = 0;
        for record in records {
            match render_cell(&scales, record) {
                Some(cell) => {
                    plot.push(cell);
                    cells += 1;
                }
                None => {
                    warn!(
                        year = record.year,
                        month = record.month,
                        variance = record.variance,
                        "Skipping record that cannot be placed on the grid"
                    );
                    skipped += 1;
                }
            }
        }

        plot.push(render_legend(
            &scales.color,
            &self.layout,
            &self.options.legend,
        ));

        let summary = RenderSummary {
            cells,
            skipped,
            years: year_range(records).unwrap_or_default(),
            variance: scales.color.domain(),
        };

        info!(
            cells = summary.cells,
            skipped = summary.skipped,
            first_year = summary.years.0,
            last_year = summary.years.1,
            "Rendered heat map"
        );

        Ok((svg, summary))
    }
}

/// One `rect.cell` for a record, or `None` when the record falls outside
/// the scales (unknown month, non-finite variance).
fn render_cell(scales: &ChartScales, record: &VarianceRecord) -> Option<Element> {
    let x = scales.year.scale(record.year)?;
    let y = scales.month.scale(record.month)?;
    if !record.variance.is_finite() {
        return None;
    }
    let fill = scales.color.scale(record.variance)?;

    Some(
        Element::new("rect")
            .attr("class", CELL_CLASS)
            .attr("x", format_number(x))
            .attr("y", format_number(y))
            .attr("width", format_number(scales.year.bandwidth()))
            .attr("height", format_number(scales.month.bandwidth()))
            .attr("fill", fill.to_hex())
            .attr("data-month", record.month_index())
            .attr("data-year", record.year)
            .attr("data-temp", format_number(record.variance)),
    )
}
