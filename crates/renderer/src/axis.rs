//! Axes for band scales.
//!
//! Produces the conventional axis markup: a `path.domain` spine plus one
//! `g.tick` per domain value, each holding a tick line and a label, with the
//! tick centered on its band.

use heatmap_common::{format_number, month_name};

use crate::document::Element;
use crate::scale::BandScale;

/// Length of the tick lines in pixels.
const TICK_SIZE: f64 = 6.0;

/// Gap between tick line and label.
const TICK_PADDING: f64 = 3.0;

/// Which side of the plot the axis sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisOrient {
    Bottom,
    Left,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    /// Offset along the axis (band center).
    pub offset: f64,
    pub label: String,
}

#[derive(Debug, Clone)]
pub struct Axis {
    orient: AxisOrient,
    range: (f64, f64),
    ticks: Vec<Tick>,
}

impl Axis {
    /// One tick per domain value of `scale`, labelled with `format`.
    pub fn from_band<T, F>(orient: AxisOrient, scale: &BandScale<T>, format: F) -> Self
    where
        T: Ord + Copy,
        F: Fn(T) -> String,
    {
        let ticks = scale
            .domain()
            .iter()
            .filter_map(|value| {
                scale.center(*value).map(|offset| Tick {
                    offset,
                    label: format(*value),
                })
            })
            .collect();

        Self {
            orient,
            range: scale.range(),
            ticks,
        }
    }

    pub fn orient(&self) -> AxisOrient {
        self.orient
    }

    pub fn ticks(&self) -> &[Tick] {
        &self.ticks
    }

    pub fn labels(&self) -> Vec<&str> {
        self.ticks.iter().map(|t| t.label.as_str()).collect()
    }

    /// Render the axis as a `<g>` with the given id.
    pub fn render(&self, id: &str) -> Element {
        let (r0, r1) = (format_number(self.range.0), format_number(self.range.1));
        let (anchor, domain_path) = match self.orient {
            AxisOrient::Bottom => (
                "middle",
                format!("M{r0},{size}V0H{r1}V{size}", size = TICK_SIZE),
            ),
            AxisOrient::Left => (
                "end",
                format!("M-{size},{r0}H0V{r1}H-{size}", size = TICK_SIZE),
            ),
        };

        let mut group = Element::new("g")
            .attr("id", id)
            .attr("fill", "none")
            .attr("font-size", 10)
            .attr("font-family", "sans-serif")
            .attr("text-anchor", anchor);

        group.push(
            Element::new("path")
                .attr("class", "domain")
                .attr("stroke", "currentColor")
                .attr("d", domain_path),
        );

        for tick in &self.ticks {
            group.push(self.render_tick(tick));
        }

        group
    }

    fn render_tick(&self, tick: &Tick) -> Element {
        let offset = format_number(tick.offset);
        let label_gap = TICK_SIZE + TICK_PADDING;

        match self.orient {
            AxisOrient::Bottom => Element::new("g")
                .attr("class", "tick")
                .attr("opacity", 1)
                .attr("transform", format!("translate({},0)", offset))
                .child(
                    Element::new("line")
                        .attr("stroke", "currentColor")
                        .attr("y2", TICK_SIZE),
                )
                .child(
                    Element::new("text")
                        .attr("fill", "currentColor")
                        .attr("y", label_gap)
                        .attr("dy", "0.71em")
                        .text(tick.label.clone()),
                ),
            AxisOrient::Left => Element::new("g")
                .attr("class", "tick")
                .attr("opacity", 1)
                .attr("transform", format!("translate(0,{})", offset))
                .child(
                    Element::new("line")
                        .attr("stroke", "currentColor")
                        .attr("x2", -TICK_SIZE),
                )
                .child(
                    Element::new("text")
                        .attr("fill", "currentColor")
                        .attr("x", -label_gap)
                        .attr("dy", "0.32em")
                        .text(tick.label.clone()),
                ),
        }
    }
}

/// Year label: plain integer, no grouping or decimals.
pub fn year_label(year: i32) -> String {
    year.to_string()
}

/// Month label for a 1-based month: its full English name.
pub fn month_label(month: u32) -> String {
    month
        .checked_sub(1)
        .and_then(|index| month_name(index as usize))
        .map(str::to_string)
        .unwrap_or_else(|| month.to_string())
}
