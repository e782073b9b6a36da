//! Hover tooltip state.
//!
//! Pointer handlers are pure functions returning the state the tooltip
//! should take; [`TooltipState::apply`] writes a state onto the element.

use serde::Serialize;

use heatmap_common::{format_number, VarianceRecord};

use crate::document::Element;

pub const TOOLTIP_ID: &str = "tooltip";

/// Pointer location in page pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl PointerPosition {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// What the tooltip element should look like after an event.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TooltipState {
    pub opacity: f64,
    pub left: Option<f64>,
    pub top: Option<f64>,
    pub html: Option<String>,
    pub data_year: Option<i32>,
}

impl TooltipState {
    pub fn hidden() -> Self {
        Self {
            opacity: 0.0,
            left: None,
            top: None,
            html: None,
            data_year: None,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.opacity > 0.0
    }

    /// Write this state onto the tooltip element.
    ///
    /// Fields left as `None` keep whatever the element already shows, so a
    /// hidden state leaves the last content in place for reuse.
    pub fn apply(&self, element: &mut Element) {
        element.set_style("opacity", format_number(self.opacity));
        if let Some(left) = self.left {
            element.set_style("left", format!("{}px", format_number(left)));
        }
        if let Some(top) = self.top {
            element.set_style("top", format!("{}px", format_number(top)));
        }
        if let Some(html) = &self.html {
            element.set_inner_html(html.clone());
        }
        if let Some(year) = self.data_year {
            element.set_attr("data-year", year);
        }
    }
}

/// Tooltip body for a record. The month is shown 1-based, unlike the
/// zero-indexed `data-month` attribute on cells.
pub fn tooltip_html(record: &VarianceRecord) -> String {
    format!(
        "Year: {}<br>Month: {}<br>Variance: {}",
        record.year,
        record.month,
        format_number(record.variance)
    )
}

/// Pointer entered a cell: show the record at the pointer.
pub fn on_cell_enter(record: &VarianceRecord, pointer: PointerPosition) -> TooltipState {
    TooltipState {
        opacity: 1.0,
        left: Some(pointer.x),
        top: Some(pointer.y),
        html: Some(tooltip_html(record)),
        data_year: Some(record.year),
    }
}

/// Pointer left a cell: hide the tooltip.
pub fn on_cell_leave() -> TooltipState {
    TooltipState::hidden()
}

/// The initial, hidden tooltip element. It ignores pointer events so it
/// never steals hover from the cells beneath it.
pub fn tooltip_element() -> Element {
    Element::new("div")
        .attr("id", TOOLTIP_ID)
        .style("opacity", 0)
        .style("position", "absolute")
        .style("pointer-events", "none")
}
