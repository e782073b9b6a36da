//! Heat map rendering for monthly temperature variance.
//!
//! Builds the chart as an element tree:
//! - Band scales for years and months, a quantize scale for color
//! - Bottom and left axes
//! - One cell per record, a legend and a hover tooltip
//!
//! The tree can be written out as an HTML page, a standalone SVG or a PNG.

pub mod axis;
pub mod chart;
pub mod document;
pub mod layout;
pub mod legend;
pub mod page;
pub mod raster;
pub mod scale;
pub mod tooltip;

pub use chart::{ChartRenderer, ChartScales, RenderSummary};
pub use document::{Element, RenderTarget};
pub use layout::{ChartLayout, ChartOptions, LegendLayout, Margin};
pub use tooltip::{on_cell_enter, on_cell_leave, PointerPosition, TooltipState};
