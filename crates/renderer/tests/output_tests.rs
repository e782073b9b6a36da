//! Tests for HTML page, axis helpers and PNG output.

use renderer::axis::{month_label, year_label, Axis, AxisOrient};
use renderer::page::render_page;
use renderer::raster::render_png;
use renderer::scale::BandScale;
use renderer::{ChartRenderer, RenderTarget};
use test_utils::two_month_records;

#[test]
fn test_year_and_month_labels() {
    assert_eq!(year_label(1753), "1753");
    assert_eq!(year_label(2015), "2015");
    assert_eq!(month_label(1), "January");
    assert_eq!(month_label(12), "December");
    assert_eq!(month_label(13), "13");
    assert_eq!(month_label(0), "0");
}

#[test]
fn test_axis_ticks_are_band_centers() {
    let scale = BandScale::new(vec![2000, 2001], (0.0, 100.0));
    let axis = Axis::from_band(AxisOrient::Bottom, &scale, year_label);

    let offsets: Vec<f64> = axis.ticks().iter().map(|t| t.offset).collect();
    assert_eq!(offsets, vec![25.0, 75.0]);
    assert_eq!(axis.labels(), vec!["2000", "2001"]);
}

#[test]
fn test_axis_markup() {
    let scale = BandScale::new(1..=12u32, (0.0, 120.0));
    let axis = Axis::from_band(AxisOrient::Left, &scale, month_label);
    let group = axis.render("y-axis");

    assert_eq!(group.id(), Some("y-axis"));
    assert_eq!(group.get_attr("text-anchor"), Some("end"));
    assert_eq!(group.select_by_class("domain").len(), 1);

    let ticks = group.select_by_class("tick");
    assert_eq!(ticks.len(), 12);
    assert_eq!(ticks[0].get_attr("transform"), Some("translate(0,5)"));
    assert_eq!(ticks[0].text_content(), "January");
}

#[test]
fn test_page_contains_chart_and_interaction() {
    let mut target = RenderTarget::new();
    ChartRenderer::default()
        .render(&two_month_records(), &mut target)
        .unwrap();

    let html = render_page("Heat <Map>", &target);

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>Heat &lt;Map&gt;</title>"));
    assert!(html.contains("id=\"x-axis\""));
    assert!(html.contains("id=\"y-axis\""));
    assert!(html.contains("id=\"legend\""));
    assert!(html.contains("class=\"cell\""));
    assert!(html.contains("data-month=\"0\""));
    assert!(html.contains("<div id=\"tooltip\" style=\"opacity: 0; position: absolute; pointer-events: none;\"></div>"));
    assert!(html.contains("addEventListener('mouseover'"));
    assert!(html.contains("addEventListener('mouseout'"));
}

#[test]
fn test_page_tooltip_follows_page_coordinates() {
    let mut target = RenderTarget::new();
    ChartRenderer::default()
        .render(&two_month_records(), &mut target)
        .unwrap();

    let html = render_page("Heat Map", &target);

    // The tooltip div is a sibling of the svg, so it takes page pixels.
    assert!(html.contains("tooltip.style.left = event.pageX + 'px';"));
    assert!(html.contains("tooltip.style.top = event.pageY + 'px';"));
    assert!(html.contains("Number(cell.getAttribute('data-month')) + 1"));
}

#[test]
fn test_svg_is_standalone() {
    let (svg, _) = ChartRenderer::default()
        .render_svg(&two_month_records())
        .unwrap();
    let markup = svg.to_markup();

    assert!(markup.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\""));
    assert!(markup.ends_with("</svg>"));
}

#[test]
fn test_png_output() {
    let (svg, _) = ChartRenderer::default()
        .render_svg(&two_month_records())
        .unwrap();
    let png = render_png(&svg).unwrap();

    assert_eq!(&png[..8], &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]);
}
