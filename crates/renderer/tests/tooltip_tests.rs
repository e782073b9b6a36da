//! Tests for tooltip state transitions.

use heatmap_common::VarianceRecord;
use renderer::tooltip::{tooltip_element, tooltip_html};
use renderer::{on_cell_enter, on_cell_leave, PointerPosition, TooltipState};

#[test]
fn test_enter_shows_unmodified_month() {
    let record = VarianceRecord::new(1900, 1, -0.5);
    let state = on_cell_enter(&record, PointerPosition::new(120.0, 45.5));

    assert_eq!(state.opacity, 1.0);
    assert!(state.is_visible());
    assert_eq!(state.left, Some(120.0));
    assert_eq!(state.top, Some(45.5));
    assert_eq!(state.data_year, Some(1900));

    let html = state.html.unwrap();
    assert!(html.contains("Month: 1"));
    assert!(!html.contains("Month: 0"));
}

#[test]
fn test_tooltip_html_format() {
    let record = VarianceRecord::new(1753, 12, -1.366);
    assert_eq!(
        tooltip_html(&record),
        "Year: 1753<br>Month: 12<br>Variance: -1.366"
    );
}

#[test]
fn test_leave_hides_tooltip() {
    let state = on_cell_leave();

    assert_eq!(state.opacity, 0.0);
    assert!(!state.is_visible());
    assert_eq!(state, TooltipState::hidden());
}

#[test]
fn test_apply_enter_then_leave() {
    let record = VarianceRecord::new(1900, 2, 1.2);
    let mut element = tooltip_element();

    on_cell_enter(&record, PointerPosition::new(10.0, 20.0)).apply(&mut element);
    assert_eq!(element.get_style("opacity"), Some("1"));
    assert_eq!(element.get_style("left"), Some("10px"));
    assert_eq!(element.get_style("top"), Some("20px"));
    assert_eq!(element.get_attr("data-year"), Some("1900"));
    assert_eq!(
        element.text_content(),
        "Year: 1900<br>Month: 2<br>Variance: 1.2"
    );

    on_cell_leave().apply(&mut element);
    assert_eq!(element.get_style("opacity"), Some("0"));
    // The element and its last content stay around for the next hover.
    assert_eq!(element.get_style("pointer-events"), Some("none"));
    assert!(element.text_content().contains("Month: 2"));
}

#[test]
fn test_last_event_wins() {
    let first = VarianceRecord::new(1900, 1, -0.5);
    let second = VarianceRecord::new(1901, 7, 0.25);
    let mut element = tooltip_element();

    on_cell_enter(&first, PointerPosition::new(1.0, 1.0)).apply(&mut element);
    on_cell_enter(&second, PointerPosition::new(2.0, 3.0)).apply(&mut element);

    assert_eq!(element.get_attr("data-year"), Some("1901"));
    assert_eq!(element.get_style("left"), Some("2px"));
    assert!(element.text_content().contains("Month: 7"));
}

#[test]
fn test_state_serializes_to_json() {
    let state = on_cell_enter(&VarianceRecord::new(1900, 3, 0.5), PointerPosition::new(5.0, 6.0));
    let json = serde_json::to_value(&state).unwrap();

    assert_eq!(json["opacity"], 1.0);
    assert_eq!(json["data_year"], 1900);
    assert_eq!(json["html"], "Year: 1900<br>Month: 3<br>Variance: 0.5");
}
