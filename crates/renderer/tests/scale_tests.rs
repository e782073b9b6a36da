//! Tests for band and quantize scales.

use heatmap_common::{ChartError, Color};
use renderer::scale::{BandScale, QuantizeScale};
use test_utils::{assert_approx_eq, PALETTE_HEX};

fn palette() -> Vec<Color> {
    Color::parse_palette(&PALETTE_HEX).unwrap()
}

// ============================================================================
// BandScale tests
// ============================================================================

#[test]
fn test_band_scale_sorts_and_dedups_domain() {
    let scale = BandScale::new(vec![1902, 1900, 1901, 1900, 1902], (0.0, 300.0));

    assert_eq!(scale.domain(), &[1900, 1901, 1902]);
    assert_approx_eq!(scale.bandwidth(), 100.0, 1e-9);
    assert_eq!(scale.scale(1900), Some(0.0));
    assert_eq!(scale.scale(1901), Some(100.0));
    assert_eq!(scale.scale(1902), Some(200.0));
}

#[test]
fn test_band_scale_unknown_value() {
    let scale = BandScale::new(vec![1900, 1901], (0.0, 100.0));
    assert_eq!(scale.scale(1999), None);
    assert_eq!(scale.center(1999), None);
}

#[test]
fn test_month_bands_put_january_on_top() {
    let scale = BandScale::new(1..=12u32, (0.0, 450.0));

    assert_approx_eq!(scale.bandwidth(), 37.5, 1e-9);
    assert_eq!(scale.scale(1), Some(0.0));
    assert_eq!(scale.scale(12), Some(412.5));
    assert_eq!(scale.center(1), Some(18.75));
    assert_eq!(scale.scale(0), None);
    assert_eq!(scale.scale(13), None);
}

#[test]
fn test_band_scale_invert() {
    let scale = BandScale::new(vec![1900, 1901, 1902], (0.0, 300.0));

    assert_eq!(scale.invert(0.0), Some(1900));
    assert_eq!(scale.invert(150.0), Some(1901));
    assert_eq!(scale.invert(299.9), Some(1902));
    assert_eq!(scale.invert(300.0), None);
    assert_eq!(scale.invert(-1.0), None);
}

#[test]
fn test_band_scale_bands_are_contiguous() {
    let scale = BandScale::new(1753..=2015, (0.0, 1050.0));
    let bandwidth = scale.bandwidth();

    for pair in scale.domain().windows(2) {
        let a = scale.scale(pair[0]).unwrap();
        let b = scale.scale(pair[1]).unwrap();
        assert_approx_eq!(b - a, bandwidth, 1e-9);
    }
    let last = *scale.domain().last().unwrap();
    assert_approx_eq!(scale.scale(last).unwrap() + bandwidth, 1050.0, 1e-9);
}

// ============================================================================
// QuantizeScale tests
// ============================================================================

#[test]
fn test_quantize_two_month_scenario() {
    let scale = QuantizeScale::new((-0.5, 1.2), palette()).unwrap();

    assert_approx_eq!(scale.bucket_width(), 0.425, 1e-12);
    assert_eq!(scale.scale(-0.5).unwrap().to_hex(), "#4575b4");
    assert_eq!(scale.scale(1.2).unwrap().to_hex(), "#e0f3f8");
}

#[test]
fn test_quantize_thresholds_are_equally_spaced() {
    let scale = QuantizeScale::new((-0.5, 1.2), palette()).unwrap();
    let thresholds = scale.thresholds();

    assert_eq!(thresholds.len(), 3);
    assert_approx_eq!(thresholds[0], -0.075, 1e-12);
    assert_approx_eq!(thresholds[1], 0.35, 1e-12);
    assert_approx_eq!(thresholds[2], 0.775, 1e-12);
}

#[test]
fn test_quantize_same_bucket_same_color() {
    let scale = QuantizeScale::new((-0.5, 1.2), palette()).unwrap();

    assert_eq!(scale.scale(-0.45), scale.scale(-0.1));
    assert_eq!(scale.scale(0.0), scale.scale(0.3));
    assert_ne!(scale.scale(0.3), scale.scale(0.4));
}

#[test]
fn test_quantize_threshold_value_goes_to_upper_bucket() {
    let scale = QuantizeScale::new((0.0, 4.0), palette()).unwrap();

    assert_eq!(scale.thresholds(), &[1.0, 2.0, 3.0]);
    assert_eq!(scale.bucket(0.999), Some(0));
    assert_eq!(scale.bucket(1.0), Some(1));
    assert_eq!(scale.bucket(3.0), Some(3));
}

#[test]
fn test_quantize_clamps_outside_domain() {
    let scale = QuantizeScale::new((0.0, 4.0), palette()).unwrap();

    assert_eq!(scale.scale(-100.0).unwrap().to_hex(), "#4575b4");
    assert_eq!(scale.scale(100.0).unwrap().to_hex(), "#e0f3f8");
    assert_eq!(scale.scale(f64::NAN), None);
    assert_eq!(scale.bucket(f64::NAN), None);
}

#[test]
fn test_quantize_outputs_only_palette_colors() {
    let colors = palette();
    let scale = QuantizeScale::new((-6.976, 5.228), colors.clone()).unwrap();

    for step in 0..=1000 {
        let value = -7.0 + step as f64 * 0.0123;
        let color = scale.scale(value).unwrap();
        assert!(colors.contains(color));
    }
}

#[test]
fn test_quantize_monotonic_buckets() {
    let scale = QuantizeScale::new((-2.0, 2.0), palette()).unwrap();

    let mut previous = 0;
    for step in 0..=400 {
        let bucket = scale.bucket(-2.0 + step as f64 * 0.01).unwrap();
        assert!(bucket >= previous);
        previous = bucket;
    }
    assert_eq!(previous, 3);
}

#[test]
fn test_quantize_bucket_extents() {
    let scale = QuantizeScale::new((0.0, 4.0), palette()).unwrap();

    assert_eq!(scale.bucket_extent(0), Some((0.0, 1.0)));
    assert_eq!(scale.bucket_extent(3), Some((3.0, 4.0)));
    assert_eq!(scale.bucket_extent(4), None);
    assert_eq!(scale.bucket_extent(2), Some((2.0, 3.0)));
}

#[test]
fn test_quantize_degenerate_domain() {
    let scale = QuantizeScale::new((0.5, 0.5), palette()).unwrap();

    // Every threshold collapses onto the single value, which lands in the last bucket.
    assert_eq!(scale.scale(0.5).unwrap().to_hex(), "#e0f3f8");
    assert_eq!(scale.scale(0.4).unwrap().to_hex(), "#4575b4");
}

#[test]
fn test_quantize_requires_outputs() {
    let result = QuantizeScale::<Color>::new((0.0, 1.0), Vec::new());
    assert!(matches!(result, Err(ChartError::EmptyPalette)));
}
