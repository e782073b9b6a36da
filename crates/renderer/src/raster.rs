//! PNG output by rasterizing the chart SVG with resvg.

use heatmap_common::{ChartError, ChartResult};

use crate::document::Element;

/// Rasterize SVG markup to PNG bytes at `width` x `height` on a white
/// background. System fonts are loaded so axis labels and titles render.
pub fn rasterize_svg(svg: &str, width: u32, height: u32) -> ChartResult<Vec<u8>> {
    let mut opt = usvg::Options::default();
    opt.fontdb_mut().load_system_fonts();

    let tree = usvg::Tree::from_str(svg, &opt)
        .map_err(|e| ChartError::Render(format!("failed to parse chart SVG: {}", e)))?;

    let mut pixmap = tiny_skia::Pixmap::new(width, height).ok_or_else(|| {
        ChartError::Render(format!("cannot allocate {}x{} pixmap", width, height))
    })?;
    pixmap.fill(tiny_skia::Color::WHITE);

    let size = tree.size();
    let transform = tiny_skia::Transform::from_scale(
        width as f32 / size.width(),
        height as f32 / size.height(),
    );
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    pixmap
        .encode_png()
        .map_err(|e| ChartError::Render(format!("PNG encoding failed: {}", e)))
}

/// Rasterize a rendered chart `<svg>` element at its declared size.
pub fn render_png(svg: &Element) -> ChartResult<Vec<u8>> {
    let dimension = |name: &str| -> ChartResult<u32> {
        svg.get_attr(name)
            .and_then(|v| v.parse::<f64>().ok())
            .filter(|v| *v >= 1.0)
            .map(|v| v.round() as u32)
            .ok_or_else(|| ChartError::Render(format!("chart SVG has no usable {}", name)))
    };

    let width = dimension("width")?;
    let height = dimension("height")?;
    rasterize_svg(&svg.to_markup(), width, height)
}
