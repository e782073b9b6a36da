//! Self-contained HTML page around a rendered chart.
//!
//! The page inlines its CSS and a small script that wires `mouseover` /
//! `mouseout` on every cell to the tooltip, producing the same text as
//! [`crate::tooltip::tooltip_html`].

use crate::document::{escape_text, RenderTarget};

const PAGE_CSS: &str = r#"
body { font-family: sans-serif; margin: 0; padding: 16px; background: #ffffff; color: #222222; }
#title { font-size: 24px; font-weight: bold; }
#description { font-size: 14px; }
.cell:hover { stroke: #000000; stroke-width: 1px; }
#tooltip { background: rgba(255, 255, 255, 0.95); border: 1px solid #999999; border-radius: 4px; padding: 6px 8px; font-size: 12px; line-height: 1.4; }
"#;

const TOOLTIP_SCRIPT: &str = r#"
(function () {
  var tooltip = document.getElementById('tooltip');
  if (!tooltip) { return; }
  document.querySelectorAll('.cell').forEach(function (cell) {
    cell.addEventListener('mouseover', function (event) {
      var year = cell.getAttribute('data-year');
      var month = Number(cell.getAttribute('data-month')) + 1;
      tooltip.innerHTML = 'Year: ' + year + '<br>Month: ' + month +
        '<br>Variance: ' + cell.getAttribute('data-temp');
      tooltip.style.opacity = 1;
      // Page coordinates, not plot-local ones: the tooltip is absolutely
      // positioned in the body, outside the translated plot group.
      tooltip.style.left = event.pageX + 'px';
      tooltip.style.top = event.pageY + 'px';
      tooltip.setAttribute('data-year', year);
    });
    cell.addEventListener('mouseout', function () {
      tooltip.style.opacity = 0;
    });
  });
})();
"#;

/// Wrap the target's content in a complete HTML document.
pub fn render_page(title: &str, target: &RenderTarget) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>{css}</style>
</head>
<body>
{content}<script>{js}</script>
</body>
</html>
"#,
        title = escape_text(title),
        css = PAGE_CSS,
        content = target.inner_markup(),
        js = TOOLTIP_SCRIPT,
    )
}
