//! Minimal SVG rendering of a figure layout.
//!
//! Stroke-and-label drawing only: each subplot becomes a stroked rectangle
//! in its selection-derived color with its letter at the top-left corner.
//! Hosts that draw natively can ignore this and read the layout directly.

use crate::layout::FigureLayout;

/// Renders the layout as a standalone SVG document.
pub fn render_svg(layout: &FigureLayout) -> String {
    let width = layout.px_width();
    let height = layout.px_height();

    let mut svg = String::new();
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\" viewBox=\"0 0 {} {}\">\n",
        width, height, width, height
    ));

    for subplot in &layout.subplots {
        svg.push_str(&format!(
            "  <rect x=\"{:.1}\" y=\"{:.1}\" width=\"{:.1}\" height=\"{:.1}\" fill=\"none\" stroke=\"{}\" stroke-width=\"1\"/>\n",
            subplot.left,
            subplot.top,
            subplot.width,
            subplot.height,
            subplot.stroke_color()
        ));
        svg.push_str(&format!(
            "  <text x=\"{:.1}\" y=\"{:.1}\" font-size=\"{}\" fill=\"{}\">{}</text>\n",
            subplot.left,
            subplot.top,
            layout.letter_font_size,
            subplot.stroke_color(),
            escape_text(&subplot.letter)
        ));
    }

    svg.push_str("</svg>\n");
    svg
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}
