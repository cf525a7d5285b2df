use figkit_core::Rect;
use figkit_designer::render::render_svg;
use figkit_designer::{FigureLayout, SELECTED_COLOR, UNSELECTED_COLOR};

#[test]
fn test_svg_has_canvas_pixel_dimensions() {
    let svg = render_svg(&FigureLayout::new());
    assert!(svg.contains("viewBox=\"0 0 640 480\""));
}

#[test]
fn test_svg_strokes_follow_selection() {
    let mut layout = FigureLayout::new();
    layout.add_subplot(Rect::new(100.0, 100.0, 200.0, 150.0));
    layout.add_subplot(Rect::new(320.0, 240.0, 160.0, 120.0));
    layout.subplots[1].selected = true;

    let svg = render_svg(&layout);
    assert!(svg.contains(UNSELECTED_COLOR));
    assert!(svg.contains(SELECTED_COLOR));
    assert!(svg.contains(">A</text>"));
    assert!(svg.contains(">B</text>"));
    assert!(svg.contains("font-size=\"24\""));
}

#[test]
fn test_svg_escapes_labels() {
    let mut layout = FigureLayout::new();
    layout.add_subplot(Rect::new(0.0, 0.0, 50.0, 50.0));
    layout.subplots[0].letter = "a<b".to_string();

    let svg = render_svg(&layout);
    assert!(svg.contains("a&lt;b"));
    assert!(!svg.contains("a<b"));
}
