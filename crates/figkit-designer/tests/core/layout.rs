use figkit_core::{Point, Rect};
use figkit_designer::layout::DEFAULT_ANNOTATION;
use figkit_designer::{FigureLayout, SELECTED_COLOR, UNSELECTED_COLOR};

#[test]
fn test_default_canvas() {
    let layout = FigureLayout::new();
    assert_eq!(layout.canvas_width, 8.0);
    assert_eq!(layout.canvas_height, 6.0);
    assert_eq!(layout.px_width(), 640.0);
    assert_eq!(layout.px_height(), 480.0);
    assert_eq!(layout.letter_font_size, 24.0);
    assert!(layout.is_empty());
}

#[test]
fn test_add_subplot_defaults() {
    let mut layout = FigureLayout::new();
    let index = layout.add_subplot(Rect::new(10.0, 20.0, 100.0, 80.0));

    let subplot = &layout.subplots[index];
    assert_eq!(subplot.letter, "A");
    assert_eq!(subplot.annotation, DEFAULT_ANNOTATION);
    assert!(!subplot.selected);
    assert_eq!(subplot.x_bounds(), [10.0, 110.0]);
    assert_eq!(subplot.y_bounds(), [20.0, 100.0]);
}

#[test]
fn test_letters_auto_increment() {
    let mut layout = FigureLayout::new();
    layout.add_subplot(Rect::new(0.0, 0.0, 50.0, 50.0));
    layout.add_subplot(Rect::new(60.0, 0.0, 50.0, 50.0));
    layout.add_subplot(Rect::new(120.0, 0.0, 50.0, 50.0));

    let letters: Vec<&str> = layout.subplots.iter().map(|s| s.letter.as_str()).collect();
    assert_eq!(letters, vec!["A", "B", "C"]);
}

#[test]
fn test_next_letter_skips_multi_char_labels() {
    let mut layout = FigureLayout::new();
    layout.add_subplot(Rect::new(0.0, 0.0, 50.0, 50.0));
    layout.subplots[0].letter = "top row".to_string();
    assert_eq!(layout.next_letter(), 'A');

    layout.add_subplot(Rect::new(60.0, 0.0, 50.0, 50.0));
    assert_eq!(layout.subplots[1].letter, "A");
    assert_eq!(layout.next_letter(), 'B');
}

#[test]
fn test_next_letter_does_not_wrap() {
    let mut layout = FigureLayout::new();
    layout.add_subplot(Rect::new(0.0, 0.0, 50.0, 50.0));
    layout.subplots[0].letter = "Z".to_string();
    assert_eq!(layout.next_letter(), '[');
}

#[test]
fn test_duplicate_letters_are_permitted() {
    let mut layout = FigureLayout::new();
    layout.add_subplot(Rect::new(0.0, 0.0, 50.0, 50.0));
    layout.add_subplot(Rect::new(60.0, 0.0, 50.0, 50.0));
    layout.subplots[1].letter = "A".to_string();

    assert_eq!(layout.subplots[0].letter, "A");
    assert_eq!(layout.subplots[1].letter, "A");
    // The derived next letter still advances past the duplicates.
    assert_eq!(layout.next_letter(), 'B');
}

#[test]
fn test_stroke_color_follows_selection() {
    let mut layout = FigureLayout::new();
    let index = layout.add_subplot(Rect::new(0.0, 0.0, 50.0, 50.0));
    assert_eq!(layout.subplots[index].stroke_color(), UNSELECTED_COLOR);

    layout.subplots[index].selected = true;
    assert_eq!(layout.subplots[index].stroke_color(), SELECTED_COLOR);
}

#[test]
fn test_remove_selected() {
    let mut layout = FigureLayout::new();
    layout.add_subplot(Rect::new(0.0, 0.0, 50.0, 50.0));
    layout.add_subplot(Rect::new(60.0, 0.0, 50.0, 50.0));
    layout.add_subplot(Rect::new(120.0, 0.0, 50.0, 50.0));
    layout.subplots[0].selected = true;
    layout.subplots[2].selected = true;

    assert_eq!(layout.selected_indices(), vec![0, 2]);
    assert_eq!(layout.remove_selected(), 2);
    assert_eq!(layout.subplots.len(), 1);
    assert_eq!(layout.subplots[0].letter, "B");
}

#[test]
fn test_deselect_all_and_clear() {
    let mut layout = FigureLayout::new();
    layout.add_subplot(Rect::new(0.0, 0.0, 50.0, 50.0));
    layout.subplots[0].selected = true;

    layout.deselect_all();
    assert_eq!(layout.selected_count(), 0);

    layout.clear();
    assert!(layout.is_empty());
}

#[test]
fn test_subplot_contains_is_strict() {
    let mut layout = FigureLayout::new();
    layout.add_subplot(Rect::new(10.0, 10.0, 100.0, 100.0));
    let subplot = &layout.subplots[0];

    assert!(subplot.contains(Point::new(50.0, 50.0)));
    assert!(!subplot.contains(Point::new(10.0, 50.0)));
    assert!(!subplot.contains(Point::new(110.0, 50.0)));
}
