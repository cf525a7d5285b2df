//! Figure layout model: the subplot sequence and canvas configuration.

use figkit_core::units;
use figkit_core::{Point, Rect};
use serde::{Deserialize, Serialize};

/// Stroke color for unselected subplots.
pub const UNSELECTED_COLOR: &str = "#A0A0A0";

/// Stroke color for selected subplots.
pub const SELECTED_COLOR: &str = "#FF0000";

/// Default annotation text for a freshly created subplot.
pub const DEFAULT_ANNOTATION: &str = "Add annotation";

/// Default canvas width in inches.
pub const DEFAULT_CANVAS_WIDTH: f64 = 8.0;

/// Default canvas height in inches.
pub const DEFAULT_CANVAS_HEIGHT: f64 = 6.0;

/// Default font size for subplot letters.
pub const DEFAULT_LETTER_FONT_SIZE: f64 = 24.0;

/// A rectangular region of the canvas destined to become one axes region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subplot {
    /// Left edge in canvas pixels.
    pub left: f64,
    /// Top edge in canvas pixels.
    pub top: f64,
    /// Width in canvas pixels, always >= 0.
    pub width: f64,
    /// Height in canvas pixels, always >= 0.
    pub height: f64,
    /// Short label; auto-assigned letters are a single ASCII character but
    /// relabeling accepts free text. Duplicates are permitted.
    pub letter: String,
    /// Free-text annotation.
    pub annotation: String,
    /// Whether the subplot is part of the current selection.
    pub selected: bool,
}

impl Subplot {
    /// Creates an unselected subplot covering `rect` with the given letter
    /// and the default annotation.
    pub fn new(rect: Rect, letter: impl Into<String>) -> Self {
        Self {
            left: rect.left,
            top: rect.top,
            width: rect.width,
            height: rect.height,
            letter: letter.into(),
            annotation: DEFAULT_ANNOTATION.to_string(),
            selected: false,
        }
    }

    /// The subplot's rectangle.
    pub fn rect(&self) -> Rect {
        Rect::new(self.left, self.top, self.width, self.height)
    }

    /// Replaces the subplot's rectangle, normalizing extents.
    pub fn set_rect(&mut self, rect: Rect) {
        self.left = rect.left;
        self.top = rect.top;
        self.width = rect.width;
        self.height = rect.height;
    }

    /// `[left, right]` interval.
    pub fn x_bounds(&self) -> [f64; 2] {
        self.rect().x_bounds()
    }

    /// `[top, bottom]` interval.
    pub fn y_bounds(&self) -> [f64; 2] {
        self.rect().y_bounds()
    }

    /// Stroke color, derived from the selection flag.
    pub fn stroke_color(&self) -> &'static str {
        if self.selected {
            SELECTED_COLOR
        } else {
            UNSELECTED_COLOR
        }
    }

    /// Whether `p` lies strictly inside the subplot.
    pub fn contains(&self, p: Point) -> bool {
        self.rect().contains(p)
    }
}

/// The full canvas configuration plus its ordered subplot collection.
///
/// Insertion order is z-order: later entries draw on top. Hit-test ties
/// between overlapping subplots are resolved by area, not order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FigureLayout {
    /// Canvas width in inches.
    pub canvas_width: f64,
    /// Canvas height in inches.
    pub canvas_height: f64,
    /// Font size for subplot letters.
    pub letter_font_size: f64,
    /// Ordered subplot sequence.
    pub subplots: Vec<Subplot>,
}

impl FigureLayout {
    /// Creates an empty layout with the default canvas configuration.
    pub fn new() -> Self {
        Self::with_canvas_size(DEFAULT_CANVAS_WIDTH, DEFAULT_CANVAS_HEIGHT)
    }

    /// Creates an empty layout with the given canvas size in inches.
    pub fn with_canvas_size(width: f64, height: f64) -> Self {
        Self {
            canvas_width: width,
            canvas_height: height,
            letter_font_size: DEFAULT_LETTER_FONT_SIZE,
            subplots: Vec::new(),
        }
    }

    /// Canvas width in pixels.
    pub fn px_width(&self) -> f64 {
        units::inches_to_px(self.canvas_width)
    }

    /// Canvas height in pixels.
    pub fn px_height(&self) -> f64 {
        units::inches_to_px(self.canvas_height)
    }

    /// The next auto-assigned letter.
    ///
    /// Derived from the existing single-character letters: the highest code
    /// point advanced by one, or 'A' when none exist. The advance does not
    /// wrap and nothing guards against duplicates introduced by relabeling.
    pub fn next_letter(&self) -> char {
        let mut next = 'A';
        for subplot in &self.subplots {
            let mut chars = subplot.letter.chars();
            if let (Some(c), None) = (chars.next(), chars.next()) {
                if let Some(candidate) = char::from_u32(c as u32 + 1) {
                    if candidate > next {
                        next = candidate;
                    }
                }
            }
        }
        next
    }

    /// Creates a subplot covering `rect`, assigns it the next auto-letter,
    /// appends it, and returns its index.
    pub fn add_subplot(&mut self, rect: Rect) -> usize {
        let letter = self.next_letter();
        self.subplots.push(Subplot::new(rect, letter.to_string()));
        self.subplots.len() - 1
    }

    /// Removes the subplot at `index`, returning it if the index is valid.
    pub fn remove_at(&mut self, index: usize) -> Option<Subplot> {
        if index < self.subplots.len() {
            Some(self.subplots.remove(index))
        } else {
            None
        }
    }

    /// Removes every selected subplot, returning how many were removed.
    pub fn remove_selected(&mut self) -> usize {
        let before = self.subplots.len();
        self.subplots.retain(|s| !s.selected);
        before - self.subplots.len()
    }

    /// Clears the selection flag on every subplot.
    pub fn deselect_all(&mut self) {
        for subplot in &mut self.subplots {
            subplot.selected = false;
        }
    }

    /// Indices of the selected subplots, in z-order.
    pub fn selected_indices(&self) -> Vec<usize> {
        self.subplots
            .iter()
            .enumerate()
            .filter(|(_, s)| s.selected)
            .map(|(i, _)| i)
            .collect()
    }

    /// Number of selected subplots.
    pub fn selected_count(&self) -> usize {
        self.subplots.iter().filter(|s| s.selected).count()
    }

    /// Removes all subplots.
    pub fn clear(&mut self) {
        self.subplots.clear();
    }

    /// Whether the layout has no subplots.
    pub fn is_empty(&self) -> bool {
        self.subplots.is_empty()
    }
}

impl Default for FigureLayout {
    fn default() -> Self {
        Self::new()
    }
}
