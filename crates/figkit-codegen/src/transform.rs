//! Pixel-space to figure-fraction coordinate transform.
//!
//! Pixel y grows downward from the top-left; figure-fraction y grows upward
//! from the bottom-left, so the vertical axis flips:
//! `y0 = 1 - top/px_height - height/px_height`. Both directions are exact
//! for the same canvas size, and rounding happens only when an artifact is
//! emitted.

use figkit_core::units;
use figkit_core::Rect;
use serde::{Deserialize, Serialize};

/// A rectangle in figure-fraction coordinates (origin bottom-left, y up).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FracRect {
    /// Left edge as a fraction of figure width.
    pub x0: f64,
    /// Bottom edge as a fraction of figure height.
    pub y0: f64,
    /// Width as a fraction of figure width.
    pub width: f64,
    /// Height as a fraction of figure height.
    pub height: f64,
}

impl FracRect {
    /// Creates a fraction rectangle.
    pub fn new(x0: f64, y0: f64, width: f64, height: f64) -> Self {
        Self {
            x0,
            y0,
            width,
            height,
        }
    }

    /// Right edge.
    pub fn x1(&self) -> f64 {
        self.x0 + self.width
    }

    /// Top edge.
    pub fn y1(&self) -> f64 {
        self.y0 + self.height
    }

    /// Returns the rectangle with every component rounded to two decimals.
    pub fn rounded(&self) -> Self {
        Self {
            x0: round2(self.x0),
            y0: round2(self.y0),
            width: round2(self.width),
            height: round2(self.height),
        }
    }

    /// `[x0, y0, width, height]` in matplotlib `add_axes` order.
    pub fn to_array(&self) -> [f64; 4] {
        [self.x0, self.y0, self.width, self.height]
    }
}

/// Rounds to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Converts a pixel rectangle to figure fractions for a canvas of
/// `canvas_width` x `canvas_height` inches.
pub fn to_fraction(rect: Rect, canvas_width: f64, canvas_height: f64) -> FracRect {
    let px_width = units::inches_to_px(canvas_width);
    let px_height = units::inches_to_px(canvas_height);
    let width = rect.width / px_width;
    let height = rect.height / px_height;
    FracRect {
        x0: rect.left / px_width,
        y0: 1.0 - rect.top / px_height - height,
        width,
        height,
    }
}

/// Converts a fraction rectangle back to pixels; the exact inverse of
/// [`to_fraction`] for the same canvas size.
pub fn to_pixel(frac: FracRect, canvas_width: f64, canvas_height: f64) -> Rect {
    let px_width = units::inches_to_px(canvas_width);
    let px_height = units::inches_to_px(canvas_height);
    Rect::new(
        frac.x0 * px_width,
        (1.0 - frac.y0 - frac.height) * px_height,
        frac.width * px_width,
        frac.height * px_height,
    )
}
