//! Overlap detection and rescale utilities over figure-fraction boxes.
//!
//! A subplot's plotted region is smaller than the space its axis labels
//! occupy. These helpers work on pairs of boxes per region (the plot box
//! and the outer box including label space) to detect label collisions
//! between neighboring regions and compute the shrink factor that removes
//! them, plus repositioning helpers for packing a layout against the
//! figure origin.

/// Axis along which neighboring regions are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// A corner-form box in figure-fraction coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl Span {
    /// Creates a span from its corners.
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Extents `(width, height)`.
    pub fn size(&self) -> (f64, f64) {
        (self.x1 - self.x0, self.y1 - self.y0)
    }

    /// Returns the span scaled by `scale`, anchored at its `(x0, y0)`
    /// corner.
    pub fn rescale(&self, scale: f64) -> Self {
        let (width, height) = self.size();
        Self {
            x0: self.x0,
            y0: self.y0,
            x1: self.x0 + width * scale,
            y1: self.y0 + height * scale,
        }
    }

    /// Grows the span outward by `border` on every side.
    pub fn expand(&self, border: f64) -> Self {
        Self {
            x0: self.x0 - border,
            y0: self.y0 - border,
            x1: self.x1 + border,
            y1: self.y1 + border,
        }
    }
}

/// Whether two spans overlap (closed intervals on both axes).
pub fn is_overlapping(a: &Span, b: &Span) -> bool {
    a.x0 <= b.x1 && b.x0 <= a.x1 && a.y0 <= b.y1 && b.y0 <= a.y1
}

/// Shrink factor that eliminates the label-space overlap between two
/// neighboring regions along `axis`.
///
/// `pb_near`/`ab_near` are the plot box and outer (label-inclusive) box of
/// the region nearer the origin on that axis; `pb_far`/`ab_far` the farther
/// one. Returns `1.0` when the gap already suffices and `0.0` when the plot
/// boxes are flush on the axis, so shrinking cannot help.
pub fn scale_factor(pb_near: &Span, pb_far: &Span, ab_near: &Span, ab_far: &Span, axis: Axis) -> f64 {
    let (extra_space_needed, scaling_dim) = match axis {
        Axis::Horizontal => {
            if pb_near.x0 == pb_far.x0 {
                return 0.0;
            }
            (ab_near.x1 - ab_far.x0, pb_near.size().0)
        }
        Axis::Vertical => {
            if pb_near.y0 == pb_far.y0 {
                return 0.0;
            }
            (ab_near.y1 - ab_far.y0, pb_near.size().1)
        }
    };

    if extra_space_needed <= 0.0 {
        return 1.0;
    }
    1.0 - extra_space_needed / scaling_dim
}

/// Index pairs `(i, j)`, `i < j`, whose outer boxes collide without their
/// plot boxes colliding: label-only overlap, fixable by shrinking.
pub fn detect_overlaps(outer: &[Span], plot: &[Span]) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    for i in 0..outer.len() {
        for j in (i + 1)..outer.len() {
            let label_overlap = is_overlapping(&outer[i], &outer[j]);
            let plot_overlap = is_overlapping(&plot[i], &plot[j]);
            if label_overlap && !plot_overlap {
                pairs.push((i, j));
            }
        }
    }
    pairs
}

/// The smallest span enclosing all of `spans`.
pub fn extended_bounding_box(spans: &[Span]) -> Span {
    let mut bbox = Span::new(f64::INFINITY, f64::INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY);
    for span in spans {
        bbox.x0 = bbox.x0.min(span.x0);
        bbox.y0 = bbox.y0.min(span.y0);
        bbox.x1 = bbox.x1.max(span.x1);
        bbox.y1 = bbox.y1.max(span.y1);
    }
    bbox
}

/// Translation `(dx, dy)` that moves the group's bounding box to sit at
/// `margin` from the figure origin.
pub fn translation_to_origin(spans: &[Span], margin: f64) -> (f64, f64) {
    let bbox = extended_bounding_box(spans);
    (margin - bbox.x0, margin - bbox.y0)
}
