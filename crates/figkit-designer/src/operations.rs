//! Geometry mutation rules for move, resize, and align.
//!
//! These are pure rectangle computations; the editor session decides when to
//! apply them and handles checkpointing and selection.

use crate::gesture::AlignMode;
use crate::hit_test::{Corner, Edge, HitRegion};
use figkit_core::{Point, Rect};

/// Applies a corner or edge drag ending at `end` to `rect`.
///
/// Each of the four corner cases and four edge cases is a distinct rule:
/// dragging a corner pins the opposite corner, dragging an edge moves only
/// that edge's coordinate. An interior region leaves the rectangle
/// unchanged. The result is normalized, so dragging a handle past the
/// opposite side folds rather than producing negative extents.
pub fn resize_rect(rect: Rect, region: HitRegion, end: Point) -> Rect {
    match region {
        HitRegion::Corner(Corner::TopLeft) => {
            Rect::from_corners(Point::new(rect.right(), rect.bottom()), end)
        }
        HitRegion::Corner(Corner::TopRight) => {
            Rect::from_corners(Point::new(rect.left, rect.bottom()), end)
        }
        HitRegion::Corner(Corner::BottomLeft) => {
            Rect::from_corners(Point::new(rect.right(), rect.top), end)
        }
        HitRegion::Corner(Corner::BottomRight) => {
            Rect::from_corners(Point::new(rect.left, rect.top), end)
        }
        HitRegion::Edge(Edge::Left) => {
            Rect::new(end.x, rect.top, rect.right() - end.x, rect.height)
        }
        HitRegion::Edge(Edge::Right) => {
            Rect::new(rect.left, rect.top, end.x - rect.left, rect.height)
        }
        HitRegion::Edge(Edge::Top) => {
            Rect::new(rect.left, end.y, rect.width, rect.bottom() - end.y)
        }
        HitRegion::Edge(Edge::Bottom) => {
            Rect::new(rect.left, rect.top, rect.width, end.y - rect.top)
        }
        HitRegion::Interior => rect,
    }
}

/// Returns the subject rectangle repositioned so it aligns with `reference`
/// in the given mode. Extents are unchanged.
pub fn align_rect(subject: Rect, reference: Rect, mode: AlignMode) -> Rect {
    let mut aligned = subject;
    match mode {
        AlignMode::Left => aligned.left = reference.left,
        AlignMode::Right => aligned.left = reference.right() - subject.width,
        AlignMode::Top => aligned.top = reference.top,
        AlignMode::Bottom => aligned.top = reference.bottom() - subject.height,
        AlignMode::CenterHorizontal => aligned.left = reference.center_x() - subject.width / 2.0,
        AlignMode::CenterVertical => aligned.top = reference.center_y() - subject.height / 2.0,
    }
    aligned
}
