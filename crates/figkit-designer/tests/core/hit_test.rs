use figkit_core::{Point, Rect};
use figkit_designer::{hit_test, Corner, Edge, FigureLayout, HitRegion};

fn layout_with(rects: &[Rect]) -> FigureLayout {
    let mut layout = FigureLayout::new();
    for rect in rects {
        layout.add_subplot(*rect);
    }
    layout
}

#[test]
fn test_miss_returns_none() {
    let layout = layout_with(&[Rect::new(100.0, 100.0, 200.0, 150.0)]);
    assert!(hit_test(&layout, Point::new(50.0, 50.0)).is_none());
    assert!(hit_test(&layout, Point::new(400.0, 300.0)).is_none());
}

#[test]
fn test_boundary_point_misses() {
    // Containment is strict: a point exactly on the edge is outside.
    let layout = layout_with(&[Rect::new(100.0, 100.0, 200.0, 150.0)]);
    assert!(hit_test(&layout, Point::new(100.0, 150.0)).is_none());
    assert!(hit_test(&layout, Point::new(150.0, 100.0)).is_none());
}

#[test]
fn test_interior_hit() {
    let layout = layout_with(&[Rect::new(100.0, 100.0, 200.0, 150.0)]);
    let hit = hit_test(&layout, Point::new(200.0, 175.0)).unwrap();
    assert_eq!(hit.index, 0);
    assert_eq!(hit.region, HitRegion::Interior);
}

#[test]
fn test_corner_hits() {
    let layout = layout_with(&[Rect::new(100.0, 100.0, 200.0, 150.0)]);

    let cases = [
        (Point::new(105.0, 105.0), Corner::TopLeft),
        (Point::new(295.0, 105.0), Corner::TopRight),
        (Point::new(105.0, 245.0), Corner::BottomLeft),
        (Point::new(295.0, 245.0), Corner::BottomRight),
    ];
    for (point, corner) in cases {
        let hit = hit_test(&layout, point).unwrap();
        assert_eq!(hit.region, HitRegion::Corner(corner), "at {:?}", point);
    }
}

#[test]
fn test_edge_hits() {
    let layout = layout_with(&[Rect::new(100.0, 100.0, 200.0, 150.0)]);

    let cases = [
        (Point::new(105.0, 175.0), Edge::Left),
        (Point::new(295.0, 175.0), Edge::Right),
        (Point::new(200.0, 105.0), Edge::Top),
        (Point::new(200.0, 245.0), Edge::Bottom),
    ];
    for (point, edge) in cases {
        let hit = hit_test(&layout, point).unwrap();
        assert_eq!(hit.region, HitRegion::Edge(edge), "at {:?}", point);
    }
}

#[test]
fn test_corner_takes_priority_over_edges() {
    let layout = layout_with(&[Rect::new(100.0, 100.0, 200.0, 150.0)]);
    // Within the margin of both the left edge and the top edge.
    let hit = hit_test(&layout, Point::new(108.0, 108.0)).unwrap();
    assert_eq!(hit.region, HitRegion::Corner(Corner::TopLeft));
}

#[test]
fn test_nested_inset_wins_by_area() {
    // A small inset fully inside a larger subplot: the overlap region must
    // resolve to the inset regardless of z-order.
    let layout = layout_with(&[
        Rect::new(50.0, 50.0, 400.0, 300.0),
        Rect::new(200.0, 150.0, 80.0, 60.0),
    ]);

    let hit = hit_test(&layout, Point::new(240.0, 180.0)).unwrap();
    assert_eq!(hit.index, 1);

    // Outside the inset, the outer subplot is hit.
    let hit = hit_test(&layout, Point::new(100.0, 200.0)).unwrap();
    assert_eq!(hit.index, 0);
}

#[test]
fn test_area_tie_goes_to_first_in_sequence() {
    let layout = layout_with(&[
        Rect::new(100.0, 100.0, 100.0, 100.0),
        Rect::new(150.0, 100.0, 100.0, 100.0),
    ]);
    let hit = hit_test(&layout, Point::new(175.0, 150.0)).unwrap();
    assert_eq!(hit.index, 0);
}

#[test]
fn test_inset_corner_resolved_on_inset() {
    let layout = layout_with(&[
        Rect::new(50.0, 50.0, 400.0, 300.0),
        Rect::new(200.0, 150.0, 80.0, 60.0),
    ]);
    let hit = hit_test(&layout, Point::new(205.0, 155.0)).unwrap();
    assert_eq!(hit.index, 1);
    assert_eq!(hit.region, HitRegion::Corner(Corner::TopLeft));
}
