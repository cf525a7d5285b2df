use figkit_core::units;
use figkit_core::Rect;
use figkit_designer::SplitSpec;

#[test]
fn test_parse_defaults_on_invalid_input() {
    let spec = SplitSpec::parse("two", "", "-1", "x");
    assert_eq!(spec.rows, 1);
    assert_eq!(spec.cols, 1);
    assert_eq!(spec.row_spacing_lines, 0.0);
    assert_eq!(spec.col_spacing_lines, 0.0);
}

#[test]
fn test_parse_accepts_valid_input() {
    let spec = SplitSpec::parse("2", "3", "0.5", "1");
    assert_eq!(spec.rows, 2);
    assert_eq!(spec.cols, 3);
    assert_eq!(spec.row_spacing_lines, 0.5);
    assert_eq!(spec.col_spacing_lines, 1.0);
}

#[test]
fn test_single_cell_split_is_identity() {
    let rect = Rect::new(100.0, 100.0, 200.0, 150.0);
    let cells = SplitSpec::new(1, 1, 0.0, 0.0).cell_rects(rect).unwrap();
    assert_eq!(cells, vec![rect]);
}

#[test]
fn test_grid_without_spacing_divides_evenly() {
    let rect = Rect::new(0.0, 0.0, 300.0, 200.0);
    let cells = SplitSpec::new(2, 3, 0.0, 0.0).cell_rects(rect).unwrap();

    assert_eq!(cells.len(), 6);
    for cell in &cells {
        assert_eq!(cell.width, 100.0);
        assert_eq!(cell.height, 100.0);
    }
    // Row-major order: the second cell sits right of the first.
    assert_eq!(cells[1].left, 100.0);
    assert_eq!(cells[1].top, 0.0);
    assert_eq!(cells[3].left, 0.0);
    assert_eq!(cells[3].top, 100.0);
}

#[test]
fn test_partition_coverage_with_spacing() {
    let rect = Rect::new(50.0, 40.0, 360.0, 240.0);
    let spec = SplitSpec::new(2, 3, 0.75, 1.5);
    let cells = spec.cell_rects(rect).unwrap();

    let col_gap = units::line_units_to_px(1.5);
    let row_gap = units::line_units_to_px(0.75);

    // Cells plus the gaps between them cover the original extent exactly.
    let row: Vec<_> = cells.iter().take(3).collect();
    let width_sum: f64 = row.iter().map(|c| c.width).sum::<f64>() + 2.0 * col_gap;
    assert!((width_sum - rect.width).abs() < 1e-9);

    let col: Vec<_> = cells.iter().step_by(3).collect();
    let height_sum: f64 = col.iter().map(|c| c.height).sum::<f64>() + row_gap;
    assert!((height_sum - rect.height).abs() < 1e-9);

    // The last cell's far corner lands on the original's far corner.
    let last = cells.last().unwrap();
    assert!((last.right() - rect.right()).abs() < 1e-9);
    assert!((last.bottom() - rect.bottom()).abs() < 1e-9);
}

#[test]
fn test_oversized_spacing_is_rejected() {
    let rect = Rect::new(0.0, 0.0, 20.0, 20.0);
    // A 10-line gap is far wider than the rect itself.
    let spec = SplitSpec::new(2, 2, 10.0, 10.0);
    assert!(spec.cell_rects(rect).is_none());
}

#[test]
fn test_zero_sized_rect_is_rejected() {
    let rect = Rect::new(0.0, 0.0, 0.0, 0.0);
    assert!(SplitSpec::new(2, 2, 0.0, 0.0).cell_rects(rect).is_none());
}
