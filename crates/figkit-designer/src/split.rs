//! Grid partitioning of a subplot into rows and columns.

use figkit_core::units;
use figkit_core::Rect;

/// Parameters for splitting a subplot into a grid.
///
/// Spacing is given in text-line units and converted to pixels through the
/// lines-per-inch and DPI constants. Counts come from UI text fields, so
/// [`parse`](Self::parse) falls back to 1 for anything unparseable and to
/// zero spacing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitSpec {
    /// Number of rows.
    pub rows: u32,
    /// Number of columns.
    pub cols: u32,
    /// Vertical gap between rows, in text-line units.
    pub row_spacing_lines: f64,
    /// Horizontal gap between columns, in text-line units.
    pub col_spacing_lines: f64,
}

impl SplitSpec {
    /// Creates a split spec from already-validated values.
    pub fn new(rows: u32, cols: u32, row_spacing_lines: f64, col_spacing_lines: f64) -> Self {
        Self {
            rows,
            cols,
            row_spacing_lines,
            col_spacing_lines,
        }
    }

    /// Parses UI field text, defaulting counts to 1 and spacing to 0.
    pub fn parse(rows: &str, cols: &str, row_spacing: &str, col_spacing: &str) -> Self {
        Self {
            rows: units::parse_count(rows, 1),
            cols: units::parse_count(cols, 1),
            row_spacing_lines: units::parse_dimension(row_spacing, 0.0),
            col_spacing_lines: units::parse_dimension(col_spacing, 0.0),
        }
    }

    /// Validates counts and spacing.
    pub fn is_valid(&self) -> bool {
        self.rows > 0
            && self.cols > 0
            && self.row_spacing_lines >= 0.0
            && self.col_spacing_lines >= 0.0
    }

    /// Total number of grid cells.
    pub fn total_cells(&self) -> u32 {
        self.rows * self.cols
    }

    /// Horizontal gap in pixels.
    pub fn col_gap_px(&self) -> f64 {
        units::line_units_to_px(self.col_spacing_lines)
    }

    /// Vertical gap in pixels.
    pub fn row_gap_px(&self) -> f64 {
        units::line_units_to_px(self.row_spacing_lines)
    }

    /// Partitions `rect` into row-major cell rectangles.
    ///
    /// Cell extent is `(extent - (count - 1) * gap) / count`, so the cells
    /// plus the gaps between them cover the original rectangle exactly.
    /// Returns `None` when the spacing leaves no room for the cells.
    pub fn cell_rects(&self, rect: Rect) -> Option<Vec<Rect>> {
        if !self.is_valid() {
            return None;
        }

        let col_gap = self.col_gap_px();
        let row_gap = self.row_gap_px();
        let cols = self.cols as f64;
        let rows = self.rows as f64;

        let cell_width = (rect.width - (cols - 1.0) * col_gap) / cols;
        let cell_height = (rect.height - (rows - 1.0) * row_gap) / rows;
        if cell_width <= 0.0 || cell_height <= 0.0 {
            return None;
        }

        let mut cells = Vec::with_capacity(self.total_cells() as usize);
        for row in 0..self.rows {
            for col in 0..self.cols {
                let left = rect.left + col as f64 * (cell_width + col_gap);
                let top = rect.top + row as f64 * (cell_height + row_gap);
                cells.push(Rect::new(left, top, cell_width, cell_height));
            }
        }
        Some(cells)
    }
}
