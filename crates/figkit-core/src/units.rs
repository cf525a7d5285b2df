//! Canvas unit model and lenient input parsing.
//!
//! The canvas is sized in physical inches and rasterized at a fixed DPI, so
//! an 8 x 6 in figure maps to a 640 x 480 px editing surface. Split spacing
//! is entered in text-line units and converted through the lines-per-inch
//! constant.
//!
//! The parse helpers never fail: UI fields feed them raw strings and invalid
//! input degrades to the supplied fallback.

/// Pixels per inch of canvas space.
pub const DPI: f64 = 80.0;

/// Text lines per inch, used to convert split spacing to pixels.
pub const LINES_PER_INCH: f64 = 6.0;

/// Converts physical inches to canvas pixels.
pub fn inches_to_px(inches: f64) -> f64 {
    inches * DPI
}

/// Converts canvas pixels to physical inches.
pub fn px_to_inches(px: f64) -> f64 {
    px / DPI
}

/// Converts a spacing given in text-line units to canvas pixels.
pub fn line_units_to_px(lines: f64) -> f64 {
    lines / LINES_PER_INCH * DPI
}

/// Parses a positive count field, falling back to `fallback` when the input
/// is not a positive integer.
pub fn parse_count(input: &str, fallback: u32) -> u32 {
    match input.trim().parse::<u32>() {
        Ok(n) if n > 0 => n,
        _ => fallback,
    }
}

/// Parses a non-negative dimension field, falling back to `fallback` when
/// the input is not a finite non-negative number.
pub fn parse_dimension(input: &str, fallback: f64) -> f64 {
    match input.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => v,
        _ => fallback,
    }
}
