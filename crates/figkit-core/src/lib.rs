//! # FigKit Core
//!
//! Shared foundation for the FigKit figure-layout editor: pixel-space
//! geometry primitives, the fixed canvas unit model (inches at a constant
//! DPI), and the workspace error types.
//!
//! Everything here is host-agnostic. The editor crates build on these types;
//! the embedding host never needs them directly except to construct points
//! from its own event coordinates.

pub mod error;
pub mod geometry;
pub mod units;

pub use error::{Error, Result};
pub use geometry::{Point, Rect};
pub use units::{inches_to_px, line_units_to_px, px_to_inches, DPI, LINES_PER_INCH};
