//! # FigKit Codegen
//!
//! Turns a pixel-space [`figkit_designer::FigureLayout`] into its normalized
//! figure-fraction description and renders that description as a matplotlib
//! script. Also provides the overlap-detection and rescale utilities that
//! operate on the normalized boxes.
//!
//! The transform is the only bit-exact contract: fraction and pixel forms
//! convert both ways exactly for a given canvas size, and rounding to two
//! decimals happens only at emission.

pub mod autofit;
pub mod emitter;
pub mod script;
pub mod transform;

pub use autofit::{
    detect_overlaps, extended_bounding_box, is_overlapping, scale_factor, translation_to_origin,
    Axis, Span,
};
pub use emitter::{emit, AxesEntry, CodeSink, LayoutArtifact};
pub use script::ScriptGenerator;
pub use transform::{to_fraction, to_pixel, FracRect};
