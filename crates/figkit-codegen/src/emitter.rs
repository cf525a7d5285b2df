//! Layout artifact emission.
//!
//! An artifact is the ordered, rounded, figure-fraction description of a
//! layout: one entry per subplot plus the canvas configuration. It is the
//! interchange value handed to the host's code-generation collaborator.

use crate::transform::{to_fraction, FracRect};
use figkit_designer::FigureLayout;

/// One subplot in figure-fraction form.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AxesEntry {
    /// Axes identifier in the generated code, e.g. `axA`.
    pub identifier: String,
    /// Display label (the subplot letter).
    pub label: String,
    /// Normalized rectangle, rounded to two decimals.
    pub rect: FracRect,
}

/// The ordered figure-fraction description of a layout.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LayoutArtifact {
    /// Canvas width in inches.
    pub canvas_width: f64,
    /// Canvas height in inches.
    pub canvas_height: f64,
    /// Font size for the label text.
    pub letter_font_size: f64,
    /// One entry per subplot, in z-order.
    pub axes: Vec<AxesEntry>,
}

/// Code-generation collaborator boundary. The host implements this to route
/// the artifact into its target environment (a notebook cell, a file, a
/// clipboard).
pub trait CodeSink {
    /// Consumes one emitted artifact.
    fn emit(&mut self, artifact: &LayoutArtifact) -> figkit_core::Result<()>;
}

/// Emits the artifact for `layout`: every subplot converted to fractions
/// and rounded, in insertion order.
pub fn emit(layout: &FigureLayout) -> LayoutArtifact {
    let axes = layout
        .subplots
        .iter()
        .map(|subplot| AxesEntry {
            identifier: format!("ax{}", subplot.letter),
            label: subplot.letter.clone(),
            rect: to_fraction(subplot.rect(), layout.canvas_width, layout.canvas_height)
                .rounded(),
        })
        .collect();

    LayoutArtifact {
        canvas_width: layout.canvas_width,
        canvas_height: layout.canvas_height,
        letter_font_size: layout.letter_font_size,
        axes,
    }
}
