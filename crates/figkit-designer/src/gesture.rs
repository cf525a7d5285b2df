//! Gesture and command types for the interaction state machine.

use crate::hit_test::HitRegion;
use figkit_core::Point;

/// Alignment mode for the align command (subject follows reference).
///
/// Only the subject's position moves; its extents are unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlignMode {
    /// Match left edges.
    Left,
    /// Match right edges.
    Right,
    /// Match top edges.
    Top,
    /// Match bottom edges.
    Bottom,
    /// Match horizontal centers.
    CenterHorizontal,
    /// Match vertical centers.
    CenterVertical,
}

/// Direction for a keyboard nudge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NudgeDirection {
    Left,
    Right,
    Up,
    Down,
}

impl NudgeDirection {
    /// Unit displacement for this direction.
    pub fn delta(self) -> (f64, f64) {
        match self {
            Self::Left => (-1.0, 0.0),
            Self::Right => (1.0, 0.0),
            Self::Up => (0.0, -1.0),
            Self::Down => (0.0, 1.0),
        }
    }
}

/// Keyboard commands the host forwards into the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    /// Undo the last checkpointed action.
    Undo,
    /// Delete every selected subplot.
    DeleteSelected,
    /// Nudge the selection by a fixed step.
    Nudge(NudgeDirection),
    /// Arm copy mode on the single selected subplot.
    ArmCopy,
    /// Cancel a pending align/copy mode (Escape).
    Cancel,
}

/// The active gesture, with the context each variant needs to finish.
///
/// Exactly one gesture is live at a time; every completed gesture resets to
/// [`Idle`](GestureState::Idle). The pending variants wait for the next
/// pointer-down rather than a pointer-up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureState {
    /// No gesture in progress.
    Idle,
    /// Dragging out a new subplot from `anchor`.
    DrawingNew {
        /// Pointer-down position.
        anchor: Point,
    },
    /// Dragging an existing subplot (or clicking it to toggle selection).
    Moving {
        /// Index of the targeted subplot.
        index: usize,
        /// Pointer-down position.
        anchor: Point,
    },
    /// Dragging a corner or edge of an existing subplot.
    Resizing {
        /// Index of the targeted subplot.
        index: usize,
        /// Which corner or edge is being dragged.
        region: HitRegion,
        /// Pointer-down position.
        anchor: Point,
    },
    /// Align armed; the next pointer-down picks the reference subplot.
    AwaitingAlignTarget {
        /// Index of the subject subplot recorded when align was requested.
        subject: usize,
        /// The requested alignment.
        mode: AlignMode,
    },
    /// Copy armed; the next pointer-down places the clone.
    AwaitingCopyPlacement {
        /// Index of the source subplot recorded when copy was requested.
        source: usize,
    },
}

impl Default for GestureState {
    fn default() -> Self {
        Self::Idle
    }
}
