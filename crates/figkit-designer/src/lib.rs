//! # FigKit Designer
//!
//! The direct-manipulation core of the FigKit figure-layout editor. A host
//! (a notebook extension, a desktop shell) forwards pointer and keyboard
//! events into an [`EditorSession`] and redraws from the session's
//! [`FigureLayout`] after every mutating event; the session persists itself
//! through an injected [`LayoutStore`].
//!
//! ## Architecture
//!
//! ```text
//! EditorSession (gesture state machine)
//!   ├── FigureLayout (subplot sequence, canvas configuration)
//!   ├── hit_test (corner/edge/interior resolution)
//!   ├── operations (move/resize/align geometry rules)
//!   ├── split (grid partitioning)
//!   └── HistoryManager (snapshot undo)
//!
//! persistence (state blob <-> host text buffer)
//! file_io (design files on disk)
//! render (SVG stroke/label drawing)
//! ```
//!
//! Everything runs synchronously on the host's event thread; there is no
//! interior mutability and no locking.

pub mod editor;
pub mod file_io;
pub mod gesture;
pub mod history;
pub mod hit_test;
pub mod layout;
pub mod operations;
pub mod persistence;
pub mod render;
pub mod split;

pub use editor::EditorSession;
pub use gesture::{AlignMode, GestureState, KeyCommand, NudgeDirection};
pub use history::HistoryManager;
pub use hit_test::{hit_test, Corner, Edge, Hit, HitRegion, HIT_MARGIN};
pub use layout::{FigureLayout, Subplot, SELECTED_COLOR, UNSELECTED_COLOR};
pub use persistence::{decode_state, encode_state, LayoutStore, PLACEHOLDER_MESSAGE, STATE_MARKER};
pub use split::SplitSpec;
