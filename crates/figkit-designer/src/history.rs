//! Snapshot-based undo history.
//!
//! Each checkpoint deep-copies the whole [`FigureLayout`]; undo pops the
//! most recent copy back into the live layout. Layouts are small, so
//! snapshotting stays cheap and avoids inverse-operation bookkeeping
//! entirely. There is no redo.

use crate::layout::FigureLayout;

/// Undo stack over full layout snapshots.
///
/// One checkpoint corresponds to one logical user action. Key-repeat events
/// from a held key share a single checkpoint: the first repeat sets the
/// key-held flag and later repeats are suppressed until
/// [`key_released`](Self::key_released).
#[derive(Debug, Clone, Default)]
pub struct HistoryManager {
    stack: Vec<FigureLayout>,
    key_held: bool,
}

impl HistoryManager {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self {
            stack: Vec::new(),
            key_held: false,
        }
    }

    /// Pushes a deep copy of `layout` onto the stack.
    pub fn checkpoint(&mut self, layout: &FigureLayout) {
        self.stack.push(layout.clone());
    }

    /// Checkpoint for a key-driven action; suppressed while the key is held
    /// so a whole key-repeat run costs one history entry.
    pub fn checkpoint_for_key(&mut self, layout: &FigureLayout) {
        if !self.key_held {
            self.checkpoint(layout);
            self.key_held = true;
        }
    }

    /// Clears the key-held flag; the next key-driven action checkpoints
    /// again.
    pub fn key_released(&mut self) {
        self.key_held = false;
    }

    /// Pops the most recent snapshot into `layout`. Returns `false` (and
    /// leaves `layout` untouched) when the stack is empty.
    pub fn undo(&mut self, layout: &mut FigureLayout) -> bool {
        match self.stack.pop() {
            Some(snapshot) => {
                *layout = snapshot;
                true
            }
            None => false,
        }
    }

    /// Whether an undo is available.
    pub fn can_undo(&self) -> bool {
        !self.stack.is_empty()
    }

    /// Number of stored snapshots.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Drops all snapshots and resets the key-held flag.
    pub fn clear(&mut self) {
        self.stack.clear();
        self.key_held = false;
    }
}
