//! The editor session: pointer/keyboard dispatch and command handling.
//!
//! [`EditorSession`] is owned by the host and receives every event
//! synchronously. It owns the live [`FigureLayout`], the undo history, and
//! the current [`GestureState`]; after each mutating handler it persists the
//! layout through the injected [`LayoutStore`], so the host only has to
//! redraw.

use crate::gesture::{AlignMode, GestureState, KeyCommand, NudgeDirection};
use crate::history::HistoryManager;
use crate::hit_test::{hit_test, Hit, HitRegion};
use crate::layout::FigureLayout;
use crate::operations;
use crate::persistence::{self, encode_state, LayoutStore};
use crate::split::SplitSpec;
use figkit_core::{Point, Rect};

/// Minimum drag extent (per axis) for a create gesture; anything smaller in
/// both dimensions clears the selection instead.
pub const NEW_MIN_SIZE: f64 = 15.0;

/// Maximum displacement (per axis) for a pointer gesture on a subplot to
/// count as a click rather than a move.
pub const MOVE_THRESHOLD: f64 = 5.0;

/// Pixels moved per nudge key event.
pub const NUDGE_STEP: f64 = 1.0;

/// A live editing session over one figure layout.
pub struct EditorSession {
    layout: FigureLayout,
    history: HistoryManager,
    gesture: GestureState,
    store: Option<Box<dyn LayoutStore>>,
}

impl EditorSession {
    /// Creates a session over an empty default layout, with no storage.
    pub fn new() -> Self {
        Self::from_layout(FigureLayout::new())
    }

    /// Creates a session over an existing layout, with no storage.
    pub fn from_layout(layout: FigureLayout) -> Self {
        Self {
            layout,
            history: HistoryManager::new(),
            gesture: GestureState::Idle,
            store: None,
        }
    }

    /// Creates a session restored from `store`, falling back to the empty
    /// default layout when nothing usable is stored. The store stays
    /// injected and receives the blob after every mutating event.
    pub fn with_store(mut store: Box<dyn LayoutStore>) -> Self {
        let layout = persistence::restore_layout(store.as_mut());
        Self {
            layout,
            history: HistoryManager::new(),
            gesture: GestureState::Idle,
            store: Some(store),
        }
    }

    /// The live layout.
    pub fn layout(&self) -> &FigureLayout {
        &self.layout
    }

    /// The current gesture state.
    pub fn gesture(&self) -> GestureState {
        self.gesture
    }

    /// The undo history.
    pub fn history(&self) -> &HistoryManager {
        &self.history
    }

    /// Handles a pointer-down at canvas-local `p`.
    ///
    /// Pending copy consumes the event unconditionally; pending align
    /// consumes it when a subplot is hit and otherwise falls through to the
    /// ordinary hit dispatch (dropping the pending mode).
    pub fn pointer_down(&mut self, p: Point) {
        match self.gesture {
            GestureState::AwaitingCopyPlacement { source } => {
                self.place_copy(source, p);
                return;
            }
            GestureState::AwaitingAlignTarget { subject, mode } => {
                if let Some(hit) = hit_test(&self.layout, p) {
                    self.apply_align(subject, hit.index, mode);
                    return;
                }
                self.gesture = GestureState::Idle;
            }
            _ => {}
        }

        self.gesture = match hit_test(&self.layout, p) {
            Some(Hit {
                index,
                region: HitRegion::Interior,
            }) => GestureState::Moving { index, anchor: p },
            Some(Hit { index, region }) => GestureState::Resizing {
                index,
                region,
                anchor: p,
            },
            None => GestureState::DrawingNew { anchor: p },
        };
    }

    /// Handles a pointer-up at canvas-local `p`, finalizing the active
    /// gesture. The gesture state always returns to idle afterwards.
    pub fn pointer_up(&mut self, p: Point) {
        let gesture = std::mem::replace(&mut self.gesture, GestureState::Idle);
        match gesture {
            GestureState::DrawingNew { anchor } => self.finish_new(anchor, p),
            GestureState::Moving { index, anchor } => self.finish_move(index, anchor, p),
            GestureState::Resizing { index, region, .. } => self.finish_resize(index, region, p),
            // A pointer-up arrives here only while a pending mode awaits its
            // pointer-down; leave the pending mode armed.
            pending => self.gesture = pending,
        }
    }

    /// Handles a keyboard command. Key-repeat delivers repeated calls; the
    /// history collapses a held key into one checkpoint until
    /// [`key_up`](Self::key_up).
    pub fn key_down(&mut self, cmd: KeyCommand) {
        match cmd {
            KeyCommand::Undo => self.undo(),
            KeyCommand::DeleteSelected => self.request_delete(),
            KeyCommand::Nudge(direction) => self.nudge_selected(direction),
            KeyCommand::ArmCopy => self.request_copy(),
            KeyCommand::Cancel => self.cancel_pending(),
        }
    }

    /// Handles a key release, re-arming per-keypress checkpointing.
    pub fn key_up(&mut self) {
        self.history.key_released();
    }

    /// Arms align mode on the single selected subplot. Ignored unless
    /// exactly one subplot is selected.
    pub fn request_align(&mut self, mode: AlignMode) {
        match self.layout.selected_indices().as_slice() {
            [subject] => {
                self.gesture = GestureState::AwaitingAlignTarget {
                    subject: *subject,
                    mode,
                };
            }
            selected => {
                tracing::debug!(
                    "Align requested with {} subplots selected, ignoring",
                    selected.len()
                );
            }
        }
    }

    /// Arms copy mode on the single selected subplot. Ignored unless
    /// exactly one subplot is selected.
    pub fn request_copy(&mut self) {
        match self.layout.selected_indices().as_slice() {
            [source] => {
                self.gesture = GestureState::AwaitingCopyPlacement { source: *source };
            }
            selected => {
                tracing::debug!(
                    "Copy requested with {} subplots selected, ignoring",
                    selected.len()
                );
            }
        }
    }

    /// Cancels a pending align/copy mode without touching the layout.
    pub fn cancel_pending(&mut self) {
        if matches!(
            self.gesture,
            GestureState::AwaitingAlignTarget { .. } | GestureState::AwaitingCopyPlacement { .. }
        ) {
            self.gesture = GestureState::Idle;
        }
    }

    /// Deletes every selected subplot.
    pub fn request_delete(&mut self) {
        if self.layout.selected_count() == 0 {
            return;
        }
        self.history.checkpoint(&self.layout);
        self.layout.remove_selected();
        self.persist();
    }

    /// Removes all subplots.
    pub fn request_clear(&mut self) {
        if self.layout.is_empty() {
            return;
        }
        self.history.checkpoint(&self.layout);
        self.layout.clear();
        self.persist();
    }

    /// Splits the single selected subplot into a grid per `spec`. Ignored
    /// unless exactly one subplot is selected or when the spacing leaves no
    /// room for the cells.
    pub fn request_split(&mut self, spec: SplitSpec) {
        let index = match self.layout.selected_indices().as_slice() {
            [index] => *index,
            selected => {
                tracing::debug!(
                    "Split requested with {} subplots selected, ignoring",
                    selected.len()
                );
                return;
            }
        };
        let rect = self.layout.subplots[index].rect();
        let Some(cells) = spec.cell_rects(rect) else {
            tracing::warn!(
                "Split {}x{} leaves no room for cells, ignoring",
                spec.rows,
                spec.cols
            );
            return;
        };
        self.history.checkpoint(&self.layout);
        self.layout.remove_at(index);
        for cell in cells {
            self.layout.add_subplot(cell);
        }
        self.persist();
    }

    /// Updates the canvas size in inches. Non-positive or non-finite
    /// dimensions make this a no-op.
    pub fn request_canvas_resize(&mut self, width: f64, height: f64) {
        if !(width.is_finite() && width > 0.0 && height.is_finite() && height > 0.0) {
            tracing::debug!("Invalid canvas size {}x{}, ignoring", width, height);
            return;
        }
        self.history.checkpoint(&self.layout);
        self.layout.canvas_width = width;
        self.layout.canvas_height = height;
        self.persist();
    }

    /// Sets the letter of every selected subplot to `label`.
    pub fn request_relabel(&mut self, label: &str) {
        if self.layout.selected_count() == 0 {
            return;
        }
        self.history.checkpoint(&self.layout);
        for subplot in self.layout.subplots.iter_mut().filter(|s| s.selected) {
            subplot.letter = label.to_string();
        }
        self.persist();
    }

    /// Pops the most recent snapshot into the live layout. A no-op on an
    /// empty history; never touches the gesture state.
    pub fn undo(&mut self) {
        if self.history.undo(&mut self.layout) {
            self.persist();
        }
    }

    fn finish_new(&mut self, anchor: Point, p: Point) {
        let width = (p.x - anchor.x).abs();
        let height = (p.y - anchor.y).abs();
        if width < NEW_MIN_SIZE && height < NEW_MIN_SIZE {
            // Degenerate drag: clear the selection instead of creating a
            // sliver.
            self.layout.deselect_all();
        } else {
            self.history.checkpoint(&self.layout);
            let index = self.layout.add_subplot(Rect::from_corners(anchor, p));
            self.layout.subplots[index].selected = true;
        }
        self.persist();
    }

    fn finish_move(&mut self, index: usize, anchor: Point, p: Point) {
        let dx = p.x - anchor.x;
        let dy = p.y - anchor.y;
        let is_click = dx.abs() < MOVE_THRESHOLD && dy.abs() < MOVE_THRESHOLD;
        if !is_click {
            self.history.checkpoint(&self.layout);
        }
        if let Some(subplot) = self.layout.subplots.get_mut(index) {
            if is_click {
                subplot.selected = !subplot.selected;
            } else {
                subplot.left += dx;
                subplot.top += dy;
                subplot.selected = true;
            }
        }
        self.persist();
    }

    fn finish_resize(&mut self, index: usize, region: HitRegion, p: Point) {
        self.history.checkpoint(&self.layout);
        if let Some(subplot) = self.layout.subplots.get_mut(index) {
            let resized = operations::resize_rect(subplot.rect(), region, p);
            subplot.set_rect(resized);
        }
        self.persist();
    }

    fn place_copy(&mut self, source: usize, p: Point) {
        self.gesture = GestureState::Idle;
        let Some(template) = self.layout.subplots.get(source).cloned() else {
            tracing::warn!("Copy source {} no longer exists, ignoring", source);
            return;
        };
        self.history.checkpoint(&self.layout);
        let mut clone = template;
        clone.left = p.x;
        clone.top = p.y;
        clone.selected = false;
        self.layout.subplots.push(clone);
        self.persist();
    }

    fn apply_align(&mut self, subject: usize, reference: usize, mode: AlignMode) {
        self.gesture = GestureState::Idle;
        if subject >= self.layout.subplots.len() {
            tracing::warn!("Align subject {} no longer exists, ignoring", subject);
            return;
        }
        self.history.checkpoint(&self.layout);
        let reference_rect = self.layout.subplots[reference].rect();
        let subplot = &mut self.layout.subplots[subject];
        let aligned = operations::align_rect(subplot.rect(), reference_rect, mode);
        subplot.set_rect(aligned);
        self.layout.deselect_all();
        self.persist();
    }

    fn nudge_selected(&mut self, direction: NudgeDirection) {
        if self.layout.selected_count() == 0 {
            return;
        }
        self.history.checkpoint_for_key(&self.layout);
        let (dx, dy) = direction.delta();
        for subplot in self.layout.subplots.iter_mut().filter(|s| s.selected) {
            subplot.left += dx * NUDGE_STEP;
            subplot.top += dy * NUDGE_STEP;
        }
        self.persist();
    }

    fn persist(&mut self) {
        let Some(store) = self.store.as_mut() else {
            return;
        };
        match encode_state(&self.layout) {
            Ok(blob) => {
                if let Err(e) = store.save(&blob) {
                    tracing::warn!("Failed to save layout state: {:#}", e);
                }
            }
            Err(e) => tracing::warn!("Failed to encode layout state: {}", e),
        }
    }
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new()
    }
}
