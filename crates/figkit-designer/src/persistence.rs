//! State-blob persistence through the host's text buffer.
//!
//! The layout round-trips as a recognizable marker line followed by the
//! layout JSON. Decoding is forgiving: a missing marker or corrupt JSON
//! yields `None` and the caller starts from the empty default layout.

use crate::layout::FigureLayout;
use figkit_core::Result;

/// Marker line preceding the layout JSON in the host text buffer.
pub const STATE_MARKER: &str = "# figkit layout state";

/// Message the host shows when no persisted state exists yet.
pub const PLACEHOLDER_MESSAGE: &str = "# Select your plot below";

/// Storage collaborator injected into the editor session.
///
/// The host owns the actual medium (a notebook cell, a file, a key-value
/// store); the session only pushes opaque blobs through it.
pub trait LayoutStore {
    /// Returns the previously saved blob, if any.
    fn load(&mut self) -> Option<String>;

    /// Saves the blob, replacing any previous one.
    fn save(&mut self, blob: &str) -> anyhow::Result<()>;
}

/// Encodes a layout as the marker line plus JSON.
pub fn encode_state(layout: &FigureLayout) -> Result<String> {
    let json = serde_json::to_string(layout)?;
    Ok(format!("{STATE_MARKER}\n{json}"))
}

/// Decodes a blob produced by [`encode_state`].
///
/// Returns `None` when the marker is absent or the JSON does not parse;
/// both cases degrade to the default layout.
pub fn decode_state(blob: &str) -> Option<FigureLayout> {
    let mut lines = blob.lines();
    loop {
        match lines.next() {
            Some(line) if line.trim() == STATE_MARKER => break,
            Some(_) => continue,
            None => return None,
        }
    }
    let json: String = lines.collect::<Vec<_>>().join("\n");
    match serde_json::from_str(&json) {
        Ok(layout) => Some(layout),
        Err(e) => {
            tracing::warn!("Malformed layout blob, starting fresh: {}", e);
            None
        }
    }
}

/// Loads a layout from `store`, falling back to the empty default layout
/// when nothing usable is stored.
pub fn restore_layout(store: &mut dyn LayoutStore) -> FigureLayout {
    store
        .load()
        .and_then(|blob| decode_state(&blob))
        .unwrap_or_default()
}
