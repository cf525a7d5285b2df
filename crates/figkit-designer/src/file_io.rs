//! Saving and loading layout files on disk.
//!
//! JSON design files wrap the layout with a small metadata header. The
//! in-buffer state blob (see [`crate::persistence`]) stays the canonical
//! session round-trip; files are for explicit save/load.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::layout::FigureLayout;

/// Metadata stored alongside a saved layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutMetadata {
    pub name: String,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
    #[serde(default)]
    pub description: String,
}

/// A layout as saved on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutFile {
    pub metadata: LayoutMetadata,
    pub layout: FigureLayout,
}

impl LayoutFile {
    /// Wraps a layout for saving under the given name.
    pub fn new(name: impl Into<String>, layout: FigureLayout) -> Self {
        let now = Utc::now();
        Self {
            metadata: LayoutMetadata {
                name: name.into(),
                created: now,
                modified: now,
                description: String::new(),
            },
            layout,
        }
    }

    /// Saves the layout file as pretty-printed JSON.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("Failed to serialize layout")?;
        std::fs::write(path.as_ref(), json).context("Failed to write layout file")?;
        Ok(())
    }

    /// Loads a layout file, refreshing its modified timestamp.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content =
            std::fs::read_to_string(path.as_ref()).context("Failed to read layout file")?;
        let mut file: LayoutFile =
            serde_json::from_str(&content).context("Failed to parse layout file")?;
        file.metadata.modified = Utc::now();
        Ok(file)
    }
}
