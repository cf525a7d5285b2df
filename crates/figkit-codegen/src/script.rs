//! Matplotlib script generation from a layout artifact.

use crate::emitter::LayoutArtifact;
use crate::transform::round2;
use figkit_core::units::DPI;

/// Generates a matplotlib figure script from a [`LayoutArtifact`].
pub struct ScriptGenerator {
    notebook_magic: bool,
}

impl ScriptGenerator {
    /// Creates a generator without the notebook magic line.
    pub fn new() -> Self {
        Self {
            notebook_magic: false,
        }
    }

    /// Creates a generator, optionally prefixing `%matplotlib notebook` for
    /// hosts that execute the script in a notebook cell.
    pub fn with_notebook_magic(notebook_magic: bool) -> Self {
        Self { notebook_magic }
    }

    /// Generates the full script.
    pub fn generate(&self, artifact: &LayoutArtifact) -> String {
        let mut script = self.generate_header(artifact);
        script.push_str(&self.generate_body(artifact));
        script
    }

    /// Generates the imports and figure construction.
    pub fn generate_header(&self, artifact: &LayoutArtifact) -> String {
        let mut script = String::new();
        script.push_str("import matplotlib.pyplot as plt\n");
        if self.notebook_magic {
            script.push_str("%matplotlib notebook\n");
        }
        script.push_str(&format!(
            "fig = plt.figure(figsize=({}, {}), dpi={})\n",
            artifact.canvas_width, artifact.canvas_height, DPI
        ));
        script
    }

    /// Generates one `add_axes` plus one `fig.text` label per entry.
    pub fn generate_body(&self, artifact: &LayoutArtifact) -> String {
        let mut script = String::new();
        for entry in &artifact.axes {
            let [x0, y0, width, height] = entry.rect.to_array();
            script.push_str(&format!(
                "{} = fig.add_axes([{:.2}, {:.2}, {:.2}, {:.2}])\n",
                entry.identifier, x0, y0, width, height
            ));
            script.push_str(&format!(
                "fig.text({:.2}, {:.2}, \"{}\", fontsize={}, va='bottom', ha='right')\n",
                x0,
                round2(y0 + height),
                entry.label,
                artifact.letter_font_size
            ));
        }
        script
    }
}

impl Default for ScriptGenerator {
    fn default() -> Self {
        Self::new()
    }
}
