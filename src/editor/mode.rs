//! Paint mode

use std::fmt;

/// How a color key press is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaintMode {
    /// Paint the cell under the cursor
    #[default]
    Pencil,
    /// Flood-fill the region under the cursor
    Fill,
}

impl PaintMode {
    pub fn label(self) -> &'static str {
        match self {
            PaintMode::Pencil => "Pencil",
            PaintMode::Fill => "Fill",
        }
    }

    /// Status line shown after switching to this mode.
    pub fn status_message(self) -> String {
        format!("> {} Mode", self.label())
    }
}

impl fmt::Display for PaintMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
