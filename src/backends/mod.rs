pub mod ghostty;
pub mod json;

use std::path::Path;

use anyhow::{Context, Result};

use crate::theme::Theme;

/// A serialization target for generated themes.
pub trait ThemeBackend {
    fn name(&self) -> &str;

    /// Render the theme in this backend's file format.
    fn serialize(&self, theme: &Theme) -> Result<String>;

    /// Write the serialized theme to an arbitrary path.
    fn write_to(&self, theme: &Theme, path: &Path) -> Result<()> {
        let content = self.serialize(theme)?;
        std::fs::write(path, content)
            .with_context(|| format!("failed to write theme to {}", path.display()))?;
        Ok(())
    }
}

/// Output formats selectable from the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON object of `rgb(r, g, b)` strings keyed by slot name
    #[default]
    Json,
    /// Ghostty theme file
    Ghostty,
}

impl OutputFormat {
    pub fn backend(self) -> Box<dyn ThemeBackend> {
        match self {
            Self::Json => Box::new(json::JsonBackend),
            Self::Ghostty => Box::new(ghostty::GhosttyBackend),
        }
    }
}
