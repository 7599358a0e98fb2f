use anyhow::Result;

use crate::color::Color;
use crate::theme::Theme;

use super::ThemeBackend;

/// Ghostty terminal theme backend (`key = value` lines).
pub struct GhosttyBackend;

impl ThemeBackend for GhosttyBackend {
    fn name(&self) -> &str {
        "Ghostty"
    }

    fn serialize(&self, theme: &Theme) -> Result<String> {
        let specials: [(&str, Color); 6] = [
            ("background", theme.background()),
            ("foreground", theme.foreground()),
            ("cursor-color", theme.foreground()),
            ("cursor-text", theme.background()),
            ("selection-background", theme.selection_background()),
            ("selection-foreground", theme.selection_foreground()),
        ];

        let mut out = String::new();
        for (key, color) in specials {
            out.push_str(&format!("{key} = {}\n", color.to_hex()));
        }
        for (i, color) in theme.slots.iter().enumerate() {
            out.push_str(&format!("palette = {i}={}\n", color.to_hex()));
        }
        Ok(out)
    }
}
