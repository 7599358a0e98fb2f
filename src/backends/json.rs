use anyhow::{Context, Result};
use serde::Serialize;

use crate::theme::Theme;

use super::ThemeBackend;

/// JSON object with one `rgb(r, g, b)` string per slot, keys in ANSI order.
pub struct JsonBackend;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ThemeDocument {
    black: String,
    red: String,
    green: String,
    yellow: String,
    blue: String,
    magenta: String,
    cyan: String,
    white: String,
    bright_black: String,
    bright_red: String,
    bright_green: String,
    bright_yellow: String,
    bright_blue: String,
    bright_magenta: String,
    bright_cyan: String,
    bright_white: String,
}

impl From<&Theme> for ThemeDocument {
    fn from(theme: &Theme) -> Self {
        let css = |i: usize| theme.slots[i].to_css();
        Self {
            black: css(0),
            red: css(1),
            green: css(2),
            yellow: css(3),
            blue: css(4),
            magenta: css(5),
            cyan: css(6),
            white: css(7),
            bright_black: css(8),
            bright_red: css(9),
            bright_green: css(10),
            bright_yellow: css(11),
            bright_blue: css(12),
            bright_magenta: css(13),
            bright_cyan: css(14),
            bright_white: css(15),
        }
    }
}

impl ThemeBackend for JsonBackend {
    fn name(&self) -> &str {
        "JSON"
    }

    fn serialize(&self, theme: &Theme) -> Result<String> {
        let mut out = serde_json::to_string_pretty(&ThemeDocument::from(theme))
            .context("failed to serialize theme as JSON")?;
        out.push('\n');
        Ok(out)
    }
}
