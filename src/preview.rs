use std::io::Write;

use anyhow::Result;
use crossterm::queue;
use crossterm::style::{Color as TermColor, Print, ResetColor, SetBackgroundColor, SetForegroundColor};

use crate::color::Color;
use crate::theme::{short_name, Theme};

fn swatch(c: Color) -> (SetBackgroundColor, SetForegroundColor) {
    let text = if c.wants_dark_text() {
        TermColor::Black
    } else {
        TermColor::White
    };
    let fill = TermColor::Rgb {
        r: c.r,
        g: c.g,
        b: c.b,
    };
    (SetBackgroundColor(fill), SetForegroundColor(text))
}

/// Print the palette as two rows of eight swatches: normal, then bright.
pub fn print_preview(out: &mut impl Write, theme: &Theme) -> Result<()> {
    for (row, title) in [(0, "Normal"), (8, "Bright")] {
        queue!(out, Print(format!("{title:<8}")))?;
        for (slot, &color) in theme.slots.iter().enumerate().skip(row).take(8) {
            let (fill, text) = swatch(color);
            queue!(
                out,
                fill,
                text,
                Print(format!("{:^6}", short_name(slot))),
                ResetColor,
                Print(" "),
            )?;
        }
        queue!(out, Print("\n"))?;
    }
    out.flush()?;
    Ok(())
}
