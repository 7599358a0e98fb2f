use ratatui::prelude::*;
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::color::Color as AppColor;
use crate::pipeline::assemble::ThemeRequest;
use crate::theme::{short_name, Theme, SLOT_NAMES};

/// The 16-color palette as an 8x2 grid of labelled swatches. Highlights the
/// selected slot.
pub struct PaletteWidget<'a> {
    theme: &'a Theme,
    selected: Option<usize>,
}

impl<'a> PaletteWidget<'a> {
    pub fn new(theme: &'a Theme, selected: Option<usize>) -> Self {
        Self { theme, selected }
    }

    /// Swatches for slots `start..start + 8` and the slot numbers under them.
    fn rows(&self, start: usize) -> [Line<'static>; 2] {
        let mut swatches = vec![Span::raw("  ")];
        let mut numbers = vec![Span::raw("  ")];
        for (slot, &color) in self.theme.slots.iter().enumerate().skip(start).take(8) {
            let picked = self.selected == Some(slot);

            let mut style = swatch_style(color);
            if picked {
                style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
            }
            swatches.push(Span::styled(format!("{:^6}", short_name(slot)), style));
            swatches.push(Span::raw(" "));

            let number = if picked {
                Style::default().fg(Color::Yellow).bold()
            } else {
                Style::default().fg(Color::DarkGray)
            };
            numbers.push(Span::styled(format!("{slot:^6}"), number));
            numbers.push(Span::raw(" "));
        }
        [Line::from(swatches), Line::from(numbers)]
    }
}

/// Fill with `c`, text in whichever of black or white reads better on it.
fn swatch_style(c: AppColor) -> Style {
    let text = if c.wants_dark_text() {
        Color::Black
    } else {
        Color::White
    };
    Style::default().bg(Color::Rgb(c.r, c.g, c.b)).fg(text)
}

impl Widget for PaletteWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered().title("Palette");
        let inner = block.inner(area);
        block.render(area, buf);

        let [normal, normal_numbers] = self.rows(0);
        let [bright, bright_numbers] = self.rows(8);
        let mut lines = vec![
            Line::from("  Normal"),
            normal,
            normal_numbers,
            Line::from(""),
            Line::from("  Bright"),
            bright,
            bright_numbers,
        ];

        if let Some(slot) = self.selected {
            if let Some(&color) = self.theme.slots.get(slot) {
                let ratio = AppColor::contrast_ratio(&color, &self.theme.background());
                lines.push(Line::from(""));
                lines.push(Line::from(vec![
                    Span::raw("  "),
                    Span::styled(format!("  {}  ", short_name(slot)), swatch_style(color)),
                    Span::raw(format!(
                        "  {slot}:{}  {}  {}  contrast {ratio:.1}:1",
                        SLOT_NAMES[slot],
                        color.to_hex(),
                        color.to_css(),
                    )),
                ]));
            }
        }

        Paragraph::new(lines).render(inner, buf);
    }
}

/// One-line summary of the clustering parameters plus key help.
pub struct RequestWidget<'a> {
    request: &'a ThemeRequest,
}

impl<'a> RequestWidget<'a> {
    pub fn new(request: &'a ThemeRequest) -> Self {
        Self { request }
    }
}

impl Widget for RequestWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered().title("Clustering");
        let inner = block.inner(area);
        block.render(area, buf);

        let label = Style::default().fg(Color::DarkGray);
        let value = Style::default().add_modifier(Modifier::BOLD);
        let line = Line::from(vec![
            Span::styled(" [s]pace ", label),
            Span::styled(self.request.space.label(), value),
            Span::styled("  sche[m]e ", label),
            Span::styled(self.request.scheme.label(), value),
            Span::styled("  [d]istance ", label),
            Span::styled(self.request.metric.label(), value),
            Span::styled("  [+/-] iterations ", label),
            Span::styled(self.request.max_iterations.to_string(), value),
            Span::styled("  [q]uit", label),
        ]);
        Paragraph::new(line).render(inner, buf);
    }
}
