pub mod widgets;

use std::path::PathBuf;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use ratatui::DefaultTerminal;

use crate::metric::Metric;
use crate::pipeline::assemble::{generate_theme, ThemeRequest};
use crate::space::Pixel;
use crate::theme::{Theme, SLOT_COUNT};

use widgets::{PaletteWidget, RequestWidget};

/// Upper bound for the iteration count adjustable from the keyboard.
const MAX_ITERATIONS: usize = 50;

/// State for the interactive TUI application.
pub struct TuiApp {
    pixels: Vec<Pixel>,
    pub image_path: PathBuf,
    pub request: ThemeRequest,
    pub theme: Theme,
    pub selected_slot: Option<usize>,
}

impl TuiApp {
    /// Build the app and generate the first theme.
    pub fn new(pixels: Vec<Pixel>, image_path: PathBuf, request: ThemeRequest) -> Self {
        let theme = generate_theme(&pixels, &request);
        Self {
            pixels,
            image_path,
            request,
            theme,
            selected_slot: None,
        }
    }

    /// Apply a key press. Returns `false` once the app should exit.
    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        let before = self.request;
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return false,
            KeyCode::Char('s') => {
                self.request.space = self.request.space.next();
                if !self.request.metric.supports(self.request.space) {
                    self.request.metric = Metric::Euclidean;
                }
            }
            KeyCode::Char('m') => self.request.scheme = self.request.scheme.toggle(),
            KeyCode::Char('d') => self.request.metric = self.next_metric(),
            KeyCode::Char('+') | KeyCode::Char('=') => {
                self.request.max_iterations = (self.request.max_iterations + 1).min(MAX_ITERATIONS);
            }
            KeyCode::Char('-') => {
                self.request.max_iterations = self.request.max_iterations.saturating_sub(1).max(1);
            }
            KeyCode::Right => {
                self.selected_slot = Some(self.selected_slot.map_or(0, |s| (s + 1) % SLOT_COUNT));
            }
            KeyCode::Left => {
                self.selected_slot = Some(
                    self.selected_slot
                        .map_or(SLOT_COUNT - 1, |s| (s + SLOT_COUNT - 1) % SLOT_COUNT),
                );
            }
            _ => {}
        }
        if self.request != before {
            self.theme = generate_theme(&self.pixels, &self.request);
        }
        true
    }

    /// The next metric after the current one that the current space supports.
    fn next_metric(&self) -> Metric {
        let all = Metric::ALL;
        let current = all
            .iter()
            .position(|&m| m == self.request.metric)
            .unwrap_or(0);
        (1..=all.len())
            .map(|step| all[(current + step) % all.len()])
            .find(|m| m.supports(self.request.space))
            .unwrap_or(Metric::Euclidean)
    }

    fn render(&self, frame: &mut Frame) {
        let [title, request, palette] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(12),
        ])
        .areas(frame.area());

        frame.render_widget(
            Paragraph::new(format!(" snaptheme  {}", self.image_path.display())).bold(),
            title,
        );
        frame.render_widget(RequestWidget::new(&self.request), request);
        frame.render_widget(PaletteWidget::new(&self.theme, self.selected_slot), palette);
    }
}

/// Launch the TUI application.
pub fn run(mut app: TuiApp) -> Result<()> {
    let mut terminal = ratatui::init();
    let result = event_loop(&mut terminal, &mut app);
    ratatui::restore();
    result
}

fn event_loop(terminal: &mut DefaultTerminal, app: &mut TuiApp) -> Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press && !app.handle_key(key.code) {
                return Ok(());
            }
        }
    }
}
