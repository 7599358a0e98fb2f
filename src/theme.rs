use crate::color::Color;
use crate::pipeline::anchors::Scheme;

/// Number of ANSI palette slots in a theme.
pub const SLOT_COUNT: usize = 16;

/// Key for each slot, in ANSI order.
pub const SLOT_NAMES: [&str; SLOT_COUNT] = [
    "black",
    "red",
    "green",
    "yellow",
    "blue",
    "magenta",
    "cyan",
    "white",
    "brightBlack",
    "brightRed",
    "brightGreen",
    "brightYellow",
    "brightBlue",
    "brightMagenta",
    "brightCyan",
    "brightWhite",
];

const SHORT_NAMES: [&str; 8] = ["Blk", "Red", "Grn", "Yel", "Blu", "Mag", "Cyn", "Wht"];

/// Three-letter swatch label for a slot. Normal and bright slots share one.
pub fn short_name(slot: usize) -> &'static str {
    SHORT_NAMES[slot % SHORT_NAMES.len()]
}

const BLACK: usize = 0;
const WHITE: usize = 7;
const BRIGHT_BLACK: usize = 8;
const BRIGHT_WHITE: usize = 15;

/// A generated terminal theme: ANSI colors 0-15 and the scheme that seeded
/// them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub scheme: Scheme,
    pub slots: [Color; SLOT_COUNT],
}

impl Theme {
    pub fn new(scheme: Scheme, slots: [Color; SLOT_COUNT]) -> Self {
        Self { scheme, slots }
    }

    /// Slots paired with their key, in ANSI order.
    pub fn named_slots(&self) -> impl Iterator<Item = (&'static str, Color)> + '_ {
        SLOT_NAMES.iter().copied().zip(self.slots.iter().copied())
    }

    /// Look up a slot by key, e.g. `"brightCyan"`.
    pub fn slot(&self, name: &str) -> Option<Color> {
        SLOT_NAMES
            .iter()
            .position(|&n| n == name)
            .map(|i| self.slots[i])
    }

    pub fn background(&self) -> Color {
        match self.scheme {
            Scheme::Light => self.slots[WHITE],
            Scheme::Dark => self.slots[BLACK],
        }
    }

    pub fn foreground(&self) -> Color {
        match self.scheme {
            Scheme::Light => self.slots[BLACK],
            Scheme::Dark => self.slots[WHITE],
        }
    }

    pub fn selection_background(&self) -> Color {
        match self.scheme {
            Scheme::Light => self.slots[BRIGHT_WHITE],
            Scheme::Dark => self.slots[BRIGHT_BLACK],
        }
    }

    /// Text drawn on top of a selection.
    pub fn selection_foreground(&self) -> Color {
        self.foreground()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bright_slots_share_short_names() {
        assert_eq!(short_name(1), "Red");
        assert_eq!(short_name(9), "Red");
        assert_eq!(short_name(15), "Wht");
    }

    fn numbered(scheme: Scheme) -> Theme {
        let mut slots = [Color::default(); SLOT_COUNT];
        for (i, slot) in slots.iter_mut().enumerate() {
            *slot = Color::new(i as u8, i as u8, i as u8);
        }
        Theme::new(scheme, slots)
    }

    #[test]
    fn names_follow_ansi_order() {
        let theme = numbered(Scheme::Dark);
        let names: Vec<_> = theme.named_slots().map(|(n, _)| n).collect();
        assert_eq!(names.first(), Some(&"black"));
        assert_eq!(names[8], "brightBlack");
        assert_eq!(names.last(), Some(&"brightWhite"));
        assert_eq!(theme.slot("brightCyan"), Some(Color::new(14, 14, 14)));
        assert_eq!(theme.slot("orange"), None);
    }

    #[test]
    fn dark_roles() {
        let theme = numbered(Scheme::Dark);
        assert_eq!(theme.background(), theme.slots[0]);
        assert_eq!(theme.foreground(), theme.slots[7]);
        assert_eq!(theme.selection_background(), theme.slots[8]);
        assert_eq!(theme.selection_foreground(), theme.slots[7]);
    }

    #[test]
    fn light_roles() {
        let theme = numbered(Scheme::Light);
        assert_eq!(theme.background(), theme.slots[7]);
        assert_eq!(theme.foreground(), theme.slots[0]);
        assert_eq!(theme.selection_background(), theme.slots[15]);
        assert_eq!(theme.selection_foreground(), theme.slots[0]);
    }
}
