use crate::space::Pixel;

const THIRD: f64 = 1.0 / 3.0;
const TWO_THIRDS: f64 = 2.0 / 3.0;

/// Seed colors for light themes, in ANSI slot order. Base slots are pastel.
pub const LIGHT_ANCHORS: [Pixel; 16] = [
    [0.0, 0.0, 0.0],
    [1.0, 0.5, 0.5],
    [0.5, 1.0, 0.5],
    [1.0, 1.0, 0.5],
    [0.5, 0.5, 1.0],
    [1.0, 0.5, 1.0],
    [0.5, 1.0, 1.0],
    [0.5, 0.5, 0.5],
    [THIRD, THIRD, THIRD],
    [1.0, 0.0, 0.0],
    [0.0, 1.0, 0.0],
    [1.0, 1.0, 0.0],
    [0.0, 0.0, 1.0],
    [1.0, 0.0, 1.0],
    [0.0, 1.0, 1.0],
    [1.0, 1.0, 1.0],
];

/// Seed colors for dark themes, in ANSI slot order. Base slots are dimmed.
pub const DARK_ANCHORS: [Pixel; 16] = [
    [0.0, 0.0, 0.0],
    [TWO_THIRDS, 0.0, 0.0],
    [0.0, TWO_THIRDS, 0.0],
    [TWO_THIRDS, TWO_THIRDS, 0.0],
    [0.0, 0.0, TWO_THIRDS],
    [TWO_THIRDS, 0.0, TWO_THIRDS],
    [0.0, TWO_THIRDS, TWO_THIRDS],
    [0.5, 0.5, 0.5],
    [THIRD, THIRD, THIRD],
    [1.0, 0.0, 0.0],
    [0.0, 1.0, 0.0],
    [1.0, 1.0, 0.0],
    [0.0, 0.0, 1.0],
    [1.0, 0.0, 1.0],
    [0.0, 1.0, 1.0],
    [1.0, 1.0, 1.0],
];

/// Which anchor palette seeds the clustering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Scheme {
    Light,
    Dark,
}

impl Scheme {
    /// The 16 RGB seed colors for this scheme.
    pub fn anchors(self) -> &'static [Pixel; 16] {
        match self {
            Self::Light => &LIGHT_ANCHORS,
            Self::Dark => &DARK_ANCHORS,
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl std::fmt::Display for Scheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors_are_in_gamut() {
        for scheme in [Scheme::Light, Scheme::Dark] {
            for anchor in scheme.anchors() {
                assert!(anchor.iter().all(|c| (0.0..=1.0).contains(c)));
            }
        }
    }

    #[test]
    fn schemes_share_the_bright_row() {
        assert_eq!(LIGHT_ANCHORS[8..], DARK_ANCHORS[8..]);
        assert_ne!(LIGHT_ANCHORS[1..8], DARK_ANCHORS[1..8]);
    }

    #[test]
    fn black_and_white_bookend_both_palettes() {
        for scheme in [Scheme::Light, Scheme::Dark] {
            assert_eq!(scheme.anchors()[0], [0.0, 0.0, 0.0]);
            assert_eq!(scheme.anchors()[15], [1.0, 1.0, 1.0]);
        }
    }
}
