use crate::space::Pixel;

/// A quantized sRGB color, one byte per channel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Quantize an RGB pixel in `[0, 1]` as `floor(v * 255)`.
    ///
    /// Out-of-range channels clamp to `[0, 255]`.
    pub fn from_unit_rgb(rgb: Pixel) -> Self {
        fn quantize(v: f64) -> u8 {
            // `as` maps NaN to 0.
            (v * 255.0).floor().clamp(0.0, 255.0) as u8
        }
        Self {
            r: quantize(rgb[0]),
            g: quantize(rgb[1]),
            b: quantize(rgb[2]),
        }
    }

    /// Serialize to lowercase hex `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Serialize as a CSS functional color, `rgb(r, g, b)`.
    pub fn to_css(self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    /// WCAG 2.0 relative luminance.
    ///
    /// Linearizes each sRGB channel, then computes the weighted sum.
    pub fn relative_luminance(self) -> f32 {
        fn linearize(c: u8) -> f32 {
            let c = c as f32 / 255.0;
            if c <= 0.04045 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }
        let r = linearize(self.r);
        let g = linearize(self.g);
        let b = linearize(self.b);
        0.2126 * r + 0.7152 * g + 0.0722 * b
    }

    /// Whether black text reads better than white on this color.
    pub fn wants_dark_text(self) -> bool {
        self.relative_luminance() > 0.4
    }

    /// WCAG 2.0 contrast ratio between two colors, in [1, 21].
    pub fn contrast_ratio(c1: &Color, c2: &Color) -> f32 {
        let l1 = c1.relative_luminance();
        let l2 = c2.relative_luminance();
        let (lighter, darker) = if l1 > l2 { (l1, l2) } else { (l2, l1) };
        (lighter + 0.05) / (darker + 0.05)
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLACK: Color = Color::new(0, 0, 0);
    const WHITE: Color = Color::new(255, 255, 255);

    #[test]
    fn quantize_floors() {
        assert_eq!(Color::from_unit_rgb([1.0, 0.0, 0.5]), Color::new(255, 0, 127));
        assert_eq!(Color::from_unit_rgb([0.999, 0.004, 0.0039]), Color::new(254, 1, 0));
    }

    #[test]
    fn quantize_clamps_out_of_range() {
        assert_eq!(Color::from_unit_rgb([1.2, -0.1, -1e-15]), Color::new(255, 0, 0));
    }

    #[test]
    fn quantize_maps_nan_to_zero() {
        assert_eq!(Color::from_unit_rgb([f64::NAN, 1.0, 1.0]), Color::new(0, 255, 255));
    }

    #[test]
    fn hex_is_lowercase() {
        assert_eq!(Color::new(255, 136, 0).to_hex(), "#ff8800");
    }

    #[test]
    fn css_format() {
        assert_eq!(Color::new(12, 0, 255).to_css(), "rgb(12, 0, 255)");
    }

    #[test]
    fn display_matches_to_hex() {
        let color = Color::new(171, 205, 239);
        assert_eq!(format!("{color}"), color.to_hex());
    }

    #[test]
    fn contrast_ratio_black_white() {
        let ratio = Color::contrast_ratio(&BLACK, &WHITE);
        assert!(
            (ratio - 21.0).abs() < 0.1,
            "black/white contrast should be ~21:1, got {ratio}"
        );
    }

    #[test]
    fn contrast_ratio_is_symmetric() {
        let a = Color::new(200, 50, 50);
        let b = Color::new(50, 200, 50);
        let ratio_ab = Color::contrast_ratio(&a, &b);
        let ratio_ba = Color::contrast_ratio(&b, &a);
        assert!((ratio_ab - ratio_ba).abs() < 0.001);
    }

    #[test]
    fn text_shade_follows_luminance() {
        assert!(WHITE.wants_dark_text());
        assert!(Color::new(240, 220, 60).wants_dark_text());
        assert!(!BLACK.wants_dark_text());
        assert!(!Color::new(30, 30, 160).wants_dark_text());
    }

    #[test]
    fn relative_luminance_extremes() {
        assert!(BLACK.relative_luminance() < 0.001);
        assert!((WHITE.relative_luminance() - 1.0).abs() < 0.001);
    }
}
