//! Working color spaces for clustering.
//!
//! Every space maps RGB in `[0, 1]^3` to a 3-component vector and back. The
//! round trip is exact to within floating-point noise for all inputs
//! reachable from in-gamut RGB.

mod hsl;
mod lab;
mod yuv;

/// A 3-component color vector. The meaning of each component depends on the
/// color space it lives in.
pub type Pixel = [f64; 3];

/// The color space in which distances and means are computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum ColorSpace {
    /// Plain sRGB, unchanged.
    Rgb,
    /// HSL unrolled into a cylinder so hue does not wrap.
    Hsl,
    /// CIE L*a*b* (D65).
    Lab,
    /// BT.601 analog YUV.
    Yuv,
}

impl ColorSpace {
    pub const ALL: [ColorSpace; 4] = [Self::Rgb, Self::Hsl, Self::Lab, Self::Yuv];

    /// Human-readable name.
    pub fn label(self) -> &'static str {
        match self {
            Self::Rgb => "RGB",
            Self::Hsl => "HSL",
            Self::Lab => "CIE Lab",
            Self::Yuv => "YUV",
        }
    }

    /// Convert one RGB pixel into this space.
    pub fn forward(self, rgb: Pixel) -> Pixel {
        match self {
            Self::Rgb => rgb,
            Self::Hsl => hsl::rgb_to_cylinder(rgb),
            Self::Lab => lab::rgb_to_lab(rgb),
            Self::Yuv => yuv::rgb_to_yuv(rgb),
        }
    }

    /// Convert one pixel of this space back to RGB. The result is not
    /// clamped.
    pub fn inverse(self, value: Pixel) -> Pixel {
        match self {
            Self::Rgb => value,
            Self::Hsl => hsl::cylinder_to_rgb(value),
            Self::Lab => lab::lab_to_rgb(value),
            Self::Yuv => yuv::yuv_to_rgb(value),
        }
    }

    /// Convert a whole RGB pixel set into this space, preserving order.
    pub fn to_space_all(self, rgb: &[Pixel]) -> Vec<Pixel> {
        rgb.iter().map(|&p| self.forward(p)).collect()
    }

    /// Convert a whole pixel set of this space back to RGB, preserving order.
    pub fn from_space_all(self, values: &[Pixel]) -> Vec<Pixel> {
        values.iter().map(|&p| self.inverse(p)).collect()
    }

    /// The next space in [`ColorSpace::ALL`], wrapping around.
    pub fn next(self) -> Self {
        let i = Self::ALL.iter().position(|&s| s == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }
}

impl std::fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
