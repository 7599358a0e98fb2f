//! Cylindrical HSL.
//!
//! Hue becomes the angle of a 2-D point whose radius is the HSL chroma
//! `s * (1 - |2l - 1|)`, and lightness is the third axis. Hues 0.0 and 0.999
//! end up next to each other, so Euclidean distance tracks hue difference.

use std::f64::consts::TAU;

use palette::convert::FromColorUnclamped;
use palette::encoding::Srgb as SrgbEncoding;
use palette::{Hsl, Srgb};

use super::Pixel;

type SrgbHsl = Hsl<SrgbEncoding, f64>;

/// Denominators at or below this are treated as zero.
const EPSILON: f64 = 1e-12;

/// Largest chroma HSL allows at lightness `l`.
fn chroma_scale(lightness: f64) -> f64 {
    1.0 - (2.0 * lightness - 1.0).abs()
}

pub(super) fn rgb_to_hsl(rgb: Pixel) -> Pixel {
    let hsl = SrgbHsl::from_color_unclamped(Srgb::new(rgb[0], rgb[1], rgb[2]));
    // Grays have no defined hue, and black and white no defined saturation.
    let defined = |v: f64| if v.is_finite() { v } else { 0.0 };
    [
        defined(hsl.hue.into_positive_degrees()) / 360.0,
        defined(hsl.saturation),
        hsl.lightness,
    ]
}

pub(super) fn hsl_to_rgb(hsl: Pixel) -> Pixel {
    let [hue, saturation, lightness] = hsl;
    let rgb = Srgb::<f64>::from_color_unclamped(SrgbHsl::new(hue * 360.0, saturation, lightness));
    [rgb.red, rgb.green, rgb.blue]
}

pub(super) fn hsl_to_cylinder(hsl: Pixel) -> Pixel {
    let [hue, saturation, lightness] = hsl;
    let radius = saturation * chroma_scale(lightness);
    let angle = TAU * hue;
    [radius * angle.cos(), radius * angle.sin(), lightness]
}

pub(super) fn cylinder_to_hsl(point: Pixel) -> Pixel {
    let [x, y, lightness] = point;
    let hue = (y.atan2(x) + TAU) % TAU / TAU;
    let radius = x.hypot(y);
    let scale = chroma_scale(lightness);
    // Achromatic, or lightness pinned at 0 or 1: saturation is undefined.
    let saturation = if radius == 0.0 || scale.abs() <= EPSILON {
        0.0
    } else {
        radius / scale
    };
    [hue, saturation, lightness]
}

pub(super) fn rgb_to_cylinder(rgb: Pixel) -> Pixel {
    hsl_to_cylinder(rgb_to_hsl(rgb))
}

pub(super) fn cylinder_to_rgb(point: Pixel) -> Pixel {
    hsl_to_rgb(cylinder_to_hsl(point))
}
