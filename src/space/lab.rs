//! CIE L*a*b* under D65.
//!
//! palette supplies the sRGB transfer function and the XYZ/Lab step. The
//! linear RGB/XYZ step uses one matrix and its f64 inverse, since palette's
//! built-in sRGB matrices are rounded independently and do not invert each
//! other to better than ~1e-6.
//!
//! palette's two transfer curves switch branches at slightly different
//! points, leaving a gap just above the decoding knee that no encoded value
//! maps into. Encoding pairs its knee with the decoding one and sends gap
//! values to the knee, so the round trip stays tight there too.

use std::sync::LazyLock;

use palette::convert::FromColorUnclamped;
use palette::encoding::{FromLinear, IntoLinear, Srgb as SrgbTransfer};
use palette::matrix::{matrix_inverse, multiply_3x3_and_vec3, Mat3};
use palette::white_point::D65;
use palette::{Lab, Xyz};

use super::Pixel;

/// Linear sRGB to XYZ (D65), row-major.
#[rustfmt::skip]
const RGB_TO_XYZ: Mat3<f64> = [
    0.412453, 0.357580, 0.180423,
    0.212671, 0.715160, 0.072169,
    0.019334, 0.119193, 0.950227,
];

static XYZ_TO_RGB: LazyLock<Mat3<f64>> = LazyLock::new(|| matrix_inverse(RGB_TO_XYZ));

/// Encoded value at which decoding leaves the linear segment.
const DECODE_KNEE: f64 = 0.04045;
const LINEAR_SLOPE: f64 = 12.92;
/// Same expression palette decodes the knee with.
const LINEAR_KNEE: f64 = (1.0 / LINEAR_SLOPE) * DECODE_KNEE;

fn decode(encoded: f64) -> f64 {
    <SrgbTransfer as IntoLinear<f64, f64>>::into_linear(encoded)
}

fn encode(linear: f64) -> f64 {
    if linear <= LINEAR_KNEE {
        linear * LINEAR_SLOPE
    } else {
        <SrgbTransfer as FromLinear<f64, f64>>::from_linear(linear).max(DECODE_KNEE)
    }
}

pub(super) fn rgb_to_lab(rgb: Pixel) -> Pixel {
    let [x, y, z] = multiply_3x3_and_vec3(RGB_TO_XYZ, rgb.map(decode));
    let lab = Lab::<D65, f64>::from_color_unclamped(Xyz::<D65, f64>::new(x, y, z));
    [lab.l, lab.a, lab.b]
}

pub(super) fn lab_to_rgb(lab: Pixel) -> Pixel {
    let xyz = Xyz::<D65, f64>::from_color_unclamped(Lab::<D65, f64>::new(lab[0], lab[1], lab[2]));
    multiply_3x3_and_vec3(*XYZ_TO_RGB, [xyz.x, xyz.y, xyz.z]).map(encode)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-6;

    fn assert_round_trip(rgb: Pixel) {
        let lab = rgb_to_lab(rgb);
        let back = lab_to_rgb(lab);
        let again = rgb_to_lab(back);
        for c in 0..3 {
            assert!((back[c] - rgb[c]).abs() <= TOLERANCE, "{rgb:?} -> {back:?}");
            assert!((again[c] - lab[c]).abs() <= TOLERANCE, "{lab:?} -> {again:?}");
        }
    }

    #[test]
    fn white_and_black_hit_the_lightness_extremes() {
        let white = rgb_to_lab([1.0, 1.0, 1.0]);
        assert!((white[0] - 100.0).abs() < 1e-3, "L of white: {}", white[0]);
        assert!(white[1].abs() < 1e-3 && white[2].abs() < 1e-3);

        let black = rgb_to_lab([0.0, 0.0, 0.0]);
        assert!(black.iter().all(|v| v.abs() < 1e-9), "black: {black:?}");
    }

    #[test]
    fn red_has_positive_a() {
        let red = rgb_to_lab([1.0, 0.0, 0.0]);
        assert!(red[1] > 50.0, "a* of red: {}", red[1]);
    }

    #[test]
    fn primaries_round_trip_tightly() {
        for rgb in [
            [0.0, 0.0, 1.0],
            [1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [1.0, 1.0, 1.0],
            [0.0, 0.0, 0.0],
        ] {
            assert_round_trip(rgb);
        }
    }

    #[test]
    fn near_black_and_transfer_knee_round_trip() {
        // Zero channel beside a saturated one, and values on either side of
        // the sRGB linear segment boundary.
        for rgb in [
            [0.0, 0.5, 0.9],
            [0.0, 1e-9, 0.0],
            [0.04045, 0.040451, 0.0031308],
            [0.04045, 0.04045, 0.04045],
            [0.0404499, 0.04045000001, 0.040449999],
            [1.0 - 1e-9, 0.0, 1e-9],
        ] {
            assert_round_trip(rgb);
        }
    }

    #[test]
    fn matrices_are_inverses() {
        let product = palette::matrix::multiply_3x3(RGB_TO_XYZ, *XYZ_TO_RGB);
        for (i, v) in product.iter().enumerate() {
            let expected = if i % 4 == 0 { 1.0 } else { 0.0 };
            assert!((v - expected).abs() < 1e-14, "entry {i}: {v}");
        }
    }
}
