//! BT.601 analog YUV.

use super::Pixel;

const KR: f64 = 0.299;
const KG: f64 = 0.587;
const KB: f64 = 0.114;
/// Scale of `B - Y` into U.
const U_SCALE: f64 = 0.492111;
/// Scale of `R - Y` into V.
const V_SCALE: f64 = 0.877283;

pub(super) fn rgb_to_yuv(rgb: Pixel) -> Pixel {
    let [r, g, b] = rgb;
    let y = KR * r + KG * g + KB * b;
    [y, U_SCALE * (b - y), V_SCALE * (r - y)]
}

pub(super) fn yuv_to_rgb(yuv: Pixel) -> Pixel {
    let [y, u, v] = yuv;
    let r = y + v / V_SCALE;
    let b = y + u / U_SCALE;
    let g = (y - KR * r - KB * b) / KG;
    [r, g, b]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gray_has_no_chroma() {
        let [y, u, v] = rgb_to_yuv([0.4, 0.4, 0.4]);
        assert!((y - 0.4).abs() < 1e-12);
        assert!(u.abs() < 1e-12);
        assert!(v.abs() < 1e-12);
    }

    #[test]
    fn matches_reference_coefficients() {
        // Second and third rows of the usual BT.601 RGB -> YUV matrix.
        let [_, u, v] = rgb_to_yuv([1.0, 0.0, 0.0]);
        assert!((u - -0.14714119).abs() < 1e-6);
        assert!((v - 0.61497538).abs() < 1e-6);
    }
}
