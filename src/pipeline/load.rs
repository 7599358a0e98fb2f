use std::path::Path;

use anyhow::{Context, Result};
use image::imageops::FilterType;
use image::DynamicImage;
use tracing::debug;

use crate::space::Pixel;

/// Side length every image is resized to before clustering.
pub const SIDE: u32 = 256;
/// Number of samples in a prepared pixel set.
pub const PIXEL_COUNT: usize = (SIDE * SIDE) as usize;

/// Load an image, resize it to exactly 256x256 with nearest-neighbour
/// sampling, and flatten it into RGB pixels in `[0, 1]`.
pub fn load_and_prepare(path: &Path) -> Result<Vec<Pixel>> {
    let img = image::open(path).with_context(|| {
        if !path.exists() {
            format!("file not found: {}", path.display())
        } else {
            format!(
                "unsupported or corrupt image: {}. Supported formats: PNG, JPEG, WebP, BMP, TIFF, GIF",
                path.display()
            )
        }
    })?;
    debug!(
        width = img.width(),
        height = img.height(),
        color = ?img.color(),
        "decoded image"
    );
    Ok(prepare(&img))
}

/// Resize and normalize an already decoded image.
///
/// Grayscale expands to three equal channels. Alpha is composited over
/// white.
pub fn prepare(img: &DynamicImage) -> Vec<Pixel> {
    let rgba = img
        .resize_exact(SIDE, SIDE, FilterType::Nearest)
        .to_rgba32f();

    rgba.pixels()
        .map(|p| {
            let alpha = f64::from(p[3]).clamp(0.0, 1.0);
            let over_white = |c: f32| (f64::from(c) * alpha + (1.0 - alpha)).clamp(0.0, 1.0);
            [over_white(p[0]), over_white(p[1]), over_white(p[2])]
        })
        .collect()
}
