use std::time::Instant;

use tracing::info;

use crate::color::Color;
use crate::metric::Metric;
use crate::pipeline::anchors::Scheme;
use crate::pipeline::kmeans;
use crate::space::{ColorSpace, Pixel};
use crate::theme::{Theme, SLOT_COUNT};

/// Everything that parameterizes one theme generation besides the pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ThemeRequest {
    pub space: ColorSpace,
    pub scheme: Scheme,
    pub metric: Metric,
    pub max_iterations: usize,
}

/// Generate a theme from RGB pixels in `[0, 1]`.
///
/// Seeds the clustering with the scheme's anchors, clusters in the requested
/// space, converts the centroids back to RGB and quantizes them. The same
/// inputs always give the same theme.
pub fn generate_theme(pixels: &[Pixel], request: &ThemeRequest) -> Theme {
    let started = Instant::now();
    let space = request.space;

    let working = space.to_space_all(pixels);
    let seeds = space.to_space_all(request.scheme.anchors());
    let clustering = kmeans::run(&working, &seeds, request.metric, request.max_iterations);

    let mut slots = [Color::default(); SLOT_COUNT];
    for (slot, centroid) in slots.iter_mut().zip(&clustering.centroids) {
        *slot = Color::from_unit_rgb(space.inverse(*centroid));
    }

    info!(
        space = %space,
        scheme = %request.scheme,
        metric = %request.metric,
        iterations = clustering.iterations,
        converged = clustering.converged,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "theme generated"
    );

    Theme::new(request.scheme, slots)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(space: ColorSpace, scheme: Scheme, max_iterations: usize) -> ThemeRequest {
        ThemeRequest {
            space,
            scheme,
            metric: Metric::Euclidean,
            max_iterations,
        }
    }

    #[test]
    fn all_black_image_gives_all_black_theme() {
        let pixels = vec![[0.0, 0.0, 0.0]; 1024];
        for space in ColorSpace::ALL {
            for scheme in [Scheme::Light, Scheme::Dark] {
                let theme = generate_theme(&pixels, &request(space, scheme, 3));
                assert!(
                    theme.slots.iter().all(|&c| c == Color::new(0, 0, 0)),
                    "{space} / {scheme}: {:?}",
                    theme.slots
                );
            }
        }
    }

    #[test]
    fn saturated_channels_lose_at_most_one_step() {
        // Floor keeps round-trip noise just under 1.0 at 254.
        let pixels = vec![[1.0, 0.0, 0.0], [1.0, 1.0, 1.0]];
        for space in ColorSpace::ALL {
            let theme = generate_theme(&pixels, &request(space, Scheme::Dark, 2));
            for c in theme.slots {
                let red = c == Color::new(c.r, 0, 0) && c.r >= 254;
                let white = c.r >= 254 && c.g >= 254 && c.b >= 254;
                assert!(red || white, "{space}: {c}");
            }
        }
    }

    #[test]
    fn every_slot_comes_from_the_image() {
        let palette = [
            [0.0, 0.0, 0.0],
            [0.8, 0.2, 0.2],
            [0.2, 0.8, 0.2],
            [0.2, 0.2, 0.8],
            [1.0, 1.0, 1.0],
        ];
        let pixels: Vec<Pixel> = (0..500).map(|i| palette[i % palette.len()]).collect();
        let allowed: Vec<Color> = palette.iter().map(|&p| Color::from_unit_rgb(p)).collect();

        let theme = generate_theme(&pixels, &request(ColorSpace::Rgb, Scheme::Dark, 5));
        for color in theme.slots {
            assert!(allowed.contains(&color), "{color} not in the image");
        }
    }

    #[test]
    fn scheme_is_carried_into_the_theme() {
        let pixels = vec![[0.5, 0.5, 0.5]; 16];
        let theme = generate_theme(&pixels, &request(ColorSpace::Yuv, Scheme::Light, 1));
        assert_eq!(theme.scheme, Scheme::Light);
    }

    #[test]
    fn ciede2000_in_lab_produces_a_theme() {
        let pixels: Vec<Pixel> = (0..256)
            .map(|i| {
                let t = i as f64 / 255.0;
                [t, 1.0 - t, (t * 3.0).fract()]
            })
            .collect();
        let req = ThemeRequest {
            space: ColorSpace::Lab,
            scheme: Scheme::Dark,
            metric: Metric::Ciede2000,
            max_iterations: 2,
        };
        assert_eq!(generate_theme(&pixels, &req), generate_theme(&pixels, &req));
    }
}
