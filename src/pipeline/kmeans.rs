//! Constrained k-means.
//!
//! Plain Lloyd iterations, except that every centroid set is snapped to the
//! nearest real pixels before it becomes current. Centroids are therefore
//! always colors that actually occur in the image.

use tracing::debug;

use crate::metric::Metric;
use crate::space::Pixel;

const RELATIVE_TOLERANCE: f64 = 1e-5;
const ABSOLUTE_TOLERANCE: f64 = 1e-8;

/// Result of a clustering run.
#[derive(Debug, Clone, PartialEq)]
pub struct Clustering {
    /// Final centroids, one per seed, each equal to some input pixel.
    pub centroids: Vec<Pixel>,
    /// Assign/mean/snap passes performed after the initial snap.
    pub iterations: usize,
    /// Whether the last pass left every centroid in place.
    pub converged: bool,
}

/// Replace each centroid with the exact coordinates of its nearest pixel.
///
/// Ties go to the lowest pixel index. With no pixels the centroids are
/// returned unchanged.
pub fn snap(centroids: &[Pixel], pixels: &[Pixel], metric: Metric) -> Vec<Pixel> {
    let nearest = metric.pairwise(centroids, pixels).argmin_rows();
    centroids
        .iter()
        .zip(nearest)
        .map(|(c, i)| i.map_or(*c, |i| pixels[i]))
        .collect()
}

/// Index of the nearest centroid for every pixel, lowest slot on ties.
pub fn assign(centroids: &[Pixel], pixels: &[Pixel], metric: Metric) -> Vec<usize> {
    metric
        .pairwise(pixels, centroids)
        .argmin_rows()
        .into_iter()
        .map(|slot| slot.unwrap_or(0))
        .collect()
}

/// Mean of the pixels assigned to each slot.
///
/// A slot with no pixels keeps its current centroid.
pub fn compute_means(centroids: &[Pixel], assignment: &[usize], pixels: &[Pixel]) -> Vec<Pixel> {
    let mut sums = vec![[0.0; 3]; centroids.len()];
    let mut counts = vec![0usize; centroids.len()];

    for (pixel, &slot) in pixels.iter().zip(assignment) {
        if let Some(sum) = sums.get_mut(slot) {
            sum[0] += pixel[0];
            sum[1] += pixel[1];
            sum[2] += pixel[2];
            counts[slot] += 1;
        }
    }

    centroids
        .iter()
        .zip(sums.iter().zip(&counts))
        .map(|(centroid, (sum, &count))| {
            if count == 0 {
                *centroid
            } else {
                let n = count as f64;
                [sum[0] / n, sum[1] / n, sum[2] / n]
            }
        })
        .collect()
}

/// Whether two centroid sets agree component-wise within tolerance.
pub fn has_converged(previous: &[Pixel], next: &[Pixel]) -> bool {
    previous.len() == next.len()
        && previous.iter().zip(next).all(|(a, b)| {
            a.iter()
                .zip(b)
                .all(|(x, y)| (x - y).abs() <= ABSOLUTE_TOLERANCE + RELATIVE_TOLERANCE * y.abs())
        })
}

/// Cluster `pixels` starting from `seeds`.
///
/// Seeds are snapped first, then at most `max_iterations` assign/mean/snap
/// passes run. The loop stops early once a pass leaves the centroids in
/// place.
pub fn run(pixels: &[Pixel], seeds: &[Pixel], metric: Metric, max_iterations: usize) -> Clustering {
    let mut centroids = snap(seeds, pixels, metric);
    let mut iterations = 0;
    let mut converged = false;

    while iterations < max_iterations {
        iterations += 1;

        let assignment = assign(&centroids, pixels, metric);
        let means = compute_means(&centroids, &assignment, pixels);
        let snapped = snap(&means, pixels, metric);

        if has_converged(&centroids, &snapped) {
            debug!(iteration = iterations, "centroids converged");
            converged = true;
            break;
        }

        let moved = centroids
            .iter()
            .zip(&snapped)
            .filter(|(a, b)| a != b)
            .count();
        debug!(iteration = iterations, moved, "centroids updated");
        centroids = snapped;
    }

    Clustering {
        centroids,
        iterations,
        converged,
    }
}
