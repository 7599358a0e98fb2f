use palette::color_difference::Ciede2000;
use palette::white_point::D65;
use palette::Lab;

use crate::space::{ColorSpace, Pixel};

/// Pairwise distance between two vectors of the working space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Metric {
    /// Straight-line distance, valid in every space.
    #[default]
    Euclidean,
    /// CIE ΔE 2000. Only meaningful for CIE Lab coordinates.
    Ciede2000,
}

/// Distances from every query to every reference, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    rows: usize,
    cols: usize,
    values: Vec<f64>,
}

impl DistanceMatrix {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn row(&self, row: usize) -> &[f64] {
        &self.values[row * self.cols..(row + 1) * self.cols]
    }

    /// Column of the smallest value in each row. Ties go to the lowest
    /// column; rows of a matrix with no columns yield `None`.
    pub fn argmin_rows(&self) -> Vec<Option<usize>> {
        (0..self.rows).map(|r| argmin(self.row(r).iter().copied())).collect()
    }
}

impl Metric {
    pub const ALL: [Metric; 2] = [Self::Euclidean, Self::Ciede2000];

    pub fn label(self) -> &'static str {
        match self {
            Self::Euclidean => "Euclidean",
            Self::Ciede2000 => "CIEDE2000",
        }
    }

    /// Whether this metric produces meaningful distances in `space`.
    pub fn supports(self, space: ColorSpace) -> bool {
        match self {
            Self::Euclidean => true,
            Self::Ciede2000 => space == ColorSpace::Lab,
        }
    }

    pub fn distance(self, a: &Pixel, b: &Pixel) -> f64 {
        match self {
            Self::Euclidean => {
                let dx = a[0] - b[0];
                let dy = a[1] - b[1];
                let dz = a[2] - b[2];
                (dx * dx + dy * dy + dz * dz).sqrt()
            }
            Self::Ciede2000 => {
                let a = Lab::<D65, f64>::new(a[0], a[1], a[2]);
                let b = Lab::<D65, f64>::new(b[0], b[1], b[2]);
                a.difference(b)
            }
        }
    }

    /// Full distance matrix between `queries` and `references`.
    pub fn pairwise(self, queries: &[Pixel], references: &[Pixel]) -> DistanceMatrix {
        let mut values = Vec::with_capacity(queries.len() * references.len());
        for q in queries {
            values.extend(references.iter().map(|r| self.distance(q, r)));
        }
        DistanceMatrix {
            rows: queries.len(),
            cols: references.len(),
            values,
        }
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

fn argmin(values: impl Iterator<Item = f64>) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, d) in values.enumerate() {
        // NaN never beats a real distance.
        let better = match best {
            None => true,
            Some((_, best_d)) => d < best_d || (best_d.is_nan() && !d.is_nan()),
        };
        if better {
            best = Some((i, d));
        }
    }
    best.map(|(i, _)| i)
}
