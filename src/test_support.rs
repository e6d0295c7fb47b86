//! Shared unit-test fixtures.
//!
//! A tiny grid-of-values candidate that behaves like a 1-pixel-tall grayscale
//! image. Cheap to score and deterministic, which keeps operator and
//! population tests fast and exact.

use std::sync::Arc;

use image::RgbaImage;
use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::candidate::{Candidate, CandidateFactory};
use crate::chromosome::Chromosome;

/// Vector of cells scored by absolute distance to a shared target vector
#[derive(Clone, Debug)]
pub struct GridCandidate {
    pub cells: Vec<f64>,
    pub target: Arc<Vec<f64>>,
}

impl Candidate for GridCandidate {
    fn image_diff(&self) -> f64 {
        self.cells
            .iter()
            .zip(self.target.iter())
            .map(|(c, t)| (c - t).abs())
            .sum()
    }

    fn mutate_in_place<R: Rng>(&mut self, rate: f64, swap: f64, sigma: f64, rng: &mut R) {
        for i in 0..self.cells.len() {
            if !rng.gen_bool(rate.clamp(0.0, 1.0)) {
                continue;
            }
            if rng.gen_bool(swap.clamp(0.0, 1.0)) {
                let j = rng.gen_range(0..self.cells.len());
                self.cells.swap(i, j);
            } else if let Ok(normal) = Normal::new(0.0, sigma) {
                self.cells[i] += normal.sample(rng);
            }
        }
    }

    fn crossover<R: Rng>(a: &Self, b: &Self, rng: &mut R) -> (Self, Self) {
        let mut first = a.clone();
        let mut second = b.clone();
        for i in 0..first.cells.len().min(second.cells.len()) {
            if rng.gen_bool(0.5) {
                std::mem::swap(&mut first.cells[i], &mut second.cells[i]);
            }
        }
        (first, second)
    }

    fn render(&self, _scale: f32) -> RgbaImage {
        let width = self.cells.len().max(1) as u32;
        RgbaImage::from_fn(width, 1, |x, _y| {
            let v = self
                .cells
                .get(x as usize)
                .map(|c| (c.clamp(0.0, 1.0) * 255.0) as u8)
                .unwrap_or(0);
            image::Rgba([v, v, v, 255])
        })
    }
}

/// Spawns grids with cells drawn uniformly from `[0, span)`
pub struct GridFactory {
    target: Arc<Vec<f64>>,
    span: f64,
}

impl GridFactory {
    pub fn new(target: Arc<Vec<f64>>, span: f64) -> Self {
        Self { target, span }
    }
}

impl CandidateFactory<GridCandidate> for GridFactory {
    fn spawn<R: Rng>(&self, rng: &mut R) -> GridCandidate {
        let cells = (0..self.target.len())
            .map(|_| rng.gen_range(0.0..self.span))
            .collect();
        GridCandidate {
            cells,
            target: Arc::clone(&self.target),
        }
    }
}

/// Spawns the same grid every time. Zero diversity by construction, so runs
/// built on it stagnate immediately.
pub struct FixedFactory {
    cells: Vec<f64>,
    target: Arc<Vec<f64>>,
}

impl FixedFactory {
    pub fn new(cells: Vec<f64>, target: Arc<Vec<f64>>) -> Self {
        Self { cells, target }
    }
}

impl CandidateFactory<GridCandidate> for FixedFactory {
    fn spawn<R: Rng>(&self, _rng: &mut R) -> GridCandidate {
        GridCandidate {
            cells: self.cells.clone(),
            target: Arc::clone(&self.target),
        }
    }
}

/// Build a candidate with the given cells and target
pub fn grid(cells: &[f64], target: &[f64]) -> GridCandidate {
    GridCandidate {
        cells: cells.to_vec(),
        target: Arc::new(target.to_vec()),
    }
}

/// Build a scored chromosome whose fitness is exactly `score`
pub fn scored(score: f64) -> Chromosome<GridCandidate> {
    Chromosome::new(grid(&[score], &[0.0]))
}
