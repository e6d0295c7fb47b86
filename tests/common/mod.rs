//! Shared fixtures for integration tests
#![allow(dead_code)]

use std::sync::Arc;

use artevo::prelude::*;
use image::RgbaImage;
use rand::Rng;

/// Row of grayscale values scored by absolute distance to a target row
#[derive(Clone, Debug)]
pub struct RowCandidate {
    pub values: Vec<f64>,
    pub target: Arc<Vec<f64>>,
}

impl Candidate for RowCandidate {
    fn image_diff(&self) -> f64 {
        self.values
            .iter()
            .zip(self.target.iter())
            .map(|(v, t)| (v - t).abs())
            .sum()
    }

    fn mutate_in_place<R: Rng>(&mut self, rate: f64, swap: f64, sigma: f64, rng: &mut R) {
        for i in 0..self.values.len() {
            if !rng.gen_bool(rate.clamp(0.0, 1.0)) {
                continue;
            }
            if rng.gen_bool(swap.clamp(0.0, 1.0)) {
                let j = rng.gen_range(0..self.values.len());
                self.values.swap(i, j);
            } else {
                // uniform jitter is enough here, no need for a Gaussian
                self.values[i] += rng.gen_range(-sigma..=sigma);
            }
        }
    }

    fn crossover<R: Rng>(a: &Self, b: &Self, rng: &mut R) -> (Self, Self) {
        let mut first = a.clone();
        let mut second = b.clone();
        for i in 0..first.values.len().min(second.values.len()) {
            if rng.gen_bool(0.5) {
                std::mem::swap(&mut first.values[i], &mut second.values[i]);
            }
        }
        (first, second)
    }

    fn render(&self, _scale: f32) -> RgbaImage {
        let width = self.values.len().max(1) as u32;
        RgbaImage::from_fn(width, 1, |x, _y| {
            let v = self
                .values
                .get(x as usize)
                .map(|c| (c.clamp(0.0, 1.0) * 255.0) as u8)
                .unwrap_or(0);
            image::Rgba([v, v, v, 255])
        })
    }
}

/// Spawns rows with values drawn uniformly from `[0, 1)`
pub struct RowFactory {
    target: Arc<Vec<f64>>,
}

impl RowFactory {
    pub fn new(target: Arc<Vec<f64>>) -> Self {
        Self { target }
    }
}

impl CandidateFactory<RowCandidate> for RowFactory {
    fn spawn<R: Rng>(&self, rng: &mut R) -> RowCandidate {
        let values = (0..self.target.len()).map(|_| rng.gen_range(0.0..1.0)).collect();
        RowCandidate {
            values,
            target: Arc::clone(&self.target),
        }
    }
}

/// Spawns the same row every time, freezing evolution in place
pub struct ConstantFactory {
    values: Vec<f64>,
    target: Arc<Vec<f64>>,
}

impl ConstantFactory {
    pub fn new(values: Vec<f64>, target: Arc<Vec<f64>>) -> Self {
        Self { values, target }
    }
}

impl CandidateFactory<RowCandidate> for ConstantFactory {
    fn spawn<R: Rng>(&self, _rng: &mut R) -> RowCandidate {
        RowCandidate {
            values: self.values.clone(),
            target: Arc::clone(&self.target),
        }
    }
}

pub fn target(len: usize) -> Arc<Vec<f64>> {
    Arc::new(vec![0.5; len])
}
