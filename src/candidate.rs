//! Candidate contract
//!
//! The engine is generic over an opaque, evolvable solution. This module
//! defines what it demands from one: scoring against a bound target image,
//! in-place mutation, crossover, and rendering. Concrete representations
//! (triangle paintings, polygon soups, ...) live outside this crate.

use image::RgbaImage;
use rand::Rng;

/// An evolvable solution scored against a fixed target raster image.
///
/// The target is bound inside the candidate (shared read-only across the
/// whole run, e.g. behind an `Arc`), so scoring takes no argument. `Clone`
/// must produce a fully independent copy — offspring never alias their
/// parents.
pub trait Candidate: Clone + Send + Sync {
    /// Difference between this candidate's rendering and its bound target.
    ///
    /// Lower means a closer match (unless the population maximizes). Must be
    /// a pure, deterministic, side-effect-free function of candidate state
    /// and target. This is the expensive full-image comparison, invoked once
    /// per chromosome construction.
    fn image_diff(&self) -> f64;

    /// Perturb the candidate's internal structure in place.
    ///
    /// `rate` is the per-element mutation probability, `swap` the probability
    /// that a mutation event reorders elements rather than perturbing a
    /// value, and `sigma` the standard deviation of the Gaussian perturbation
    /// applied to perturbed values.
    fn mutate_in_place<R: Rng>(&mut self, rate: f64, swap: f64, sigma: f64, rng: &mut R);

    /// Recombine two parents into two children.
    ///
    /// Parents are left untouched; children must be independent of the
    /// parents and of each other.
    fn crossover<R: Rng>(a: &Self, b: &Self, rng: &mut R) -> (Self, Self);

    /// Rasterize the candidate for checkpointing.
    fn render(&self, scale: f32) -> RgbaImage;
}

/// Source of fresh random candidates.
///
/// Splitting the factory from the target-image reference keeps seeding
/// explicit: the factory owns whatever template state (element counts,
/// target handle, background color) a fresh candidate needs.
pub trait CandidateFactory<C: Candidate>: Send + Sync {
    /// Produce a fresh random candidate bound to the factory's target image.
    fn spawn<R: Rng>(&self, rng: &mut R) -> C;
}
