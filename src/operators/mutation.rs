//! Mutation operator and its knobs

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::candidate::Candidate;
use crate::operators::traits::MutationOperator;

/// Mutation hyperparameters, varied per phase of a run.
///
/// What each knob means mechanically is up to the candidate representation;
/// the conventional reading is documented on
/// [`Candidate::mutate_in_place`](crate::candidate::Candidate::mutate_in_place).
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct MutationParams {
    /// Per-element mutation probability
    pub rate: f64,
    /// Probability that a mutation event reorders rather than perturbs
    pub swap: f64,
    /// Standard deviation of the Gaussian value perturbation
    pub sigma: f64,
}

impl MutationParams {
    pub fn new(rate: f64, swap: f64, sigma: f64) -> Self {
        Self { rate, swap, sigma }
    }
}

impl Default for MutationParams {
    fn default() -> Self {
        Self {
            rate: 0.04,
            swap: 0.5,
            sigma: 1.0,
        }
    }
}

/// Mutates a detached copy, leaving the source candidate untouched.
///
/// Offspring are mutated after crossover but before scoring, so the copy is
/// cheap relative to the fitness evaluation that follows.
#[derive(Clone, Copy, Debug, Default)]
pub struct DetachedMutation;

impl DetachedMutation {
    pub fn new() -> Self {
        Self
    }
}

impl<C: Candidate> MutationOperator<C> for DetachedMutation {
    fn mutate<R: Rng>(&self, candidate: &C, params: &MutationParams, rng: &mut R) -> C {
        let mut copy = candidate.clone();
        copy.mutate_in_place(params.rate, params.swap, params.sigma, rng);
        copy
    }
}
