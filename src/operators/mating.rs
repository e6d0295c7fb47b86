//! Crossover wrapper

use rand::Rng;

use crate::candidate::Candidate;
use crate::operators::traits::MatingOperator;

/// Runs the candidate's two-child crossover and keeps only the first child.
///
/// The second child is dropped; each breeding step wants exactly one
/// offspring slot filled, and the complement carries no information the next
/// pairing cannot regenerate.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstChildMating;

impl FirstChildMating {
    pub fn new() -> Self {
        Self
    }
}

impl<C: Candidate> MatingOperator<C> for FirstChildMating {
    fn mate<R: Rng>(&self, mom: &C, dad: &C, rng: &mut R) -> C {
        let (first, _second) = C::crossover(mom, dad, rng);
        first
    }
}
