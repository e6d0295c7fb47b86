//! Operator contracts
//!
//! Selection, mating, and mutation are pluggable strategies. The engine ships
//! one implementation of each, matching the classic best-plus-random scheme,
//! but the population loop only ever talks to these traits.

use rand::Rng;

use crate::candidate::Candidate;
use crate::chromosome::Chromosome;
use crate::operators::mutation::MutationParams;

/// Picks a parent pair out of the survivor pool
pub trait SelectionPolicy<C: Candidate>: Send + Sync {
    /// Select indices of a (mom, dad) pair from `pool`.
    ///
    /// Returns `None` when the pool is empty; the caller decides how to fill
    /// the gap. The two indices may coincide.
    fn select_parents<R: Rng>(
        &self,
        pool: &[Chromosome<C>],
        maximize: bool,
        rng: &mut R,
    ) -> Option<(usize, usize)>;
}

/// Produces one child from a parent pair
pub trait MatingOperator<C: Candidate>: Send + Sync {
    /// Recombine `mom` and `dad` into a single child. Parents stay intact.
    fn mate<R: Rng>(&self, mom: &C, dad: &C, rng: &mut R) -> C;
}

/// Produces a mutated copy of a candidate
pub trait MutationOperator<C: Candidate>: Send + Sync {
    /// Return a mutated copy of `candidate`. The input stays intact.
    fn mutate<R: Rng>(&self, candidate: &C, params: &MutationParams, rng: &mut R) -> C;
}
