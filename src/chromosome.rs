//! Chromosome wrapper type
//!
//! A chromosome pairs one candidate with its cached fitness value and owns
//! eager fitness computation.

use std::cmp::Ordering;

use crate::candidate::Candidate;

/// A candidate plus its cached fitness
#[derive(Clone, Debug)]
pub struct Chromosome<C: Candidate> {
    candidate: C,
    fitness: Option<f64>,
}

impl<C: Candidate> Chromosome<C> {
    /// Wrap a candidate and score it immediately.
    ///
    /// Scoring runs the full image comparison, so this is the expensive path;
    /// everything downstream reads the cached value.
    pub fn new(candidate: C) -> Self {
        let fitness = Some(candidate.image_diff());
        Self { candidate, fitness }
    }

    /// Wrap a candidate without scoring it.
    ///
    /// The main loop never does this; it exists for callers that manage
    /// scoring themselves via [`Chromosome::recalculate_fitness`].
    pub fn unscored(candidate: C) -> Self {
        Self {
            candidate,
            fitness: None,
        }
    }

    /// Override the cached fitness unconditionally
    pub fn set_fitness(&mut self, fitness: f64) {
        self.fitness = Some(fitness);
    }

    /// Cached fitness, `None` if never computed
    pub fn score(&self) -> Option<f64> {
        self.fitness
    }

    /// Whether a fitness value has been cached
    pub fn is_scored(&self) -> bool {
        self.fitness.is_some()
    }

    /// Recompute and overwrite the cached fitness.
    ///
    /// Idempotent for an unmutated candidate within floating-point tolerance.
    pub fn recalculate_fitness(&mut self) {
        self.fitness = Some(self.candidate.image_diff());
    }

    /// The wrapped candidate
    pub fn candidate(&self) -> &C {
        &self.candidate
    }

    /// Take the candidate out of this chromosome
    pub fn into_candidate(self) -> C {
        self.candidate
    }
}

/// Order two scores better-first, honoring the fitness direction.
///
/// `Less` means `a` is better. NaN always loses, so it never survives a sort
/// or wins a best pick.
pub(crate) fn cmp_scores(a: f64, b: f64, maximize: bool) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => {
            let ord = a.partial_cmp(&b).unwrap_or(Ordering::Equal);
            if maximize {
                ord.reverse()
            } else {
                ord
            }
        }
    }
}
