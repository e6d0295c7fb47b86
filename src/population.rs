//! Population state and the generational loop
//!
//! [`Population`] owns the live pool of chromosomes plus the bookkeeping that
//! survives across hyperparameter phases: generation count, best/previous
//! best, last gain, and the stagnation guard. One generation is an
//! eliminate-then-breed cycle; [`Population::evolve`] runs a whole phase of
//! them and reports each to a checkpointer.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::candidate::{Candidate, CandidateFactory};
use crate::checkpoint::Checkpointer;
use crate::chromosome::{cmp_scores, Chromosome};
use crate::convergence::ConvergenceGuard;
use crate::error::EvoResult;
use crate::operators::mutation::MutationParams;
use crate::operators::traits::{MatingOperator, MutationOperator, SelectionPolicy};

/// One segment of a phased run: how many generations to breed and with which
/// hyperparameters. Runs typically chain several phases over the same live
/// population, tightening mutation as the image converges.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Phase {
    /// Number of eliminate/breed cycles in this phase
    pub generations: usize,
    /// Fraction of the population kept at each elimination, in `[0, 1]`
    pub survival_rate: f64,
    /// Mutation knobs applied to every offspring in this phase
    pub mutation: MutationParams,
}

impl Phase {
    pub fn new(generations: usize, survival_rate: f64, mutation: MutationParams) -> Self {
        Self {
            generations,
            survival_rate,
            mutation,
        }
    }
}

/// A fixed-size pool of candidates under generational evolution
pub struct Population<C: Candidate, F: CandidateFactory<C>> {
    members: Vec<Chromosome<C>>,
    factory: F,
    sample_size: usize,
    generation_count: usize,
    maximize: bool,
    current_best: Chromosome<C>,
    previous_best: Chromosome<C>,
    gain: f64,
    guard: ConvergenceGuard,
}

impl<C: Candidate, F: CandidateFactory<C>> Population<C, F> {
    /// Seed a population of `sample_size` fresh random candidates.
    ///
    /// The first two spawns double as the initial best/previous-best pair, so
    /// the very first generation has a meaningful gain. `maximize` fixes the
    /// fitness direction for the whole run.
    ///
    /// # Panics
    ///
    /// Panics if `sample_size < 2`.
    pub fn new<R: Rng>(
        factory: F,
        sample_size: usize,
        maximize: bool,
        stagnation_threshold: usize,
        rng: &mut R,
    ) -> Self {
        assert!(sample_size >= 2, "population needs at least two members");

        let current_best = Chromosome::new(factory.spawn(rng));
        let previous_best = Chromosome::new(factory.spawn(rng));
        let mut members = vec![current_best.clone(), previous_best.clone()];

        let fresh: Vec<C> = (members.len()..sample_size)
            .map(|_| factory.spawn(rng))
            .collect();
        members.extend(Self::score_batch(fresh));

        let population = Self {
            members,
            factory,
            sample_size,
            generation_count: 0,
            maximize,
            current_best,
            previous_best,
            gain: 0.0,
            guard: ConvergenceGuard::new(stagnation_threshold),
        };
        info!(
            sample_size,
            mean_fitness = population.mean_fitness(),
            "population seeded"
        );
        population
    }

    /// Resume numbering from a checkpointed run
    pub fn with_generation_count(mut self, generation_count: usize) -> Self {
        self.generation_count = generation_count;
        self
    }

    fn score_batch(candidates: Vec<C>) -> Vec<Chromosome<C>> {
        #[cfg(feature = "parallel")]
        {
            candidates.into_par_iter().map(Chromosome::new).collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            candidates.into_iter().map(Chromosome::new).collect()
        }
    }

    /// Rank the pool and truncate it to the surviving fraction.
    ///
    /// Updates previous/current best and the gain from the full
    /// pre-truncation pool. If any member lacks a fitness value the whole
    /// step is skipped with a warning and the pool is left untouched.
    pub fn eliminate(&mut self, survival_rate: f64) {
        if self.members.iter().any(|m| !m.is_scored()) {
            warn!(
                population_len = self.members.len(),
                "member without fitness value, skipping elimination"
            );
            return;
        }

        let maximize = self.maximize;
        self.members.sort_by(|a, b| {
            // Unscored was ruled out above.
            let a = a.score().unwrap_or(f64::NAN);
            let b = b.score().unwrap_or(f64::NAN);
            cmp_scores(a, b, maximize)
        });

        self.previous_best = self.current_best.clone();
        self.current_best = self.members[0].clone();
        let prev = self.previous_best.score().unwrap_or(f64::NAN);
        let cur = self.current_best.score().unwrap_or(f64::NAN);
        self.gain = (prev - cur).abs();

        let survivor_count = (self.sample_size as f64 * survival_rate).floor() as usize;
        self.members.truncate(survivor_count);
    }

    /// Refill the pool to `sample_size` with scored offspring.
    ///
    /// Each offspring comes from one select/mate/mutate pass over the
    /// survivor pool. When the pool is empty the factory fills the gap with
    /// fresh randoms. Offspring land in a buffer first, so selection never
    /// sees its own output. Increments the generation count unconditionally.
    pub fn breed<R: Rng>(
        &mut self,
        select: &impl SelectionPolicy<C>,
        mate: &impl MatingOperator<C>,
        mutate: &impl MutationOperator<C>,
        params: &MutationParams,
        rng: &mut R,
    ) {
        let needed = self.sample_size.saturating_sub(self.members.len());

        let mut offspring = Vec::with_capacity(needed);
        for _ in 0..needed {
            let child = match select.select_parents(&self.members, self.maximize, rng) {
                Some((mom, dad)) => {
                    let child = mate.mate(
                        self.members[mom].candidate(),
                        self.members[dad].candidate(),
                        rng,
                    );
                    mutate.mutate(&child, params, rng)
                }
                None => self.factory.spawn(rng),
            };
            offspring.push(child);
        }
        self.members.extend(Self::score_batch(offspring));

        if self.members.len() < self.sample_size {
            warn!(
                expected = self.sample_size,
                actual = self.members.len(),
                "population below sample size after breeding"
            );
        }
        self.generation_count += 1;
    }

    /// Run one full phase of eliminate/breed cycles.
    ///
    /// Every generation is reported to `checkpointer` and fed to the
    /// stagnation guard; either can abort the phase with an error. State
    /// carries over between phases, so calling this again with different
    /// hyperparameters continues the same run.
    pub fn evolve<R: Rng>(
        &mut self,
        phase: &Phase,
        select: &impl SelectionPolicy<C>,
        mate: &impl MatingOperator<C>,
        mutate: &impl MutationOperator<C>,
        checkpointer: &mut impl Checkpointer<C>,
        rng: &mut R,
    ) -> EvoResult<()> {
        for _ in 0..phase.generations {
            self.eliminate(phase.survival_rate);
            self.breed(select, mate, mutate, &phase.mutation, rng);
            checkpointer.record(self.generation_count, &self.current_best, self.gain)?;
            let best_score = self.current_best.score().unwrap_or(f64::NAN);
            self.guard
                .observe(self.gain, self.generation_count, best_score)?;
        }
        Ok(())
    }

    pub fn members(&self) -> &[Chromosome<C>] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn sample_size(&self) -> usize {
        self.sample_size
    }

    pub fn generation_count(&self) -> usize {
        self.generation_count
    }

    pub fn maximize(&self) -> bool {
        self.maximize
    }

    /// Champion as of the last elimination
    pub fn current_best(&self) -> &Chromosome<C> {
        &self.current_best
    }

    /// Champion of the elimination before that
    pub fn previous_best(&self) -> &Chromosome<C> {
        &self.previous_best
    }

    /// Absolute best-score change at the last elimination
    pub fn gain(&self) -> f64 {
        self.gain
    }

    /// Mean fitness over the scored members, `None` if none are scored
    pub fn mean_fitness(&self) -> Option<f64> {
        let scored: Vec<f64> = self.members.iter().filter_map(|m| m.score()).collect();
        if scored.is_empty() {
            return None;
        }
        Some(scored.iter().sum::<f64>() / scored.len() as f64)
    }

    /// Stagnation guard state
    pub fn stagnation(&self) -> &ConvergenceGuard {
        &self.guard
    }
}
