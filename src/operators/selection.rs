//! Parent selection

use rand::Rng;

use crate::candidate::Candidate;
use crate::chromosome::{cmp_scores, Chromosome};
use crate::operators::traits::SelectionPolicy;

/// Best-plus-random pairing.
///
/// Mom is the best-scored member of the pool, dad is drawn uniformly from the
/// whole pool (possibly mom again). Pairing the champion with an arbitrary
/// partner pulls the population toward the current best while still feeding
/// diversity back in.
#[derive(Clone, Copy, Debug, Default)]
pub struct BestAndRandom;

impl BestAndRandom {
    pub fn new() -> Self {
        Self
    }
}

impl<C: Candidate> SelectionPolicy<C> for BestAndRandom {
    fn select_parents<R: Rng>(
        &self,
        pool: &[Chromosome<C>],
        maximize: bool,
        rng: &mut R,
    ) -> Option<(usize, usize)> {
        if pool.is_empty() {
            return None;
        }

        // Earliest strictly-better scored member wins; unscored members are
        // never picked as mom unless the whole pool is unscored.
        let mut mom = None;
        for (idx, member) in pool.iter().enumerate() {
            let score = match member.score() {
                Some(score) => score,
                None => continue,
            };
            mom = match mom {
                None => Some((idx, score)),
                Some((_, best)) if cmp_scores(score, best, maximize).is_lt() => Some((idx, score)),
                keep => keep,
            };
        }
        let mom = match mom {
            Some((idx, _)) => idx,
            None => rng.gen_range(0..pool.len()),
        };

        let dad = rng.gen_range(0..pool.len());
        Some((mom, dad))
    }
}
