//! Stagnation detection
//!
//! Tracks how many consecutive generations finished without any change in the
//! best score and turns a long enough run into a fatal
//! [`EngineError::Stagnated`].

use crate::error::{EngineError, EvoResult};

/// Counts consecutive zero-gain generations and aborts at a threshold.
///
/// The counter is private state of the guard; a run of exactly `threshold`
/// zero-gain generations trips it. Any nonzero gain resets the run to zero.
#[derive(Clone, Debug)]
pub struct ConvergenceGuard {
    threshold: usize,
    run: usize,
}

impl ConvergenceGuard {
    pub fn new(threshold: usize) -> Self {
        Self { threshold, run: 0 }
    }

    /// Configured zero-gain threshold
    pub fn threshold(&self) -> usize {
        self.threshold
    }

    /// Current consecutive zero-gain run length
    pub fn zero_gain_run(&self) -> usize {
        self.run
    }

    /// Feed one generation's gain into the guard.
    ///
    /// `generation` and `best_score` only decorate the error when the guard
    /// trips.
    pub fn observe(&mut self, gain: f64, generation: usize, best_score: f64) -> EvoResult<()> {
        if gain == 0.0 {
            self.run += 1;
        } else {
            self.run = 0;
        }
        if self.run == self.threshold {
            return Err(EngineError::Stagnated {
                generation,
                threshold: self.threshold,
                best_score,
            });
        }
        Ok(())
    }
}
