//! Error types for the evolution engine
//!
//! Two classes of failure exist: fatal errors surfaced through
//! [`EngineError`], and reported-but-continued conditions (population size
//! shortfall after breeding, unscored member during elimination) which are
//! logged by [`crate::population::Population`] and never produce an error
//! value.

use thiserror::Error;

/// Fatal failures that abort an evolution run
#[derive(Debug, Error)]
pub enum EngineError {
    /// The search stalled: no gain for `threshold` consecutive generations.
    ///
    /// This is a hard stop by design — a stalled search should terminate,
    /// not loop forever consuming resources.
    #[error(
        "no gain in the last {threshold} generations \
         (stopped at generation {generation}, best score {best_score})"
    )]
    Stagnated {
        /// Generation count at which the run was stopped
        generation: usize,
        /// Configured consecutive zero-gain threshold
        threshold: usize,
        /// Best score achieved before the stop
        best_score: f64,
    },

    /// A checkpoint image could not be written
    #[error("checkpoint write failed: {0}")]
    Checkpoint(#[from] image::ImageError),
}

/// Result type alias for evolution operations
pub type EvoResult<T> = Result<T, EngineError>;
