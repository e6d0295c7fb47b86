//! # artevo
//!
//! A generational genetic algorithm engine that evolves a population of
//! candidate solutions toward a fixed target raster image.
//!
//! The engine owns the evolution loop: truncation selection, best-plus-random
//! parent pairing, crossover/mutation breeding, stagnation detection, and
//! PNG checkpointing of the best candidate. The candidate representation
//! itself — its geometry, mutation algorithm, crossover algorithm, rendering,
//! and the image difference metric — is an external collaborator expressed
//! through the [`candidate::Candidate`] trait.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use artevo::prelude::*;
//!
//! let mut rng = rand::thread_rng();
//! let factory = PaintingFactory::new(target_image, 250);
//!
//! let mut population = Population::new(factory, 100, false, 180, &mut rng);
//! let mut checkpointer = PngCheckpointer::new("./output");
//!
//! // Annealing-style schedule: the same live population runs through
//! // successive hyperparameter phases.
//! for phase in [
//!     Phase::new(200, 0.60, MutationParams::new(0.20, 0.75, 1.0)),
//!     Phase::new(300, 0.60, MutationParams::new(0.05, 0.25, 1.0)),
//!     Phase::new(300, 0.60, MutationParams::new(0.03, 0.0, 0.12)),
//! ] {
//!     population.evolve(
//!         &phase,
//!         &BestAndRandom::new(),
//!         &FirstChildMating::new(),
//!         &DetachedMutation::new(),
//!         &mut checkpointer,
//!         &mut rng,
//!     )?;
//! }
//! ```

pub mod candidate;
pub mod checkpoint;
pub mod chromosome;
pub mod convergence;
pub mod error;
pub mod operators;
pub mod population;

#[cfg(test)]
pub(crate) mod test_support;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::candidate::{Candidate, CandidateFactory};
    pub use crate::checkpoint::{Checkpointer, NullCheckpointer, PngCheckpointer};
    pub use crate::chromosome::Chromosome;
    pub use crate::convergence::ConvergenceGuard;
    pub use crate::error::{EngineError, EvoResult};
    pub use crate::operators::prelude::*;
    pub use crate::population::{Phase, Population};
}
