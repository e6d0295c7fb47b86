//! Genetic operators
//!
//! Pluggable selection, mating, and mutation strategies consumed by
//! [`crate::population::Population`] during breeding.

pub mod mating;
pub mod mutation;
pub mod selection;
pub mod traits;

pub mod prelude {
    pub use super::mating::FirstChildMating;
    pub use super::mutation::{DetachedMutation, MutationParams};
    pub use super::selection::BestAndRandom;
    pub use super::traits::{MatingOperator, MutationOperator, SelectionPolicy};
}
