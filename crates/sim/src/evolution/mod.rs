//! Evolutionary operators applied within a single generation.
//!
//! This module implements the stages of the simulated life cycle:
//! - **Immigration**: Poisson-distributed arrival of wild-type individuals
//! - **Reproduction**: Poisson offspring draws for both genotypes
//! - **Regulation**: binomial thinning back to carrying capacity
//! - **Mutation**: conversion of wild-type offspring to the mutant genotype
//!
//! [`generation::advance`] composes the stages in life-cycle order.

pub mod generation;
pub mod immigration;
pub mod mutation;
pub mod regulation;
pub mod reproduction;

pub use generation::advance;

use rand::Rng;
use rand_distr::{Distribution, Poisson};

/// Poisson count draw with a non-positive-mean guard.
///
/// `Poisson::new` rejects non-positive means, so a mean of zero (a silent
/// rate, or a mean clamped to zero upstream) short-circuits to a count of
/// zero without consuming randomness.
pub(crate) fn poisson_count<R: Rng + ?Sized>(mean: f64, rng: &mut R) -> u64 {
    if mean <= 0.0 {
        return 0;
    }
    let dist = Poisson::new(mean).expect("Poisson mean is positive and finite");
    dist.sample(rng) as u64
}
