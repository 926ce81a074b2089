//! Conversion of wild-type offspring to the mutant genotype.
//!
//! Mutation acts on the post-regulation offspring pool: each wild-type
//! offspring independently converts with probability `mutation_rate`, so the
//! number of conversions per generation is approximately Poisson with mean
//! `offspring_wildtype * mutation_rate`. The draw is clamped to the pool it
//! is taken from, since a conversion count can never exceed the available
//! wild-type offspring.

use crate::evolution::poisson_count;
use rand::Rng;

/// Draw the number of wild-type offspring converting to the mutant genotype.
pub fn sample_conversions<R: Rng + ?Sized>(
    offspring_wildtype: u64,
    mutation_rate: f64,
    rng: &mut R,
) -> u64 {
    let mean = offspring_wildtype as f64 * mutation_rate;
    poisson_count(mean, rng).min(offspring_wildtype)
}
