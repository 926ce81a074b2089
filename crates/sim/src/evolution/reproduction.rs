//! Offspring production for both genotypes.
//!
//! Wild-type reproduction is attenuated by the environmental decay rate;
//! mutant reproduction carries a net advantage of `selection - decay`, scaled
//! by the room left below carrying capacity (logistic competition). Both
//! offspring counts are Poisson draws around those expected values.

use crate::evolution::poisson_count;
use crate::simulation::SimulationParameters;
use rand::Rng;

/// Expected wild-type offspring count.
///
/// Decay removes a fixed fraction of wild-type reproductive output each
/// generation: the mean is `wildtype * (1 - decay_rate)`.
#[inline]
pub fn wildtype_offspring_mean(wildtype: u64, params: &SimulationParameters) -> f64 {
    wildtype as f64 * (1.0 - params.decay_rate())
}

/// Expected mutant offspring count under logistic competition.
///
/// The mean is `mutant + mutant * (selection - decay) * (1 - total / capacity)`.
/// The crowding term turns negative once the population overshoots capacity,
/// and with decay exceeding selection the whole expression can go below
/// zero; a Poisson mean must be non-negative, so the mean is clamped at zero
/// before any draw.
#[inline]
pub fn mutant_offspring_mean(mutant: u64, total: u64, params: &SimulationParameters) -> f64 {
    let m = mutant as f64;
    let crowding = 1.0 - total as f64 / params.carrying_capacity() as f64;
    let mean = m + m * (params.selection_coefficient() - params.decay_rate()) * crowding;
    mean.max(0.0)
}

/// Draw the wild-type offspring count for this generation.
pub fn sample_wildtype_offspring<R: Rng + ?Sized>(
    wildtype: u64,
    params: &SimulationParameters,
    rng: &mut R,
) -> u64 {
    poisson_count(wildtype_offspring_mean(wildtype, params), rng)
}

/// Draw the mutant offspring count for this generation.
///
/// `total` is the whole population after immigration, which sets the
/// crowding felt by the mutant line.
pub fn sample_mutant_offspring<R: Rng + ?Sized>(
    mutant: u64,
    total: u64,
    params: &SimulationParameters,
    rng: &mut R,
) -> u64 {
    poisson_count(mutant_offspring_mean(mutant, total, params), rng)
}
