//! Population state for the two-genotype model.

use serde::{Deserialize, Serialize};

/// Counts of the two genotypes at one observable point in time.
///
/// The wild-type genotype is the original, environment-unfit one; the mutant
/// genotype carries the beneficial variant that can rescue the population.
/// Counts are unsigned, so non-negativity holds by construction. A state is
/// never mutated in place: each generation update yields a fresh value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopulationState {
    /// Number of wild-type individuals
    pub wildtype: u64,
    /// Number of mutant individuals
    pub mutant: u64,
}

impl PopulationState {
    /// Create a new population state from genotype counts.
    pub fn new(wildtype: u64, mutant: u64) -> Self {
        Self { wildtype, mutant }
    }

    /// Total population size across both genotypes.
    #[inline]
    pub fn total(&self) -> u64 {
        self.wildtype + self.mutant
    }
}
