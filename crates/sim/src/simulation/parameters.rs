//! Simulation parameters and their validation.
//!
//! All parameters are validated eagerly, before any simulation work begins.
//! The fields are private and only reachable through the validated
//! constructor and the `with_*` copies, so a running trajectory can never
//! observe an out-of-range value.

pub use crate::errors::InvalidParameterError;
use serde::{Deserialize, Serialize};

/// Parameters governing one trajectory, immutable for its duration.
///
/// The decay rate (called "pollution rate" in some of the literature this
/// model comes from) attenuates wild-type reproduction each generation; the
/// selection coefficient is the mutant's reproductive advantage over
/// wild-type; the migration rate is the mean of the Poisson-distributed count
/// of wild-type immigrants arriving per generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationParameters {
    /// Maximum population size the environment supports
    carrying_capacity: u64,
    /// Per-generation fractional loss applied to wild-type reproduction
    decay_rate: f64,
    /// Mutant reproductive advantage over wild-type
    selection_coefficient: f64,
    /// Per-individual probability a wild-type offspring converts to mutant
    mutation_rate: f64,
    /// Mean number of wild-type immigrants per generation
    migration_rate: f64,
    /// Hard cap on the number of generations a trajectory may run
    max_generations: usize,
}

impl SimulationParameters {
    /// Create a validated parameter set.
    ///
    /// # Arguments
    /// * `carrying_capacity` - Maximum supported population size (must be > 0)
    /// * `decay_rate` - Fractional reproductive loss per generation (must be in `[0, 1)`)
    /// * `selection_coefficient` - Mutant advantage; any real value, typically small and positive
    /// * `mutation_rate` - Conversion probability per wild-type offspring (must be in `[0, 1)`)
    /// * `migration_rate` - Mean immigrants per generation (must be finite and >= 0)
    /// * `max_generations` - Trajectory generation cap (must be > 0)
    ///
    /// # Errors
    /// Returns an error naming the first offending field and its valid range.
    pub fn new(
        carrying_capacity: u64,
        decay_rate: f64,
        selection_coefficient: f64,
        mutation_rate: f64,
        migration_rate: f64,
        max_generations: usize,
    ) -> Result<Self, InvalidParameterError> {
        if carrying_capacity == 0 {
            return Err(InvalidParameterError::CarryingCapacity(carrying_capacity));
        }
        if !(0.0..1.0).contains(&decay_rate) {
            return Err(InvalidParameterError::DecayRate(decay_rate));
        }
        if !(0.0..1.0).contains(&mutation_rate) {
            return Err(InvalidParameterError::MutationRate(mutation_rate));
        }
        if !migration_rate.is_finite() || migration_rate < 0.0 {
            return Err(InvalidParameterError::MigrationRate(migration_rate));
        }
        if max_generations == 0 {
            return Err(InvalidParameterError::MaxGenerations(max_generations));
        }
        Ok(Self {
            carrying_capacity,
            decay_rate,
            selection_coefficient,
            mutation_rate,
            migration_rate,
            max_generations,
        })
    }

    /// Maximum population size the environment supports.
    #[inline]
    pub fn carrying_capacity(&self) -> u64 {
        self.carrying_capacity
    }

    /// Per-generation fractional loss applied to wild-type reproduction.
    #[inline]
    pub fn decay_rate(&self) -> f64 {
        self.decay_rate
    }

    /// Mutant reproductive advantage over wild-type.
    #[inline]
    pub fn selection_coefficient(&self) -> f64 {
        self.selection_coefficient
    }

    /// Per-individual conversion probability for wild-type offspring.
    #[inline]
    pub fn mutation_rate(&self) -> f64 {
        self.mutation_rate
    }

    /// Mean number of wild-type immigrants per generation.
    #[inline]
    pub fn migration_rate(&self) -> f64 {
        self.migration_rate
    }

    /// Hard cap on the number of generations a trajectory may run.
    #[inline]
    pub fn max_generations(&self) -> usize {
        self.max_generations
    }

    /// Copy with a different decay rate, re-validated.
    pub fn with_decay_rate(&self, decay_rate: f64) -> Result<Self, InvalidParameterError> {
        Self::new(
            self.carrying_capacity,
            decay_rate,
            self.selection_coefficient,
            self.mutation_rate,
            self.migration_rate,
            self.max_generations,
        )
    }

    /// Copy with a different selection coefficient, re-validated.
    pub fn with_selection_coefficient(
        &self,
        selection_coefficient: f64,
    ) -> Result<Self, InvalidParameterError> {
        Self::new(
            self.carrying_capacity,
            self.decay_rate,
            selection_coefficient,
            self.mutation_rate,
            self.migration_rate,
            self.max_generations,
        )
    }

    /// Copy with a different mutation rate, re-validated.
    pub fn with_mutation_rate(&self, mutation_rate: f64) -> Result<Self, InvalidParameterError> {
        Self::new(
            self.carrying_capacity,
            self.decay_rate,
            self.selection_coefficient,
            mutation_rate,
            self.migration_rate,
            self.max_generations,
        )
    }

    /// Copy with a different migration rate, re-validated.
    pub fn with_migration_rate(&self, migration_rate: f64) -> Result<Self, InvalidParameterError> {
        Self::new(
            self.carrying_capacity,
            self.decay_rate,
            self.selection_coefficient,
            self.mutation_rate,
            migration_rate,
            self.max_generations,
        )
    }
}
