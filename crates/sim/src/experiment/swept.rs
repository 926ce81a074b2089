//! Selection of the parameter varied across a grid.

use crate::errors::InvalidParameterError;
use crate::simulation::SimulationParameters;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which simulation parameter a grid sweep varies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SweptParameter {
    /// Per-generation fractional loss applied to wild-type reproduction
    DecayRate,
    /// Mutant reproductive advantage over wild-type
    SelectionCoefficient,
    /// Per-individual conversion probability for wild-type offspring
    MutationRate,
    /// Mean number of wild-type immigrants per generation
    MigrationRate,
}

impl SweptParameter {
    /// Substitute `value` into the swept field of `base`, re-validating.
    ///
    /// # Errors
    /// Returns an error when the value is out of range for the field, which
    /// aborts the grid point (and the run) rather than producing zeros.
    pub fn apply(
        &self,
        base: &SimulationParameters,
        value: f64,
    ) -> Result<SimulationParameters, InvalidParameterError> {
        match self {
            Self::DecayRate => base.with_decay_rate(value),
            Self::SelectionCoefficient => base.with_selection_coefficient(value),
            Self::MutationRate => base.with_mutation_rate(value),
            Self::MigrationRate => base.with_migration_rate(value),
        }
    }
}

impl fmt::Display for SweptParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::DecayRate => "decay-rate",
            Self::SelectionCoefficient => "selection-coefficient",
            Self::MutationRate => "mutation-rate",
            Self::MigrationRate => "migration-rate",
        };
        write!(f, "{name}")
    }
}
