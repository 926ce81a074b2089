//! Per-replicate result extraction.

use crate::analysis::summary;
use crate::simulation::{SimulationParameters, TrajectoryOutcome};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The scalar extracted from each replicate before averaging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SummaryMetric {
    /// Generations elapsed until the trajectory stopped
    GenerationsElapsed,
    /// Mutant count in the final state
    FinalMutantCount,
    /// Final population total as a fraction of carrying capacity
    CapacityFraction,
}

impl SummaryMetric {
    /// Extract this metric from one replicate outcome.
    pub fn extract(&self, outcome: &TrajectoryOutcome, params: &SimulationParameters) -> f64 {
        match self {
            Self::GenerationsElapsed => outcome.generations as f64,
            Self::FinalMutantCount => outcome.final_state.mutant as f64,
            Self::CapacityFraction => {
                summary::proportion(outcome.final_state.total(), params.carrying_capacity())
                    .expect("carrying capacity is validated positive")
            }
        }
    }
}

impl fmt::Display for SummaryMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::GenerationsElapsed => "generations",
            Self::FinalMutantCount => "final-mutants",
            Self::CapacityFraction => "capacity-fraction",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::{PopulationState, StopReason};

    fn outcome() -> TrajectoryOutcome {
        TrajectoryOutcome {
            generations: 37,
            final_state: PopulationState::new(180, 20),
            stop_reason: StopReason::ReachedCapacity,
            trace: None,
        }
    }

    #[test]
    fn test_extract_generations() {
        let params = SimulationParameters::new(200, 0.1, 0.3, 0.001, 3.0, 1000).unwrap();
        assert_eq!(
            SummaryMetric::GenerationsElapsed.extract(&outcome(), &params),
            37.0
        );
    }

    #[test]
    fn test_extract_final_mutants() {
        let params = SimulationParameters::new(200, 0.1, 0.3, 0.001, 3.0, 1000).unwrap();
        assert_eq!(
            SummaryMetric::FinalMutantCount.extract(&outcome(), &params),
            20.0
        );
    }

    #[test]
    fn test_extract_capacity_fraction() {
        let params = SimulationParameters::new(400, 0.1, 0.3, 0.001, 3.0, 1000).unwrap();
        assert_eq!(
            SummaryMetric::CapacityFraction.extract(&outcome(), &params),
            0.5
        );
    }

    #[test]
    fn test_display_names() {
        assert_eq!(SummaryMetric::GenerationsElapsed.to_string(), "generations");
        assert_eq!(
            SummaryMetric::CapacityFraction.to_string(),
            "capacity-fraction"
        );
    }
}
