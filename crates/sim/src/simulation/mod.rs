//! Population state, simulation parameters, and the trajectory engine.

pub mod engine;
pub mod parameters;
pub mod population;

pub use engine::{StopReason, Trajectory, TrajectoryOutcome};
pub use parameters::SimulationParameters;
pub use population::PopulationState;
