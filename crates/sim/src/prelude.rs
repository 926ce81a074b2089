//! Commonly used imports for convenience.
//!
//! # Example
//!
//! ```
//! use rescuevo_sim::prelude::*;
//!
//! let params = SimulationParameters::new(1000, 0.1, 0.3, 0.001, 3.0, 1000).unwrap();
//! let mut trajectory = Trajectory::new(PopulationState::new(1000, 0), params, 42);
//! let outcome = trajectory.run();
//! assert!(outcome.generations <= 1000);
//! ```

pub use crate::analysis::summary;
pub use crate::errors;
pub use crate::experiment::{Experiment, ExperimentRow, SummaryMetric, SweptParameter};
pub use crate::simulation::{
    PopulationState, SimulationParameters, StopReason, Trajectory, TrajectoryOutcome,
};
