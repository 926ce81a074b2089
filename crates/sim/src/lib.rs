//! # Rescuevo Simulation Crate
//!
//! Core logic for simulating evolutionary rescue: a two-genotype population
//! (wild-type and mutant) declining under environmental decay while beneficial
//! mutants, fed by mutation and stochastic immigration, compete for a shared
//! carrying capacity in discrete generations.
//!
//! The crate is organized around four layers:
//! - [`evolution`]: the per-generation stochastic operators (immigration,
//!   reproduction, capacity regulation, mutation) and their composition.
//! - [`simulation`]: parameters, population state, and the trajectory engine
//!   that drives generations to a stopping condition.
//! - [`experiment`]: replicated trajectories across a parameter grid,
//!   reduced to one summary row per grid point.
//! - [`analysis`]: summary statistics over replicate batches.

pub mod analysis;
pub mod errors;
pub mod evolution;
pub mod experiment;
pub mod prelude;
pub mod simulation;

// Re-export commonly used types for convenient external access.
//
// These types form the public, stable surface that most consumers of the
// library will use when running trajectories or sweeps.
pub use simulation::{
    PopulationState, SimulationParameters, StopReason, Trajectory, TrajectoryOutcome,
};
