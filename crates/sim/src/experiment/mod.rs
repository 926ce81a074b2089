//! Replicated experiments over parameter grids.
//!
//! An [`Experiment`] repeats independent trajectories across the values of
//! one swept parameter and reduces each batch of replicates to a single
//! summary statistic, producing one [`ExperimentRow`] per grid point. Which
//! scalar is extracted from each replicate is chosen by a [`SummaryMetric`],
//! so a single driver covers the sweeps that would otherwise need one loop
//! per output quantity.

pub mod metric;
pub mod runner;
pub mod swept;

pub use metric::SummaryMetric;
pub use runner::{Experiment, ExperimentRow};
pub use swept::SweptParameter;
