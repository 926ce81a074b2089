//! Trajectory engine driving the generation update to a stopping condition.
//!
//! A [`Trajectory`] owns its parameter set, current state, and random number
//! generator (Xoshiro256++, seeded per trajectory so replicates stay
//! independent and reproducible). [`Trajectory::run`] iterates the generation
//! update until the population lands exactly on the carrying capacity or the
//! generation cap is reached.

use crate::evolution;
use crate::simulation::{PopulationState, SimulationParameters};
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;
use serde::{Deserialize, Serialize};

/// Why a trajectory stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StopReason {
    /// The population total landed exactly on the carrying capacity.
    ReachedCapacity,
    /// The generation cap was hit first.
    TimedOut,
}

/// The result of one completed trajectory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryOutcome {
    /// Generations elapsed when the trajectory stopped
    pub generations: usize,
    /// Population state at the stopping point
    pub final_state: PopulationState,
    /// Which stopping condition fired
    pub stop_reason: StopReason,
    /// Full per-generation history (initial state included), when requested
    pub trace: Option<Vec<PopulationState>>,
}

/// One population trajectory under a fixed parameter set.
#[derive(Debug, Clone)]
pub struct Trajectory {
    params: SimulationParameters,
    state: PopulationState,
    generation: usize,
    rng: Xoshiro256PlusPlus,
}

impl Trajectory {
    /// Create a trajectory at generation zero.
    pub fn new(initial: PopulationState, params: SimulationParameters, seed: u64) -> Self {
        Self {
            params,
            state: initial,
            generation: 0,
            rng: Xoshiro256PlusPlus::seed_from_u64(seed),
        }
    }

    /// Current population state.
    pub fn state(&self) -> PopulationState {
        self.state
    }

    /// Current generation number.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// The parameter set this trajectory runs under.
    pub fn params(&self) -> &SimulationParameters {
        &self.params
    }

    /// Advance the trajectory by one generation.
    pub fn step(&mut self) {
        self.state = evolution::advance(self.state, &self.params, &mut self.rng);
        self.generation += 1;
    }

    /// Run until a stopping condition fires, discarding the history.
    pub fn run(&mut self) -> TrajectoryOutcome {
        self.drive(false)
    }

    /// Run until a stopping condition fires, recording every state.
    ///
    /// The trace starts with the initial state and carries one entry per
    /// generation, so its length is `generations + 1`.
    pub fn run_with_trace(&mut self) -> TrajectoryOutcome {
        self.drive(true)
    }

    /// Stopping rule, checked after each step.
    ///
    /// Capacity is tested with exact equality. Overshooting pools are pinned
    /// to exactly the capacity by density regulation, so the equality test is
    /// the reliable termination mechanism and must not be widened to `>=`.
    fn stopped(&self) -> Option<StopReason> {
        if self.state.total() == self.params.carrying_capacity() {
            Some(StopReason::ReachedCapacity)
        } else if self.generation >= self.params.max_generations() {
            Some(StopReason::TimedOut)
        } else {
            None
        }
    }

    fn drive(&mut self, record: bool) -> TrajectoryOutcome {
        let mut trace = record.then(|| vec![self.state]);
        loop {
            self.step();
            if let Some(states) = trace.as_mut() {
                states.push(self.state);
            }
            if let Some(reason) = self.stopped() {
                return TrajectoryOutcome {
                    generations: self.generation,
                    final_state: self.state,
                    stop_reason: reason,
                    trace,
                };
            }
        }
    }
}
