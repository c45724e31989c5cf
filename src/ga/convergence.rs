//! Stagnation-based termination.
//!
//! [`ConvergenceController`] watches the best length of each generation,
//! keeps the best individual ever seen, and decides when the run has
//! stopped making progress.

use super::types::Individual;

/// Observable controller state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConvergenceState {
    /// Keep evolving.
    Running,
    /// Stagnation limit exceeded. Terminal.
    Stopped,
}

/// The best individual seen so far and the generation that produced it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BestOfRun {
    pub individual: Individual,
    pub generation: usize,
}

/// Tracks best-of-run and counts stagnant generations.
///
/// Per observation:
///
/// 1. `delta = |current - best|`, using best-of-run *before* this update
/// 2. `delta ≤ min_fitness_gran` increments the stagnation counter,
///    anything larger resets it. Getting worse by more than the granularity
///    also resets it
/// 3. A strictly shorter `current` replaces best-of-run
/// 4. A counter above `stagnation_limit` moves to [`ConvergenceState::Stopped`]
#[derive(Debug, Clone)]
pub struct ConvergenceController {
    stagnation_limit: usize,
    min_fitness_gran: f64,
    stagnant: usize,
    best: BestOfRun,
    state: ConvergenceState,
}

impl ConvergenceController {
    /// Starts `Running` with a sentinel best of infinite length.
    pub fn new(stagnation_limit: usize, min_fitness_gran: f64) -> Self {
        Self {
            stagnation_limit,
            min_fitness_gran,
            stagnant: 0,
            best: BestOfRun {
                individual: Individual::sentinel(),
                generation: 0,
            },
            state: ConvergenceState::Running,
        }
    }

    /// Feeds one generation's best individual.
    ///
    /// Once `Stopped`, further observations are ignored: best-of-run is
    /// the final result.
    pub fn observe(&mut self, generation: usize, current: &Individual) -> ConvergenceState {
        if self.state == ConvergenceState::Stopped {
            return self.state;
        }

        let delta = (current.length() - self.best.individual.length()).abs();
        if delta <= self.min_fitness_gran {
            self.stagnant += 1;
        } else {
            self.stagnant = 0;
        }

        if current.length() < self.best.individual.length() {
            self.best = BestOfRun {
                individual: current.clone(),
                generation,
            };
            tracing::info!(
                generation,
                length = current.length(),
                steiner_points = ?current.sorted_steiner_points(),
                "new best of run"
            );
        }

        if self.stagnant > self.stagnation_limit {
            self.state = ConvergenceState::Stopped;
            tracing::info!(
                generation,
                best_generation = self.best.generation,
                length = self.best.individual.length(),
                "stagnation limit exceeded, stopping"
            );
        }

        self.state
    }

    /// Best individual observed so far (the sentinel before any observation).
    pub fn best_of_run(&self) -> &BestOfRun {
        &self.best
    }

    /// Current state.
    pub fn state(&self) -> ConvergenceState {
        self.state
    }

    /// Consecutive stagnant generations so far.
    pub fn stagnant_generations(&self) -> usize {
        self.stagnant
    }
}
