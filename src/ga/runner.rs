//! Generation loop.
//!
//! [`initialize`] and [`evolve`] are plain functions: a population goes in,
//! a new population comes out. [`SteinerOptimizer`] owns the seeded RNG and
//! the [`ConvergenceController`] and advances one generation per
//! [`step`](SteinerOptimizer::step); looping is left to the caller, or to
//! the [`run`](SteinerOptimizer::run) helpers.

use super::config::SteinerConfig;
use super::convergence::{BestOfRun, ConvergenceController, ConvergenceState};
use super::operators::{crossover, mutate_structure, random_point};
use super::selection::select_parent;
use super::types::{Individual, Population, Spreads};
use crate::error::ConfigError;
use crate::geometry::Point;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::instrument;

// ============================================================================
// Population construction
// ============================================================================

/// Builds a random, sorted initial population.
///
/// Each individual gets `round(U[1, max_steiner_points])` Steiner points
/// drawn uniformly inside the bounds.
///
/// # Errors
/// Returns the first [`ConfigError`] found by [`SteinerConfig::validate`].
#[instrument(
    level = "debug",
    skip(config, rng),
    fields(terminals = config.terminals.len(), population_size = config.population_size)
)]
pub fn initialize<R: Rng>(config: &SteinerConfig, rng: &mut R) -> Result<Population, ConfigError> {
    config.validate()?;

    let max = config.max_steiner_points as f64;
    let point_sets: Vec<Vec<Point>> = (0..config.population_size)
        .map(|_| {
            let count = rng.random_range(1.0..=max).round() as usize;
            (0..count)
                .map(|_| random_point(&config.bounds, config.integer_coordinates, rng))
                .collect()
        })
        .collect();

    Population::new(build_individuals(config, point_sets)).ok_or(ConfigError::EmptyPopulation)
}

/// Breeds a full replacement generation.
///
/// For each of `population_size` children: two half-normal parent draws,
/// [`crossover`], [`mutate_structure`]. All random draws happen here, in
/// order; the network builds that follow never touch the RNG and may run
/// in parallel. No individual survives unchanged: best-of-run is kept by
/// the [`ConvergenceController`], not by elitism.
pub fn evolve<R: Rng>(
    population: &Population,
    config: &SteinerConfig,
    spreads: &Spreads,
    rng: &mut R,
) -> Population {
    let parents = population.as_slice();
    let point_sets: Vec<Vec<Point>> = (0..config.population_size)
        .map(|_| {
            let a = select_parent(parents.len(), &spreads.parent, rng);
            let b = select_parent(parents.len(), &spreads.parent, rng);
            let mut child = crossover(
                parents[a].steiner_points(),
                parents[b].steiner_points(),
                config,
                spreads,
                rng,
            );
            mutate_structure(&mut child, config, spreads, rng);
            child
        })
        .collect();

    // Only an unvalidated zero population_size breeds nothing.
    Population::new(build_individuals(config, point_sets)).unwrap_or_else(|| population.clone())
}

/// Builds every individual's network, on rayon when enabled.
fn build_individuals(config: &SteinerConfig, point_sets: Vec<Vec<Point>>) -> Vec<Individual> {
    #[cfg(feature = "parallel")]
    {
        if config.parallel {
            return point_sets
                .into_par_iter()
                .map(|pts| Individual::new(&config.terminals, pts))
                .collect();
        }
    }

    point_sets
        .into_iter()
        .map(|pts| Individual::new(&config.terminals, pts))
        .collect()
}

// ============================================================================
// Optimizer
// ============================================================================

/// What one generation produced, for renderers and drivers.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationReport {
    /// 1 for the first evolved generation; the initial population is 0.
    pub generation: usize,
    /// Best individual of this generation (not necessarily best-of-run).
    pub best: Individual,
    /// Controller state after observing this generation.
    pub state: ConvergenceState,
}

/// Result of a [`run`](SteinerOptimizer::run).
#[derive(Debug, Clone)]
pub struct SteinerResult {
    /// Best individual of the whole run.
    pub best: Individual,

    /// Generation that produced `best` (0 = initial population).
    pub best_generation: usize,

    /// Generations evolved so far, including any stepped before the run.
    pub generations: usize,

    /// Whether the run ended on the stagnation limit.
    pub stagnated: bool,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,

    /// Best length of each generation evolved during this run.
    pub length_history: Vec<f64>,
}

/// Owns the state of one optimization run.
///
/// # Usage
///
/// ```
/// use steiner_ga::ga::{ConvergenceState, SteinerConfig, SteinerOptimizer};
///
/// let config = SteinerConfig::default()
///     .with_population_size(20)
///     .with_stagnation_limit(5)
///     .with_seed(42);
/// let mut opt = SteinerOptimizer::new(config).unwrap();
///
/// for _ in 0..10 {
///     let report = opt.step();
///     if report.state == ConvergenceState::Stopped {
///         break;
///     }
/// }
/// assert!(opt.generation() >= 1);
/// assert!(opt.best_of_run().individual.length().is_finite());
/// ```
#[derive(Debug, Clone)]
pub struct SteinerOptimizer {
    config: SteinerConfig,
    spreads: Spreads,
    seed: u64,
    rng: StdRng,
    population: Population,
    controller: ConvergenceController,
    generation: usize,
}

impl SteinerOptimizer {
    /// Validates `config`, seeds the RNG, and builds the initial population.
    ///
    /// Without `config.seed` a random seed is drawn and logged so the run can
    /// be replayed.
    pub fn new(config: SteinerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let spreads = Spreads::from_config(&config)?;

        let seed = config.seed.unwrap_or_else(rand::random);
        let mut rng = StdRng::seed_from_u64(seed);
        let population = initialize(&config, &mut rng)?;

        tracing::info!(
            seed,
            terminals = config.terminals.len(),
            population_size = config.population_size,
            initial_best = population.best().length(),
            "initial population built"
        );

        let controller = ConvergenceController::new(config.stagnation_limit, config.min_fitness_gran);
        Ok(Self {
            config,
            spreads,
            seed,
            rng,
            population,
            controller,
            generation: 0,
        })
    }

    /// Evolves one generation and reports its best individual.
    ///
    /// Never loops and never fails. Stepping after
    /// [`Stopped`](ConvergenceState::Stopped) still evolves, but best-of-run
    /// stays frozen.
    pub fn step(&mut self) -> GenerationReport {
        self.population = evolve(&self.population, &self.config, &self.spreads, &mut self.rng);
        self.generation += 1;

        let best = self.population.best();
        let state = self.controller.observe(self.generation, best);

        tracing::debug!(
            generation = self.generation,
            length = best.length(),
            steiner_points = best.steiner_points().len(),
            stagnant = self.controller.stagnant_generations(),
            "generation evolved"
        );

        GenerationReport {
            generation: self.generation,
            best: best.clone(),
            state,
        }
    }

    /// Current population, best first.
    pub fn population(&self) -> &Population {
        &self.population
    }

    /// Best individual seen by the controller.
    ///
    /// Holds the infinite-length sentinel until the first [`step`](Self::step).
    pub fn best_of_run(&self) -> &BestOfRun {
        self.controller.best_of_run()
    }

    /// Generations evolved so far.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Controller state.
    pub fn state(&self) -> ConvergenceState {
        self.controller.state()
    }

    /// Seed actually used, whether configured or drawn.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// The validated configuration.
    pub fn config(&self) -> &SteinerConfig {
        &self.config
    }

    /// Steps until stopped or until `config.max_generations` is reached.
    pub fn run(&mut self) -> SteinerResult {
        self.run_with_cancel(None)
    }

    /// Runs with an optional cancellation token.
    ///
    /// If `cancel` is `Some` and the flag is set to `true`, the run stops
    /// before the next generation and returns the best solution so far.
    pub fn run_with_cancel(&mut self, cancel: Option<Arc<AtomicBool>>) -> SteinerResult {
        self.run_with_observer(cancel, |_| {})
    }

    /// Runs, passing every [`GenerationReport`] to `observer`.
    pub fn run_with_observer<F>(
        &mut self,
        cancel: Option<Arc<AtomicBool>>,
        mut observer: F,
    ) -> SteinerResult
    where
        F: FnMut(&GenerationReport),
    {
        let mut length_history = Vec::new();
        let mut cancelled = false;

        while self.state() == ConvergenceState::Running {
            if self
                .config
                .max_generations
                .is_some_and(|max| self.generation >= max)
            {
                break;
            }
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }

            let report = self.step();
            length_history.push(report.best.length());
            observer(&report);
        }

        let (best, best_generation) = match self.best_of_run() {
            b if b.individual.is_sentinel() => (self.population.best().clone(), 0),
            b => (b.individual.clone(), b.generation),
        };

        SteinerResult {
            best,
            best_generation,
            generations: self.generation,
            stagnated: self.state() == ConvergenceState::Stopped,
            cancelled,
            length_history,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
