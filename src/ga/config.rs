//! Optimizer configuration.
//!
//! [`SteinerConfig`] holds the terminal set and every parameter that
//! controls the evolutionary loop.

use crate::error::ConfigError;
use crate::geometry::{presets, BoundingBox, Point};

/// Configuration for the Steiner-tree genetic algorithm.
///
/// # Defaults
///
/// The defaults solve the six-terminal grid with the original tuning:
///
/// ```
/// use steiner_ga::ga::SteinerConfig;
///
/// let config = SteinerConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.max_steiner_points, 10);
/// assert_eq!(config.terminals.len(), 6);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use steiner_ga::ga::SteinerConfig;
/// use steiner_ga::geometry::presets;
///
/// let config = SteinerConfig::for_terminals(presets::pentagon())
///     .with_population_size(60)
///     .with_stagnation_limit(200)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SteinerConfig {
    /// Fixed points the network must connect. Never relocated.
    pub terminals: Vec<Point>,

    /// Individuals per generation. Also the number of children bred per
    /// generation.
    pub population_size: usize,

    /// Upper bound on Steiner points per individual. The lower bound is 1.
    pub max_steiner_points: usize,

    /// Area in which Steiner points are drawn and clamped.
    pub bounds: BoundingBox,

    /// Spread of the half-normal used to pick parent ranks.
    ///
    /// Smaller values concentrate selection on the best individuals.
    pub parent_sigma: f64,

    /// Spread of the Gaussian "copying error" added to inherited coordinates.
    pub copy_sigma: f64,

    /// Spread of the Gaussian that decides how many Steiner points a child
    /// gains (positive) or loses (negative).
    pub add_del_sigma: f64,

    /// Consecutive stagnant generations tolerated before stopping.
    ///
    /// The run stops once the counter *exceeds* this value.
    pub stagnation_limit: usize,

    /// Largest change in best length still counted as stagnation.
    pub min_fitness_gran: f64,

    /// Truncate freshly drawn coordinates and copy errors toward zero,
    /// keeping Steiner points on the integer grid.
    pub integer_coordinates: bool,

    /// Build children's networks in parallel (requires the `parallel` feature).
    ///
    /// Results are identical either way; only random draws affect them and
    /// those always happen sequentially.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` draws a seed from the OS-backed thread RNG.
    pub seed: Option<u64>,

    /// Optional cap on generations for [`run`](super::SteinerOptimizer::run).
    ///
    /// `None` runs until stagnation or cancellation. [`step`](super::SteinerOptimizer::step)
    /// ignores this cap.
    pub max_generations: Option<usize>,
}

impl Default for SteinerConfig {
    fn default() -> Self {
        Self::for_terminals(presets::two_by_three_grid())
    }
}

impl SteinerConfig {
    /// Default tuning for the given terminals, searching their enclosing box.
    ///
    /// An empty terminal set gets a degenerate box at the origin and fails
    /// [`validate`](Self::validate) with [`ConfigError::NoTerminals`].
    pub fn for_terminals(terminals: Vec<Point>) -> Self {
        let bounds = BoundingBox::enclosing(&terminals)
            .unwrap_or_else(|| BoundingBox::new(0.0, 0.0, 0.0, 0.0));
        let population_size = 100;
        Self {
            terminals,
            population_size,
            max_steiner_points: 10,
            bounds,
            parent_sigma: population_size as f64 / 25.0,
            copy_sigma: 2.0,
            add_del_sigma: 1.0,
            stagnation_limit: 1000,
            min_fitness_gran: 0.05,
            integer_coordinates: true,
            parallel: true,
            seed: None,
            max_generations: None,
        }
    }

    /// Small, fast preset for smoke runs and tests.
    ///
    /// - Population: 30, parent sigma 1.2
    /// - Stagnation limit: 40, generation cap: 500
    pub fn quick(terminals: Vec<Point>) -> Self {
        Self {
            population_size: 30,
            parent_sigma: 1.2,
            stagnation_limit: 40,
            max_generations: Some(500),
            ..Self::for_terminals(terminals)
        }
    }

    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the maximum number of Steiner points per individual.
    pub fn with_max_steiner_points(mut self, n: usize) -> Self {
        self.max_steiner_points = n;
        self
    }

    /// Sets the Steiner search area.
    pub fn with_bounds(mut self, bounds: BoundingBox) -> Self {
        self.bounds = bounds;
        self
    }

    /// Sets the parent selection spread.
    pub fn with_parent_sigma(mut self, sigma: f64) -> Self {
        self.parent_sigma = sigma;
        self
    }

    /// Sets the coordinate copy-error spread.
    pub fn with_copy_sigma(mut self, sigma: f64) -> Self {
        self.copy_sigma = sigma;
        self
    }

    /// Sets the structural mutation spread.
    pub fn with_add_del_sigma(mut self, sigma: f64) -> Self {
        self.add_del_sigma = sigma;
        self
    }

    /// Sets the stagnation limit.
    pub fn with_stagnation_limit(mut self, limit: usize) -> Self {
        self.stagnation_limit = limit;
        self
    }

    /// Sets the stagnation granularity.
    pub fn with_min_fitness_gran(mut self, gran: f64) -> Self {
        self.min_fitness_gran = gran;
        self
    }

    /// Enables or disables integer-grid coordinates.
    pub fn with_integer_coordinates(mut self, integer: bool) -> Self {
        self.integer_coordinates = integer;
        self
    }

    /// Enables or disables parallel network building.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Caps the number of generations [`run`](super::SteinerOptimizer::run) executes.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = Some(n);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.terminals.is_empty() {
            return Err(ConfigError::NoTerminals);
        }
        if let Some(index) = self.terminals.iter().position(|p| !p.is_finite()) {
            return Err(ConfigError::NonFiniteTerminal { index });
        }
        if self.population_size == 0 {
            return Err(ConfigError::EmptyPopulation);
        }
        if self.max_steiner_points == 0 {
            return Err(ConfigError::NoSteinerPoints);
        }
        self.bounds.validate()?;
        for (name, value) in [
            ("parent_sigma", self.parent_sigma),
            ("copy_sigma", self.copy_sigma),
            ("add_del_sigma", self.add_del_sigma),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::invalid_spread(name, value));
            }
        }
        if !self.min_fitness_gran.is_finite() || self.min_fitness_gran < 0.0 {
            return Err(ConfigError::InvalidGranularity(self.min_fitness_gran));
        }
        Ok(())
    }
}
