//! Individuals, populations, and the Gaussian spreads that drive them.

use super::config::SteinerConfig;
use crate::error::ConfigError;
use crate::geometry::Point;
use crate::network::{build_network, Segment};
use rand_distr::Normal;

/// One candidate solution: a Steiner point set and its spanning network.
///
/// Immutable once built. The length and segments always come from the same
/// coordinates because the only constructor builds the network itself.
/// For the same reason it serializes but does not deserialize.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Individual {
    length: f64,
    steiner_points: Vec<Point>,
    segments: Vec<Segment>,
}

impl Individual {
    /// Connects `terminals ++ steiner_points` and stores the result.
    pub fn new(terminals: &[Point], steiner_points: Vec<Point>) -> Self {
        let network = build_network(terminals, &steiner_points);
        Self {
            length: network.length,
            steiner_points,
            segments: network.segments,
        }
    }

    /// Placeholder for "nothing recorded yet": infinite length, no points,
    /// no segments.
    pub fn sentinel() -> Self {
        Self {
            length: f64::INFINITY,
            steiner_points: Vec::new(),
            segments: Vec::new(),
        }
    }

    /// Total network length. Lower is fitter.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// The Steiner points, in genome order.
    pub fn steiner_points(&self) -> &[Point] {
        &self.steiner_points
    }

    /// Segments over the combined list `terminals ++ steiner_points`.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Returns `true` for the [`sentinel`](Self::sentinel) value.
    pub fn is_sentinel(&self) -> bool {
        self.length.is_infinite() && self.steiner_points.is_empty()
    }

    /// Steiner points ordered by `(x, y)`, for display.
    ///
    /// Genome order depends on breeding history; sorting makes two
    /// individuals with the same point set print identically.
    pub fn sorted_steiner_points(&self) -> Vec<Point> {
        let mut pts = self.steiner_points.clone();
        pts.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
        pts
    }
}

/// A generation of individuals, sorted ascending by length (best first).
///
/// Never empty. Like [`Individual`] it is serialize-only.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Population {
    individuals: Vec<Individual>,
}

impl Population {
    /// Sorts `individuals` into a population.
    ///
    /// Returns `None` for an empty vector. The sort is stable, so equal
    /// lengths keep their construction order.
    pub fn new(mut individuals: Vec<Individual>) -> Option<Self> {
        if individuals.is_empty() {
            return None;
        }
        individuals.sort_by(|a, b| a.length.total_cmp(&b.length));
        Some(Self { individuals })
    }

    /// The fittest individual.
    pub fn best(&self) -> &Individual {
        // Construction rejects empty vectors.
        &self.individuals[0]
    }

    /// Number of individuals.
    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    /// Always `false`; kept alongside [`len`](Self::len).
    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    /// Individual at rank `index` (0 = best).
    pub fn get(&self, index: usize) -> Option<&Individual> {
        self.individuals.get(index)
    }

    /// Iterates best to worst.
    pub fn iter(&self) -> std::slice::Iter<'_, Individual> {
        self.individuals.iter()
    }

    /// The individuals as a slice, best first.
    pub fn as_slice(&self) -> &[Individual] {
        &self.individuals
    }

    /// Returns `true` if lengths are non-decreasing.
    pub fn is_sorted(&self) -> bool {
        self.individuals
            .windows(2)
            .all(|w| w[0].length <= w[1].length)
    }
}

impl<'a> IntoIterator for &'a Population {
    type Item = &'a Individual;
    type IntoIter = std::slice::Iter<'a, Individual>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Zero-mean normal distributions built once from a validated config.
#[derive(Debug, Clone, Copy)]
pub struct Spreads {
    /// Parent rank draw; its absolute value is used.
    pub parent: Normal<f64>,
    /// Per-coordinate copying error.
    pub copy: Normal<f64>,
    /// Structural add/delete count.
    pub add_del: Normal<f64>,
}

impl Spreads {
    /// Builds the three distributions from the config's sigmas.
    pub fn from_config(config: &SteinerConfig) -> Result<Self, ConfigError> {
        let normal = |name: &'static str, sigma: f64| {
            if !sigma.is_finite() || sigma < 0.0 {
                return Err(ConfigError::invalid_spread(name, sigma));
            }
            Normal::new(0.0, sigma).map_err(|_| ConfigError::invalid_spread(name, sigma))
        };
        Ok(Self {
            parent: normal("parent_sigma", config.parent_sigma)?,
            copy: normal("copy_sigma", config.copy_sigma)?,
            add_del: normal("add_del_sigma", config.add_del_sigma)?,
        })
    }
}
