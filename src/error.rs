//! Error types.
//!
//! Only configuration can fail: once a [`SteinerConfig`](crate::ga::SteinerConfig)
//! validates, every later operation is plain arithmetic over bounded inputs.

/// Invalid optimizer configuration, reported before any population is built.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("terminal set must contain at least one point")]
    NoTerminals,

    #[error("terminal {index} has a non-finite coordinate")]
    NonFiniteTerminal { index: usize },

    #[error("population_size must be at least 1")]
    EmptyPopulation,

    #[error("max_steiner_points must be at least 1")]
    NoSteinerPoints,

    #[error(
        "InvalidBounds: bounding box is empty or non-finite. x = [{min_x}, {max_x}], y = [{min_y}, {max_y}]"
    )]
    InvalidBounds {
        min_x: f64,
        max_x: f64,
        min_y: f64,
        max_y: f64,
    },

    #[error("InvalidSpread: {name} must be finite and non-negative, got {value}")]
    InvalidSpread { name: &'static str, value: f64 },

    #[error("min_fitness_gran must be finite and non-negative, got {0}")]
    InvalidGranularity(f64),
}

impl ConfigError {
    pub(crate) fn invalid_spread(name: &'static str, value: f64) -> Self {
        Self::InvalidSpread { name, value }
    }
}
