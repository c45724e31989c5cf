//! Genetic algorithm over Steiner point sets.
//!
//! Each individual is a set of Steiner points; its fitness is the length of
//! the minimum spanning network over terminals plus those points (shorter
//! is fitter).
//!
//! # Key Types
//!
//! - [`SteinerConfig`]: Terminals, bounds, and algorithm parameters
//! - [`Individual`] / [`Population`]: Candidate solutions, best first
//! - [`ConvergenceController`]: Best-of-run tracking and stagnation stop
//! - [`SteinerOptimizer`]: Seeded run state with [`step`](SteinerOptimizer::step)
//!
//! # Functions
//!
//! - [`initialize`]: Random initial population
//! - [`evolve`]: One full replacement generation
//! - [`select_parent`]: Half-normal rank selection
//!
//! # Submodules
//!
//! - [`operators`]: Crossover, structural mutation, and random point draws
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Gilbert & Pollak (1968), "Steiner Minimal Trees"

mod config;
mod convergence;
pub mod operators;
mod runner;
mod selection;
mod types;

pub use config::SteinerConfig;
pub use convergence::{BestOfRun, ConvergenceController, ConvergenceState};
pub use runner::{evolve, initialize, GenerationReport, SteinerOptimizer, SteinerResult};
pub use selection::select_parent;
pub use types::{Individual, Population, Spreads};
