//! Euclidean Steiner minimal tree approximation by genetic algorithm.
//!
//! Given fixed terminal points in the plane, searches for extra ("Steiner")
//! points that shorten the network connecting everything:
//!
//! - **Geometry**: Points, bounding boxes, Euclidean distance, and terminal
//!   presets.
//! - **Network**: Exact minimum spanning tree over terminals plus Steiner
//!   points by greedy nearest insertion. This is the fitness function.
//! - **GA**: Population initialization, half-normal rank selection,
//!   coin-flip crossover with copying error, structural add/delete mutation,
//!   and a stagnation-based convergence controller.
//!
//! # Architecture
//!
//! The crate is a pure, synchronous core. Drawing the network and handling
//! user input belong to the caller, which drives
//! [`SteinerOptimizer::step`](ga::SteinerOptimizer::step) and consumes the
//! [`GenerationReport`](ga::GenerationReport) stream. All randomness comes
//! from one seedable RNG, so a fixed seed reproduces a run exactly.

pub mod error;
pub mod ga;
pub mod geometry;
pub mod network;

pub use error::ConfigError;
