//! Planar geometry primitives.
//!
//! # Key Types
//!
//! - [`Point`]: A 2D coordinate, always `(horizontal, vertical)`
//! - [`BoundingBox`]: The axis-aligned area Steiner points may occupy
//!
//! # Functions
//!
//! - [`distance`]: Euclidean distance between two points
//!
//! # Submodules
//!
//! - [`presets`]: Terminal layouts used by the demo and the tests

pub mod presets;
mod types;

pub use types::{distance, BoundingBox, Point};
