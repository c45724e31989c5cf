//! Spanning-network construction.
//!
//! [`build_network`] connects terminals and Steiner points with a minimum
//! spanning tree grown by greedy nearest insertion (Prim's algorithm). The
//! genetic algorithm only decides *which* Steiner points exist; the spanning
//! step itself is exact.
//!
//! # Key Types
//!
//! - [`Segment`]: An edge between two indices of the combined point list
//! - [`Network`]: Total length plus the ordered segment list
//!
//! # References
//!
//! - Prim (1957), "Shortest connection networks and some generalizations"

mod builder;

pub use builder::{build_network, Network, Segment};
