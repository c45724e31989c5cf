//! Rank-biased parent selection.
//!
//! The population is sorted best first, so drawing a *rank* from a
//! half-normal distribution favours fit individuals while still letting
//! weaker ones breed now and then.

use rand::Rng;
use rand_distr::{Distribution, Normal};

/// Draws a parent index in `0..population_len`.
///
/// The index is `floor(|N(0, σ)|)`, clamped to the last valid rank. With
/// σ = 0 the best individual is always chosen.
///
/// # Panics
/// Panics if `population_len` is zero.
pub fn select_parent<R: Rng>(population_len: usize, spread: &Normal<f64>, rng: &mut R) -> usize {
    assert!(population_len > 0, "cannot select from empty population");

    let draw = spread.sample(rng).abs().floor();
    // Saturating float-to-int cast: huge draws land on usize::MAX before the clamp.
    (draw as usize).min(population_len - 1)
}
