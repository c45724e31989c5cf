//! Steiner point-set operators.
//!
//! # Crossover
//!
//! - [`crossover`]: Position-wise coin-flip inheritance with a Gaussian
//!   copying error on every inherited coordinate
//!
//! # Mutation
//!
//! - [`mutate_structure`]: Add or delete a Gaussian-distributed number of
//!   points, clamped to `1..=max_steiner_points`
//!
//! # Helpers
//!
//! - [`random_point`]: Uniform draw inside the search box

use super::config::SteinerConfig;
use super::types::Spreads;
use crate::geometry::{BoundingBox, Point};
use rand::Rng;
use rand_distr::{Distribution, Normal};

// ============================================================================
// Crossover
// ============================================================================

/// Combines two parents' Steiner points into a child.
///
/// For every position `i < max(|a|, |b|)` a fair coin picks the source
/// parent. If that parent has a point at `i` it is copied, with independent
/// `N(0, copy_sigma)` noise on x and then y, and clamped into the bounds.
/// Otherwise the position contributes nothing, so the child can be shorter
/// than both parents, or even empty; [`mutate_structure`] restores the floor.
pub fn crossover<R: Rng>(
    a: &[Point],
    b: &[Point],
    config: &SteinerConfig,
    spreads: &Spreads,
    rng: &mut R,
) -> Vec<Point> {
    let positions = a.len().max(b.len());
    let mut child = Vec::with_capacity(positions);

    for i in 0..positions {
        let source = if rng.random_bool(0.5) { a } else { b };
        if let Some(p) = source.get(i) {
            let dx = copy_error(&spreads.copy, config.integer_coordinates, rng);
            let dy = copy_error(&spreads.copy, config.integer_coordinates, rng);
            child.push(config.bounds.clamp(Point::new(p.x + dx, p.y + dy)));
        }
    }

    child
}

fn copy_error<R: Rng>(spread: &Normal<f64>, integer: bool, rng: &mut R) -> f64 {
    let e = spread.sample(rng);
    if integer {
        e.trunc()
    } else {
        e
    }
}

// ============================================================================
// Mutation
// ============================================================================

/// Adds or removes Steiner points.
///
/// Draws `n = round(N(0, add_del_sigma))`:
///
/// - `n < 0`: removes `|n|` uniformly chosen points one at a time, stopping
///   early once a single point remains
/// - `n > 0`: appends up to `n` fresh random points, stopping early at
///   `max_steiner_points`
/// - `n = 0`: no change
///
/// The clamps are best-effort, never errors. If the set is still empty
/// afterwards (crossover inherited nothing and `n ≤ 0`) one fresh point is
/// appended, so the result always holds `1..=max_steiner_points` points.
pub fn mutate_structure<R: Rng>(
    points: &mut Vec<Point>,
    config: &SteinerConfig,
    spreads: &Spreads,
    rng: &mut R,
) {
    // Saturating cast; a sane sigma never gets near the limits.
    let n = spreads.add_del.sample(rng).round() as i64;

    if n < 0 {
        for _ in 0..n.unsigned_abs() {
            if points.len() <= 1 {
                break;
            }
            let i = rng.random_range(0..points.len());
            points.remove(i);
        }
    } else {
        for _ in 0..n {
            if points.len() >= config.max_steiner_points {
                break;
            }
            points.push(random_point(&config.bounds, config.integer_coordinates, rng));
        }
    }

    if points.is_empty() {
        points.push(random_point(&config.bounds, config.integer_coordinates, rng));
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Draws a point uniformly inside `bounds`.
///
/// With `integer` set, coordinates are truncated toward zero and clamped
/// back into the box.
pub fn random_point<R: Rng>(bounds: &BoundingBox, integer: bool, rng: &mut R) -> Point {
    let x = rng.random_range(bounds.min_x..=bounds.max_x);
    let y = rng.random_range(bounds.min_y..=bounds.max_y);
    if integer {
        bounds.clamp(Point::new(x.trunc(), y.trunc()))
    } else {
        Point::new(x, y)
    }
}

// ============================================================================
// Tests
// ============================================================================
