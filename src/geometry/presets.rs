//! Terminal layouts.
//!
//! Both layouts sit on screen-style coordinates offset by [`MARGIN`], so the
//! enclosing box of the terminals starts at `(MARGIN, MARGIN)`.

use super::Point;

/// Offset applied to every preset coordinate.
pub const MARGIN: f64 = 100.0;

/// Six terminals in two rows of three, 400 apart horizontally and 300
/// apart vertically.
///
/// ```text
/// 3   4   5
/// 0   1   2
/// ```
///
/// Without Steiner points the minimum spanning tree over these terminals
/// has length 1700 (three verticals and two horizontals).
pub fn two_by_three_grid() -> Vec<Point> {
    [
        (0.0, 300.0),
        (400.0, 300.0),
        (800.0, 300.0),
        (0.0, 0.0),
        (400.0, 0.0),
        (800.0, 0.0),
    ]
    .into_iter()
    .map(|(x, y)| Point::new(MARGIN + x, MARGIN + y))
    .collect()
}

/// Five terminals on a roughly regular pentagon.
pub fn pentagon() -> Vec<Point> {
    [
        (150.0, 432.0),
        (450.0, 432.0),
        (0.0, 216.0),
        (600.0, 216.0),
        (300.0, 0.0),
    ]
    .into_iter()
    .map(|(x, y)| Point::new(MARGIN + x, MARGIN + y))
    .collect()
}
