//! Greedy nearest-insertion spanning tree.

use crate::geometry::{distance, Point};

/// A connection between two points of the combined list.
///
/// Indices address `terminals ++ steiner_points`: terminals occupy
/// `0..terminals.len()`, Steiner points follow. `a` is the endpoint that was
/// already in the network when the segment was added, `b` the point it
/// attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
    pub a: usize,
    pub b: usize,
}

impl Segment {
    /// Looks up both endpoints in the combined list.
    ///
    /// Returns `None` if either index is out of range.
    pub fn resolve(&self, terminals: &[Point], steiner_points: &[Point]) -> Option<(Point, Point)> {
        let at = |i: usize| {
            terminals
                .get(i)
                .or_else(|| steiner_points.get(i.checked_sub(terminals.len())?))
                .copied()
        };
        Some((at(self.a)?, at(self.b)?))
    }
}

/// A spanning network: its segments and their summed length.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Network {
    pub length: f64,
    pub segments: Vec<Segment>,
}

/// Connects every terminal and Steiner point with a minimum spanning tree.
///
/// # Algorithm
///
/// 1. Start with combined point 0 in the network
/// 2. Attach the out-of-network point closest to any in-network point
/// 3. Record the segment and add its length; repeat until all points are in
///
/// Ties go to the lowest out-of-network index, then to the earliest
/// inserted in-network point. Each outside point keeps its nearest
/// in-network link, so a step costs O(n) and the whole build O(n²).
///
/// Coincident points yield zero-length segments. An empty input yields an
/// empty network.
pub fn build_network(terminals: &[Point], steiner_points: &[Point]) -> Network {
    let points: Vec<Point> = terminals.iter().chain(steiner_points).copied().collect();
    let n = points.len();
    if n == 0 {
        return Network::default();
    }

    let mut in_network = vec![false; n];
    in_network[0] = true;

    // (distance to nearest in-network point, that point's index)
    let mut link: Vec<(f64, usize)> = points.iter().map(|&p| (distance(points[0], p), 0)).collect();

    let mut segments = Vec::with_capacity(n - 1);
    let mut length = 0.0;

    for _ in 1..n {
        let mut chosen: Option<usize> = None;
        for j in (0..n).filter(|&j| !in_network[j]) {
            match chosen {
                Some(c) if link[j].0 >= link[c].0 => {}
                _ => chosen = Some(j),
            }
        }
        let Some(j) = chosen else { break };

        let (d, from) = link[j];
        in_network[j] = true;
        segments.push(Segment { a: from, b: j });
        length += d;

        for k in 0..n {
            if in_network[k] {
                continue;
            }
            let dk = distance(points[j], points[k]);
            if dk < link[k].0 {
                link[k] = (dk, j);
            }
        }
    }

    Network { length, segments }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::presets::two_by_three_grid;
    use proptest::prelude::*;

    fn find(parent: &[usize], mut i: usize) -> usize {
        while parent[i] != i {
            i = parent[i];
        }
        i
    }

    /// Minimum over every acyclic (n-1)-edge subset, i.e. every spanning tree.
    fn brute_force_mst(points: &[Point]) -> f64 {
        let n = points.len();
        if n <= 1 {
            return 0.0;
        }
        let mut edges = Vec::new();
        for i in 0..n {
            for j in i + 1..n {
                edges.push((i, j, distance(points[i], points[j])));
            }
        }

        fn search(
            edges: &[(usize, usize, f64)],
            start: usize,
            remaining: usize,
            parent: &[usize],
            acc: f64,
            best: &mut f64,
        ) {
            if remaining == 0 {
                *best = best.min(acc);
                return;
            }
            for e in start..edges.len() {
                if edges.len() - e < remaining {
                    break;
                }
                let (i, j, w) = edges[e];
                let (ri, rj) = (find(parent, i), find(parent, j));
                if ri == rj {
                    continue;
                }
                let mut next = parent.to_vec();
                next[ri] = rj;
                search(edges, e + 1, remaining - 1, &next, acc + w, best);
            }
        }

        let parent: Vec<usize> = (0..n).collect();
        let mut best = f64::INFINITY;
        search(&edges, 0, n - 1, &parent, 0.0, &mut best);
        best
    }

    /// Returns `true` if `segments` form a spanning tree over `n` points.
    fn is_spanning_tree(segments: &[Segment], n: usize) -> bool {
        if n == 0 {
            return segments.is_empty();
        }
        if segments.len() != n - 1 {
            return false;
        }
        let mut parent: Vec<usize> = (0..n).collect();
        for s in segments {
            if s.a >= n || s.b >= n {
                return false;
            }
            let (ra, rb) = (find(&parent, s.a), find(&parent, s.b));
            if ra == rb {
                return false; // cycle
            }
            parent[ra] = rb;
        }
        true
    }

    fn segment_sum(terminals: &[Point], steiner: &[Point], segments: &[Segment]) -> f64 {
        segments
            .iter()
            .map(|s| {
                let (a, b) = s.resolve(terminals, steiner).unwrap();
                distance(a, b)
            })
            .sum()
    }

    #[test]
    fn test_grid_without_steiner_points() {
        let terminals = two_by_three_grid();
        let net = build_network(&terminals, &[]);
        assert!((net.length - 1700.0).abs() < 1e-9, "got {}", net.length);
        assert!(is_spanning_tree(&net.segments, 6));
        assert!((net.length - brute_force_mst(&terminals)).abs() < 1e-9);
    }

    #[test]
    fn test_empty_input() {
        let net = build_network(&[], &[]);
        assert_eq!(net.length, 0.0);
        assert!(net.segments.is_empty());
    }

    #[test]
    fn test_single_point() {
        let net = build_network(&[Point::new(5.0, 5.0)], &[]);
        assert_eq!(net, Network::default());
    }

    #[test]
    fn test_steiner_center_of_triangle() {
        // Equilateral-ish triangle: a central point shortens the tree
        let terminals = [
            Point::new(0.0, 0.0),
            Point::new(100.0, 0.0),
            Point::new(50.0, 86.6),
        ];
        let without = build_network(&terminals, &[]);
        let with = build_network(&terminals, &[Point::new(50.0, 28.87)]);
        assert!(with.length < without.length);
        assert_eq!(with.segments.len(), 3);
        // The Steiner point is index 3 and must appear in the tree
        assert!(with.segments.iter().any(|s| s.a == 3 || s.b == 3));
    }

    #[test]
    fn test_coincident_points() {
        let p = Point::new(10.0, 10.0);
        let terminals = [p, Point::new(20.0, 10.0)];
        let net = build_network(&terminals, &[p, p]);
        assert!(is_spanning_tree(&net.segments, 4));
        assert!((net.length - 10.0).abs() < 1e-12);
        let zero_len = net
            .segments
            .iter()
            .filter(|s| s.resolve(&terminals, &[p, p]).map(|(a, b)| distance(a, b)) == Some(0.0))
            .count();
        assert_eq!(zero_len, 2);
    }

    #[test]
    fn test_duplicates_keep_distinct_indices() {
        // Two coincident Steiner points must be attached as separate nodes
        let terminals = [Point::new(0.0, 0.0)];
        let steiner = [Point::new(3.0, 4.0), Point::new(3.0, 4.0)];
        let net = build_network(&terminals, &steiner);
        let attached: Vec<usize> = net.segments.iter().map(|s| s.b).collect();
        assert_eq!(attached, vec![1, 2]);
        assert_eq!(net.segments[1], Segment { a: 1, b: 2 });
    }

    #[test]
    fn test_tie_break_first_encountered() {
        // Points 1 and 2 are both 10 away from point 0: lowest index wins
        let terminals = [
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(-10.0, 0.0),
        ];
        let net = build_network(&terminals, &[]);
        assert_eq!(
            net.segments,
            vec![Segment { a: 0, b: 1 }, Segment { a: 0, b: 2 }]
        );
    }

    #[test]
    fn test_tie_break_earliest_in_network() {
        // Point 2 is equidistant from 0 and 1; the link to 0 (inserted first) is kept
        let terminals = [
            Point::new(0.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(1.0, 5.0),
        ];
        let net = build_network(&terminals, &[]);
        assert_eq!(net.segments[1], Segment { a: 0, b: 2 });
    }

    #[test]
    fn test_matches_brute_force_eight_points() {
        let terminals = [
            Point::new(12.0, 40.0),
            Point::new(88.0, 7.0),
            Point::new(45.0, 45.0),
            Point::new(3.0, 91.0),
        ];
        let steiner = [
            Point::new(60.0, 60.0),
            Point::new(30.0, 10.0),
            Point::new(75.0, 95.0),
            Point::new(50.0, 50.0),
        ];
        let net = build_network(&terminals, &steiner);
        let all: Vec<Point> = terminals.iter().chain(&steiner).copied().collect();
        assert!(is_spanning_tree(&net.segments, 8));
        assert!((net.length - brute_force_mst(&all)).abs() < 1e-9);
    }

    #[test]
    fn test_resolve_out_of_range() {
        let s = Segment { a: 0, b: 5 };
        assert!(s.resolve(&[Point::new(0.0, 0.0)], &[Point::new(1.0, 1.0)]).is_none());
    }

    fn arb_points(max: usize) -> impl Strategy<Value = Vec<Point>> {
        prop::collection::vec(
            (0i32..50, 0i32..50).prop_map(|(x, y)| Point::new(f64::from(x), f64::from(y))),
            0..=max,
        )
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_spanning_tree_shape(terminals in arb_points(10), steiner in arb_points(10)) {
            let net = build_network(&terminals, &steiner);
            let n = terminals.len() + steiner.len();
            prop_assert!(is_spanning_tree(&net.segments, n));
            let sum = segment_sum(&terminals, &steiner, &net.segments);
            prop_assert!((net.length - sum).abs() < 1e-9);
        }

        #[test]
        fn prop_length_is_mst_weight(terminals in arb_points(4), steiner in arb_points(3)) {
            let net = build_network(&terminals, &steiner);
            let all: Vec<Point> = terminals.iter().chain(&steiner).copied().collect();
            prop_assert!((net.length - brute_force_mst(&all)).abs() < 1e-9);
        }
    }
}
