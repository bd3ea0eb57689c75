use super::types::{Point, dist_sq, orient};
use itertools::Itertools;
use log::debug;
use std::cmp::Ordering;

/// Convex hull of a point set
#[derive(Debug, Clone, PartialEq)]
pub struct Hull {
    /// Counterclockwise, starting at the lowest (then leftmost) point
    pub vertices: Vec<Point>,
    /// Closed boundary length
    pub perimeter: f64,
}

impl Hull {
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// True when every cyclic triple of vertices is a strict left turn
    pub fn is_strictly_convex(&self) -> bool {
        self.vertices.len() >= 3
            && self
                .vertices
                .iter()
                .circular_tuple_windows::<(_, _, _)>()
                .all(|(&a, &b, &c)| orient(a, b, c) > 0)
    }
}

/// Builds the convex hull with a Graham scan.
///
/// The input needs at least 3 points, not all collinear; anything else yields
/// an unspecified (possibly degenerate) hull. The slice itself is left
/// untouched, all reordering happens on a private copy.
pub fn convex_hull(points: &[Point]) -> Hull {
    let mut working = points.to_vec();
    if working.is_empty() {
        return Hull {
            vertices: Vec::new(),
            perimeter: 0.0,
        };
    }

    let pivot_idx = lowest_point_index(&working);
    working.swap(0, pivot_idx);
    let pivot = working[0];

    working[1..].sort_by(|&a, &b| polar_order(pivot, a, b));

    let mut stack: Vec<Point> = Vec::with_capacity(working.len());
    stack.push(pivot);
    for &p in &working[1..] {
        while stack.len() >= 2 && orient(stack[stack.len() - 2], stack[stack.len() - 1], p) <= 0 {
            stack.pop();
        }
        stack.push(p);
    }

    let perimeter = perimeter(&stack);
    debug!(
        "hull: {} of {} points on boundary, perimeter {:.6}",
        stack.len(),
        points.len(),
        perimeter
    );

    Hull {
        vertices: stack,
        perimeter,
    }
}

/// Length of the closed polygon through `vertices`, closing edge included
pub fn perimeter(vertices: &[Point]) -> f64 {
    vertices
        .iter()
        .circular_tuple_windows::<(_, _)>()
        .map(|(&a, &b)| (dist_sq(a, b) as f64).sqrt())
        .sum()
}

/// Smallest y, ties broken by smallest x
fn lowest_point_index(points: &[Point]) -> usize {
    points
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| a.y.cmp(&b.y).then(a.x.cmp(&b.x)))
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Counterclockwise angle around `pivot`, closer point first on ties
fn polar_order(pivot: Point, a: Point, b: Point) -> Ordering {
    orient(pivot, b, a)
        .cmp(&0)
        .then_with(|| dist_sq(pivot, a).cmp(&dist_sq(pivot, b)))
}
