use crate::cover::{Cover, SegmentCatalog, SelectionMode, solve_cover};
use crate::geometry::{Hull, Point, convex_hull};
use log::{debug, info};

/// Hull and cheapest wall for one garden
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    pub hull: Hull,
    pub cover: Cover,
    pub mode: SelectionMode,
}

impl Solution {
    /// Minimum price, `None` when the catalog cannot enclose the garden
    pub fn price(&self) -> Option<u64> {
        self.cover.price()
    }
}

/// Runs the hull stage, then covers its perimeter with catalog segments.
///
/// `points` must hold at least three points, not all collinear
/// (see [`crate::input::validate_points`]).
pub fn solve(points: &[Point], catalog: &SegmentCatalog, mode: SelectionMode) -> Solution {
    debug!(
        "solving: {} points, {} catalog offers, {} selection",
        points.len(),
        catalog.len(),
        mode
    );

    let hull = convex_hull(points);
    info!(
        "hull has {} vertices, perimeter {:.3}",
        hull.len(),
        hull.perimeter
    );

    let cover = solve_cover(catalog, hull.perimeter, mode);
    Solution { hull, cover, mode }
}
