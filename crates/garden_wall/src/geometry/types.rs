use serde::{Deserialize, Serialize};
use std::fmt;

/// Plant position on the integer grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Turn direction of three ordered points
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    CounterClockwise, // left turn
    Clockwise,        // right turn
    Collinear,
}

/// Signed doubled area of the triangle (p0, p1, p2).
///
/// Positive for a counterclockwise turn, negative for clockwise, zero when
/// collinear. Computed in `i128` so any pair of `i32` coordinates is exact.
#[inline]
pub fn orient(p0: Point, p1: Point, p2: Point) -> i128 {
    let (x0, y0) = (p0.x as i128, p0.y as i128);
    let (x1, y1) = (p1.x as i128, p1.y as i128);
    let (x2, y2) = (p2.x as i128, p2.y as i128);
    (x1 - x0) * (y2 - y0) - (y1 - y0) * (x2 - x0)
}

pub fn orientation(p0: Point, p1: Point, p2: Point) -> Orientation {
    match orient(p0, p1, p2).signum() {
        1 => Orientation::CounterClockwise,
        -1 => Orientation::Clockwise,
        _ => Orientation::Collinear,
    }
}

/// Squared Euclidean distance, exact
#[inline]
pub fn dist_sq(a: Point, b: Point) -> i128 {
    let dx = a.x as i128 - b.x as i128;
    let dy = a.y as i128 - b.y as i128;
    dx * dx + dy * dy
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orient_sign() {
        let o = Point::new(0, 0);
        let a = Point::new(1, 0);
        let b = Point::new(0, 1);

        assert!(orient(o, a, b) > 0);
        assert!(orient(o, b, a) < 0);
        assert_eq!(orient(o, a, Point::new(5, 0)), 0);
    }

    #[test]
    fn test_orientation_enum() {
        let o = Point::new(0, 0);
        assert_eq!(
            orientation(o, Point::new(4, 0), Point::new(4, 4)),
            Orientation::CounterClockwise
        );
        assert_eq!(
            orientation(o, Point::new(4, 4), Point::new(4, 0)),
            Orientation::Clockwise
        );
        assert_eq!(
            orientation(o, Point::new(2, 2), Point::new(-3, -3)),
            Orientation::Collinear
        );
    }

    #[test]
    fn test_orient_extreme_coordinates() {
        // i32 products would overflow here
        let p0 = Point::new(i32::MIN, i32::MIN);
        let p1 = Point::new(i32::MAX, i32::MIN);
        let p2 = Point::new(i32::MIN, i32::MAX);

        let span = i32::MAX as i128 - i32::MIN as i128;
        assert_eq!(orient(p0, p1, p2), span * span);
        assert_eq!(dist_sq(p0, p1), span * span);
    }

    #[test]
    fn test_dist_sq() {
        assert_eq!(dist_sq(Point::new(1, 2), Point::new(4, 6)), 25);
        assert_eq!(dist_sq(Point::new(3, 3), Point::new(3, 3)), 0);
    }

    #[test]
    fn test_display() {
        assert_eq!(Point::new(-2, 7).to_string(), "(-2, 7)");
        assert_eq!(Point::from((1, 2)), Point::new(1, 2));
    }
}
