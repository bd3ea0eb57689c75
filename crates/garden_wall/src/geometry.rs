pub mod hull;
pub mod types;

pub use hull::{Hull, convex_hull, perimeter};
pub use types::{Orientation, Point, dist_sq, orient, orientation};
