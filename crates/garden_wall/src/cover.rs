pub mod catalog;
pub mod table;

pub use catalog::{Segment, SegmentCatalog};
pub use table::{Cover, CoverageTable, SelectionMode, min_cost, solve_cover, threshold_for};
