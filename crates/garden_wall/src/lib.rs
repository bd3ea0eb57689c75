pub mod config;
pub mod constants;
pub mod cover;
pub mod csv_reader;
pub mod error;
pub mod geometry;
pub mod input;
pub mod report;
pub mod solve;

pub use config::{Config, ReportFormat};
pub use constants::{DEFAULT_OUTPUT_DIR, ENV_OUTPUT_DIR, MIN_POINTS};
pub use cover::{Cover, CoverageTable, Segment, SegmentCatalog, SelectionMode, min_cost};
pub use csv_reader::{read_catalog_csv, read_points_csv};
pub use error::{Result, WallError};
pub use geometry::{Hull, Point, convex_hull};
pub use input::{Problem, read_problem, read_problem_with, validate_points};
pub use report::SolveReport;
pub use solve::{Solution, solve};
