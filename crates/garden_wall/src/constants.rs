/// Minimum number of points for a non-degenerate hull
pub const MIN_POINTS: usize = 3;

/// Expected headers in CSV files
pub const EXPECTED_X_HEADER: &str = "X"; // point x column header
pub const EXPECTED_Y_HEADER: &str = "Y"; // point y column header
pub const EXPECTED_LENGTH_HEADER: &str = "Length"; // segment length column header
pub const EXPECTED_PRICE_HEADER: &str = "Price"; // segment price column header

/// Report settings
pub const DEFAULT_OUTPUT_DIR: &str = "reports";
pub const REPORT_FILE_PREFIX: &str = "wall_report";
pub const ENV_OUTPUT_DIR: &str = "GARDEN_WALL_OUTPUT_DIR";
