use thiserror::Error;

pub type Result<T> = std::result::Result<T, WallError>;

#[derive(Debug, Error)]
pub enum WallError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid CSV Header: {0}")]
    CsvHeader(String),

    #[error("Invalid CSV row {row}: expected at least 2 columns, got {got}")]
    CsvRow { row: usize, got: usize },

    #[error("Invalid integer at line {line}: {value}")]
    Parse {
        line: usize,
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("Missing value at line {line}: expected {expected}")]
    MissingValue { line: usize, expected: &'static str },

    #[error("Invalid wall segment at line {line}: length must be positive")]
    InvalidSegment { line: usize },

    #[error("Degenerate point set: {0}")]
    DegeneratePoints(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<toml::de::Error> for WallError {
    fn from(err: toml::de::Error) -> Self {
        WallError::Config(format!("TOML parse error: {}", err))
    }
}
