use crate::{
    constants::{DEFAULT_OUTPUT_DIR, ENV_OUTPUT_DIR},
    cover::SelectionMode,
    error::{Result, WallError},
};
use serde::{Deserialize, Serialize};
use std::{env, path::Path, path::PathBuf};
use strum_macros::{Display, EnumString};

/// Main configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub solver: SolverConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SolverConfig {
    #[serde(default)]
    pub mode: SelectionMode, // "bounded" | "unbounded"
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReportConfig {
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    #[serde(default)]
    pub format: ReportFormat,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            format: ReportFormat::default(),
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_DIR)
}

/// Report file type
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ReportFormat {
    #[default]
    Json,
    Csv,
}

impl ReportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Json => "json",
            ReportFormat::Csv => "csv",
        }
    }
}

impl Config {
    /// Loads and validates a TOML configuration file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            WallError::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| {
            WallError::Config(format!(
                "Failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Overrides the report directory from `GARDEN_WALL_OUTPUT_DIR` when set
    pub fn apply_env(&mut self) -> Result<()> {
        if let Ok(output_dir) = env::var(ENV_OUTPUT_DIR)
            && !output_dir.trim().is_empty()
        {
            self.report.output_dir = PathBuf::from(output_dir);
            self.validate()?;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        let dir = &self.report.output_dir;
        if dir.as_os_str().is_empty() {
            return Err(WallError::Config(
                "report.output_dir cannot be empty".to_string(),
            ));
        }
        // If the path already exists but is not a directory, reject early.
        if dir.exists() && !dir.is_dir() {
            return Err(WallError::Config(format!(
                "Output path is not a directory: {}",
                dir.display()
            )));
        }
        Ok(())
    }
}
