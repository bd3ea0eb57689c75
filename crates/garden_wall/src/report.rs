use crate::config::ReportFormat;
use crate::constants::REPORT_FILE_PREFIX;
use crate::cover::{Cover, Segment, SegmentCatalog, SelectionMode};
use crate::error::Result;
use crate::geometry::Point;
use crate::solve::Solution;

use csv::WriterBuilder;
use itertools::Itertools;
use serde::Serialize;
use std::{
    fs::{File, OpenOptions},
    io::{BufWriter, ErrorKind, Write},
    path::{Path, PathBuf},
};

/// Serializable summary of one solve
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SolveReport {
    pub generated_at: String,
    pub mode: SelectionMode,
    pub input_points: usize,
    pub hull: Vec<Point>,
    pub perimeter: f64,
    pub threshold: usize,
    pub feasible: bool,
    pub price: Option<u64>,
    pub segments: Vec<Segment>,
    pub wall_length: Option<u64>,
}

impl SolveReport {
    pub fn new(solution: &Solution, catalog: &SegmentCatalog, input_points: usize) -> Self {
        let (segments, wall_length) = match &solution.cover {
            Cover::Feasible {
                selected,
                total_length,
                ..
            } => (
                selected
                    .iter()
                    .filter_map(|&k| catalog.get(k).copied())
                    .collect(),
                Some(*total_length),
            ),
            Cover::Infeasible { .. } => (Vec::new(), None),
        };

        Self {
            generated_at: chrono::Utc::now().to_rfc3339(),
            mode: solution.mode,
            input_points,
            hull: solution.hull.vertices.clone(),
            perimeter: solution.hull.perimeter,
            threshold: solution.cover.threshold(),
            feasible: solution.cover.is_feasible(),
            price: solution.price(),
            segments,
            wall_length,
        }
    }

    /// Writes the report into `output_dir` and returns the file path.
    /// Never overwrites an existing report.
    pub fn save(&self, output_dir: &Path, format: ReportFormat) -> Result<PathBuf> {
        std::fs::create_dir_all(output_dir)?;

        let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S%.3f").to_string();
        let (path, file) = create_report_file(output_dir, &timestamp, format.extension())?;

        match format {
            ReportFormat::Json => self.write_json(file)?,
            ReportFormat::Csv => self.write_csv(file)?,
        }
        log::info!("Report saved to: {}", path.display());
        Ok(path)
    }

    fn write_json(&self, file: File) -> Result<()> {
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.flush()?;
        Ok(())
    }

    fn write_csv(&self, file: File) -> Result<()> {
        let mut wtr = WriterBuilder::new().from_writer(BufWriter::new(file));

        wtr.write_record([
            "generated_at",
            "mode",
            "input_points",
            "hull",
            "perimeter",
            "threshold",
            "feasible",
            "price",
            "segments",
            "wall_length",
        ])?;

        let hull = self.hull.iter().map(|p| format!("{} {}", p.x, p.y)).join(";");
        let segments = self
            .segments
            .iter()
            .map(|s| format!("{} {}", s.length, s.price))
            .join(";");
        let optional = |v: Option<u64>| v.map(|n| n.to_string()).unwrap_or_default();

        wtr.write_record([
            self.generated_at.clone(),
            self.mode.to_string(),
            self.input_points.to_string(),
            hull,
            format!("{:.6}", self.perimeter),
            self.threshold.to_string(),
            self.feasible.to_string(),
            optional(self.price),
            segments,
            optional(self.wall_length),
        ])?;

        wtr.flush()?;
        Ok(())
    }
}

/// Creates `{prefix}_{timestamp}.{ext}`, or the first free `_N` variant of it
fn create_report_file(dir: &Path, timestamp: &str, ext: &str) -> Result<(PathBuf, File)> {
    let mut attempt = 0u32;
    loop {
        let name = if attempt == 0 {
            format!("{}_{}.{}", REPORT_FILE_PREFIX, timestamp, ext)
        } else {
            format!("{}_{}_{}.{}", REPORT_FILE_PREFIX, timestamp, attempt, ext)
        };
        let path = dir.join(name);

        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => return Ok((path, file)),
            Err(e) if e.kind() == ErrorKind::AlreadyExists => attempt += 1,
            Err(e) => return Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solve::solve;
    use tempfile::TempDir;

    fn square_report(catalog: &SegmentCatalog) -> SolveReport {
        let points: Vec<Point> = [(0, 0), (4, 0), (4, 4), (0, 4), (2, 2)]
            .into_iter()
            .map(Point::from)
            .collect();
        let solution = solve(&points, catalog, SelectionMode::Bounded);
        SolveReport::new(&solution, catalog, points.len())
    }

    fn catalog(pairs: &[(u32, u32)]) -> SegmentCatalog {
        pairs.iter().copied().map(Segment::from).collect()
    }

    #[test]
    fn test_report_fields() {
        let catalog = catalog(&[(5, 3), (7, 4), (10, 9)]);
        let report = square_report(&catalog);

        assert_eq!(report.input_points, 5);
        assert_eq!(report.hull.len(), 4);
        assert_eq!(report.threshold, 16);
        assert!(report.feasible);
        assert_eq!(report.price, Some(13));
        assert_eq!(report.segments, vec![Segment::new(10, 9), Segment::new(7, 4)]);
        assert_eq!(report.wall_length, Some(17));
    }

    #[test]
    fn test_save_json() {
        let temp_dir = TempDir::new().unwrap();
        let report = square_report(&catalog(&[(5, 3), (7, 4), (10, 9)]));

        let path = report.save(temp_dir.path(), ReportFormat::Json).unwrap();
        assert_eq!(path.extension().unwrap(), "json");

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["price"], 13);
        assert_eq!(value["mode"], "bounded");
        assert_eq!(value["hull"][1]["x"], 4);
    }

    #[test]
    fn test_save_csv_infeasible() {
        let temp_dir = TempDir::new().unwrap();
        let report = square_report(&catalog(&[(3, 1)]));
        assert!(!report.feasible);

        let nested = temp_dir.path().join("nested");
        let path = report.save(&nested, ReportFormat::Csv).unwrap();
        assert!(path.starts_with(&nested));

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("generated_at,mode"));
        assert!(lines[1].contains(",bounded,5,0 0;4 0;4 4;0 4,16.000000,16,false,,,"));
    }

    #[test]
    fn test_back_to_back_saves_keep_both_reports() {
        let temp_dir = TempDir::new().unwrap();
        let report = square_report(&catalog(&[(5, 3), (7, 4), (10, 9)]));

        let first = report.save(temp_dir.path(), ReportFormat::Json).unwrap();
        let second = report.save(temp_dir.path(), ReportFormat::Json).unwrap();

        assert_ne!(first, second);
        assert!(first.exists());
        assert!(second.exists());
        assert_eq!(std::fs::read_dir(temp_dir.path()).unwrap().count(), 2);
    }

    #[test]
    fn test_taken_name_gets_suffix() {
        let temp_dir = TempDir::new().unwrap();

        let (first, _) = create_report_file(temp_dir.path(), "20240101_000000.000", "csv").unwrap();
        let (second, _) = create_report_file(temp_dir.path(), "20240101_000000.000", "csv").unwrap();

        assert_eq!(
            first.file_name().unwrap(),
            "wall_report_20240101_000000.000.csv"
        );
        assert_eq!(
            second.file_name().unwrap(),
            "wall_report_20240101_000000.000_1.csv"
        );
    }
}
