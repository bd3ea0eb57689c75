use anyhow::{Context, Result};
use clap::Parser;
use garden_wall::{
    Config, ReportFormat, SelectionMode, SolveReport, read_catalog_csv, read_points_csv, solve,
    validate_points,
};
use log::{info, warn};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "Price the cheapest wall around plants listed in CSV files", long_about = None)]
struct Args {
    /// Plant positions (CSV with X,Y header)
    #[arg(short = 'p', long = "points")]
    points: PathBuf,

    /// Wall segment offers (CSV with Length,Price header)
    #[arg(short = 'w', long = "catalog")]
    catalog: PathBuf,

    /// Configuration file path
    #[arg(short = 'c', long = "config", default_value = "config/default.toml")]
    config: PathBuf,

    /// Segment selection: bounded (each offer once) or unbounded
    #[arg(short = 'm', long = "mode")]
    mode: Option<SelectionMode>,

    /// Report format: json or csv
    #[arg(short = 'r', long = "report")]
    report_format: Option<ReportFormat>,

    /// Report output directory
    #[arg(short = 'o', long = "output-dir")]
    output_dir: Option<PathBuf>,

    /// Print the result without writing a report
    #[arg(long = "no-report")]
    no_report: bool,
}

fn main() -> Result<()> {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();
    let args = Args::parse();

    // Load configuration
    let mut config = if args.config.exists() {
        Config::load_from_file(&args.config)?
    } else {
        warn!(
            "Config file not found: {}, using default settings",
            args.config.display()
        );
        Config::default()
    };
    config.apply_env()?;

    // Command line wins over file and environment
    if let Some(mode) = args.mode {
        config.solver.mode = mode;
    }
    if let Some(format) = args.report_format {
        config.report.format = format;
    }
    if let Some(dir) = args.output_dir {
        config.report.output_dir = dir;
        config.validate()?;
    }

    let points = read_points_csv(&args.points)
        .with_context(|| format!("Failed to read points from {}", args.points.display()))?;
    let catalog = read_catalog_csv(&args.catalog)
        .with_context(|| format!("Failed to read catalog from {}", args.catalog.display()))?;
    info!(
        "Loaded {} plants and {} wall offers",
        points.len(),
        catalog.len()
    );

    validate_points(&points).context("Plants must span an area")?;

    let solution = solve(&points, &catalog, config.solver.mode);
    info!("Perimeter: {:.3}", solution.hull.perimeter);
    match solution.price() {
        Some(price) => info!("Smallest possible price is: {price}"),
        None => warn!(
            "No combination of wall pieces reaches the required length of {}",
            solution.cover.threshold()
        ),
    }

    if !args.no_report {
        let report = SolveReport::new(&solution, &catalog, points.len());
        report.save(&config.report.output_dir, config.report.format)?;
    }

    Ok(())
}
