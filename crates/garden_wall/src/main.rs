use anyhow::{Context, Result};
use garden_wall::{SelectionMode, read_problem_with, solve};
use log::debug;
use std::io::{self, Write};

fn main() -> Result<()> {
    // Quiet by default so prompts stay readable; RUST_LOG overrides
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .try_init();

    let stdin = io::stdin();
    let problem = read_problem_with(stdin.lock(), |prompt| {
        println!("{prompt}");
        let _ = io::stdout().flush();
    })
    .context("Failed to read garden description")?;

    problem.validate().context("Plants must span an area")?;
    debug!(
        "read {} wall offers and {} plants",
        problem.catalog.len(),
        problem.points.len()
    );

    let solution = solve(&problem.points, &problem.catalog, SelectionMode::Bounded);
    match solution.price() {
        Some(price) => println!("Smallest possible price is: {price}"),
        None => println!(
            "No combination of wall pieces reaches the required length of {}",
            solution.cover.threshold()
        ),
    }

    Ok(())
}
