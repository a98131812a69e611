//! mealscan
//!
//! Prompts for a meal photo and prints its nutrition report.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use tracing_subscriber::EnvFilter;

use mealscan::{build_info, Config, MealAnalyzer};

/// Read one image path from stdin
fn prompt_image_path() -> io::Result<PathBuf> {
    let mut stdout = io::stdout();
    write!(stdout, "Enter the path to the meal image: ")?;
    stdout.flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;

    // Paths dragged into a terminal often arrive quoted
    let trimmed = line.trim().trim_matches('"').trim_matches('\'');
    Ok(PathBuf::from(trimmed))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so stdout only carries the prompt and the report
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("mealscan=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    build_info::print_startup_banner();

    let config = Config::from_env()?;
    let analyzer = MealAnalyzer::from_config(&config)?;

    let image_path = prompt_image_path()?;
    let analysis = analyzer.analyze(&image_path)?;

    println!("{}", analysis.report());

    Ok(())
}
