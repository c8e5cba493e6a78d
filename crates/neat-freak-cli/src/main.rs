mod commands;
mod logging;
mod progress;

use std::process;

use anyhow::Result;
use clap::Parser;
use colored::*;
use commands::{Cli, Commands};
use dotenv::dotenv;
use neat_freak_core::{AppConfig, OrganizeEngine, RunResult};
use progress::CliReporter;
use tracing::error;

fn main() -> Result<()> {
    dotenv().ok();

    let _guard = logging::init_logger();

    let config = match neat_freak_core::config::load_configuration() {
        Ok(config) => config,
        Err(err) => {
            error!("Error loading configuration: {}", err);
            process::exit(1);
        }
    };

    let args = Cli::parse();

    match args.command {
        Some(Commands::Organize { dir }) => run_organize(config, dir),
        Some(Commands::PrintConfig) => {
            println!("Configuration: {:?}", config);
            Ok(())
        }
        // Bare invocation organizes the current working directory.
        None => run_organize(config, None),
    }
}

fn run_organize(config: AppConfig, dir: Option<String>) -> Result<()> {
    let mut engine = OrganizeEngine::new(config);
    if let Some(dir) = dir {
        engine = engine.with_working_dir(&dir);
    }

    let reporter = CliReporter::new();
    let result = engine.run(&reporter)?;

    print_summary(&result);

    // The exit status is the machine-readable signal of overall success.
    if result.errors > 0 {
        process::exit(1);
    }
    Ok(())
}

fn print_summary(result: &RunResult) {
    println!();
    println!("{} {}", "Organized".bold(), result.working_dir.display());
    for summary in &result.categories {
        let line = format!(
            "  {:<18} {} moved, {} skipped, {} errors",
            summary.category.label(),
            summary.moved,
            summary.skipped,
            summary.errors,
        );
        if summary.errors > 0 {
            println!("{}", line.red());
        } else if summary.moved > 0 {
            println!("{}", line.green());
        } else {
            println!("{}", line.dimmed());
        }
    }
    println!(
        "{} of {} matched files moved in {}, {} backed up, {} errors",
        format!("{}", result.processed).green(),
        result.matched,
        format!("{:.2}s", result.duration.as_secs_f64()).green(),
        result.backups_created,
        if result.errors > 0 {
            format!("{}", result.errors).red()
        } else {
            format!("{}", result.errors).normal()
        },
    );
}
