use std::fs::File;
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use paye_core::TaxSchedule;
use paye_data::ScheduleLoader;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Validate and export PAYE bracket schedules.
///
/// The CSV file has the columns `currency,period,min,max,rate,deduction`;
/// leave `max` empty for the open-ended top band.
#[derive(Parser, Debug)]
#[command(name = "paye-schedule")]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load a schedule CSV, validate every table and print a summary
    Check {
        /// Path to the CSV file containing the bracket schedule
        #[arg(short, long)]
        file: PathBuf,
    },
    /// Write the built-in schedule as CSV
    Export {
        /// Output file; stdout when omitted
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .without_time()
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    let args = Args::parse();

    match args.command {
        Command::Check { file } => {
            let schedule = ScheduleLoader::load_from_path(&file)
                .with_context(|| format!("Failed to load schedule: {}", file.display()))?;

            for table in schedule.tables() {
                println!("{table}");
            }
            println!(
                "{} tables valid in {}",
                schedule.tables().count(),
                file.display()
            );
        }
        Command::Export { out } => {
            let schedule = TaxSchedule::builtin().context("Built-in schedule is invalid")?;

            let written = match &out {
                Some(path) => {
                    let file = File::create(path)
                        .with_context(|| format!("Failed to create: {}", path.display()))?;
                    ScheduleLoader::write(schedule, file)?
                }
                None => ScheduleLoader::write(schedule, io::stdout().lock())?,
            };
            debug!(rows = written, "exported schedule");
        }
    }

    Ok(())
}
