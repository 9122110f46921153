use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{CommandFactory, Parser};

use proshifter_cli::schedule::{self, ShiftCodes};

/// Tally per-person, per-month shift-type counts from a staff schedule workbook.
#[derive(Parser, Debug)]
#[command(name = "proshifter", version, about)]
struct Cli {
    /// Path to the schedule workbook (must contain a "Schedule" sheet)
    schedule: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let Some(schedule_path) = cli.schedule else {
        Cli::command().print_help()?;
        return Ok(());
    };

    // The result lands next to the original file.
    let output_path = schedule_path
        .parent()
        .map(|dir| dir.join("result.xlsx"))
        .unwrap_or_else(|| PathBuf::from("result.xlsx"));

    run(&schedule_path, &output_path)
}

fn run(schedule_path: &Path, output_path: &Path) -> Result<()> {
    let codes = ShiftCodes::default();

    let grid = schedule::excel::read_schedule(schedule_path)?;
    let months = schedule::segment_months(&grid)?;
    let people = schedule::eligible_people(&grid);

    log::info!(
        "{}: {} month block(s), {} eligible staff",
        schedule_path.display(),
        months.len(),
        people.len()
    );

    let report = schedule::assemble(&grid, &months, &people, &codes);
    schedule::excel::write_report(&report, output_path)?;

    Ok(())
}
