use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, ValueEnum};
use schedulyze_core::{export, Scheduler};

use crate::common;

#[derive(Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// Google Calendar import CSV
    Csv,
    /// iCalendar (.ics)
    Ics,
}

#[derive(Args)]
pub struct ExportArgs {
    /// Path to the TOML plan file
    pub file: PathBuf,
    /// Output format
    #[arg(long, value_enum)]
    pub format: ExportFormat,
    /// Write to this file instead of stdout
    #[arg(long)]
    pub output: Option<PathBuf>,
    /// Reference date for deadline urgency (defaults to today)
    #[arg(long)]
    pub reference_date: Option<NaiveDate>,
}

pub fn run(args: ExportArgs) -> Result<(), Box<dyn std::error::Error>> {
    let plan = common::load_plan(&args.file)?;
    let reference_date = common::resolve_reference_date(args.reference_date);
    let run = Scheduler::new().generate(&plan.subjects, &plan.settings, reference_date)?;

    if let Some(warning) = &run.warning {
        eprintln!("warning: {warning}");
    }

    let rendered = match args.format {
        ExportFormat::Csv => export::google_calendar_csv(&run),
        ExportFormat::Ics => export::ics(&run),
    };

    match args.output {
        Some(path) => {
            std::fs::write(&path, rendered)?;
            println!("exported to {}", path.display());
        }
        None => print!("{rendered}"),
    }
    Ok(())
}
