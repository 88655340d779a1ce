use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Args;
use schedulyze_core::Scheduler;

use crate::common;

#[derive(Args)]
pub struct PlanArgs {
    /// Path to the TOML plan file
    pub file: PathBuf,
    /// Reference date for deadline urgency (defaults to today)
    #[arg(long)]
    pub reference_date: Option<NaiveDate>,
    /// Print the schedule as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: PlanArgs) -> Result<(), Box<dyn std::error::Error>> {
    let plan = common::load_plan(&args.file)?;
    let reference_date = common::resolve_reference_date(args.reference_date);
    let run = Scheduler::new().generate(&plan.subjects, &plan.settings, reference_date)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&run)?);
    } else {
        print!("{}", common::render_table(&run));
        if let Some(warning) = &run.warning {
            eprintln!("warning: {warning}");
        }
    }
    Ok(())
}
