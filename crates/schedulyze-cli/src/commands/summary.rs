use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Args;
use schedulyze_core::{ScheduleSummary, Scheduler};

use crate::common;

#[derive(Args)]
pub struct SummaryArgs {
    /// Path to the TOML plan file
    pub file: PathBuf,
    /// Reference date for deadline urgency (defaults to today)
    #[arg(long)]
    pub reference_date: Option<NaiveDate>,
    /// Print the summary as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: SummaryArgs) -> Result<(), Box<dyn std::error::Error>> {
    let plan = common::load_plan(&args.file)?;
    let reference_date = common::resolve_reference_date(args.reference_date);
    let run = Scheduler::new().generate(&plan.subjects, &plan.settings, reference_date)?;
    let summary = ScheduleSummary::from_run(&run);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("Total study sessions: {}", summary.total_sessions);
    println!("Total study hours:    {:.1}", summary.total_study_hours());
    println!("Study days:           {}", summary.study_days);
    println!("Avg daily hours:      {:.1}", summary.average_daily_hours);
    println!();
    println!("Per subject:");
    for entry in &summary.per_subject {
        println!(
            "  {:<24} {:>6.1} h",
            entry.subject,
            entry.minutes as f64 / 60.0
        );
    }
    if let Some(warning) = &run.warning {
        eprintln!("warning: {warning}");
    }
    Ok(())
}
