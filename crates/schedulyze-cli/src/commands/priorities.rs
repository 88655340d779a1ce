use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Args;
use schedulyze_core::PriorityScorer;
use serde::Serialize;

use crate::common;

#[derive(Args)]
pub struct PrioritiesArgs {
    /// Path to the TOML plan file
    pub file: PathBuf,
    /// Reference date for deadline urgency (defaults to today)
    #[arg(long)]
    pub reference_date: Option<NaiveDate>,
    /// Print the analysis as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct PriorityRow {
    subject: String,
    score: f64,
    days_until_deadline: i64,
}

pub fn run(args: PrioritiesArgs) -> Result<(), Box<dyn std::error::Error>> {
    let plan = common::load_plan(&args.file)?;
    let reference_date = common::resolve_reference_date(args.reference_date);

    let scorer = PriorityScorer::new();
    let rows: Vec<PriorityRow> = scorer
        .rank(&plan.subjects, reference_date)
        .into_iter()
        .map(|(index, score)| {
            let subject = &plan.subjects[index];
            PriorityRow {
                subject: subject.name.clone(),
                score,
                days_until_deadline: subject.days_until_deadline(reference_date),
            }
        })
        .collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        println!("{:<24} {:>8} {:>10}", "Subject", "Score", "Days left");
        for row in &rows {
            println!(
                "{:<24} {:>8.1} {:>10}",
                row.subject, row.score, row.days_until_deadline
            );
        }
    }
    Ok(())
}
