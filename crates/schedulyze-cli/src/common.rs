//! Shared plan-file loading and rendering helpers for CLI commands.
//!
//! A plan file is TOML with an optional `[settings]` table and one
//! `[[subjects]]` entry per subject. Dates are `"YYYY-MM-DD"` strings
//! and times `"HH:MM:SS"`:
//!
//! ```toml
//! [settings]
//! session_length_minutes = 60
//! daily_hours = 6.0
//! start_date = "2025-06-02"
//! include_weekends = false
//!
//! [[subjects]]
//! name = "Physics"
//! deadline = "2025-06-04"
//! hours_needed = 15.0
//! difficulty = 9
//! ```

use std::fmt::Write as _;
use std::path::Path;

use chrono::NaiveDate;
use schedulyze_core::{ScheduleRun, Settings, Subject};
use serde::Deserialize;

/// Parsed plan file: settings plus the subject list.
#[derive(Debug, Deserialize)]
pub struct PlanFile {
    #[serde(default)]
    pub settings: Settings,
    pub subjects: Vec<Subject>,
}

/// Load and parse a TOML plan file.
pub fn load_plan(path: &Path) -> Result<PlanFile, Box<dyn std::error::Error>> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read plan file {}: {e}", path.display()))?;
    let plan: PlanFile = toml::from_str(&text)?;
    Ok(plan)
}

/// Explicit reference date, or today.
pub fn resolve_reference_date(arg: Option<NaiveDate>) -> NaiveDate {
    arg.unwrap_or_else(|| chrono::Utc::now().date_naive())
}

/// Render a run as a fixed-width text table.
pub fn render_table(run: &ScheduleRun) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<12} {:<7} {:<7} {:<24} {:>7}",
        "Date", "Start", "End", "Activity", "Minutes"
    );

    let mut previous_date = None;
    for block in &run.blocks {
        if previous_date.is_some() && previous_date != Some(block.date) {
            out.push('\n');
        }
        previous_date = Some(block.date);

        let label = if block.is_break() {
            block.subject.clone()
        } else {
            match block.priority {
                Some(priority) => format!("{} (p {:.0})", block.subject, priority),
                None => block.subject.clone(),
            }
        };
        let _ = writeln!(
            out,
            "{:<12} {:<7} {:<7} {:<24} {:>7}",
            block.date.format("%Y-%m-%d"),
            block.start_time.format("%H:%M"),
            block.end_time.format("%H:%M"),
            label,
            block.duration_minutes(),
        );
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_file_parses_with_partial_settings() {
        let toml = r#"
            [settings]
            session_length_minutes = 60
            include_weekends = false

            [[subjects]]
            name = "Physics"
            deadline = "2025-06-04"
            hours_needed = 15.0
            difficulty = 9
            importance = 8
        "#;
        let plan: PlanFile = toml::from_str(toml).unwrap();
        assert_eq!(plan.settings.session_length_minutes, 60);
        assert_eq!(plan.settings.break_length_minutes, 15);
        assert!(!plan.settings.include_weekends);
        assert_eq!(plan.subjects.len(), 1);
        assert_eq!(plan.subjects[0].importance, Some(8));
    }

    #[test]
    fn table_marks_breaks_and_groups_days() {
        use chrono::{NaiveDate, NaiveTime};
        use schedulyze_core::ScheduleBlock;

        let date = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
        let t = |h, m| NaiveTime::from_hms_opt(h, m, 0).unwrap();
        let run = ScheduleRun {
            blocks: vec![
                ScheduleBlock::study("Physics", date, t(9, 0), t(10, 0), 238.0),
                ScheduleBlock::rest(date, t(10, 0), t(10, 15)),
            ],
            warning: None,
        };

        let table = render_table(&run);
        assert!(table.contains("Physics (p 238)"));
        assert!(table.contains("Break"));
        assert!(table.contains("2025-06-02"));
    }
}
