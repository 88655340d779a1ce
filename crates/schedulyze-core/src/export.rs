//! Calendar export serializations for schedule runs.
//!
//! Both exporters map study blocks only; breaks are a presentation
//! detail of the schedule itself and are not meaningful as calendar
//! events. Output is fully determined by the run, so identical runs
//! serialize identically.

use crate::scheduler::ScheduleRun;

/// Render a run as a Google Calendar import CSV.
///
/// One row per study block:
/// `Subject,Start Date,Start Time,End Date,End Time,Description`
/// with `MM/DD/YYYY` dates, the format Google Calendar's CSV importer
/// expects.
pub fn google_calendar_csv(run: &ScheduleRun) -> String {
    let mut lines =
        vec!["Subject,Start Date,Start Time,End Date,End Time,Description".to_string()];

    for block in run.study_blocks() {
        lines.push(format!(
            "{} - Study Session,{},{},{},{},Study session for {} ({} minutes)",
            block.subject,
            block.date.format("%m/%d/%Y"),
            block.start_time.format("%H:%M"),
            block.date.format("%m/%d/%Y"),
            block.end_time.format("%H:%M"),
            block.subject,
            block.duration_minutes(),
        ));
    }

    lines.join("\n")
}

/// Render a run as an iCalendar (.ics) document.
///
/// Events use floating local times (no TZID); the priority score travels
/// in the DESCRIPTION. UIDs are derived from the block's date, start
/// time, and subject so repeated exports of the same run are
/// byte-identical.
pub fn ics(run: &ScheduleRun) -> String {
    let mut out = String::new();
    out.push_str("BEGIN:VCALENDAR\r\n");
    out.push_str("VERSION:2.0\r\n");
    out.push_str("PRODID:-//Schedulyze//Study Scheduler//EN\r\n");

    for block in run.study_blocks() {
        let start = block.date.and_time(block.start_time);
        let end = block.date.and_time(block.end_time);
        out.push_str("BEGIN:VEVENT\r\n");
        out.push_str(&format!(
            "UID:{}-{}@schedulyze\r\n",
            start.format("%Y%m%dT%H%M%S"),
            uid_slug(&block.subject),
        ));
        out.push_str(&format!("DTSTART:{}\r\n", start.format("%Y%m%dT%H%M%S")));
        out.push_str(&format!("DTEND:{}\r\n", end.format("%Y%m%dT%H%M%S")));
        out.push_str(&format!("SUMMARY:{} - Study Session\r\n", block.subject));
        if let Some(priority) = block.priority {
            out.push_str(&format!("DESCRIPTION:Priority score {priority:.1}\r\n"));
        }
        out.push_str("END:VEVENT\r\n");
    }

    out.push_str("END:VCALENDAR\r\n");
    out
}

/// Lowercased alphanumeric subject slug for UID construction.
fn uid_slug(subject: &str) -> String {
    subject
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
