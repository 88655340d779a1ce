//! Schedule generation orchestrator.
//!
//! Ties the engine together: validates input, scores and ranks subjects,
//! iterates eligible day windows, and packs each day until every subject
//! is fully placed or the day-count ceiling is reached. Each call works
//! on its own remaining-minutes queue, so concurrent runs never
//! interfere and identical inputs produce identical runs.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::block::ScheduleBlock;
use crate::calendar::day_windows;
use crate::error::{Result, ValidationError};
use crate::packer::{Allocation, SessionPacker};
use crate::priority::PriorityScorer;
use crate::settings::Settings;
use crate::subject::Subject;

/// Hard ceiling on eligible days consumed by one run.
pub const MAX_SCHEDULE_DAYS: usize = 365;

/// Non-fatal signal attached to a run.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ScheduleWarning {
    /// The day-count ceiling was reached before every subject was placed.
    DayCeilingReached { unplaced_minutes: i64 },
}

impl fmt::Display for ScheduleWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScheduleWarning::DayCeilingReached { unplaced_minutes } => write!(
                f,
                "schedule incomplete: {unplaced_minutes} study minutes could not be placed \
                 within {MAX_SCHEDULE_DAYS} days"
            ),
        }
    }
}

/// The ordered block sequence produced by one `generate` call.
///
/// Owned solely by the caller; the engine holds no state between runs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScheduleRun {
    pub blocks: Vec<ScheduleBlock>,
    /// Present when the run is partial (day ceiling reached).
    pub warning: Option<ScheduleWarning>,
}

impl ScheduleRun {
    /// Study blocks only, in schedule order.
    pub fn study_blocks(&self) -> impl Iterator<Item = &ScheduleBlock> {
        self.blocks.iter().filter(|b| !b.is_break())
    }

    /// Total study minutes across the run.
    pub fn total_study_minutes(&self) -> i64 {
        self.study_blocks().map(|b| b.duration_minutes()).sum()
    }

    /// Whether every subject was fully placed.
    pub fn is_complete(&self) -> bool {
        self.warning.is_none()
    }
}

/// Schedule generator.
#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    scorer: PriorityScorer,
}

impl Scheduler {
    /// Create a scheduler with the default priority formula.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with a custom scorer.
    pub fn with_scorer(scorer: PriorityScorer) -> Self {
        Self { scorer }
    }

    /// Generate a schedule run.
    ///
    /// # Arguments
    /// * `subjects` - Subjects to place, at least one
    /// * `settings` - Day window and session configuration
    /// * `reference_date` - "Today" for deadline urgency; passed
    ///   explicitly so runs are reproducible
    ///
    /// # Errors
    /// Returns a validation error for an empty subject list, a subject
    /// with an empty name or non-positive hours, or out-of-range
    /// settings. No partial run is returned on error.
    pub fn generate(
        &self,
        subjects: &[Subject],
        settings: &Settings,
        reference_date: NaiveDate,
    ) -> Result<ScheduleRun> {
        validate(subjects, settings)?;

        let ranked = self.scorer.rank(subjects, reference_date);
        let mut queue: Vec<Allocation> = ranked
            .into_iter()
            .map(|(index, score)| {
                let subject = &subjects[index];
                Allocation::new(subject.name.clone(), score, subject.minutes_needed())
            })
            .collect();

        let packer = SessionPacker::new(settings);
        let mut blocks = Vec::new();
        let mut days_used = 0usize;

        for window in day_windows(settings) {
            if days_used >= MAX_SCHEDULE_DAYS
                || queue.iter().all(|a| a.minutes_remaining == 0)
            {
                break;
            }
            blocks.extend(packer.pack(&window, &mut queue));
            days_used += 1;
        }

        let unplaced_minutes: i64 = queue.iter().map(|a| a.minutes_remaining).sum();
        let warning = (unplaced_minutes > 0)
            .then_some(ScheduleWarning::DayCeilingReached { unplaced_minutes });

        Ok(ScheduleRun { blocks, warning })
    }
}

fn validate(subjects: &[Subject], settings: &Settings) -> Result<(), ValidationError> {
    if subjects.is_empty() {
        return Err(ValidationError::EmptyCollection("subjects".to_string()));
    }
    for subject in subjects {
        if subject.name.trim().is_empty() {
            return Err(ValidationError::invalid_value(
                "name",
                "subject name must not be empty",
            ));
        }
        if !subject.hours_needed.is_finite() || subject.hours_needed <= 0.0 {
            return Err(ValidationError::invalid_value(
                "hours_needed",
                format!(
                    "'{}' must need a positive number of hours, got {}",
                    subject.name, subject.hours_needed
                ),
            ));
        }
    }
    settings.validate()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, NaiveTime, Weekday};
    use proptest::prelude::*;
    use std::collections::HashMap;

    use crate::block::BREAK_LABEL;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// Monday start, weekday-only settings from the reference scenario.
    fn weekday_settings(start: NaiveDate) -> Settings {
        Settings {
            session_length_minutes: 60,
            break_length_minutes: 15,
            daily_hours: 6.0,
            start_date: start,
            daily_start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            include_weekends: false,
        }
    }

    fn reference_subjects(reference: NaiveDate) -> Vec<Subject> {
        vec![
            Subject::new("Mathematics", reference + chrono::Days::new(3), 12.0, 8),
            Subject::new("Physics", reference + chrono::Days::new(2), 15.0, 9),
            Subject::new("History", reference + chrono::Days::new(7), 8.0, 5),
            Subject::new("Literature", reference + chrono::Days::new(10), 6.0, 4),
        ]
    }

    #[test]
    fn empty_subject_list_rejected() {
        let settings = weekday_settings(date(2025, 6, 2));
        let result = Scheduler::new().generate(&[], &settings, date(2025, 6, 2));
        assert!(result.is_err());
    }

    #[test]
    fn non_positive_hours_rejected() {
        let settings = weekday_settings(date(2025, 6, 2));
        let subjects = vec![Subject::new("Maths", date(2025, 6, 9), 0.0, 5)];
        assert!(Scheduler::new()
            .generate(&subjects, &settings, date(2025, 6, 2))
            .is_err());
    }

    #[test]
    fn blank_subject_name_rejected() {
        let settings = weekday_settings(date(2025, 6, 2));
        let subjects = vec![Subject::new("  ", date(2025, 6, 9), 2.0, 5)];
        assert!(Scheduler::new()
            .generate(&subjects, &settings, date(2025, 6, 2))
            .is_err());
    }

    #[test]
    fn reference_scenario_places_all_41_hours_on_weekdays() {
        // 2025-06-02 is a Monday.
        let reference = date(2025, 6, 2);
        let settings = weekday_settings(reference);
        let subjects = reference_subjects(reference);

        let run = Scheduler::new()
            .generate(&subjects, &settings, reference)
            .unwrap();

        assert!(run.is_complete());
        assert_eq!(run.total_study_minutes(), 41 * 60);

        let days: std::collections::BTreeSet<NaiveDate> =
            run.blocks.iter().map(|b| b.date).collect();
        assert!(days.len() > 1, "run must span multiple days");
        for day in &days {
            assert!(!matches!(day.weekday(), Weekday::Sat | Weekday::Sun));
        }

        // Physics carries the highest score, so it opens the schedule.
        assert_eq!(run.blocks[0].subject, "Physics");
    }

    #[test]
    fn each_subject_receives_exactly_its_hours() {
        let reference = date(2025, 6, 2);
        let settings = weekday_settings(reference);
        let subjects = reference_subjects(reference);
        let run = Scheduler::new()
            .generate(&subjects, &settings, reference)
            .unwrap();

        let mut per_subject: HashMap<&str, i64> = HashMap::new();
        for block in run.study_blocks() {
            *per_subject.entry(block.subject.as_str()).or_default() += block.duration_minutes();
        }
        for subject in &subjects {
            assert_eq!(
                per_subject.get(subject.name.as_str()).copied(),
                Some(subject.minutes_needed()),
                "subject {} received the wrong total",
                subject.name
            );
        }
    }

    #[test]
    fn subject_smaller_than_a_session_gets_one_block() {
        let reference = date(2025, 6, 2);
        let settings = weekday_settings(reference);
        let subjects = vec![Subject::new("Maths", date(2025, 6, 9), 0.5, 5)];
        let run = Scheduler::new()
            .generate(&subjects, &settings, reference)
            .unwrap();

        assert_eq!(run.blocks.len(), 1);
        assert_eq!(run.blocks[0].duration_minutes(), 30);
        assert!(!run.blocks[0].is_break());
    }

    #[test]
    fn day_ceiling_yields_warning_not_error() {
        let reference = date(2025, 6, 2);
        let settings = Settings {
            daily_hours: 1.0,
            session_length_minutes: 30,
            break_length_minutes: 5,
            ..weekday_settings(reference)
        };
        // 365 one-hour weekdays cannot hold 500 hours.
        let subjects = vec![Subject::new("Everything", date(2025, 6, 9), 500.0, 5)];
        let run = Scheduler::new()
            .generate(&subjects, &settings, reference)
            .unwrap();

        assert!(!run.is_complete());
        let Some(ScheduleWarning::DayCeilingReached { unplaced_minutes }) = run.warning else {
            panic!("expected day-ceiling warning");
        };
        assert_eq!(
            run.total_study_minutes() + unplaced_minutes,
            500 * 60,
            "placed and unplaced minutes must account for the full workload"
        );
    }

    #[test]
    fn generate_is_deterministic() {
        let reference = date(2025, 6, 2);
        let settings = weekday_settings(reference);
        let subjects = reference_subjects(reference);
        let scheduler = Scheduler::new();

        let first = scheduler.generate(&subjects, &settings, reference).unwrap();
        let second = scheduler.generate(&subjects, &settings, reference).unwrap();
        assert_eq!(first, second);

        let first_json = serde_json::to_string(&first).unwrap();
        let second_json = serde_json::to_string(&second).unwrap();
        assert_eq!(first_json, second_json);
    }

    fn arb_subject() -> impl Strategy<Value = Subject> {
        (
            "[A-Za-z]{1,12}",
            -5i64..40,
            1u32..360,
            1u8..=10,
            proptest::option::of(1u8..=10),
        )
            .prop_map(|(name, deadline_offset, half_hours, difficulty, importance)| {
                let reference = date(2025, 6, 2);
                let deadline = reference + chrono::Duration::days(deadline_offset);
                let mut subject =
                    Subject::new(name, deadline, f64::from(half_hours) * 0.5, difficulty);
                subject.importance = importance;
                subject
            })
    }

    proptest! {
        #[test]
        fn blocks_never_overlap_and_breaks_never_edge_a_day(
            subjects in proptest::collection::vec(arb_subject(), 1..6),
            include_weekends in any::<bool>(),
        ) {
            let reference = date(2025, 6, 2);
            let settings = Settings {
                include_weekends,
                ..weekday_settings(reference)
            };
            let run = Scheduler::new().generate(&subjects, &settings, reference).unwrap();

            let mut by_day: HashMap<NaiveDate, Vec<&ScheduleBlock>> = HashMap::new();
            for block in &run.blocks {
                by_day.entry(block.date).or_default().push(block);
            }
            for day_blocks in by_day.values() {
                for pair in day_blocks.windows(2) {
                    prop_assert!(pair[0].end_time <= pair[1].start_time);
                    prop_assert!(pair[0].start_time < pair[1].start_time);
                }
                prop_assert!(!day_blocks.first().unwrap().is_break());
                prop_assert!(!day_blocks.last().unwrap().is_break());
            }

            if !include_weekends {
                for block in &run.blocks {
                    prop_assert!(!matches!(
                        block.date.weekday(),
                        Weekday::Sat | Weekday::Sun
                    ));
                }
            }
        }

        #[test]
        fn completed_runs_conserve_requested_minutes(
            subjects in proptest::collection::vec(arb_subject(), 1..6),
        ) {
            let reference = date(2025, 6, 2);
            let settings = weekday_settings(reference);
            let run = Scheduler::new().generate(&subjects, &settings, reference).unwrap();

            if run.is_complete() {
                let requested: i64 = subjects.iter().map(|s| s.minutes_needed()).sum();
                prop_assert_eq!(run.total_study_minutes(), requested);
            }
        }

        #[test]
        fn breaks_are_never_labeled_as_subjects(
            subjects in proptest::collection::vec(arb_subject(), 1..6),
        ) {
            let reference = date(2025, 6, 2);
            let settings = weekday_settings(reference);
            let run = Scheduler::new().generate(&subjects, &settings, reference).unwrap();
            for block in &run.blocks {
                if block.is_break() {
                    prop_assert_eq!(block.subject.as_str(), BREAK_LABEL);
                    prop_assert!(block.priority.is_none());
                }
            }
        }
    }
}
