//! Aggregate statistics over a schedule run.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::scheduler::ScheduleRun;

/// Study minutes attributed to one subject.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubjectMinutes {
    pub subject: String,
    pub minutes: i64,
}

/// Headline numbers for a schedule run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScheduleSummary {
    pub total_sessions: usize,
    pub total_study_minutes: i64,
    pub study_days: usize,
    pub average_daily_hours: f64,
    /// Per-subject totals in ascending subject-name order.
    pub per_subject: Vec<SubjectMinutes>,
}

impl ScheduleSummary {
    pub fn from_run(run: &ScheduleRun) -> Self {
        let mut per_subject: BTreeMap<&str, i64> = BTreeMap::new();
        let mut days: BTreeSet<chrono::NaiveDate> = BTreeSet::new();
        let mut total_sessions = 0usize;
        let mut total_study_minutes = 0i64;

        for block in run.study_blocks() {
            total_sessions += 1;
            total_study_minutes += block.duration_minutes();
            *per_subject.entry(block.subject.as_str()).or_default() += block.duration_minutes();
            days.insert(block.date);
        }

        let study_days = days.len();
        let average_daily_hours = if study_days == 0 {
            0.0
        } else {
            total_study_minutes as f64 / 60.0 / study_days as f64
        };

        Self {
            total_sessions,
            total_study_minutes,
            study_days,
            average_daily_hours,
            per_subject: per_subject
                .into_iter()
                .map(|(subject, minutes)| SubjectMinutes {
                    subject: subject.to_string(),
                    minutes,
                })
                .collect(),
        }
    }

    pub fn total_study_hours(&self) -> f64 {
        self.total_study_minutes as f64 / 60.0
    }
}
