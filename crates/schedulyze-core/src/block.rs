//! Schedule block types.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Label carried by break blocks in place of a subject name.
pub const BREAK_LABEL: &str = "Break";

/// Type of schedule block.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum BlockKind {
    /// Focused study time for one subject
    Study,
    /// Rest between two study blocks
    Break,
}

/// One time slot on the generated schedule.
///
/// Blocks within a day are emitted in strictly increasing time order and
/// never overlap; days ascend across the run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScheduleBlock {
    /// Subject name, or [`BREAK_LABEL`] for break blocks.
    pub subject: String,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub kind: BlockKind,
    /// Priority score of the subject, study blocks only.
    pub priority: Option<f64>,
}

impl ScheduleBlock {
    /// Create a study block.
    pub fn study(
        subject: impl Into<String>,
        date: NaiveDate,
        start_time: NaiveTime,
        end_time: NaiveTime,
        priority: f64,
    ) -> Self {
        Self {
            subject: subject.into(),
            date,
            start_time,
            end_time,
            kind: BlockKind::Study,
            priority: Some(priority),
        }
    }

    /// Create a break block.
    pub fn rest(date: NaiveDate, start_time: NaiveTime, end_time: NaiveTime) -> Self {
        Self {
            subject: BREAK_LABEL.to_string(),
            date,
            start_time,
            end_time,
            kind: BlockKind::Break,
            priority: None,
        }
    }

    pub fn is_break(&self) -> bool {
        self.kind == BlockKind::Break
    }

    /// Block duration in whole minutes.
    pub fn duration_minutes(&self) -> i64 {
        (self.end_time - self.start_time).num_minutes()
    }
}
