//! Study subject records fed into the scheduler.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Difficulty and importance are rated on a 1 to this-value scale.
pub const RATING_SCALE_MAX: u8 = 10;

/// A subject the user wants to study, with its deadline and workload.
///
/// The deadline may lie in the past; overdue subjects are treated as
/// maximally urgent rather than rejected.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Subject {
    pub name: String,
    pub deadline: NaiveDate,
    /// Total hours of study this subject still needs. Must be positive.
    pub hours_needed: f64,
    /// Difficulty rating, 1 (easy) to 10 (hard). Out-of-scale values are
    /// clamped by the scorer.
    pub difficulty: u8,
    /// Optional importance rating on the same 1-10 scale. When absent the
    /// scorer substitutes a neutral factor.
    #[serde(default)]
    pub importance: Option<u8>,
}

impl Subject {
    /// Create a subject without an importance rating.
    pub fn new(
        name: impl Into<String>,
        deadline: NaiveDate,
        hours_needed: f64,
        difficulty: u8,
    ) -> Self {
        Self {
            name: name.into(),
            deadline,
            hours_needed,
            difficulty,
            importance: None,
        }
    }

    /// Set the importance rating.
    pub fn with_importance(mut self, importance: u8) -> Self {
        self.importance = Some(importance);
        self
    }

    /// Signed number of whole days between the reference date and the
    /// deadline. Negative means overdue.
    pub fn days_until_deadline(&self, reference_date: NaiveDate) -> i64 {
        self.deadline.signed_duration_since(reference_date).num_days()
    }

    /// Required study time in whole minutes.
    pub fn minutes_needed(&self) -> i64 {
        (self.hours_needed * 60.0).round() as i64
    }
}
