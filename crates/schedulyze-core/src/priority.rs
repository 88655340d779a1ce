//! Subject priority calculation.
//!
//! Calculates a priority score per subject from multiple factors:
//! - Deadline proximity (closer = higher, overdue = maximal)
//! - Difficulty rating (harder subjects rank higher)
//! - Required hours (capped so one huge subject cannot dominate)
//! - User-declared importance (neutral factor when absent)
//!
//! Urgency is a stepped function of whole days until the deadline, with a
//! documented linear decay beyond one week:
//! `max(10, 50 - 2 * (days_until - 7))`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::subject::{Subject, RATING_SCALE_MAX};

/// Urgency for overdue subjects (`days_until < 0`).
pub const URGENCY_OVERDUE: f64 = 100.0;
/// Urgency for subjects due today or tomorrow.
pub const URGENCY_IMMINENT: f64 = 90.0;
/// Urgency for subjects due within 2-3 days.
pub const URGENCY_NEAR: f64 = 70.0;
/// Urgency for subjects due within 4-7 days.
pub const URGENCY_THIS_WEEK: f64 = 50.0;
/// Linear urgency loss per day beyond one week.
pub const URGENCY_DECAY_PER_DAY: f64 = 2.0;
/// Lower bound of the urgency decay.
pub const URGENCY_FLOOR: f64 = 10.0;

/// Hours beyond this contribute no additional priority.
pub const HOURS_FACTOR_CAP: f64 = 10.0;
/// Importance factor substituted when a subject has no rating.
pub const NEUTRAL_IMPORTANCE_FACTOR: f64 = 0.5;

/// Weights applied to the multiplicative priority factors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriorityWeights {
    /// Weight for the normalized difficulty factor (default 1.0)
    pub difficulty: f64,
    /// Weight for the capped hours factor (default 1.0)
    pub hours: f64,
    /// Weight for the importance factor (default 1.0)
    pub importance: f64,
}

impl Default for PriorityWeights {
    fn default() -> Self {
        Self {
            difficulty: 1.0,
            hours: 1.0,
            importance: 1.0,
        }
    }
}

/// Urgency contribution derived solely from deadline proximity.
pub fn urgency_score(days_until: i64) -> f64 {
    if days_until < 0 {
        URGENCY_OVERDUE
    } else if days_until <= 1 {
        URGENCY_IMMINENT
    } else if days_until <= 3 {
        URGENCY_NEAR
    } else if days_until <= 7 {
        URGENCY_THIS_WEEK
    } else {
        (URGENCY_THIS_WEEK - URGENCY_DECAY_PER_DAY * (days_until - 7) as f64).max(URGENCY_FLOOR)
    }
}

/// Priority calculator for subjects.
///
/// Pure: a score depends only on the subject and the reference date, so
/// two runs with identical inputs rank identically.
#[derive(Debug, Clone, Default)]
pub struct PriorityScorer {
    weights: PriorityWeights,
}

impl PriorityScorer {
    /// Create a scorer with default weights.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with custom weights.
    pub fn with_weights(weights: PriorityWeights) -> Self {
        Self { weights }
    }

    /// Calculate the priority score for one subject.
    ///
    /// Never fails: out-of-scale difficulty or importance ratings are
    /// clamped into the 1-10 scale rather than rejected.
    pub fn score(&self, subject: &Subject, reference_date: NaiveDate) -> f64 {
        let urgency = urgency_score(subject.days_until_deadline(reference_date));

        let difficulty_factor =
            f64::from(subject.difficulty.clamp(1, RATING_SCALE_MAX)) / f64::from(RATING_SCALE_MAX);
        let hours_factor = (subject.hours_needed / HOURS_FACTOR_CAP).min(1.0);
        let importance_factor = match subject.importance {
            Some(importance) => {
                f64::from(importance.clamp(1, RATING_SCALE_MAX)) / f64::from(RATING_SCALE_MAX)
            }
            None => NEUTRAL_IMPORTANCE_FACTOR,
        };

        urgency
            * (1.0
                + self.weights.difficulty * difficulty_factor
                + self.weights.hours * hours_factor
                + self.weights.importance * importance_factor)
    }

    /// Indices of `subjects` sorted by descending score, with each score.
    ///
    /// The sort is stable: equal scores keep their input order.
    pub fn rank(&self, subjects: &[Subject], reference_date: NaiveDate) -> Vec<(usize, f64)> {
        let mut ranked: Vec<(usize, f64)> = subjects
            .iter()
            .enumerate()
            .map(|(index, subject)| (index, self.score(subject, reference_date)))
            .collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked
    }
}
