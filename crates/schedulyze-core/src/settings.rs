//! Schedule settings with defaults and range validation.
//!
//! Field defaults mirror the Schedulyze API layer: 90-minute sessions,
//! 15-minute breaks, an 8-hour study day starting at 09:00, weekends
//! included. All fields carry serde defaults so a plan file may specify
//! only what it wants to override.

use std::ops::RangeInclusive;

use chrono::{NaiveDate, NaiveTime, TimeDelta};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Allowed session length, minutes.
pub const SESSION_LENGTH_RANGE: RangeInclusive<u32> = 15..=180;
/// Allowed break length, minutes.
pub const BREAK_LENGTH_RANGE: RangeInclusive<u32> = 5..=60;
/// Allowed daily study budget, hours.
pub const DAILY_HOURS_RANGE: RangeInclusive<f64> = 1.0..=12.0;

/// Settings for one schedule run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    #[serde(default = "default_session_length")]
    pub session_length_minutes: u32,
    #[serde(default = "default_break_length")]
    pub break_length_minutes: u32,
    #[serde(default = "default_daily_hours")]
    pub daily_hours: f64,
    #[serde(default = "default_start_date")]
    pub start_date: NaiveDate,
    #[serde(default = "default_start_time")]
    pub daily_start_time: NaiveTime,
    #[serde(default = "default_include_weekends")]
    pub include_weekends: bool,
}

fn default_session_length() -> u32 {
    90
}

fn default_break_length() -> u32 {
    15
}

fn default_daily_hours() -> f64 {
    8.0
}

fn default_start_date() -> NaiveDate {
    chrono::Utc::now().date_naive()
}

fn default_start_time() -> NaiveTime {
    NaiveTime::from_hms_opt(9, 0, 0).expect("09:00 is a valid time")
}

fn default_include_weekends() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            session_length_minutes: default_session_length(),
            break_length_minutes: default_break_length(),
            daily_hours: default_daily_hours(),
            start_date: default_start_date(),
            daily_start_time: default_start_time(),
            include_weekends: default_include_weekends(),
        }
    }
}

impl Settings {
    /// Default settings starting on the given date.
    pub fn starting(start_date: NaiveDate) -> Self {
        Self {
            start_date,
            ..Self::default()
        }
    }

    /// Daily study budget in whole minutes.
    pub fn daily_minutes(&self) -> i64 {
        (self.daily_hours * 60.0).round() as i64
    }

    /// Check every settings invariant.
    ///
    /// The daily window must also stay within its calendar day: a start
    /// time plus the daily budget that reaches or crosses midnight is
    /// rejected.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !SESSION_LENGTH_RANGE.contains(&self.session_length_minutes) {
            return Err(ValidationError::invalid_value(
                "session_length_minutes",
                format!(
                    "must be in [{}, {}], got {}",
                    SESSION_LENGTH_RANGE.start(),
                    SESSION_LENGTH_RANGE.end(),
                    self.session_length_minutes
                ),
            ));
        }
        if !BREAK_LENGTH_RANGE.contains(&self.break_length_minutes) {
            return Err(ValidationError::invalid_value(
                "break_length_minutes",
                format!(
                    "must be in [{}, {}], got {}",
                    BREAK_LENGTH_RANGE.start(),
                    BREAK_LENGTH_RANGE.end(),
                    self.break_length_minutes
                ),
            ));
        }
        if !self.daily_hours.is_finite() || !DAILY_HOURS_RANGE.contains(&self.daily_hours) {
            return Err(ValidationError::invalid_value(
                "daily_hours",
                format!(
                    "must be in [{}, {}], got {}",
                    DAILY_HOURS_RANGE.start(),
                    DAILY_HOURS_RANGE.end(),
                    self.daily_hours
                ),
            ));
        }

        let daily_minutes = self.daily_minutes();
        let session_and_break =
            i64::from(self.session_length_minutes) + i64::from(self.break_length_minutes);
        if session_and_break > daily_minutes {
            return Err(ValidationError::NoSessionFits {
                session_minutes: self.session_length_minutes,
                break_minutes: self.break_length_minutes,
                daily_minutes,
            });
        }

        let (_, overflow) = self
            .daily_start_time
            .overflowing_add_signed(TimeDelta::minutes(daily_minutes));
        if overflow != 0 {
            return Err(ValidationError::invalid_value(
                "daily_start_time",
                format!(
                    "window of {} min starting at {} crosses midnight",
                    daily_minutes, self.daily_start_time
                ),
            ));
        }

        Ok(())
    }
}
