//! Eligible study days and their daily time windows.

use chrono::{Datelike, NaiveDate, NaiveTime, TimeDelta, Weekday};

use crate::settings::Settings;

/// The scheduling window of a single calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayWindow {
    pub date: NaiveDate,
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl DayWindow {
    /// Window length in whole minutes.
    pub fn minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }
}

/// Lazy iterator over eligible study days.
///
/// Keyed only by the settings it was built from: iterating twice over
/// windows built from equal settings yields identical sequences. Infinite
/// in principle; the scheduler bounds consumption.
#[derive(Debug, Clone)]
pub struct DayWindows {
    next_date: NaiveDate,
    start: NaiveTime,
    end: NaiveTime,
    include_weekends: bool,
}

/// Day windows described by `settings`, beginning at its start date.
///
/// Saturdays and Sundays are skipped when `include_weekends` is false.
/// Assumes the settings have been validated so the window stays within
/// its calendar day.
pub fn day_windows(settings: &Settings) -> DayWindows {
    let start = settings.daily_start_time;
    let end = start + TimeDelta::minutes(settings.daily_minutes());
    DayWindows {
        next_date: settings.start_date,
        start,
        end,
        include_weekends: settings.include_weekends,
    }
}

impl Iterator for DayWindows {
    type Item = DayWindow;

    fn next(&mut self) -> Option<DayWindow> {
        loop {
            let date = self.next_date;
            self.next_date = date.succ_opt()?;
            if !self.include_weekends
                && matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
            {
                continue;
            }
            return Some(DayWindow {
                date,
                start: self.start,
                end: self.end,
            });
        }
    }
}
