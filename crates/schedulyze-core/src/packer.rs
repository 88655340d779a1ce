//! Greedy session packing for a single day window.
//!
//! Walks the ranked subject queue round-robin, emitting study chunks of
//! at most one session length and interleaving breaks. Single pass, no
//! backtracking. Whole-minute granularity throughout.

use chrono::TimeDelta;

use crate::block::ScheduleBlock;
use crate::calendar::DayWindow;
use crate::settings::Settings;

/// Per-subject remaining-minutes counter, carried across days of a run.
#[derive(Debug, Clone, PartialEq)]
pub struct Allocation {
    pub subject: String,
    pub priority: f64,
    pub minutes_remaining: i64,
}

impl Allocation {
    pub fn new(subject: impl Into<String>, priority: f64, minutes_remaining: i64) -> Self {
        Self {
            subject: subject.into(),
            priority,
            minutes_remaining,
        }
    }
}

/// Packs study and break blocks into one day window.
#[derive(Debug, Clone)]
pub struct SessionPacker {
    session_minutes: i64,
    break_minutes: i64,
}

impl SessionPacker {
    pub fn new(settings: &Settings) -> Self {
        Self {
            session_minutes: i64::from(settings.session_length_minutes),
            break_minutes: i64::from(settings.break_length_minutes),
        }
    }

    /// Fill `window` from the ranked `queue`, decrementing remaining
    /// minutes in place.
    ///
    /// Invariants upheld:
    /// - a break sits between every two consecutive study blocks, never
    ///   first or last in the day
    /// - a chunk never exceeds the session length, the subject's
    ///   remaining minutes, or the time left in the window
    /// - a subject with less than a session remaining gets one short
    ///   final chunk, not padded to session length
    pub fn pack(&self, window: &DayWindow, queue: &mut [Allocation]) -> Vec<ScheduleBlock> {
        let mut blocks = Vec::new();
        let mut cursor = window.start;
        let mut next_index = 0usize;

        loop {
            let Some(index) = next_pending(queue, next_index) else {
                break;
            };

            let mut time_left = (window.end - cursor).num_minutes();
            if blocks.is_empty() {
                if time_left < 1 {
                    break;
                }
            } else {
                // The break plus at least one study minute must fit, so a
                // break can never end the day.
                if time_left < self.break_minutes + 1 {
                    break;
                }
                let break_end = cursor + TimeDelta::minutes(self.break_minutes);
                blocks.push(ScheduleBlock::rest(window.date, cursor, break_end));
                cursor = break_end;
                time_left -= self.break_minutes;
            }

            let entry = &mut queue[index];
            let chunk = self
                .session_minutes
                .min(entry.minutes_remaining)
                .min(time_left);
            let chunk_end = cursor + TimeDelta::minutes(chunk);
            blocks.push(ScheduleBlock::study(
                entry.subject.clone(),
                window.date,
                cursor,
                chunk_end,
                entry.priority,
            ));
            entry.minutes_remaining -= chunk;
            cursor = chunk_end;
            next_index = index + 1;
        }

        blocks
    }
}

/// Next queue index with minutes remaining, searching round-robin from
/// `from` (wrapping).
fn next_pending(queue: &[Allocation], from: usize) -> Option<usize> {
    let len = queue.len();
    if len == 0 {
        return None;
    }
    (0..len)
        .map(|offset| (from + offset) % len)
        .find(|&index| queue[index].minutes_remaining > 0)
}
