//! # Schedulyze Core Library
//!
//! This library provides the scheduling engine for Schedulyze, a study
//! planner that turns a set of subjects (deadline, required hours,
//! difficulty, optional importance) into a concrete calendar of study and
//! break blocks. It is UI-agnostic: callers feed it subject and settings
//! records and consume the resulting block sequence.
//!
//! ## Architecture
//!
//! - **Priority scoring**: A fixed formula combining deadline urgency,
//!   difficulty, required hours, and importance
//! - **Day windows**: A lazy iterator over eligible calendar days with
//!   their daily time budget, honoring the weekend policy
//! - **Session packing**: Greedy single-pass allocation of study chunks
//!   and interleaved breaks into one day window
//! - **Export**: Google Calendar CSV and iCalendar renderings of a run
//!
//! ## Key Components
//!
//! - [`Scheduler`]: Orchestrates scoring, day iteration, and packing
//! - [`PriorityScorer`]: Pure priority formula over a subject
//! - [`SessionPacker`]: Chunks one day window into blocks
//! - [`ScheduleRun`]: The ordered block sequence returned to the caller

pub mod block;
pub mod calendar;
pub mod error;
pub mod export;
pub mod packer;
pub mod priority;
pub mod scheduler;
pub mod settings;
pub mod subject;
pub mod summary;

pub use block::{BlockKind, ScheduleBlock, BREAK_LABEL};
pub use calendar::{day_windows, DayWindow, DayWindows};
pub use error::{CoreError, Result, ValidationError};
pub use packer::{Allocation, SessionPacker};
pub use priority::{PriorityScorer, PriorityWeights};
pub use scheduler::{ScheduleRun, ScheduleWarning, Scheduler, MAX_SCHEDULE_DAYS};
pub use settings::Settings;
pub use subject::{Subject, RATING_SCALE_MAX};
pub use summary::{ScheduleSummary, SubjectMinutes};
