#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`CalendarInstant`**: Trait for calendar-aware instants (implemented for chrono's `NaiveDateTime` and `DateTime<Tz>`)
//! - **`RoundingMode`**: How a partial period is counted (`Ceiling` by default, or `Floor`)
//! - **`Unit`**: Granularity of a difference or a shift (millisecond up to year)
//! - **`between_*`**: Whole-unit differences from a first instant to a second, later one
//! - **`add_calendar_units`**: Calendar-aware shift returning a new instant
//! - **`Stepper`**: Iterator of timestamps spaced by a fixed step
//! - **`TimeSource`**: Trait to implement for your clock
//! - **`format_instant`**: strftime formatting of any `StrftimeInstant` into a fixed-capacity string
//!
//! Year and month differences re-add the candidate count to the first instant and
//! compare against the second, because those units have no fixed length. Finer
//! units divide the millisecond delta.

pub mod time;
pub mod types;
pub mod between;
pub mod stepper;
pub mod format;

pub use between::{
    add_calendar_units, between, between_days, between_hours, between_millis, between_minutes,
    between_months, between_seconds, between_years,
};
pub use format::{
    DATE_FORMAT, DATETIME_FORMAT, FormattedInstant, StrftimeInstant, TIME_FORMAT, format_instant,
};
pub use stepper::Stepper;
pub use time::{CalendarInstant, TimeSource};
#[cfg(feature = "std")]
pub use time::SystemClock;
pub use types::{CalendarError, RoundingMode, Unit};
