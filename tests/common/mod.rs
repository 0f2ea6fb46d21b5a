//! Shared test infrastructure for calendar-between integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use calendar_between::TimeSource;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Utc};

// ============================================================================
// Instant Construction
// ============================================================================

/// Naive instant with millisecond precision
pub fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32, ms: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_milli_opt(h, min, s, ms)
        .unwrap()
}

/// Naive instant at midnight
pub fn date(y: i32, m: u32, d: u32) -> NaiveDateTime {
    at(y, m, d, 0, 0, 0, 0)
}

/// UTC instant at the given wall-clock second
pub fn utc(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap()
}

/// Instant in a fixed UTC offset given in hours
pub fn offset(hours: i32, y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<FixedOffset> {
    FixedOffset::east_opt(hours * 3600)
        .unwrap()
        .with_ymd_and_hms(y, m, d, h, min, s)
        .unwrap()
}

/// Wall-clock minute in America/New_York; panics on skipped or repeated times
pub fn new_york(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<chrono_tz::Tz> {
    chrono_tz::America::New_York
        .with_ymd_and_hms(y, m, d, h, min, 0)
        .unwrap()
}

// ============================================================================
// Mock Time Source
// ============================================================================

/// Mock time source with controllable time advancement
pub struct MockTimeSource {
    current_time: core::cell::Cell<NaiveDateTime>,
}

impl MockTimeSource {
    pub fn new(start: NaiveDateTime) -> Self {
        Self {
            current_time: core::cell::Cell::new(start),
        }
    }

    /// Advance time by the given number of milliseconds
    pub fn advance_millis(&self, millis: i64) {
        let current = self.current_time.get();
        self.current_time
            .set(current + chrono::TimeDelta::milliseconds(millis));
    }

    pub fn set_time(&self, time: NaiveDateTime) {
        self.current_time.set(time);
    }
}

impl TimeSource<NaiveDateTime> for MockTimeSource {
    fn now(&self) -> NaiveDateTime {
        self.current_time.get()
    }
}
