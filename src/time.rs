//! Time abstraction traits for calendar-aware instants.

use crate::types::Unit;
use chrono::{DateTime, Datelike, Days, Months, NaiveDateTime, Offset, TimeDelta, TimeZone};

/// Trait for abstracting time sources.
pub trait TimeSource<I> {
    /// Returns the current time instant.
    fn now(&self) -> I;
}

/// Trait abstraction for calendar-aware instants.
///
/// Shifting never mutates the receiver: every shift produces a new instant, so
/// a shifted copy can be compared against the original without aliasing.
pub trait CalendarInstant: Clone {
    /// Calendar year.
    fn year(&self) -> i32;

    /// Month of the year, starting from 0 for January.
    fn month0(&self) -> u32;

    /// Milliseconds since the Unix epoch.
    fn epoch_millis(&self) -> i64;

    /// Shifts by `amount` units, returns None when the result is not representable.
    ///
    /// Month and year shifts clamp the day-of-month (Jan 31 + 1 month is the
    /// last day of February). Day shifts move the civil date and keep the
    /// wall-clock time. For zoned instants, a wall-clock time repeated by a
    /// daylight-saving fall-back resolves to its earlier occurrence, and one
    /// skipped by a spring-forward moves forward by the length of the gap.
    fn checked_add_units(&self, unit: Unit, amount: i64) -> Option<Self>;
}

/// Month count for a month or year shift, split into direction and magnitude.
fn calendar_months(unit: Unit, amount: i64) -> Option<(bool, Months)> {
    let months = match unit {
        Unit::Year => amount.checked_mul(12)?,
        _ => amount,
    };
    let magnitude = u32::try_from(months.unsigned_abs()).ok()?;
    Some((months >= 0, Months::new(magnitude)))
}

/// Day, month or year shift of a wall-clock date and time.
fn shift_civil(local: NaiveDateTime, unit: Unit, amount: i64) -> Option<NaiveDateTime> {
    match unit {
        Unit::Month | Unit::Year => match calendar_months(unit, amount)? {
            (true, months) => local.checked_add_months(months),
            (false, months) => local.checked_sub_months(months),
        },
        _ if amount >= 0 => local.checked_add_days(Days::new(amount.unsigned_abs())),
        _ => local.checked_sub_days(Days::new(amount.unsigned_abs())),
    }
}

/// Maps a wall-clock time back into `tz`.
///
/// A repeated time takes its earlier occurrence. A skipped time is read with
/// the offset in force before the transition, which lands past the gap.
fn resolve_local<Tz: TimeZone>(tz: &Tz, local: NaiveDateTime) -> Option<DateTime<Tz>> {
    if let Some(resolved) = tz.from_local_datetime(&local).earliest() {
        return Some(resolved);
    }

    let before = local.checked_sub_days(Days::new(1))?;
    let offset = tz.offset_from_local_datetime(&before).earliest()?.fix();
    let utc = local.checked_sub_signed(TimeDelta::seconds(i64::from(offset.local_minus_utc())))?;
    Some(tz.from_utc_datetime(&utc))
}

fn fixed_delta(unit: Unit, amount: i64) -> Option<TimeDelta> {
    let millis = unit.fixed_millis()?.checked_mul(amount)?;
    TimeDelta::try_milliseconds(millis)
}

impl CalendarInstant for NaiveDateTime {
    #[inline]
    fn year(&self) -> i32 {
        Datelike::year(self)
    }

    #[inline]
    fn month0(&self) -> u32 {
        Datelike::month0(self)
    }

    #[inline]
    fn epoch_millis(&self) -> i64 {
        self.and_utc().timestamp_millis()
    }

    fn checked_add_units(&self, unit: Unit, amount: i64) -> Option<Self> {
        match unit {
            Unit::Day | Unit::Month | Unit::Year => shift_civil(*self, unit, amount),
            _ => self.checked_add_signed(fixed_delta(unit, amount)?),
        }
    }
}

impl<Tz: TimeZone> CalendarInstant for DateTime<Tz> {
    #[inline]
    fn year(&self) -> i32 {
        Datelike::year(self)
    }

    #[inline]
    fn month0(&self) -> u32 {
        Datelike::month0(self)
    }

    #[inline]
    fn epoch_millis(&self) -> i64 {
        self.timestamp_millis()
    }

    fn checked_add_units(&self, unit: Unit, amount: i64) -> Option<Self> {
        match unit {
            Unit::Day | Unit::Month | Unit::Year => {
                let local = shift_civil(self.naive_local(), unit, amount)?;
                resolve_local(&self.timezone(), local)
            }
            _ => self.clone().checked_add_signed(fixed_delta(unit, amount)?),
        }
    }
}

/// Wall-clock time source backed by [`chrono::Utc::now`].
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

#[cfg(feature = "std")]
impl TimeSource<DateTime<chrono::Utc>> for SystemClock {
    fn now(&self) -> DateTime<chrono::Utc> {
        chrono::Utc::now()
    }
}
