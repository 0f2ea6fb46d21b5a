//! Whole-unit differences between two calendar instants.
//!
//! Every function measures from `a` to `b` and expects `b` not to be earlier
//! than `a`. Inverted arguments are not rejected; the arithmetic below is
//! applied as-is and yields negative or otherwise mode-inverted counts.
//!
//! The rounding mode argument accepts a [`RoundingMode`] or `None`, which
//! selects the default, [`RoundingMode::Ceiling`]:
//!
//! ```
//! use calendar_between::{between_seconds, RoundingMode};
//! use chrono::NaiveDate;
//!
//! let a = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap().and_hms_milli_opt(0, 0, 0, 0).unwrap();
//! let b = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap().and_hms_milli_opt(0, 0, 2, 500).unwrap();
//!
//! assert_eq!(between_seconds(&a, &b, RoundingMode::Floor), 2);
//! assert_eq!(between_seconds(&a, &b, None), 3);
//! ```

use crate::time::CalendarInstant;
use crate::types::{CalendarError, RoundingMode, Unit};

/// Shifts `instant` by `amount` calendar units, returning a new instant.
///
/// # Errors
/// * `InvalidArgument` - The shifted instant is outside the representable range
pub fn add_calendar_units<I: CalendarInstant>(
    instant: &I,
    unit: Unit,
    amount: i64,
) -> Result<I, CalendarError> {
    instant
        .checked_add_units(unit, amount)
        .ok_or(CalendarError::InvalidArgument("calendar shift out of range"))
}

/// Re-adds a candidate count to `a` and corrects it against `b`.
///
/// Ceiling bumps the count when the shifted instant still falls short of `b`;
/// floor drops it when the shifted instant overshoots.
fn correct_boundary<I: CalendarInstant>(
    a: &I,
    b: &I,
    unit: Unit,
    candidate: i32,
    mode: RoundingMode,
) -> Result<i32, CalendarError> {
    let shifted = add_calendar_units(a, unit, i64::from(candidate))?.epoch_millis();
    let target = b.epoch_millis();

    let corrected = match mode {
        RoundingMode::Ceiling if shifted < target => candidate.checked_add(1),
        RoundingMode::Floor if shifted > target => candidate.checked_sub(1),
        _ => Some(candidate),
    };
    corrected.ok_or(CalendarError::InvalidArgument("difference out of range"))
}

/// Number of years from `a` to `b`.
///
/// Starts from the difference of the year fields, then shifts `a` by that many
/// years and compares against `b` to resolve the partial year.
///
/// # Errors
/// * `InvalidArgument` - Shifting `a` leaves the representable range
pub fn between_years<I: CalendarInstant>(
    a: &I,
    b: &I,
    mode: impl Into<Option<RoundingMode>>,
) -> Result<i32, CalendarError> {
    let mode = mode.into().unwrap_or_default();
    let naive = b
        .year()
        .checked_sub(a.year())
        .ok_or(CalendarError::InvalidArgument("difference out of range"))?;
    correct_boundary(a, b, Unit::Year, naive, mode)
}

/// Number of months from `a` to `b`.
///
/// Whole years are counted first with [`RoundingMode::Floor`], then the month
/// offset between the two month fields is added, wrapping across the year
/// boundary when `b`'s month precedes `a`'s. The candidate is re-added to `a`
/// and corrected like [`between_years`].
///
/// # Errors
/// * `InvalidArgument` - Shifting `a` leaves the representable range
pub fn between_months<I: CalendarInstant>(
    a: &I,
    b: &I,
    mode: impl Into<Option<RoundingMode>>,
) -> Result<i32, CalendarError> {
    let mode = mode.into().unwrap_or_default();
    let years = between_years(a, b, RoundingMode::Floor)?;

    // Months are 0..=11, so the offset always fits.
    let m1 = a.month0() as i32;
    let m2 = b.month0() as i32;
    let offset = if m2 >= m1 { m2 - m1 } else { (12 - m1) + m2 };

    let candidate = years
        .checked_mul(12)
        .and_then(|months| months.checked_add(offset))
        .ok_or(CalendarError::InvalidArgument("difference out of range"))?;
    correct_boundary(a, b, Unit::Month, candidate, mode)
}

/// Shared routine for units of fixed length.
fn between_fixed<I: CalendarInstant>(a: &I, b: &I, unit_millis: i64, mode: RoundingMode) -> i64 {
    let delta = between_millis(a, b);
    let value = delta / unit_millis;
    match mode {
        RoundingMode::Ceiling if delta % unit_millis > 0 => value + 1,
        _ => value,
    }
}

/// Number of 24-hour days from `a` to `b`.
pub fn between_days<I: CalendarInstant>(
    a: &I,
    b: &I,
    mode: impl Into<Option<RoundingMode>>,
) -> i64 {
    between_fixed(a, b, 86_400_000, mode.into().unwrap_or_default())
}

/// Number of hours from `a` to `b`.
pub fn between_hours<I: CalendarInstant>(
    a: &I,
    b: &I,
    mode: impl Into<Option<RoundingMode>>,
) -> i64 {
    between_fixed(a, b, 3_600_000, mode.into().unwrap_or_default())
}

/// Number of minutes from `a` to `b`.
pub fn between_minutes<I: CalendarInstant>(
    a: &I,
    b: &I,
    mode: impl Into<Option<RoundingMode>>,
) -> i64 {
    between_fixed(a, b, 60_000, mode.into().unwrap_or_default())
}

/// Number of seconds from `a` to `b`.
pub fn between_seconds<I: CalendarInstant>(
    a: &I,
    b: &I,
    mode: impl Into<Option<RoundingMode>>,
) -> i64 {
    between_fixed(a, b, 1_000, mode.into().unwrap_or_default())
}

/// Exact milliseconds from `a` to `b`. Nothing to round at this granularity.
#[inline]
pub fn between_millis<I: CalendarInstant>(a: &I, b: &I) -> i64 {
    b.epoch_millis() - a.epoch_millis()
}

/// Difference in an arbitrary unit.
///
/// Dispatches to the unit-specific function; `mode` is ignored for
/// [`Unit::Millisecond`].
///
/// # Errors
/// * `InvalidArgument` - Only for [`Unit::Month`] and [`Unit::Year`], see [`between_months`]
pub fn between<I: CalendarInstant>(
    unit: Unit,
    a: &I,
    b: &I,
    mode: impl Into<Option<RoundingMode>>,
) -> Result<i64, CalendarError> {
    let mode = mode.into();
    match unit {
        Unit::Year => between_years(a, b, mode).map(i64::from),
        Unit::Month => between_months(a, b, mode).map(i64::from),
        Unit::Day => Ok(between_days(a, b, mode)),
        Unit::Hour => Ok(between_hours(a, b, mode)),
        Unit::Minute => Ok(between_minutes(a, b, mode)),
        Unit::Second => Ok(between_seconds(a, b, mode)),
        Unit::Millisecond => Ok(between_millis(a, b)),
    }
}
