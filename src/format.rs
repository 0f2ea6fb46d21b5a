//! Thin formatting wrapper over chrono's strftime formatter.
//!
//! Output is written into a fixed-capacity [`heapless::String`], so formatting
//! needs no allocator.

use crate::types::CalendarError;
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, NaiveDateTime, TimeZone};
use core::fmt::{self, Display, Write};

/// Date and time, e.g. `2020-11-17 08:30:00`.
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Date only, e.g. `2020-11-17`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Time only, e.g. `08:30:00`.
pub const TIME_FORMAT: &str = "%H:%M:%S";

/// Capacity of a [`FormattedInstant`] in bytes.
pub const FORMATTED_CAPACITY: usize = 64;

/// Formatted output of [`format_instant`].
pub type FormattedInstant = heapless::String<FORMATTED_CAPACITY>;

/// Instants that chrono can render with a strftime pattern.
pub trait StrftimeInstant {
    /// Writes `self` rendered with `pattern` into `out`.
    fn write_strftime(&self, out: &mut dyn Write, pattern: &str) -> fmt::Result;
}

impl StrftimeInstant for NaiveDateTime {
    fn write_strftime(&self, out: &mut dyn Write, pattern: &str) -> fmt::Result {
        write!(out, "{}", self.format(pattern))
    }
}

impl<Tz> StrftimeInstant for DateTime<Tz>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    fn write_strftime(&self, out: &mut dyn Write, pattern: &str) -> fmt::Result {
        write!(out, "{}", self.format(pattern))
    }
}

/// Records whether a write failed for lack of room.
struct BoundedWriter {
    out: FormattedInstant,
    overflowed: bool,
}

impl Write for BoundedWriter {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.out.push_str(s).map_err(|_| {
            self.overflowed = true;
            fmt::Error
        })
    }
}

/// Formats `instant` in its own time zone, if it has one.
///
/// `pattern` uses chrono's strftime syntax; `None` selects [`DATETIME_FORMAT`].
///
/// # Errors
/// * `InvalidArgument` - The pattern contains an unknown specifier, a
///   specifier cannot be rendered for this instant (e.g. `%z` without an
///   offset), or the output exceeds [`FORMATTED_CAPACITY`] bytes
pub fn format_instant<I>(instant: &I, pattern: Option<&str>) -> Result<FormattedInstant, CalendarError>
where
    I: StrftimeInstant + ?Sized,
{
    let pattern = pattern.unwrap_or(DATETIME_FORMAT);
    if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
        return Err(CalendarError::InvalidArgument("invalid format pattern"));
    }

    let mut writer = BoundedWriter {
        out: FormattedInstant::new(),
        overflowed: false,
    };
    match instant.write_strftime(&mut writer, pattern) {
        Ok(()) => Ok(writer.out),
        Err(_) if writer.overflowed => Err(CalendarError::InvalidArgument(
            "formatted output exceeds capacity",
        )),
        Err(_) => Err(CalendarError::InvalidArgument(
            "pattern cannot be rendered for this instant",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};

    #[test]
    fn default_pattern_is_datetime() {
        let dt = Utc.with_ymd_and_hms(2020, 11, 17, 8, 30, 0).unwrap();
        let out = format_instant(&dt, None).unwrap();
        assert_eq!(out.as_str(), "2020-11-17 08:30:00");
    }

    #[test]
    fn naive_instant_formats_with_datetime_pattern() {
        let dt = NaiveDate::from_ymd_opt(2020, 11, 17)
            .unwrap()
            .and_hms_opt(8, 30, 0)
            .unwrap();
        let out = format_instant(&dt, Some(DATETIME_FORMAT)).unwrap();
        assert_eq!(out.as_str(), "2020-11-17 08:30:00");
    }

    #[test]
    fn unknown_specifier_is_rejected() {
        let dt = Utc.with_ymd_and_hms(2020, 11, 17, 8, 30, 0).unwrap();
        assert_eq!(
            format_instant(&dt, Some("%Q")),
            Err(CalendarError::InvalidArgument("invalid format pattern"))
        );
    }

    #[test]
    fn unrenderable_specifier_is_not_reported_as_overflow() {
        let dt = NaiveDate::from_ymd_opt(2020, 11, 17)
            .unwrap()
            .and_hms_opt(8, 30, 0)
            .unwrap();
        assert_eq!(
            format_instant(&dt, Some("%z")),
            Err(CalendarError::InvalidArgument(
                "pattern cannot be rendered for this instant"
            ))
        );
    }
}
